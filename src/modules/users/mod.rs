mod controller;
mod model;

pub use controller::UsersController;
pub use model::{User, UserSummary};
