mod controller;

pub use controller::{GreetingController, NameParam, NicknameQuery};
