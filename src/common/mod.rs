pub mod integer;
pub mod response;

pub use integer::JsonInteger;
pub use response::{ApiResponse, Message};
