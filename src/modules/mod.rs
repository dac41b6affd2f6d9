pub mod arithmetic;
pub mod greeting;
pub mod sheets;
pub mod users;
