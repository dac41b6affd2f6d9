mod controller;
mod operands;

pub use controller::ArithmeticController;
pub use operands::{BoundedOperands, Operands};
