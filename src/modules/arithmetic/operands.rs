use crate::pipe::PipeExt;
use crate::pipe::builtins::{ParseIntPipe, RangePipe};
use crate::validation::{FromParams, Params, ValidationError};
use async_trait::async_trait;
use num_bigint::BigInt;

/// Lower bound (inclusive) of operands accepted by `/add`
pub const ADD_MIN: i64 = 0;
/// Upper bound (exclusive) of operands accepted by `/add`
pub const ADD_MAX: i64 = 100;

/// Any pair of integers, without a size limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands {
    pub x: BigInt,
    pub y: BigInt,
}

impl Operands {
    pub fn product(&self) -> BigInt {
        &self.x * &self.y
    }
}

#[async_trait]
impl FromParams for Operands {
    async fn from_params(params: &Params) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        let x = params.extract("x", &ParseIntPipe, &mut errors).await;
        let y = params.extract("y", &ParseIntPipe, &mut errors).await;
        match (x, y) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(errors),
        }
    }
}

/// Operands restricted to `[ADD_MIN, ADD_MAX)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedOperands {
    pub x: BigInt,
    pub y: BigInt,
}

impl BoundedOperands {
    pub fn sum(&self) -> BigInt {
        &self.x + &self.y
    }
}

#[async_trait]
impl FromParams for BoundedOperands {
    async fn from_params(params: &Params) -> Result<Self, ValidationError> {
        let pipe = ParseIntPipe.then(RangePipe::new().ge(ADD_MIN).lt(ADD_MAX));
        let mut errors = ValidationError::default();
        let x = params.extract("x", &pipe, &mut errors).await;
        let y = params.extract("y", &pipe, &mut errors).await;
        match (x, y) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(errors),
        }
    }
}
