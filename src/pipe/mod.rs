use crate::validation::ErrorKind;
use async_trait::async_trait;

pub mod builtins;

pub type PipeResult<T> = Result<T, PipeError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PipeError {
    #[error("Field required")]
    Missing,

    #[error("Input should be a valid integer, unable to parse string as an integer")]
    IntParsing,

    #[error("Input should be greater than or equal to {0}")]
    GreaterThanEqual(i64),

    #[error("Input should be greater than {0}")]
    GreaterThan(i64),

    #[error("Input should be less than or equal to {0}")]
    LessThanEqual(i64),

    #[error("Input should be less than {0}")]
    LessThan(i64),

    #[error("String should have at least {0} character{s}", s = plural(.0))]
    TooShort(usize),

    #[error("String should have at most {0} characters")]
    TooLong(usize),

    #[error("Value error, {0}")]
    Value(String),

    /// A per-item pipe rejected the element at `index`
    #[error("{source}")]
    Item {
        index: usize,
        source: Box<PipeError>,
    },
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 { "" } else { "s" }
}

impl PipeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipeError::Missing => ErrorKind::Missing,
            PipeError::IntParsing => ErrorKind::IntParsing,
            PipeError::GreaterThanEqual(_) => ErrorKind::GreaterThanEqual,
            PipeError::GreaterThan(_) => ErrorKind::GreaterThan,
            PipeError::LessThanEqual(_) => ErrorKind::LessThanEqual,
            PipeError::LessThan(_) => ErrorKind::LessThan,
            PipeError::TooShort(_) => ErrorKind::StringTooShort,
            PipeError::TooLong(_) => ErrorKind::StringTooLong,
            PipeError::Value(_) => ErrorKind::ValueError,
            PipeError::Item { source, .. } => source.kind(),
        }
    }
}

/// The Pipe trait for transformation and validation
///
/// A pipe consumes one value and either hands back the (possibly converted)
/// value or a [`PipeError`] describing why it was rejected. Pipes compose
/// with [`PipeExt::then`].
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}

/// Two pipes run back to back
pub struct Chain<A, B> {
    first: A,
    second: B,
}

#[async_trait]
impl<A, B> Pipe for Chain<A, B>
where
    A: Pipe,
    B: Pipe<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output> {
        let intermediate = self.first.transform(input).await?;
        self.second.transform(intermediate).await
    }
}

pub trait PipeExt: Pipe + Sized {
    /// Feed the output of this pipe into `next`
    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        B: Pipe<Input = Self::Output>,
    {
        Chain {
            first: self,
            second: next,
        }
    }
}

impl<P: Pipe> PipeExt for P {}
