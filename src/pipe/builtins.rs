use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use num_bigint::BigInt;
use std::marker::PhantomData;

/// A pipe that parses a string into an integer of any magnitude
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseIntPipe;

#[async_trait]
impl Pipe for ParseIntPipe {
    type Input = String;
    type Output = BigInt;

    async fn transform(&self, input: String) -> PipeResult<BigInt> {
        input.trim().parse::<BigInt>().map_err(|_| PipeError::IntParsing)
    }
}

/// Inclusive/exclusive numeric bounds
///
/// ```
/// use demo_api::pipe::builtins::RangePipe;
///
/// // 0 <= value < 100
/// let pipe = RangePipe::new().ge(0).lt(100);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RangePipe {
    ge: Option<i64>,
    gt: Option<i64>,
    le: Option<i64>,
    lt: Option<i64>,
}

impl RangePipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ge(mut self, bound: i64) -> Self {
        self.ge = Some(bound);
        self
    }

    pub fn gt(mut self, bound: i64) -> Self {
        self.gt = Some(bound);
        self
    }

    pub fn le(mut self, bound: i64) -> Self {
        self.le = Some(bound);
        self
    }

    pub fn lt(mut self, bound: i64) -> Self {
        self.lt = Some(bound);
        self
    }

    fn check(&self, value: BigInt) -> PipeResult<BigInt> {
        let bound = |b: i64| BigInt::from(b);
        match (self.ge, self.gt, self.le, self.lt) {
            (Some(ge), _, _, _) if value < bound(ge) => Err(PipeError::GreaterThanEqual(ge)),
            (_, Some(gt), _, _) if value <= bound(gt) => Err(PipeError::GreaterThan(gt)),
            (_, _, Some(le), _) if value > bound(le) => Err(PipeError::LessThanEqual(le)),
            (_, _, _, Some(lt)) if value >= bound(lt) => Err(PipeError::LessThan(lt)),
            _ => Ok(value),
        }
    }
}

#[async_trait]
impl Pipe for RangePipe {
    type Input = BigInt;
    type Output = BigInt;

    async fn transform(&self, input: BigInt) -> PipeResult<BigInt> {
        self.check(input)
    }
}

/// Bounds on the character count of a string
#[derive(Debug, Default, Clone, Copy)]
pub struct LengthPipe {
    min: Option<usize>,
    max: Option<usize>,
}

impl LengthPipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

#[async_trait]
impl Pipe for LengthPipe {
    type Input = String;
    type Output = String;

    async fn transform(&self, input: String) -> PipeResult<String> {
        let length = input.chars().count();
        if let Some(min) = self.min.filter(|min| length < *min) {
            return Err(PipeError::TooShort(min));
        }
        if let Some(max) = self.max.filter(|max| length > *max) {
            return Err(PipeError::TooLong(max));
        }
        Ok(input)
    }
}

/// Rejects values for which `predicate` returns false with a value error
pub struct PredicatePipe<T, F> {
    predicate: F,
    message: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> PredicatePipe<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(predicate: F, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T, F> Pipe for PredicatePipe<T, F>
where
    T: Send + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Input = T;
    type Output = T;

    async fn transform(&self, input: T) -> PipeResult<T> {
        if (self.predicate)(&input) {
            Ok(input)
        } else {
            Err(PipeError::Value(self.message.clone()))
        }
    }
}

/// Applies the inner pipe to every element, stopping at the first rejection
pub struct EachPipe<P> {
    inner: P,
}

impl<P: Pipe> EachPipe<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: Pipe> Pipe for EachPipe<P> {
    type Input = Vec<P::Input>;
    type Output = Vec<P::Output>;

    async fn transform(&self, input: Vec<P::Input>) -> PipeResult<Vec<P::Output>> {
        let mut output = Vec::with_capacity(input.len());
        for (index, item) in input.into_iter().enumerate() {
            let item = self.inner.transform(item).await.map_err(|err| PipeError::Item {
                index,
                source: Box::new(err),
            })?;
            output.push(item);
        }
        Ok(output)
    }
}
