use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be built from the DI container
///
/// Providers resolve their own dependencies in `inject`; modules call it
/// while registering.
///
/// # Example
/// ```
/// use demo_api::di::{Container, Injectable};
/// use demo_api::Result;
/// use std::sync::Arc;
///
/// struct Greeting(&'static str);
///
/// struct Greeter {
///     greeting: Arc<Greeting>,
/// }
///
/// impl Injectable for Greeter {
///     fn inject(container: &Container) -> Result<Self> {
///         Ok(Self { greeting: container.resolve::<Greeting>()? })
///     }
/// }
///
/// let mut container = Container::new();
/// container.register(Greeting("Hello"));
/// assert_eq!(Greeter::inject(&container).unwrap().greeting.0, "Hello");
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
