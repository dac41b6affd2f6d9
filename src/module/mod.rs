use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// A module registers its providers in the container. Modules can register
/// other modules, which is how [`AppModule`](crate::app_module::AppModule)
/// pulls in every feature.
///
/// # Example
/// ```
/// use demo_api::di::Container;
/// use demo_api::module::Module;
///
/// struct EmptyModule;
///
/// impl Module for EmptyModule {
///     fn register(_container: &mut Container) -> demo_api::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut container = Container::new();
/// EmptyModule::register(&mut container).unwrap();
/// ```
pub trait Module {
    /// Register all providers of this module
    fn register(container: &mut Container) -> Result<()>;
}
