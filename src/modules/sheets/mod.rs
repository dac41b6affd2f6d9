use crate::config::SheetsConfig;
use crate::di::{Container, Injectable};
use crate::error::Result;
use crate::module::Module;

mod controller;
mod model;
mod service;

pub use controller::SheetsController;
pub use model::{FILENAME_MAX_LEN, FILENAME_MIN_LEN, IdSheet};
pub use service::SheetService;

/// Registers [`SheetService`]; expects a [`SheetsConfig`] in the container
pub struct SheetsModule;

impl Module for SheetsModule {
    fn register(container: &mut Container) -> Result<()> {
        if !container.contains::<SheetsConfig>() {
            container.register(SheetsConfig::default());
        }
        let service = SheetService::inject(container)?;
        container.register(service);
        Ok(())
    }
}
