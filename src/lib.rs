pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpCatalog;
pub use crate::adapters::memory::StaticCatalog;
pub use crate::core::navigator::Navigator;
pub use crate::core::resolver::adjacent_in;
pub use crate::domain::model::{Direction, Product};
pub use crate::utils::error::{NavError, Result};
