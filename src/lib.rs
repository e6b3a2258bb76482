pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::housing_pipeline::HousingPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::engine::ReportEngine;
pub use domain::model::{Category, HouseRecord, HousingReport, OutputFormat};
pub use utils::error::{ReportError, Result};
