pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "housing-report")]
#[command(about = "Classify residential buildings by height and find the least area per resident")]
pub struct CliConfig {
    /// CSV file with house_address, floor_count, heating_value, area_residential, population
    #[arg(default_value = "housing_data.csv")]
    pub input_path: String,

    #[arg(long, default_value_t = ',', help = "CSV field delimiter")]
    pub delimiter: char,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn delimiter(&self) -> Result<u8> {
        validation::validate_delimiter("delimiter", &self.delimiter.to_string())
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        self.delimiter()?;
        Ok(())
    }
}
