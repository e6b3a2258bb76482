pub mod aggregator;
pub mod classifier;
pub mod engine;
pub mod extremum;
pub mod loader;

pub use crate::domain::model::{HouseRecord, HousingReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
