use crate::domain::model::{HouseRecord, HousingReport, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn delimiter(&self) -> Result<u8>;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<HouseRecord>>;
    async fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingReport>;
    async fn load(&self, report: HousingReport) -> Result<String>;
}
