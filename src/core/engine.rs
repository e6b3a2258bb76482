use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting housing report...");

        // Extract
        tracing::debug!("Loading records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} records", records.len());

        // Transform
        tracing::debug!("Building report...");
        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Classified {} records into {} categories",
            report.total_records,
            report.category_counts.len()
        );

        // Load
        tracing::debug!("Emitting report...");
        let rendered = self.pipeline.load(report).await?;

        Ok(rendered)
    }
}
