use crate::core::aggregator::count_categories;
use crate::core::classifier::classify_all;
use crate::core::extremum::min_area_per_resident;
use crate::core::loader::parse_records;
use crate::core::{ConfigProvider, HouseRecord, HousingReport, Pipeline, Storage};
use crate::utils::error::Result;

pub struct HousingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> HousingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HousingPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<HouseRecord>> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        tracing::debug!("Read {} bytes", data.len());

        parse_records(&data, self.config.delimiter()?)
    }

    async fn transform(&self, records: Vec<HouseRecord>) -> Result<HousingReport> {
        let categories = classify_all(&records)?;
        let category_counts = count_categories(categories);
        let min_area_address = min_area_per_resident(&records)?.to_string();

        Ok(HousingReport {
            total_records: records.len(),
            category_counts,
            min_area_address,
        })
    }

    async fn load(&self, report: HousingReport) -> Result<String> {
        let counts = report
            .category_counts
            .iter()
            .map(|(category, count)| format!("{}: {}", category, count))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!("Category counts: {{{}}}", counts);
        tracing::info!("Least area per resident: {}", report.min_area_address);

        let rendered = report.render(self.config.output_format())?;
        Ok(rendered)
    }
}
