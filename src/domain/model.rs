use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One building as loaded from the input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRecord {
    pub address: String,
    pub floor_count: i64,
    pub heating_value: f64,
    pub residential_area: f64,
    pub population: i64,
}

/// Height class of a building, derived from its floor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Малоэтажный")]
    LowRise,
    #[serde(rename = "Среднеэтажный")]
    MidRise,
    #[serde(rename = "Многоэтажный")]
    HighRise,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::LowRise, Category::MidRise, Category::HighRise];

    pub fn label(&self) -> &'static str {
        match self {
            Category::LowRise => "Малоэтажный",
            Category::MidRise => "Среднеэтажный",
            Category::HighRise => "Многоэтажный",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub type CategoryCounts = BTreeMap<Category, usize>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HousingReport {
    pub total_records: usize,
    pub category_counts: CategoryCounts,
    pub min_area_address: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl HousingReport {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => {
                let mut lines: Vec<String> = Category::ALL
                    .iter()
                    .filter_map(|category| {
                        self.category_counts
                            .get(category)
                            .map(|count| format!("{}: {}", category, count))
                    })
                    .collect();
                lines.push(format!("min_area_address: {}", self.min_area_address));
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}
