use crate::domain::model::{Category, HouseRecord};
use crate::utils::error::{ReportError, Result};

const LOW_RISE_MAX_FLOORS: i64 = 5;
const MID_RISE_MAX_FLOORS: i64 = 16;

/// Maps a floor count to its height category.
///
/// 1–5 floors are low-rise, 6–16 mid-rise, 17 and above high-rise.
/// Zero or negative counts are rejected.
pub fn classify(floor_count: i64) -> Result<Category> {
    if floor_count <= 0 {
        return Err(ReportError::InvalidArgument {
            argument: "floor_count".to_string(),
            value: floor_count.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let category = if floor_count <= LOW_RISE_MAX_FLOORS {
        Category::LowRise
    } else if floor_count <= MID_RISE_MAX_FLOORS {
        Category::MidRise
    } else {
        Category::HighRise
    };

    Ok(category)
}

pub fn classify_all(records: &[HouseRecord]) -> Result<Vec<Category>> {
    records
        .iter()
        .map(|record| classify(record.floor_count))
        .collect()
}
