use crate::domain::model::HouseRecord;
use crate::utils::error::{ReportError, Result};

/// Residential area per resident. Zero population is an error, never infinity.
pub fn area_per_resident(record: &HouseRecord) -> Result<f64> {
    if record.population == 0 {
        return Err(ReportError::Division {
            address: record.address.clone(),
            area: record.residential_area,
        });
    }

    Ok(record.residential_area / record.population as f64)
}

/// Address of the record with the least residential area per resident.
///
/// On ties the earliest record wins: the candidate is only replaced by a
/// strictly smaller ratio.
pub fn min_area_per_resident(records: &[HouseRecord]) -> Result<&str> {
    let (first, rest) = records
        .split_first()
        .ok_or_else(|| ReportError::InvalidArgument {
            argument: "records".to_string(),
            value: "[]".to_string(),
            reason: "must not be empty".to_string(),
        })?;

    let mut best = first;
    let mut best_ratio = area_per_resident(first)?;

    for record in rest {
        let ratio = area_per_resident(record)?;
        if ratio < best_ratio {
            best = record;
            best_ratio = ratio;
        }
    }

    Ok(&best.address)
}
