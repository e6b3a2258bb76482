use crate::domain::model::HouseRecord;
use crate::utils::error::{ReportError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

pub const ADDRESS_COLUMN: &str = "house_address";
pub const FLOOR_COUNT_COLUMN: &str = "floor_count";
pub const HEATING_VALUE_COLUMN: &str = "heating_value";
pub const AREA_COLUMN: &str = "area_residential";
pub const POPULATION_COLUMN: &str = "population";

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    address: usize,
    floor_count: usize,
    heating_value: usize,
    residential_area: usize,
    population: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim() == name)
                .ok_or_else(|| ReportError::Parse {
                    line: 1,
                    field: name.to_string(),
                    value: String::new(),
                    reason: "column is missing from header".to_string(),
                })
        };

        Ok(Self {
            address: find(ADDRESS_COLUMN)?,
            floor_count: find(FLOOR_COUNT_COLUMN)?,
            heating_value: find(HEATING_VALUE_COLUMN)?,
            residential_area: find(AREA_COLUMN)?,
            population: find(POPULATION_COLUMN)?,
        })
    }

    fn parse_row(&self, row: &StringRecord) -> Result<HouseRecord> {
        Ok(HouseRecord {
            address: raw_field(row, self.address, ADDRESS_COLUMN)?.to_string(),
            floor_count: parse_field(row, self.floor_count, FLOOR_COUNT_COLUMN)?,
            heating_value: parse_field(row, self.heating_value, HEATING_VALUE_COLUMN)?,
            residential_area: parse_field(row, self.residential_area, AREA_COLUMN)?,
            population: parse_field(row, self.population, POPULATION_COLUMN)?,
        })
    }
}

/// Reads CSV with a header row into typed records, preserving row order.
pub fn load_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<HouseRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnIndex::from_headers(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(columns.parse_row(&row)?);
    }

    Ok(records)
}

pub fn parse_records(data: &[u8], delimiter: u8) -> Result<Vec<HouseRecord>> {
    load_records(data, delimiter)
}

fn line_of(row: &StringRecord) -> u64 {
    row.position().map(|position| position.line()).unwrap_or(0)
}

fn raw_field<'r>(row: &'r StringRecord, index: usize, name: &str) -> Result<&'r str> {
    row.get(index).ok_or_else(|| ReportError::Parse {
        line: line_of(row),
        field: name.to_string(),
        value: String::new(),
        reason: "field is absent".to_string(),
    })
}

fn parse_field<T>(row: &StringRecord, index: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = raw_field(row, index, name)?;
    raw.trim().parse::<T>().map_err(|e| ReportError::Parse {
        line: line_of(row),
        field: name.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "house_address,floor_count,heating_value,area_residential,population\n";

    #[test]
    fn test_load_records_coerces_types_in_order() {
        let data = format!(
            "{}\"ул. Садовая, 3\",5,120.5,340.0,12\n\"пр. Мира, 7\",12,98.25,1500.75,80\n",
            HEADER
        );

        let records = parse_records(data.as_bytes(), b',').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            HouseRecord {
                address: "ул. Садовая, 3".to_string(),
                floor_count: 5,
                heating_value: 120.5,
                residential_area: 340.0,
                population: 12,
            }
        );
        assert_eq!(records[1].address, "пр. Мира, 7");
        assert_eq!(records[1].floor_count, 12);
        assert_eq!(records[1].heating_value, 98.25);
        assert_eq!(records[1].population, 80);
    }

    #[test]
    fn test_columns_are_located_by_name() {
        let data = "population,extra,area_residential,house_address,heating_value,floor_count\n\
                    4,x,60,Lenina 1,10.5,2\n";

        let records = parse_records(data.as_bytes(), b',').unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "Lenina 1");
        assert_eq!(records[0].floor_count, 2);
        assert_eq!(records[0].residential_area, 60.0);
        assert_eq!(records[0].population, 4);
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let data = format!("{}A, 3 , 1.5 ,  10 ,2\n", HEADER);
        let records = parse_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records[0].floor_count, 3);
        assert_eq!(records[0].residential_area, 10.0);
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "house_address;floor_count;heating_value;area_residential;population\n\
                    B;17;1,5;200;10\n";
        let err = parse_records(data.as_bytes(), b';').unwrap_err();
        // "1,5" is not a valid float with ';' as delimiter either
        assert!(matches!(err, ReportError::Parse { ref field, .. } if field == HEATING_VALUE_COLUMN));

        let data = data.replace("1,5", "1.5");
        let records = parse_records(data.as_bytes(), b';').unwrap();
        assert_eq!(records[0].floor_count, 17);
    }

    #[test]
    fn test_non_numeric_value_reports_field_line_and_value() {
        let data = format!("{}A,3,1.0,10,2\nB,ten,1.0,10,2\n", HEADER);

        match parse_records(data.as_bytes(), b',').unwrap_err() {
            ReportError::Parse {
                line, field, value, ..
            } => {
                assert_eq!(line, 3);
                assert_eq!(field, FLOOR_COUNT_COLUMN);
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_float_where_integer_expected_fails() {
        let data = format!("{}A,3,1.0,10,2.5\n", HEADER);
        let err = parse_records(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, ReportError::Parse { ref field, .. } if field == POPULATION_COLUMN));
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "house_address,floor_count,heating_value,population\nA,3,1.0,2\n";
        match parse_records(data.as_bytes(), b',').unwrap_err() {
            ReportError::Parse { line, field, .. } => {
                assert_eq!(line, 1);
                assert_eq!(field, AREA_COLUMN);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_reports_absent_field() {
        let data = format!("{}A,3,1.0\n", HEADER);
        match parse_records(data.as_bytes(), b',').unwrap_err() {
            ReportError::Parse { line, field, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, AREA_COLUMN);
                assert_eq!(reason, "field is absent");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_utf8_bom_before_header_is_ignored() {
        let data = format!("\u{feff}{}A,3,1.0,10,2\n", HEADER);
        let records = parse_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address, "A");
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let records = parse_records(HEADER.as_bytes(), b',').unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_non_positive_values_pass_through_loading() {
        let data = format!("{}A,0,1.0,10,0\n", HEADER);
        let records = parse_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records[0].floor_count, 0);
        assert_eq!(records[0].population, 0);
    }
}
