//! FILENAME: core/persistence/src/csv_reader.rs

use crate::PersistenceError;
use engine::Record;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// One raw CSV row, matched to columns by header name.
/// Columns outside the schema are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    year: u16,
    town: String,
    street_name: String,
    flat_type: String,
    price_per_sqm: f64,
    mrt_dist: f64,
    remaining_lease_month: u32,
}

/// Loads and validates the cleaned resale-transaction CSV.
///
/// Type errors (a non-numeric price, a missing column) surface as `Csv`
/// errors from the deserializer; value errors (a non-positive price, a
/// negative distance) surface as `Schema` errors naming the offending row.
pub fn load_csv(path: &Path) -> Result<Vec<Record>, PersistenceError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        // Row numbers are 1-based and include the header line.
        records.push(validate_row(index + 2, row?)?);
    }

    Ok(records)
}

fn validate_row(row_number: usize, row: RawRow) -> Result<Record, PersistenceError> {
    if !row.price_per_sqm.is_finite() || row.price_per_sqm <= 0.0 {
        return Err(PersistenceError::Schema {
            row: row_number,
            message: format!("price_per_sqm must be positive, got {}", row.price_per_sqm),
        });
    }
    if !row.mrt_dist.is_finite() || row.mrt_dist < 0.0 {
        return Err(PersistenceError::Schema {
            row: row_number,
            message: format!("mrt_dist must be non-negative, got {}", row.mrt_dist),
        });
    }
    if row.town.trim().is_empty() {
        return Err(PersistenceError::Schema {
            row: row_number,
            message: "town must not be empty".to_string(),
        });
    }
    if row.flat_type.trim().is_empty() {
        return Err(PersistenceError::Schema {
            row: row_number,
            message: "flat_type must not be empty".to_string(),
        });
    }

    Ok(Record::new(
        row.year,
        row.town,
        row.street_name,
        row.flat_type,
        row.price_per_sqm,
        row.mrt_dist,
        row.remaining_lease_month,
    ))
}
