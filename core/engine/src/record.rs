//! FILENAME: core/engine/src/record.rs
//! PURPOSE: The resale transaction record and its column schema.
//! CONTEXT: Records are produced by the ingestion layer already validated;
//! inside the engine they are immutable rows of the dataset.

use crate::value::{FieldValue, OrderedFloat};
use serde::{Deserialize, Serialize};

/// One HDB resale transaction.
/// Multiple transactions may share every non-price attribute; there is no
/// duplicate-key constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Transaction year.
    pub year: u16,

    /// Town the flat is located in (e.g. "ANG MO KIO").
    pub town: String,

    /// Street within the town.
    pub street_name: String,

    /// Flat type, small fixed domain ("2 ROOM" .. "EXECUTIVE").
    pub flat_type: String,

    /// Resale price per square meter. Strictly positive.
    pub price_per_sqm: f64,

    /// Distance to the nearest MRT station in meters. Non-negative.
    pub mrt_dist: f64,

    /// Remaining lease at transaction time, in months.
    pub remaining_lease_month: u32,
}

impl Record {
    pub fn new(
        year: u16,
        town: String,
        street_name: String,
        flat_type: String,
        price_per_sqm: f64,
        mrt_dist: f64,
        remaining_lease_month: u32,
    ) -> Self {
        Record {
            year,
            town,
            street_name,
            flat_type,
            price_per_sqm,
            mrt_dist,
            remaining_lease_month,
        }
    }

    /// Returns the normalized value of one column of this record.
    pub fn field(&self, column: Column) -> FieldValue {
        match column {
            Column::Year => FieldValue::Int(self.year as i64),
            Column::Town => FieldValue::Text(self.town.clone()),
            Column::StreetName => FieldValue::Text(self.street_name.clone()),
            Column::FlatType => FieldValue::Text(self.flat_type.clone()),
            Column::PricePerSqm => FieldValue::Number(OrderedFloat(self.price_per_sqm)),
            Column::MrtDist => FieldValue::Number(OrderedFloat(self.mrt_dist)),
            Column::RemainingLeaseMonth => {
                FieldValue::Int(self.remaining_lease_month as i64)
            }
        }
    }
}

/// The closed column schema of the dataset.
/// Filtering or grouping on a column outside the schema is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Year,
    Town,
    StreetName,
    FlatType,
    PricePerSqm,
    MrtDist,
    RemainingLeaseMonth,
}

impl Column {
    /// The column's name as it appears in the source data.
    pub fn name(self) -> &'static str {
        match self {
            Column::Year => "year",
            Column::Town => "town",
            Column::StreetName => "street_name",
            Column::FlatType => "flat_type",
            Column::PricePerSqm => "price_per_sqm",
            Column::MrtDist => "mrt_dist",
            Column::RemainingLeaseMonth => "remaining_lease_month",
        }
    }
}
