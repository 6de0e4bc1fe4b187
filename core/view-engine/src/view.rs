//! FILENAME: core/view-engine/src/view.rs
//! View Results - Renderable output for the charting layer.
//!
//! Every derivation produces a `ViewResult`: the view identifier, the
//! human-readable chart title, and a typed payload. The payloads carry
//! data only, no colors, sizes, or layout. Empty payloads are legitimate
//! outputs (an empty chart), never errors.

use crate::definition::ViewId;
use serde::{Deserialize, Serialize};

/// The structured output of one view derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewResult {
    pub id: ViewId,

    /// Chart title, already interpolated with the current selection.
    pub title: String,

    pub data: ViewData,
}

impl ViewResult {
    /// Number of entries (distributions, bars, or points) in the payload.
    pub fn len(&self) -> usize {
        match &self.data {
            ViewData::TownDistributions(d) => d.len(),
            ViewData::YearCounts(d) => d.len(),
            ViewData::MrtDistancePoints(d) => d.len(),
            ViewData::LeasePricePoints(d) => d.len(),
            ViewData::FlatTypeCounts(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-view typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewData {
    TownDistributions(Vec<TownDistribution>),
    YearCounts(Vec<YearCount>),
    MrtDistancePoints(Vec<MrtDistancePoint>),
    LeasePricePoints(Vec<LeasePricePoint>),
    FlatTypeCounts(Vec<CategoryCount>),
}

// ============================================================================
// DISTRIBUTION PAYLOADS
// ============================================================================

/// Five-number summary of a sample (box plot backbone).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Computes the summary over a non-empty sample.
    /// Quartiles use linear interpolation between closest ranks; sorting
    /// uses `f64::total_cmp` so the result is reproducible bit for bit.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(FiveNumberSummary {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// Linear-interpolation quantile over an already sorted, non-empty sample.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = position - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

/// Price-per-sqm distribution of one town within the selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownDistribution {
    pub town: String,
    pub summary: FiveNumberSummary,
    /// Number of transactions behind the summary.
    pub count: usize,
}

// ============================================================================
// COUNT PAYLOADS
// ============================================================================

/// Transactions in one year (count-by-year bar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: u16,
    pub count: usize,
}

/// Transactions for one categorical value (flat-type bar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

// ============================================================================
// POINT PAYLOADS
// ============================================================================

/// One transaction in the MRT-distance correlation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MrtDistancePoint {
    pub mrt_dist: f64,
    pub price_per_sqm: f64,
    /// Series the renderer groups the point under.
    pub flat_type: String,
}

/// One transaction in the remaining-lease correlation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeasePricePoint {
    pub remaining_lease_month: u32,
    pub price_per_sqm: f64,
    /// Series the renderer groups the point under.
    pub street_name: String,
}
