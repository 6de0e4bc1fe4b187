//! FILENAME: core/view-engine/src/definition.rs
//! View Definitions - The fixed catalogue of derived views.
//!
//! Unlike a free-form pivot configuration, the dashboard derives a closed
//! set of five views. Each identifier carries its filter scope: which
//! fields of the FilterState the view actually consumes. The scopes are
//! intentionally heterogeneous: the count-by-year view must cover a
//! town's entire year range, not just the selected year.

use serde::{Deserialize, Serialize};

/// Identifier for one of the five derived views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    /// Per-town distribution of price per sqm for the selected year.
    PriceDistributionByTown,
    /// Transactions per year for the selected town, across all years.
    TransactionCountByYear,
    /// (mrt_dist, price_per_sqm) points for the selected (year, town).
    MrtDistanceVsPrice,
    /// (remaining_lease_month, price_per_sqm) points for the selected
    /// (year, town).
    RemainingLeaseVsPrice,
    /// Transaction count per flat type for the selected (year, town).
    FlatTypeDistribution,
}

/// Which FilterState fields a view consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterScope {
    YearOnly,
    TownOnly,
    YearAndTown,
}

impl ViewId {
    /// All views, in the order the dashboard lays them out.
    pub const ALL: [ViewId; 5] = [
        ViewId::PriceDistributionByTown,
        ViewId::TransactionCountByYear,
        ViewId::MrtDistanceVsPrice,
        ViewId::RemainingLeaseVsPrice,
        ViewId::FlatTypeDistribution,
    ];

    pub fn filter_scope(self) -> FilterScope {
        match self {
            ViewId::PriceDistributionByTown => FilterScope::YearOnly,
            ViewId::TransactionCountByYear => FilterScope::TownOnly,
            ViewId::MrtDistanceVsPrice
            | ViewId::RemainingLeaseVsPrice
            | ViewId::FlatTypeDistribution => FilterScope::YearAndTown,
        }
    }

    /// Stable machine-readable name (used in logs and benchmark labels).
    pub fn name(self) -> &'static str {
        match self {
            ViewId::PriceDistributionByTown => "price_distribution_by_town",
            ViewId::TransactionCountByYear => "transaction_count_by_year",
            ViewId::MrtDistanceVsPrice => "mrt_distance_vs_price",
            ViewId::RemainingLeaseVsPrice => "remaining_lease_vs_price",
            ViewId::FlatTypeDistribution => "flat_type_distribution",
        }
    }
}
