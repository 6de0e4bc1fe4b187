//! FILENAME: core/view-engine/src/lib.rs
//! View Derivation subsystem for the resale dashboard.
//!
//! This crate provides the selection-driven derivation engine as a
//! standalone module, separate from the dataset store. It depends on
//! `engine` only for shared types (Record, DatasetStore, FilterState).
//!
//! Layers:
//! - `definition`: The fixed catalogue of views (what each view IS)
//! - `view`: Structured output for the rendering layer (WHAT we display)
//! - `engine`: Calculation engine (HOW we calculate)
//! - `cache`: Optional memoization keyed by (view, selection)

pub mod cache;
pub mod definition;
pub mod engine;
pub mod view;

pub use cache::ViewCache;
pub use definition::{FilterScope, ViewId};
pub use engine::{
    derive_all, derive_view, flat_type_distribution, mrt_distance_vs_price,
    price_distribution_by_town, remaining_lease_vs_price, transaction_count_by_year,
};
pub use view::{
    CategoryCount, FiveNumberSummary, LeasePricePoint, MrtDistancePoint,
    TownDistribution, ViewData, ViewResult, YearCount,
};
