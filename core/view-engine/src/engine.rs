//! FILENAME: core/view-engine/src/engine.rs
//! View Engine - The calculation core that transforms a selection into
//! renderable view results.
//!
//! Each view rule is a pure function `(store, state) -> ViewResult`:
//! 1. Apply the view's filter scope to the dataset store
//! 2. Group/aggregate (or pass records through for point views)
//! 3. Emit the payload in its documented deterministic order
//!
//! No rule mutates anything; re-invoking a rule with the same inputs
//! yields identical output.

use crate::definition::ViewId;
use crate::view::{
    CategoryCount, FiveNumberSummary, LeasePricePoint, MrtDistancePoint,
    TownDistribution, ViewData, ViewResult, YearCount,
};
use engine::{Column, DatasetStore, EngineError, FieldValue, FilterState, Predicate};
use std::collections::BTreeMap;

// ============================================================================
// DISPATCH
// ============================================================================

/// Derives one view for the given selection.
///
/// Both FilterState fields are validated against the store's domains first,
/// even for single-field views, so an out-of-domain selection is reported
/// as an error instead of masquerading as "no data this period".
pub fn derive_view(
    store: &DatasetStore,
    state: &FilterState,
    id: ViewId,
) -> Result<ViewResult, EngineError> {
    state.validate(store)?;
    Ok(calculate(store, state, id))
}

/// Derives all five views in dashboard layout order.
pub fn derive_all(
    store: &DatasetStore,
    state: &FilterState,
) -> Result<Vec<ViewResult>, EngineError> {
    state.validate(store)?;
    Ok(ViewId::ALL
        .iter()
        .map(|&id| calculate(store, state, id))
        .collect())
}

/// Dispatches to the view's rule. Callers have already validated `state`.
fn calculate(store: &DatasetStore, state: &FilterState, id: ViewId) -> ViewResult {
    match id {
        ViewId::PriceDistributionByTown => price_distribution_by_town(store, state),
        ViewId::TransactionCountByYear => transaction_count_by_year(store, state),
        ViewId::MrtDistanceVsPrice => mrt_distance_vs_price(store, state),
        ViewId::RemainingLeaseVsPrice => remaining_lease_vs_price(store, state),
        ViewId::FlatTypeDistribution => flat_type_distribution(store, state),
    }
}

// ============================================================================
// VIEW RULES
// ============================================================================

/// Box-plot view: price-per-sqm distribution of every town in the
/// selected year. Uses only `state.year`; towns ascend lexicographically.
/// Towns without transactions that year are absent from the output.
pub fn price_distribution_by_town(store: &DatasetStore, state: &FilterState) -> ViewResult {
    let matching = store.filter(&[Predicate::year(state.year)]);

    let mut samples_per_town: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in &matching {
        samples_per_town
            .entry(record.town.as_str())
            .or_default()
            .push(record.price_per_sqm);
    }

    let distributions: Vec<TownDistribution> = samples_per_town
        .into_iter()
        .filter_map(|(town, samples)| {
            FiveNumberSummary::from_samples(&samples).map(|summary| TownDistribution {
                town: town.to_string(),
                summary,
                count: samples.len(),
            })
        })
        .collect();

    ViewResult {
        id: ViewId::PriceDistributionByTown,
        title: format!("Year {}: Price / Square per Meter", state.year),
        data: ViewData::TownDistributions(distributions),
    }
}

/// Bar-chart view: transactions per year for the selected town, across
/// ALL years in the dataset. Uses only `state.town`; the whole point of
/// this view is the multi-year trend, so it must ignore `state.year`.
pub fn transaction_count_by_year(store: &DatasetStore, state: &FilterState) -> ViewResult {
    let matching = store.filter(&[Predicate::town(state.town.clone())]);

    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    for record in &matching {
        *counts.entry(record.year).or_insert(0) += 1;
    }

    let year_counts: Vec<YearCount> = counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect();

    ViewResult {
        id: ViewId::TransactionCountByYear,
        title: format!(
            "Number of Resale HDB Units in {} Over the Years",
            state.town
        ),
        data: ViewData::YearCounts(year_counts),
    }
}

/// Scatter view: MRT distance against price per sqm for the exact
/// (year, town) selection. Point-level pass-through in dataset order;
/// zero matches yield an empty sequence.
pub fn mrt_distance_vs_price(store: &DatasetStore, state: &FilterState) -> ViewResult {
    let matching = store.filter(&[
        Predicate::year(state.year),
        Predicate::town(state.town.clone()),
    ]);

    let points: Vec<MrtDistancePoint> = matching
        .iter()
        .map(|record| MrtDistancePoint {
            mrt_dist: record.mrt_dist,
            price_per_sqm: record.price_per_sqm,
            flat_type: record.flat_type.clone(),
        })
        .collect();

    ViewResult {
        id: ViewId::MrtDistanceVsPrice,
        title: format!(
            "Year {}: MRT Distance vs Price per sqm in {}",
            state.year, state.town
        ),
        data: ViewData::MrtDistancePoints(points),
    }
}

/// Scatter view: remaining lease against price per sqm for the exact
/// (year, town) selection. Point-level pass-through in dataset order.
pub fn remaining_lease_vs_price(store: &DatasetStore, state: &FilterState) -> ViewResult {
    let matching = store.filter(&[
        Predicate::year(state.year),
        Predicate::town(state.town.clone()),
    ]);

    let points: Vec<LeasePricePoint> = matching
        .iter()
        .map(|record| LeasePricePoint {
            remaining_lease_month: record.remaining_lease_month,
            price_per_sqm: record.price_per_sqm,
            street_name: record.street_name.clone(),
        })
        .collect();

    ViewResult {
        id: ViewId::RemainingLeaseVsPrice,
        title: format!(
            "Year {}: Price per sqm vs Remaining Lease (Months) in {}",
            state.year, state.town
        ),
        data: ViewData::LeasePricePoints(points),
    }
}

/// Bar-chart view: transaction count per flat type for the exact
/// (year, town) selection. Flat types are ordered lexicographically
/// ("2 ROOM" < "3 ROOM" < .. < "EXECUTIVE"). This is string order, not unit
/// size. Unobserved flat types are absent, never zero-count entries.
pub fn flat_type_distribution(store: &DatasetStore, state: &FilterState) -> ViewResult {
    let matching = store.filter(&[
        Predicate::year(state.year),
        Predicate::town(state.town.clone()),
    ]);

    let counts: Vec<CategoryCount> = DatasetStore::count_by(&matching, Column::FlatType)
        .into_iter()
        .filter_map(|(value, count)| match value {
            FieldValue::Text(category) => Some(CategoryCount { category, count }),
            _ => None,
        })
        .collect();

    ViewResult {
        id: ViewId::FlatTypeDistribution,
        title: format!(
            "Year {}: Distribution of Resale HDB by Flat Type in {}",
            state.year, state.town
        ),
        data: ViewData::FlatTypeCounts(counts),
    }
}
