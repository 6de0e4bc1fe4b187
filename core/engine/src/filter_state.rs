//! FILENAME: core/engine/src/filter_state.rs
//! PURPOSE: The current user selection driving all derived views.
//! CONTEXT: Owned and mutated by the controller; the engine only ever
//! receives it by reference. Hash/Eq derives let it key the view cache.

use crate::dataset::DatasetStore;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// The (year, town) selection.
/// Invariant: both fields are members of the dataset's domains. The engine
/// checks this on every derivation so an out-of-domain selection surfaces
/// as a typed error instead of a silently empty result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub year: u16,
    pub town: String,
}

impl FilterState {
    pub fn new(year: u16, town: String) -> Self {
        FilterState { year, town }
    }

    /// The default selection: minimum observed year and first town in
    /// domain order (the dashboard's initial control values).
    pub fn initial(store: &DatasetStore) -> Result<Self, EngineError> {
        let year = store.min_year().ok_or(EngineError::EmptyDataset)?;
        let town = store
            .towns()
            .into_iter()
            .next()
            .ok_or(EngineError::EmptyDataset)?;
        Ok(FilterState { year, town })
    }

    /// Checks both fields against the store's domains.
    pub fn validate(&self, store: &DatasetStore) -> Result<(), EngineError> {
        if !store.contains_year(self.year) {
            return Err(EngineError::InvalidYear(self.year));
        }
        if !store.contains_town(&self.town) {
            return Err(EngineError::InvalidTown(self.town.clone()));
        }
        Ok(())
    }
}
