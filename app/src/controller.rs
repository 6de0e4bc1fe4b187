//! FILENAME: app/src/controller.rs
//! PURPOSE: The control collaborator: owns the FilterState and drives the
//! view engine whenever the selection changes.
//! CONTEXT: Selection changes go through explicit methods plus
//! observer-style subscriptions; nothing here registers with an event loop
//! or UI framework. The dataset store is injected at construction; there
//! is no process-wide singleton.

use engine::{DatasetStore, EngineError, FilterState, Record};
use view_engine::{ViewCache, ViewId, ViewResult};

/// Owns the current selection and recomputes all views on change.
///
/// Out-of-domain selections are clamped to the default for that field
/// (minimum year, first town in domain order) and logged, never surfaced
/// as a crash. A selection can only become invalid through an integration
/// bug or a dataset reload, and an empty chart labeled with the wrong
/// selection would be worse than the clamp.
pub struct DashboardController {
    store: DatasetStore,
    state: FilterState,
    cache: ViewCache,
    subscribers: Vec<Box<dyn Fn(&ViewResult)>>,
}

impl DashboardController {
    /// Builds a controller over a non-empty dataset with the default
    /// selection (minimum year, first town in domain order).
    pub fn new(store: DatasetStore) -> Result<Self, EngineError> {
        let state = FilterState::initial(&store)?;
        Ok(DashboardController {
            store,
            state,
            cache: ViewCache::new(),
            subscribers: Vec::new(),
        })
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.state
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Selectable year options, ascending (slider marks).
    pub fn year_options(&self) -> Vec<u16> {
        self.store.years()
    }

    /// Selectable town options, ascending (radio items).
    pub fn town_options(&self) -> Vec<String> {
        self.store.towns()
    }

    /// Number of view results currently memoized.
    pub fn cached_view_count(&self) -> usize {
        self.cache.len()
    }

    /// Registers a callback invoked with every freshly derived ViewResult.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&ViewResult) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Changes the selected year, clamping an out-of-domain value to the
    /// minimum observed year, then refreshes all views.
    pub fn select_year(&mut self, year: u16) -> Result<Vec<ViewResult>, EngineError> {
        if self.store.contains_year(year) {
            self.state.year = year;
        } else {
            let fallback = self.store.min_year().ok_or(EngineError::EmptyDataset)?;
            log::warn!(
                "year {} is outside the dataset, clamping to {}",
                year,
                fallback
            );
            self.state.year = fallback;
        }
        self.refresh()
    }

    /// Changes the selected town, clamping an out-of-domain value to the
    /// first town in domain order, then refreshes all views.
    pub fn select_town(&mut self, town: String) -> Result<Vec<ViewResult>, EngineError> {
        if self.store.contains_town(&town) {
            self.state.town = town;
        } else {
            let fallback = self
                .store
                .towns()
                .into_iter()
                .next()
                .ok_or(EngineError::EmptyDataset)?;
            log::warn!(
                "town '{}' is outside the dataset, clamping to '{}'",
                town,
                fallback
            );
            self.state.town = fallback;
        }
        self.refresh()
    }

    /// Derives all five views for the current selection (through the
    /// memoization cache) and notifies subscribers.
    pub fn refresh(&mut self) -> Result<Vec<ViewResult>, EngineError> {
        let mut results = Vec::with_capacity(ViewId::ALL.len());
        for id in ViewId::ALL {
            let result = self.cache.get_or_compute(&self.store, &self.state, id)?;
            for subscriber in &self.subscribers {
                subscriber(&result);
            }
            results.push(result);
        }
        log::debug!(
            "derived {} views for year {} / {}",
            results.len(),
            self.state.year,
            self.state.town
        );
        Ok(results)
    }

    /// Replaces the dataset wholesale. Cached views describe the old
    /// dataset and are dropped; selection fields that no longer exist in
    /// the new domains fall back to the defaults.
    pub fn reload(&mut self, records: Vec<Record>) -> Result<(), EngineError> {
        let store = DatasetStore::new(records);
        let default = FilterState::initial(&store)?;

        if !store.contains_year(self.state.year) {
            self.state.year = default.year;
        }
        if !store.contains_town(&self.state.town) {
            self.state.town = default.town;
        }
        self.cache.clear();
        self.store = store;
        log::info!("dataset reloaded: {} records", self.store.len());
        Ok(())
    }
}
