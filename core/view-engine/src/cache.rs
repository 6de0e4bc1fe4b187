//! FILENAME: core/view-engine/src/cache.rs
//! View Cache - Memoization of derived views.
//!
//! The selection space is small and finite (|years| x |towns|), so caching
//! results by (view, selection) pays off when the user toggles back and
//! forth between selections. Correctness never depends on the cache: every
//! entry is exactly what `derive_view` would return. Entries stay valid for
//! the lifetime of the dataset; `clear` must be called when the dataset is
//! reloaded.

use crate::definition::ViewId;
use crate::engine::derive_view;
use crate::view::ViewResult;
use engine::{DatasetStore, EngineError, FilterState};
use std::collections::HashMap;

/// Memoized view results keyed by (view, selection).
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    entries: HashMap<(ViewId, FilterState), ViewResult>,
}

impl ViewCache {
    pub fn new() -> Self {
        ViewCache {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached result for (id, state), deriving and storing it
    /// on a miss. Validation errors are never cached.
    pub fn get_or_compute(
        &mut self,
        store: &DatasetStore,
        state: &FilterState,
        id: ViewId,
    ) -> Result<ViewResult, EngineError> {
        let key = (id, state.clone());
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }

        let result = derive_view(store, state, id)?;
        self.entries.insert(key, result.clone());
        Ok(result)
    }

    /// Drops every entry. Must be called when the dataset is reloaded.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
