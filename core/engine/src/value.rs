//! FILENAME: core/engine/src/value.rs
//! PURPOSE: Normalized column values for domain and grouping operations.
//! CONTEXT: A dataset column can hold integers, reals, or text. `FieldValue`
//! gives all of them one hashable, totally ordered representation so that
//! domains, predicates, and group counts stay deterministic.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A normalized, hashable representation of a single column value.
/// Used as keys in domain and group-count results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldValue {
    Int(i64),
    Number(OrderedFloat),
    Text(String),
}

impl FieldValue {
    /// Display label for a value (used in titles and error messages).
    pub fn label(&self) -> String {
        match self {
            FieldValue::Int(i) => format!("{}", i),
            FieldValue::Number(n) => format!("{}", n.as_f64()),
            FieldValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// Variant rank: Int < Number < Text. A single column only ever produces one
// variant, so the cross-variant arm exists purely to keep the order total.
impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Int(_), _) => Ordering::Less,
            (_, FieldValue::Int(_)) => Ordering::Greater,
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Number(_), _) => Ordering::Less,
            (_, FieldValue::Number(_)) => Ordering::Greater,
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Wrapper around f64 that implements Eq, Ord, and Hash so real-valued
/// columns can participate in domains and sorted group counts.
/// Comparison is `f64::total_cmp`, a total order over the raw bits.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderedFloat(pub f64);

impl OrderedFloat {
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for OrderedFloat {}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::hash::Hash for OrderedFloat {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
