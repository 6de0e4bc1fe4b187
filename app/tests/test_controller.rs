//! FILENAME: tests/test_controller.rs
//! Integration tests for the dashboard controller.

mod common;

use app_lib::DashboardController;
use common::ResaleFixture;
use engine::{DatasetStore, EngineError, Record};
use std::cell::RefCell;
use std::rc::Rc;
use view_engine::ViewId;

fn controller() -> DashboardController {
    DashboardController::new(ResaleFixture::store()).unwrap()
}

// ============================================================================
// INITIAL STATE
// ============================================================================

#[test]
fn test_initial_selection_is_min_year_and_first_town() {
    let controller = controller();
    assert_eq!(controller.filter_state().year, 2020);
    assert_eq!(controller.filter_state().town, "ANG MO KIO");
}

#[test]
fn test_empty_dataset_is_rejected() {
    let result = DashboardController::new(DatasetStore::new(Vec::new()));
    assert!(matches!(result, Err(EngineError::EmptyDataset)));
}

#[test]
fn test_control_options_come_from_domains() {
    let controller = controller();
    assert_eq!(controller.year_options(), vec![2020, 2021, 2022]);
    assert_eq!(
        controller.town_options(),
        vec!["ANG MO KIO", "BEDOK", "CLEMENTI"]
    );
}

// ============================================================================
// SELECTION CHANGES
// ============================================================================

#[test]
fn test_select_year_refreshes_all_views() {
    let mut controller = controller();
    let results = controller.select_year(2021).unwrap();

    assert_eq!(controller.filter_state().year, 2021);
    assert_eq!(results.len(), ViewId::ALL.len());
    assert!(results
        .iter()
        .any(|r| r.title == "Year 2021: MRT Distance vs Price per sqm in ANG MO KIO"));
}

#[test]
fn test_out_of_domain_year_is_clamped() {
    let mut controller = controller();
    controller.select_year(2021).unwrap();

    let results = controller.select_year(1999).unwrap();
    assert_eq!(controller.filter_state().year, 2020);
    assert_eq!(results.len(), ViewId::ALL.len());
}

#[test]
fn test_out_of_domain_town_is_clamped() {
    let mut controller = controller();
    controller.select_town("BEDOK".to_string()).unwrap();

    controller.select_town("PUNGGOL".to_string()).unwrap();
    assert_eq!(controller.filter_state().town, "ANG MO KIO");
}

// ============================================================================
// SUBSCRIPTIONS
// ============================================================================

#[test]
fn test_subscribers_receive_every_view() {
    let mut controller = controller();
    let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    controller.subscribe(move |result| sink.borrow_mut().push(result.title.clone()));

    controller.refresh().unwrap();
    assert_eq!(seen.borrow().len(), ViewId::ALL.len());
    assert_eq!(
        seen.borrow()[0],
        "Year 2020: Price / Square per Meter"
    );

    controller.select_town("BEDOK".to_string()).unwrap();
    assert_eq!(seen.borrow().len(), 2 * ViewId::ALL.len());
}

// ============================================================================
// CACHING AND RELOAD
// ============================================================================

#[test]
fn test_refresh_memoizes_per_selection() {
    let mut controller = controller();

    let first = controller.refresh().unwrap();
    assert_eq!(controller.cached_view_count(), ViewId::ALL.len());

    // Same selection again: served from cache, identical output.
    let second = controller.refresh().unwrap();
    assert_eq!(first, second);
    assert_eq!(controller.cached_view_count(), ViewId::ALL.len());

    controller.select_year(2021).unwrap();
    assert_eq!(controller.cached_view_count(), 2 * ViewId::ALL.len());
}

#[test]
fn test_reload_drops_cache_and_keeps_valid_selection() {
    let mut controller = controller();
    controller.select_town("BEDOK".to_string()).unwrap();
    assert!(controller.cached_view_count() > 0);

    // BEDOK and 2020 both survive into the smaller dataset.
    let remaining: Vec<Record> = ResaleFixture::records()
        .into_iter()
        .filter(|r| r.town == "BEDOK")
        .collect();
    controller.reload(remaining).unwrap();

    assert_eq!(controller.cached_view_count(), 0);
    assert_eq!(controller.filter_state().year, 2020);
    assert_eq!(controller.filter_state().town, "BEDOK");
    assert_eq!(controller.town_options(), vec!["BEDOK"]);
}

#[test]
fn test_reload_clamps_vanished_selection() {
    let mut controller = controller();
    controller.select_year(2021).unwrap();
    controller.select_town("CLEMENTI".to_string()).unwrap();

    // The new dataset has no CLEMENTI and no 2021.
    let remaining: Vec<Record> = ResaleFixture::records()
        .into_iter()
        .filter(|r| r.town == "BEDOK" && r.year != 2021)
        .collect();
    controller.reload(remaining).unwrap();

    assert_eq!(controller.filter_state().year, 2020);
    assert_eq!(controller.filter_state().town, "BEDOK");
    assert!(controller.refresh().is_ok());
}

#[test]
fn test_reload_with_empty_dataset_fails_and_keeps_old_state() {
    let mut controller = controller();
    let result = controller.reload(Vec::new());
    assert!(matches!(result, Err(EngineError::EmptyDataset)));

    // Old dataset still drives the views.
    assert_eq!(controller.store().len(), 13);
    assert!(controller.refresh().is_ok());
}
