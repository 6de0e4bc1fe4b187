//! FILENAME: app/src/lib.rs
//! PURPOSE: Main library entry point (control layer).
//! CONTEXT: Owns the FilterState and wires selection changes to the view
//! engine. The binary in main.rs is a thin shell over this.

pub mod controller;

pub use controller::DashboardController;
