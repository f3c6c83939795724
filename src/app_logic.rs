/*
 * This module provides the application logic layer, centered around
 * `BrowserLogic`, which acts as the presenter between the core navigation
 * model and a front-end. `view_state` holds the view model it produces.
 * Unit tests for `BrowserLogic` are in `handler_tests.rs`.
 */
pub mod handler;
pub mod view_state;


pub use handler::BrowserLogic;
pub use view_state::{SearchOutcome, TreeRow, View};
