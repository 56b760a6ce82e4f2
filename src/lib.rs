//! Library entry for Candidex exposing the filter/sort engine and supporting
//! modules for integration tests.

pub mod app;
pub mod args;
pub mod data;
pub mod events;
pub mod logic;
pub mod state;
mod test_utils;
pub mod theme;
pub mod ui;
pub mod util;
