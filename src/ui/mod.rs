//! UI utilities for terminal output

mod spinner;

pub use spinner::{clear_spinner, create_spinner};
