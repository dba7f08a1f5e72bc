//! CLI library components for the countryref binary.

pub mod logging;
