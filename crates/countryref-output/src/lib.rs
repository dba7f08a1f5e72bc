//! Serializers consuming the canonical country table.

pub mod columns;
pub mod csv_output;
pub mod json_output;

pub use columns::{FIXED_COLUMNS, header, max_region_codes, region_column_name};
pub use csv_output::{to_csv_string, write_csv};
pub use json_output::{to_json_string, to_json_value, write_json};
