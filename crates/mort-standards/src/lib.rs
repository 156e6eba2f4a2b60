#![deny(unsafe_code)]

//! Reference tables for resolving WHO mortality records.
//!
//! Loads the ICD-10 cause code lists (condensed, three-character and the
//! special list for Portugal) and the country code list from their CSV
//! resources into the typed tables of [`mort_model::table`].

pub mod csv_utils;
pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::{Result, StandardsError};
pub use crate::loaders::{
    load_code_tables, load_condensed_table, load_country_table, load_portugal_table,
    load_three_char_table,
};
pub use crate::paths::{RESOURCES_ENV_VAR, ResourcePaths, resources_root};
