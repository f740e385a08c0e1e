//! Core types for SpaceX launch records.
//!
//! - `launch`: the typed record schema and the CSV parser
//! - `outcome`: binary launch outcome (`class` column)
//! - `site_selection`: the site dropdown's value (`ALL` or one site)
//! - `payload_range`: the payload slider's inclusive window

pub mod launch;
pub mod outcome;
pub mod payload_range;
pub mod site_selection;

pub use launch::{parse_launch_csv, LaunchRecord};
pub use outcome::{InvalidOutcomeClass, OutcomeClass};
pub use payload_range::PayloadRange;
pub use site_selection::{SiteSelection, ALL_SITES_LABEL, ALL_SITES_VALUE};
