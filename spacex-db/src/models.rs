//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the chart scripts
//! or printed by the CLI as JSON.

use serde::Serialize;
use spacex_records::OutcomeClass;

/// Successful launch count for one site (the all-sites pie).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccesses {
    pub launch_site: String,
    pub successes: i64,
}

/// Number of launches with a given outcome at one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassCount {
    pub class: OutcomeClass,
    pub count: i64,
}

/// One row of the payload-vs-outcome scatter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayloadOutcome {
    pub flight_number: Option<i64>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version: Option<String>,
    pub booster_version_category: String,
    pub class: OutcomeClass,
}

/// Smallest and largest payload mass in the table, in kilograms.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Per-site launch totals for the CLI summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSummary {
    pub launch_site: String,
    pub launches: i64,
    pub successes: i64,
}

impl SiteSummary {
    /// Fraction of launches that succeeded, 0.0 for a site with no launches.
    pub fn success_rate(&self) -> f64 {
        if self.launches == 0 {
            0.0
        } else {
            self.successes as f64 / self.launches as f64
        }
    }
}
