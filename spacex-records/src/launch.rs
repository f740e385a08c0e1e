use crate::outcome::OutcomeClass;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

/// One launch attempt from `spacex_launch_dash.csv`.
///
/// The four required columns are bound by header name, so a file missing any
/// of them fails to load instead of surfacing later as an empty chart. The
/// leading unnamed index column and any other extras are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    #[serde(rename = "class")]
    pub class: OutcomeClass,
}

impl LaunchRecord {
    fn validate(&self) -> anyhow::Result<()> {
        if self.launch_site.is_empty() {
            bail!("empty Launch Site");
        }
        if self.booster_version_category.is_empty() {
            bail!("empty Booster Version Category");
        }
        if !self.payload_mass_kg.is_finite() {
            bail!("non-finite payload mass {}", self.payload_mass_kg);
        }
        Ok(())
    }
}

/// Parse the launch table, keeping source order.
///
/// Expected format (with headers), extra columns allowed:
///
/// ```text
/// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
/// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
/// ```
pub fn parse_launch_csv(csv_data: &str) -> anyhow::Result<Vec<LaunchRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<LaunchRecord>().enumerate() {
        // Line 1 is the header.
        let line = index + 2;
        let record = result.with_context(|| format!("Malformed launch record on line {}", line))?;
        record
            .validate()
            .with_context(|| format!("Invalid launch record on line {}", line))?;
        records.push(record);
    }
    log::info!("[SpaceX] records: parsed {} launch records", records.len());
    Ok(records)
}
