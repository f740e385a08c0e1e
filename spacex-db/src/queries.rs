//! Typed query methods over the launch table.
//!
//! Categories (sites, booster versions) are always returned in the order
//! they first appear in the source file, which the loader preserves in
//! `launches.id`.

use crate::models::{ClassCount, PayloadBounds, PayloadOutcome, SiteSuccesses, SiteSummary};
use crate::Database;
use rusqlite::{params, Row};
use spacex_records::{OutcomeClass, PayloadRange, SiteSelection};

/// Read an outcome class column, rejecting anything other than 0/1.
fn class_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<OutcomeClass> {
    let flag: i64 = row.get(idx)?;
    OutcomeClass::try_from(flag).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, flag))
}

impl Database {
    /// Total number of launches in the table.
    pub fn query_launch_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Total number of successful launches across all sites.
    pub fn query_success_count(&self) -> anyhow::Result<i64> {
        let conn = self.conn.borrow();
        let count = conn.query_row(
            "SELECT COALESCE(SUM(class), 0) FROM launches",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Distinct launch sites in first-seen order.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::debug!(
            "[SpaceX] query: query_launch_sites returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Distinct booster version categories in first-seen order.
    pub fn query_booster_categories(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT booster_version_category FROM launches
             GROUP BY booster_version_category
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Smallest and largest payload mass, or `None` for an empty table.
    pub fn query_payload_bounds(&self) -> anyhow::Result<Option<PayloadBounds>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let bounds = match (min, max) {
            (Some(min), Some(max)) => Some(PayloadBounds { min, max }),
            _ => None,
        };
        log::debug!("[SpaceX] query: query_payload_bounds returned {:?}", bounds);
        Ok(bounds)
    }

    /// Successful launches per site, one entry per site (including sites
    /// with no successes), in first-seen order.
    pub fn query_site_successes(&self) -> anyhow::Result<Vec<SiteSuccesses>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class) AS successes
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccesses {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SpaceX] query: query_site_successes returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Launch counts per outcome class for one site, most frequent first
    /// (ties: failure first). Classes with no launches are omitted, so an
    /// unknown site yields an empty vector.
    pub fn query_class_counts(&self, launch_site: &str) -> anyhow::Result<Vec<ClassCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) AS launches
             FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY launches DESC, class ASC",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(ClassCount {
                    class: class_at(row, 0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SpaceX] query: query_class_counts({}) returned {} records",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Launches whose payload lies in `range` (inclusive), restricted to the
    /// selected site, in file order.
    pub fn query_payload_outcomes(
        &self,
        site: &SiteSelection,
        range: &PayloadRange,
    ) -> anyhow::Result<Vec<PayloadOutcome>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, payload_mass_kg, booster_version,
                    booster_version_category, class
             FROM launches
             WHERE payload_mass_kg >= ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![range.low, range.high, site.site()], |row| {
                Ok(PayloadOutcome {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    payload_mass_kg: row.get(2)?,
                    booster_version: row.get(3)?,
                    booster_version_category: row.get(4)?,
                    class: class_at(row, 5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "[SpaceX] query: query_payload_outcomes({}, {}..={}) returned {} records",
            site.value(),
            range.low,
            range.high,
            rows.len()
        );
        Ok(rows)
    }

    /// Launches and successes per site in first-seen order.
    pub fn query_site_summaries(&self) -> anyhow::Result<Vec<SiteSummary>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, COUNT(*), SUM(class)
             FROM launches
             GROUP BY launch_site
             ORDER BY MIN(id)",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSummary {
                    launch_site: row.get(0)?,
                    launches: row.get(1)?,
                    successes: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
