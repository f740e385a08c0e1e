//! Plain-text reports over the launch table.

use spacex_figures::Dashboard;
use std::fmt::Write;

/// Distinct sites in first-seen order, followed by the payload range.
pub fn sites_report(dashboard: &Dashboard) -> anyhow::Result<String> {
    let sites = dashboard.db.query_launch_sites()?;
    let mut out = String::new();
    writeln!(out, "Launch sites ({}):", sites.len())?;
    for site in &sites {
        writeln!(out, "  {}", site)?;
    }
    match dashboard.layout.payload_bounds {
        Some(bounds) => write!(out, "Payload mass: {} to {} kg", bounds.min, bounds.max)?,
        None => write!(out, "Payload mass: no launches")?,
    }
    Ok(out)
}

/// One row per site: launches, successes, success rate.
pub fn summary_report(dashboard: &Dashboard) -> anyhow::Result<String> {
    let summaries = dashboard.db.query_site_summaries()?;
    let width = summaries
        .iter()
        .map(|s| s.launch_site.len())
        .max()
        .unwrap_or(0)
        .max("Launch Site".len());

    let mut out = String::new();
    writeln!(
        out,
        "{:<width$}  {:>8}  {:>9}  {:>7}",
        "Launch Site", "Launches", "Successes", "Rate"
    )?;
    for s in &summaries {
        writeln!(
            out,
            "{:<width$}  {:>8}  {:>9}  {:>6.1}%",
            s.launch_site,
            s.launches,
            s.successes,
            s.success_rate() * 100.0
        )?;
    }
    let launches = dashboard.db.query_launch_count()?;
    let successes = dashboard.db.query_success_count()?;
    write!(
        out,
        "{:<width$}  {:>8}  {:>9}",
        "Total", launches, successes
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
SiteA,500,v1,1
SiteA,2000,v2,0
SiteB,8000,v1,1
";

    #[test]
    fn sites_report_lists_sites_and_bounds() {
        let dashboard = Dashboard::load(CSV).unwrap();
        let report = sites_report(&dashboard).unwrap();
        assert_eq!(
            report,
            "Launch sites (2):\n  SiteA\n  SiteB\nPayload mass: 500 to 8000 kg"
        );
    }

    #[test]
    fn summary_report_rows() {
        let dashboard = Dashboard::load(CSV).unwrap();
        let report = summary_report(&dashboard).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("SiteA"));
        assert!(lines[1].ends_with("50.0%"), "{}", lines[1]);
        assert!(lines[2].ends_with("100.0%"), "{}", lines[2]);
        assert!(lines[3].starts_with("Total"));
        assert!(lines[3].ends_with('2'));
    }
}
