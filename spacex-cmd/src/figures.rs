//! Figure export: the same callbacks the dashboard runs, printed as JSON.

use spacex_figures::{ControlValues, Dashboard, GraphId};
use spacex_records::{PayloadRange, SiteSelection};

pub fn pie_json(dashboard: &Dashboard, site: &str) -> anyhow::Result<String> {
    let values = ControlValues {
        site: SiteSelection::from_value(site),
        ..ControlValues::default()
    };
    let figure = dashboard.render(GraphId::SuccessPieChart, &values)?;
    Ok(serde_json::to_string_pretty(&figure)?)
}

pub fn scatter_json(dashboard: &Dashboard, site: &str, low: f64, high: f64) -> anyhow::Result<String> {
    let values = ControlValues {
        site: SiteSelection::from_value(site),
        payload_range: PayloadRange::new(low, high),
    };
    let figure = dashboard.render(GraphId::SuccessPayloadScatterChart, &values)?;
    Ok(serde_json::to_string_pretty(&figure)?)
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
    fn pie_json_for_site() {
        let dashboard = Dashboard::load(CSV).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&pie_json(&dashboard, "SiteA").unwrap()).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["title"], "Success vs. Failed Launches for SiteA");
        assert_eq!(json["slices"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn scatter_json_respects_range() {
        let dashboard = Dashboard::load(CSV).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&scatter_json(&dashboard, "ALL", 0.0, 1000.0).unwrap()).unwrap();
        assert_eq!(json["kind"], "scatter");
        let series = json["series"].as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["points"][0]["x"], 500.0);
    }
}
