//! The two chart handlers.
//!
//! Each handler is a pure function of the read-only launch database and the
//! current control values. Unknown sites and empty payload windows produce a
//! figure with no marks rather than an error.

use crate::figure::{
    palette_color, Figure, PieFigure, PieSlice, ScatterFigure, ScatterPoint, ScatterSeries,
};
use spacex_db::models::PayloadOutcome;
use spacex_db::Database;
use spacex_records::{PayloadRange, SiteSelection};

pub const ALL_SITES_PIE_TITLE: &str = "Total Success vs. Failed Launches";
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const CLASS_AXIS_LABEL: &str = "class";

/// Success pie for the selected site.
///
/// - All sites: one slice per site sized by its successful launches.
/// - One site: a `Failed`/`Successful` split of that site's launches.
pub fn pie_chart(db: &Database, site: &SiteSelection) -> anyhow::Result<Figure> {
    let pie = match site {
        SiteSelection::All => {
            let slices = db
                .query_site_successes()?
                .into_iter()
                .enumerate()
                .map(|(i, s)| PieSlice {
                    label: s.launch_site,
                    value: s.successes as f64,
                    color: palette_color(i).to_string(),
                })
                .collect();
            PieFigure {
                title: ALL_SITES_PIE_TITLE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let slices = db
                .query_class_counts(name)?
                .into_iter()
                .map(|c| PieSlice {
                    label: c.class.label().to_string(),
                    value: c.count as f64,
                    color: c.class.color().to_string(),
                })
                .collect();
            PieFigure {
                title: format!("Success vs. Failed Launches for {}", name),
                slices,
            }
        }
    };
    log::debug!(
        "[SpaceX] handler: pie_chart({}) -> {} slices",
        site.value(),
        pie.slices.len()
    );
    Ok(Figure::Pie(pie))
}

/// Payload-vs-outcome scatter for the selected site and payload window.
///
/// Series follow the order in which booster categories appear among the
/// surviving rows; each category keeps the colour of its position in the
/// whole table so colours stay put as the filters change.
pub fn scatter_chart(
    db: &Database,
    site: &SiteSelection,
    range: &PayloadRange,
) -> anyhow::Result<Figure> {
    let rows = if range.is_empty() {
        Vec::new()
    } else {
        db.query_payload_outcomes(site, range)?
    };
    let categories = db.query_booster_categories()?;

    let mut series: Vec<ScatterSeries> = Vec::new();
    for row in &rows {
        let idx = match series
            .iter()
            .position(|s| s.name == row.booster_version_category)
        {
            Some(idx) => idx,
            None => {
                let color_idx = categories
                    .iter()
                    .position(|c| *c == row.booster_version_category)
                    .unwrap_or(series.len());
                series.push(ScatterSeries {
                    name: row.booster_version_category.clone(),
                    color: palette_color(color_idx).to_string(),
                    points: Vec::new(),
                });
                series.len() - 1
            }
        };
        series[idx].points.push(ScatterPoint {
            x: row.payload_mass_kg,
            y: row.class.as_flag(),
            label: point_label(row),
        });
    }

    let title = match site {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(name) => format!("Payload vs. Outcome for {}", name),
    };
    log::debug!(
        "[SpaceX] handler: scatter_chart({}, {}..={}) -> {} points",
        site.value(),
        range.low,
        range.high,
        rows.len()
    );
    Ok(Figure::Scatter(ScatterFigure {
        title,
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: CLASS_AXIS_LABEL.to_string(),
        series,
    }))
}

fn point_label(row: &PayloadOutcome) -> String {
    let mut parts = Vec::with_capacity(3);
    if let Some(flight) = row.flight_number {
        parts.push(format!("Flight {}", flight));
    }
    parts.push(row.launch_site.clone());
    if let Some(booster) = &row.booster_version {
        parts.push(booster.clone());
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::example_db;

    const FIXTURE_CSV: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
2,3,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
3,4,CCAFS LC-40,1,2395.0,F9 v1.1  B1013,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT
5,6,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
6,7,KSC LC-39A,0,5300.0,F9 FT B1030,FT
7,8,KSC LC-39A,1,3669.0,F9 B4 B1039.1,B4
";

    fn fixture_db() -> Database {
        Database::from_csv(FIXTURE_CSV).unwrap()
    }

    fn full_range() -> PayloadRange {
        PayloadRange::new(0.0, 10000.0)
    }

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    fn as_pie(figure: Figure) -> PieFigure {
        match figure {
            Figure::Pie(pie) => pie,
            other => panic!("expected a pie figure, got {:?}", other),
        }
    }

    fn as_scatter(figure: Figure) -> ScatterFigure {
        match figure {
            Figure::Scatter(scatter) => scatter,
            other => panic!("expected a scatter figure, got {:?}", other),
        }
    }

    #[test]
    fn all_sites_pie_has_one_slice_per_site() {
        let db = fixture_db();
        let pie = as_pie(pie_chart(&db, &SiteSelection::All).unwrap());
        let sites = db.query_launch_sites().unwrap();

        assert_eq!(pie.title, ALL_SITES_PIE_TITLE);
        assert_eq!(pie.slices.len(), sites.len());
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
    }

    #[test]
    fn all_sites_pie_sums_to_total_successes() {
        let db = fixture_db();
        let pie = as_pie(pie_chart(&db, &SiteSelection::All).unwrap());
        let successes = db.query_success_count().unwrap();
        assert!((pie.total() - successes as f64).abs() < f64::EPSILON);
        assert_eq!(pie.slices[2].value, 2.0);
    }

    #[test]
    fn single_site_pie_sums_to_site_launches() {
        let db = fixture_db();
        let pie = as_pie(pie_chart(&db, &site("KSC LC-39A")).unwrap());

        assert_eq!(pie.title, "Success vs. Failed Launches for KSC LC-39A");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.total(), 3.0);
        assert_eq!(pie.slices[0].label, "Successful");
        assert_eq!(pie.slices[0].color, "green");
        assert_eq!(pie.slices[1].label, "Failed");
        assert_eq!(pie.slices[1].color, "red");
    }

    #[test]
    fn single_site_pie_with_one_outcome_has_one_slice() {
        let db = example_db();
        let pie = as_pie(pie_chart(&db, &site("SiteB")).unwrap());
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "Successful");
        assert_eq!(pie.slices[0].value, 1.0);
    }

    #[test]
    fn unknown_site_pie_is_empty() {
        let db = fixture_db();
        let figure = pie_chart(&db, &site("Starbase")).unwrap();
        assert!(figure.is_empty());
        assert_eq!(figure.title(), "Success vs. Failed Launches for Starbase");
    }

    #[test]
    fn empty_selection_gives_empty_charts() {
        let db = example_db();
        let empty = SiteSelection::from_value("");

        let pie = pie_chart(&db, &empty).unwrap();
        assert_eq!(pie.mark_count(), 0);

        let scatter = scatter_chart(&db, &empty, &full_range()).unwrap();
        assert_eq!(scatter.mark_count(), 0);
    }

    #[test]
    fn scatter_full_range_all_sites_keeps_every_row() {
        let db = fixture_db();
        let scatter = as_scatter(scatter_chart(&db, &SiteSelection::All, &full_range()).unwrap());
        assert_eq!(scatter.title, "Payload vs. Outcome for All Sites");
        assert_eq!(
            scatter.point_count() as i64,
            db.query_launch_count().unwrap()
        );
        assert_eq!(scatter.x_label, PAYLOAD_AXIS_LABEL);
        assert_eq!(scatter.y_label, CLASS_AXIS_LABEL);
    }

    #[test]
    fn scatter_groups_points_by_booster_category() {
        let db = fixture_db();
        let scatter = as_scatter(scatter_chart(&db, &SiteSelection::All, &full_range()).unwrap());
        let names: Vec<&str> = scatter.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT", "B4"]);
        assert_eq!(scatter.series[2].points.len(), 3);
    }

    #[test]
    fn scatter_series_colors_follow_table_order() {
        let db = fixture_db();
        let scatter = as_scatter(
            scatter_chart(&db, &site("KSC LC-39A"), &full_range()).unwrap(),
        );
        // KSC only flies FT and B4, which are the 3rd and 4th categories overall.
        assert_eq!(scatter.series[0].name, "FT");
        assert_eq!(scatter.series[0].color, palette_color(2));
        assert_eq!(scatter.series[1].color, palette_color(3));
    }

    #[test]
    fn scatter_point_labels_describe_the_launch() {
        let db = fixture_db();
        let scatter = as_scatter(
            scatter_chart(&db, &site("VAFB SLC-4E"), &PayloadRange::new(9000.0, 10000.0)).unwrap(),
        );
        let point = &scatter.series[0].points[0];
        assert_eq!(point.x, 9600.0);
        assert_eq!(point.y, 1);
        assert_eq!(point.label, "Flight 6, VAFB SLC-4E, F9 FT B1029.1");
    }

    #[test]
    fn scatter_range_outside_data_is_empty() {
        let db = fixture_db();
        let above = scatter_chart(&db, &SiteSelection::All, &PayloadRange::new(9700.0, 10000.0))
            .unwrap();
        assert!(above.is_empty());

        let db = example_db();
        let below = scatter_chart(&db, &SiteSelection::All, &PayloadRange::new(0.0, 400.0))
            .unwrap();
        assert!(below.is_empty());
    }

    #[test]
    fn scatter_inverted_range_is_empty() {
        let db = fixture_db();
        let figure =
            scatter_chart(&db, &SiteSelection::All, &PayloadRange::new(5000.0, 1000.0)).unwrap();
        assert!(figure.is_empty());
    }

    #[test]
    fn scatter_worked_example() {
        let db = example_db();
        let site_a = scatter_chart(&db, &site("SiteA"), &full_range()).unwrap();
        assert_eq!(site_a.mark_count(), 2);
        assert_eq!(site_a.title(), "Payload vs. Outcome for SiteA");

        let light = as_scatter(
            scatter_chart(&db, &SiteSelection::All, &PayloadRange::new(0.0, 1000.0)).unwrap(),
        );
        assert_eq!(light.point_count(), 1);
        assert_eq!(light.series[0].points[0].x, 500.0);
        // No flight number or booster version in the example file.
        assert_eq!(light.series[0].points[0].label, "SiteA");
    }

    #[test]
    fn handlers_are_idempotent() {
        let db = fixture_db();
        let first = pie_chart(&db, &site("CCAFS LC-40")).unwrap();
        let second = pie_chart(&db, &site("CCAFS LC-40")).unwrap();
        assert_eq!(first, second);

        let range = PayloadRange::new(1000.0, 6000.0);
        let first = scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        let second = scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        assert_eq!(first, second);
    }
}
