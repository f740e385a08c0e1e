//! Serializable chart descriptions.
//!
//! A [`Figure`] is built fresh on every callback invocation and handed to the
//! D3 scripts as JSON; the `kind` tag selects the renderer.

use serde::Serialize;

/// Qualitative palette used for site slices and booster series.
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Colour for the `index`-th category, cycling through [`PALETTE`].
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    /// Number of marks drawn: slices for a pie, points for a scatter.
    pub fn mark_count(&self) -> usize {
        match self {
            Figure::Pie(pie) => pie.slices.len(),
            Figure::Scatter(scatter) => scatter.point_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One series per booster version category.
    pub series: Vec<ScatterSeries>,
}

impl ScatterFigure {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    /// Tooltip text: flight, site and booster version when known.
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(0), "#636EFA");
        assert_eq!(palette_color(10), palette_color(0));
        assert_eq!(palette_color(13), palette_color(3));
    }

    #[test]
    fn figure_serializes_with_kind_tag() {
        let figure = Figure::Pie(PieFigure {
            title: "Example".to_string(),
            slices: vec![PieSlice {
                label: "Successful".to_string(),
                value: 2.0,
                color: "green".to_string(),
            }],
        });
        let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["title"], "Example");
        assert_eq!(json["slices"][0]["label"], "Successful");
        assert_eq!(json["slices"][0]["value"], 2.0);
    }

    #[test]
    fn scatter_counts_points_across_series() {
        let point = |x: f64| ScatterPoint {
            x,
            y: 1,
            label: String::new(),
        };
        let figure = Figure::Scatter(ScatterFigure {
            title: "Example".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            series: vec![
                ScatterSeries {
                    name: "a".to_string(),
                    color: palette_color(0).to_string(),
                    points: vec![point(1.0), point(2.0)],
                },
                ScatterSeries {
                    name: "b".to_string(),
                    color: palette_color(1).to_string(),
                    points: vec![point(3.0)],
                },
            ],
        });
        assert_eq!(figure.mark_count(), 3);
        assert!(!figure.is_empty());
    }
}
