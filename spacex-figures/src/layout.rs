//! Declarative page layout.
//!
//! [`build_layout`] runs once at startup and describes the page as an ordered
//! list of widgets; the UI crate renders it without adding or reordering
//! anything.

use crate::callbacks::{Callback, ControlId, ControlValues, GraphId};
use anyhow::bail;
use spacex_db::models::PayloadBounds;
use spacex_db::Database;
use spacex_records::{PayloadRange, SiteSelection, ALL_SITES_LABEL, ALL_SITES_VALUE};
use std::collections::HashSet;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const DROPDOWN_PLACEHOLDER: &str = "Select a launch site";
pub const PAYLOAD_PROMPT: &str = "Payload range (Kg):";

// Fixed slider bounds; the data's own payload range does not move them.
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadingStyle {
    pub text_align: &'static str,
    pub color: &'static str,
    pub font_size_px: u32,
}

impl HeadingStyle {
    pub fn to_css(&self) -> String {
        format!(
            "text-align: {}; color: {}; font-size: {}px;",
            self.text_align, self.color, self.font_size_px
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub default_value: String,
    pub placeholder: String,
    pub searchable: bool,
}

impl DropdownSpec {
    /// Options whose label contains `query`, ignoring case. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&DropdownOption> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderSpec {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    pub default_value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Heading { text: String, style: HeadingStyle },
    Dropdown(DropdownSpec),
    LineBreak,
    Graph(GraphId),
    Paragraph(String),
    RangeSlider(RangeSliderSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub widgets: Vec<Widget>,
    /// True payload extent of the loaded data. Informational only: the slider
    /// keeps its fixed bounds.
    pub payload_bounds: Option<PayloadBounds>,
}

impl DashboardLayout {
    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Dropdown(spec) => Some(spec.id),
            Widget::RangeSlider(spec) => Some(spec.id),
            _ => None,
        })
    }

    pub fn graphs(&self) -> impl Iterator<Item = GraphId> + '_ {
        self.widgets.iter().filter_map(|w| match w {
            Widget::Graph(id) => Some(*id),
            _ => None,
        })
    }

    pub fn site_dropdown(&self) -> Option<&DropdownSpec> {
        self.widgets.iter().find_map(|w| match w {
            Widget::Dropdown(spec) if spec.id == ControlId::SiteDropdown => Some(spec),
            _ => None,
        })
    }

    pub fn payload_slider(&self) -> Option<&RangeSliderSpec> {
        self.widgets.iter().find_map(|w| match w {
            Widget::RangeSlider(spec) if spec.id == ControlId::PayloadSlider => Some(spec),
            _ => None,
        })
    }

    /// Control values as the page first renders them.
    pub fn initial_values(&self) -> ControlValues {
        let mut values = ControlValues::default();
        if let Some(dropdown) = self.site_dropdown() {
            values.site = SiteSelection::from_value(&dropdown.default_value);
        }
        if let Some(slider) = self.payload_slider() {
            values.payload_range = slider.default_value;
        }
        values
    }

    /// Check that every control and graph id is unique on the page, that each
    /// callback's inputs and output exist, and that no graph has two callbacks.
    pub fn validate_wiring(&self, callbacks: &[Callback]) -> anyhow::Result<()> {
        let mut controls = HashSet::new();
        for control in self.controls() {
            if !controls.insert(control) {
                bail!("control '{}' appears more than once in the layout", control);
            }
        }
        let mut graphs = HashSet::new();
        for graph in self.graphs() {
            if !graphs.insert(graph) {
                bail!("graph '{}' appears more than once in the layout", graph);
            }
        }

        let mut bound = HashSet::new();
        for callback in callbacks {
            for input in callback.inputs {
                if !controls.contains(input) {
                    bail!(
                        "callback for '{}' listens to '{}', which is not in the layout",
                        callback.output,
                        input
                    );
                }
            }
            if !graphs.contains(&callback.output) {
                bail!("callback output '{}' is not in the layout", callback.output);
            }
            if !bound.insert(callback.output) {
                bail!("graph '{}' has more than one callback", callback.output);
            }
        }

        for graph in graphs.difference(&bound) {
            log::warn!("[SpaceX] layout: graph '{}' has no callback and stays empty", graph);
        }
        Ok(())
    }
}

fn site_dropdown(sites: &[String]) -> DropdownSpec {
    let mut options = Vec::with_capacity(sites.len() + 1);
    options.push(DropdownOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    });
    options.extend(sites.iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));
    DropdownSpec {
        id: ControlId::SiteDropdown,
        options,
        default_value: ALL_SITES_VALUE.to_string(),
        placeholder: DROPDOWN_PLACEHOLDER.to_string(),
        searchable: true,
    }
}

fn payload_slider() -> RangeSliderSpec {
    let step_count = ((SLIDER_MAX - SLIDER_MIN) / SLIDER_STEP).round() as u32;
    let marks = (0..=step_count)
        .map(|i| {
            let value = SLIDER_MIN + f64::from(i) * SLIDER_STEP;
            SliderMark {
                value,
                label: format!("{}", value as i64),
            }
        })
        .collect();
    RangeSliderSpec {
        id: ControlId::PayloadSlider,
        min: SLIDER_MIN,
        max: SLIDER_MAX,
        step: SLIDER_STEP,
        marks,
        default_value: PayloadRange::new(SLIDER_MIN, SLIDER_MAX),
    }
}

/// Build the dashboard layout from the loaded launch table.
pub fn build_layout(db: &Database) -> anyhow::Result<DashboardLayout> {
    let sites = db.query_launch_sites()?;
    log::info!("[SpaceX] layout: launch sites {:?}", sites);

    let payload_bounds = db.query_payload_bounds()?;
    if let Some(bounds) = payload_bounds {
        log::info!(
            "[SpaceX] layout: payload mass in data spans {} to {} kg (slider fixed at {} to {})",
            bounds.min,
            bounds.max,
            SLIDER_MIN,
            SLIDER_MAX
        );
    }

    let widgets = vec![
        Widget::Heading {
            text: DASHBOARD_TITLE.to_string(),
            style: HeadingStyle {
                text_align: "center",
                color: "#503D36",
                font_size_px: 40,
            },
        },
        Widget::Dropdown(site_dropdown(&sites)),
        Widget::LineBreak,
        Widget::Graph(GraphId::SuccessPieChart),
        Widget::LineBreak,
        Widget::Paragraph(PAYLOAD_PROMPT.to_string()),
        Widget::RangeSlider(payload_slider()),
        Widget::Graph(GraphId::SuccessPayloadScatterChart),
    ];

    Ok(DashboardLayout {
        widgets,
        payload_bounds,
    })
}
