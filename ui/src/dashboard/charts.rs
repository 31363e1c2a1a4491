//! Inline SVG charts for the dashboard.
//!
//! Geometry is computed by plain functions ([`bar_layout`], [`line_layout`],
//! [`y_ticks`]) so it can be tested without a renderer; the components only
//! turn the layouts into SVG nodes and track the container width.

use dioxus::prelude::*;
use tracing::trace;

use crate::core::format::format_number;
use crate::core::seed::SectionScore;
use crate::core::timing::{Debouncer, Timings};
use crate::{i18n, t};

use super::month_labels;

pub const Y_MAX: f64 = 5.0;
pub const Y_STEP: f64 = 0.5;
pub const SECTION_PALETTE: [&str; 5] = ["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F"];
pub const TREND_COLOR: &str = "#1FB8CD";

const DEFAULT_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 320.0;
const MIN_WIDTH: f64 = 240.0;
const BAR_FILL_RATIO: f64 = 0.6;

const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 36.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(MIN_WIDTH),
            height,
        }
    }

    pub fn left(&self) -> f64 {
        PAD_LEFT
    }

    pub fn right(&self) -> f64 {
        self.width - PAD_RIGHT
    }

    pub fn top(&self) -> f64 {
        PAD_TOP
    }

    pub fn baseline(&self) -> f64 {
        self.height - PAD_BOTTOM
    }

    pub fn plot_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.baseline() - self.top()).max(0.0)
    }

    /// Vertical position of a score; values outside `0..=Y_MAX` are clamped.
    pub fn y_for(&self, value: f64) -> f64 {
        let value = if value.is_finite() {
            value.clamp(0.0, Y_MAX)
        } else {
            0.0
        };
        self.baseline() - self.plot_height() * (value / Y_MAX)
    }

    fn view_box(&self) -> String {
        format!("0 0 {:.0} {:.0}", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub y: f64,
}

pub fn y_ticks(frame: &ChartFrame) -> Vec<Tick> {
    let steps = (Y_MAX / Y_STEP).round() as usize;
    (0..=steps)
        .map(|i| {
            let value = i as f64 * Y_STEP;
            Tick {
                value,
                y: frame.y_for(value),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

impl Bar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

pub fn bar_layout(frame: &ChartFrame, scores: &[SectionScore]) -> Vec<Bar> {
    if scores.is_empty() {
        return Vec::new();
    }

    let slot = frame.plot_width() / scores.len() as f64;
    let bar_width = slot * BAR_FILL_RATIO;

    scores
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let y = frame.y_for(entry.score);
            Bar {
                label: entry.section.clone(),
                value: entry.score,
                x: frame.left() + slot * idx as f64 + (slot - bar_width) / 2.0,
                y,
                width: bar_width,
                height: frame.baseline() - y,
                color: SECTION_PALETTE[idx % SECTION_PALETTE.len()],
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Points spread evenly from the left to the right edge of the plot. Missing
/// labels fall back to the 1-based position.
pub fn line_layout(frame: &ChartFrame, values: &[f64], labels: &[String]) -> Vec<LinePoint> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = if count > 1 {
                frame.left() + frame.plot_width() * idx as f64 / (count - 1) as f64
            } else {
                frame.left() + frame.plot_width() / 2.0
            };
            LinePoint {
                label: labels
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| (idx + 1).to_string()),
                value: *value,
                x,
                y: frame.y_for(*value),
            }
        })
        .collect()
}

pub fn line_points(points: &[LinePoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polygon under the line, closed along the baseline.
pub fn area_points(frame: &ChartFrame, points: &[LinePoint]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} {:.1},{:.1} {:.1},{:.1}",
        line_points(points),
        last.x,
        frame.baseline(),
        first.x,
        frame.baseline()
    )
}

/// What a new container measurement does to the drawn chart width.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ResizeStep {
    Ignore,
    /// Back at the drawn width: a redraw still waiting would be stale.
    Cancel,
    Schedule(f64),
}

fn resize_step(measured: f64, drawn: f64) -> ResizeStep {
    if measured.is_nan() || measured <= 0.0 {
        ResizeStep::Ignore
    } else if (measured - drawn).abs() < 1.0 {
        ResizeStep::Cancel
    } else {
        ResizeStep::Schedule(measured)
    }
}

/// Tracks the rendered width of a chart container. Resize bursts collapse
/// into one update after the configured quiet period.
fn use_chart_width() -> (Signal<f64>, impl FnMut(Event<ResizeData>) + Clone) {
    let timings = try_use_context::<Timings>().unwrap_or_default();
    let width = use_signal(|| DEFAULT_WIDTH);
    let debouncer = use_hook(|| Debouncer::new(timings.resize_debounce_ms));

    let handler = {
        let mut width = width;
        move |evt: Event<ResizeData>| {
            let Ok(size) = evt.get_content_box_size() else {
                return;
            };
            match resize_step(size.width, *width.peek()) {
                ResizeStep::Ignore => {}
                ResizeStep::Cancel => debouncer.cancel(),
                ResizeStep::Schedule(measured) => debouncer.schedule(move || {
                    trace!(width = measured, "chart redraw");
                    width.set(measured);
                }),
            }
        }
    };

    (width, handler)
}

#[component]
pub fn SectionsChart(scores: Vec<SectionScore>) -> Element {
    let _lang = i18n::use_locale();
    let (width, onresize) = use_chart_width();
    let frame = ChartFrame::new(width(), CHART_HEIGHT);
    let ticks = y_ticks(&frame);
    let bars = bar_layout(&frame, &scores);
    let view_box = frame.view_box();
    let series = t!("chart-sections-series");

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-sections-title")} }
            }
            div {
                id: "sections-chart",
                class: "chart-container",
                role: "img",
                aria_label: "{series}",
                onresize,
                svg {
                    class: "chart-svg",
                    view_box: "{view_box}",
                    width: "100%",
                    {render_grid(&frame, &ticks)}
                    for bar in bars.iter() {
                        {render_bar(&frame, bar)}
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrendsChart(values: Vec<f64>) -> Element {
    let _lang = i18n::use_locale();
    let (width, onresize) = use_chart_width();
    let frame = ChartFrame::new(width(), CHART_HEIGHT);
    let ticks = y_ticks(&frame);
    let labels = month_labels();
    let points = line_layout(&frame, &values, &labels);
    let polyline = line_points(&points);
    let area = area_points(&frame, &points);
    let view_box = frame.view_box();
    let series = t!("chart-trends-series");

    rsx! {
        section { class: "dashboard-card dashboard-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("chart-trends-title")} }
            }
            div {
                id: "trends-chart",
                class: "chart-container",
                role: "img",
                aria_label: "{series}",
                onresize,
                svg {
                    class: "chart-svg",
                    view_box: "{view_box}",
                    width: "100%",
                    {render_grid(&frame, &ticks)}
                    if !points.is_empty() {
                        polygon { points: "{area}", fill: TREND_COLOR, opacity: "0.15" }
                        polyline {
                            points: "{polyline}",
                            fill: "none",
                            stroke: TREND_COLOR,
                            stroke_width: "2",
                            stroke_linecap: "round",
                        }
                    }
                    for point in points.iter() {
                        {render_point(&frame, point)}
                    }
                }
            }
        }
    }
}

fn render_grid(frame: &ChartFrame, ticks: &[Tick]) -> Element {
    let left = format!("{:.1}", frame.left());
    let right = format!("{:.1}", frame.right());
    let label_x = format!("{:.1}", frame.left() - 6.0);

    rsx! {
        g { class: "chart-grid",
            for tick in ticks.iter() {
                g { key: "{tick.value}",
                    line {
                        x1: "{left}",
                        y1: "{tick.y:.1}",
                        x2: "{right}",
                        y2: "{tick.y:.1}",
                        stroke: "currentColor",
                        stroke_opacity: "0.15",
                        stroke_width: "0.5",
                    }
                    text {
                        class: "chart-axis",
                        x: "{label_x}",
                        y: "{tick.y:.1}",
                        dy: "3",
                        text_anchor: "end",
                        {format_number(tick.value, 1)}
                    }
                }
            }
        }
    }
}

fn render_bar(frame: &ChartFrame, bar: &Bar) -> Element {
    let center = format!("{:.1}", bar.center_x());
    let value_y = format!("{:.1}", bar.y - 6.0);
    let label_y = format!("{:.1}", frame.baseline() + 18.0);

    rsx! {
        g { key: "{bar.label}",
            rect {
                x: "{bar.x:.1}",
                y: "{bar.y:.1}",
                width: "{bar.width:.1}",
                height: "{bar.height:.1}",
                fill: bar.color,
                rx: "3",
            }
            text {
                class: "chart-value",
                x: "{center}",
                y: "{value_y}",
                text_anchor: "middle",
                {format_number(bar.value, 1)}
            }
            text {
                class: "chart-label",
                x: "{center}",
                y: "{label_y}",
                text_anchor: "middle",
                "{bar.label}"
            }
        }
    }
}

fn render_point(frame: &ChartFrame, point: &LinePoint) -> Element {
    let label_y = format!("{:.1}", frame.baseline() + 18.0);
    let tooltip = format!("{}: {}", point.label, format_number(point.value, 1));

    rsx! {
        g { key: "{point.label}",
            circle {
                cx: "{point.x:.1}",
                cy: "{point.y:.1}",
                r: "3",
                fill: TREND_COLOR,
                title { "{tooltip}" }
            }
            text {
                class: "chart-label",
                x: "{point.x:.1}",
                y: "{label_y}",
                text_anchor: "middle",
                "{point.label}"
            }
        }
    }
}
