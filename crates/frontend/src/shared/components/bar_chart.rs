//! SVG grouped bar chart
//!
//! Geometry is computed by [`layout_bars`] and [`axis_ticks`] so it can be
//! checked without a browser; the component only turns it into elements.

use crate::shared::number_format::{format_number_with_decimals, format_price};
use contracts::domain::a001_invoice::charts::BarChartData;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 720.0,
            height: 360.0,
            margin_left: 64.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 72.0,
        }
    }
}

impl ChartFrame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    fn y_for(&self, value: f64, axis_max: f64) -> f64 {
        self.baseline() - (value.max(0.0) / axis_max) * self.plot_height()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub stroke: String,
    pub value: f64,
    pub label: String,
    pub series: String,
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Y axis ticks from zero up to the first "round" value covering `max_value`
pub fn axis_ticks(max_value: f64, target_count: usize) -> Vec<f64> {
    let max = if max_value.is_finite() && max_value > 0.0 {
        max_value
    } else {
        1.0
    };
    let step = nice_step(max / target_count.max(1) as f64);
    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Place every present value as a rectangle.
///
/// Each label owns an equal slot on the X axis; the bars present in a slot are
/// centred in it, so a slot with one value shows one centred bar.
pub fn layout_bars(data: &BarChartData, frame: &ChartFrame) -> Vec<BarRect> {
    if data.labels.is_empty() {
        return Vec::new();
    }
    let axis_max = axis_ticks(data.max_value(), 5)
        .last()
        .copied()
        .unwrap_or(1.0);

    let slot_width = frame.plot_width() / data.labels.len() as f64;
    let bar_width = slot_width * 0.8 / data.series.len().max(1) as f64;

    let mut bars = Vec::new();
    for (slot, label) in data.labels.iter().enumerate() {
        let present: Vec<_> = data
            .series
            .iter()
            .filter_map(|series| match series.values.get(slot) {
                Some(Some(value)) => Some((series, *value)),
                _ => None,
            })
            .collect();

        let slot_x = frame.margin_left + slot as f64 * slot_width;
        let start_x = slot_x + (slot_width - present.len() as f64 * bar_width) / 2.0;

        for (i, (series, value)) in present.into_iter().enumerate() {
            let y = frame.y_for(value, axis_max);
            bars.push(BarRect {
                x: start_x + i as f64 * bar_width,
                y,
                width: bar_width,
                height: frame.baseline() - y,
                fill: series.fill.clone(),
                stroke: series.stroke.clone(),
                value,
                label: label.clone(),
                series: series.label.clone(),
            });
        }
    }
    bars
}

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<BarChartData>,
    /// Text shown instead of the chart when there are no bars
    #[prop(optional, into)]
    empty_text: MaybeProp<String>,
) -> impl IntoView {
    let frame = ChartFrame::default();

    let legend = move || {
        data.get()
            .series
            .into_iter()
            .map(|series| {
                view! {
                    <span class="bar-chart__legend-item">
                        <span
                            class="bar-chart__swatch"
                            style:background-color=series.fill
                            style:border-color=series.stroke
                        ></span>
                        {series.label}
                    </span>
                }
            })
            .collect_view()
    };

    let grid = move || {
        let ticks = axis_ticks(data.get().max_value(), 5);
        let axis_max = ticks.last().copied().unwrap_or(1.0);
        let decimals = if ticks.get(1).is_some_and(|step| *step < 1.0) { 2 } else { 0 };
        ticks
            .into_iter()
            .map(|tick| {
                let y = frame.y_for(tick, axis_max);
                view! {
                    <g class="bar-chart__grid">
                        <line
                            x1=px(frame.margin_left)
                            x2=px(frame.width - frame.margin_right)
                            y1=px(y)
                            y2=px(y)
                        />
                        <text x=px(frame.margin_left - 8.0) y=px(y + 4.0) text-anchor="end">
                            {format_number_with_decimals(tick, decimals)}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    let bars = move || {
        layout_bars(&data.get(), &frame)
            .into_iter()
            .map(|bar| {
                let tooltip = format!("{} · {}: {}", bar.label, bar.series, format_price(bar.value));
                view! {
                    <rect
                        x=px(bar.x)
                        y=px(bar.y)
                        width=px(bar.width)
                        height=px(bar.height)
                        fill=bar.fill
                        stroke=bar.stroke
                        stroke-width="1"
                    >
                        <title>{tooltip}</title>
                    </rect>
                }
            })
            .collect_view()
    };

    let x_labels = move || {
        let labels = data.get().labels;
        let slot_width = frame.plot_width() / labels.len().max(1) as f64;
        labels
            .into_iter()
            .enumerate()
            .map(|(slot, label)| {
                let x = frame.margin_left + (slot as f64 + 0.5) * slot_width;
                let y = frame.baseline() + 14.0;
                view! {
                    <text
                        class="bar-chart__x-label"
                        x=px(x)
                        y=px(y)
                        text-anchor="end"
                        transform=format!("rotate(-35 {} {})", px(x), px(y))
                    >
                        {label}
                    </text>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bar-chart">
            <Show
                when=move || !data.get().is_empty()
                fallback=move || view! {
                    <div class="bar-chart__empty">
                        {move || empty_text.get().unwrap_or_else(|| "No data".to_string())}
                    </div>
                }
            >
                <div class="bar-chart__legend">{legend}</div>
                <svg
                    class="bar-chart__svg"
                    viewBox=format!("0 0 {} {}", frame.width, frame.height)
                    role="img"
                >
                    {grid}
                    {bars}
                    {x_labels}
                </svg>
            </Show>
        </div>
    }
}
