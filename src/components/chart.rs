//! Inline SVG renderings of the report charts.

use std::f64::consts::PI;

use yew::prelude::*;

use crate::format::{format_rupiah, format_thousands};
use crate::reports::{BarChart, Doughnut};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 280.0;
const PAD_LEFT: f64 = 84.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 12.0;
const PAD_BOTTOM: f64 = 32.0;

const RING_RADIUS: f64 = 70.0;
const RING_WIDTH: f64 = 28.0;
const RING_CENTER: f64 = 90.0;

/// Vertical extent of a bar: top `y` and height, growing up from `zero_y`
/// for positive values and down for negative ones.
fn bar_extent(value: f64, zero_y: f64, scale: f64) -> (f64, f64) {
    let height = value.abs() * scale;
    if value >= 0.0 {
        (zero_y - height, height)
    } else {
        (zero_y, height)
    }
}

fn legend(items: impl Iterator<Item = (String, &'static str)>) -> Html {
    html! {
        <div class="flex flex-wrap gap-4 justify-center mt-3">
            { for items.map(|(label, color)| html! {
                <span class="flex items-center gap-2 text-[12px] text-slate-600">
                    <span class="inline-block w-3 h-3 rounded-sm" style={format!("background:{}", color)}></span>
                    { label }
                </span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartViewProps {
    pub chart: BarChart,
}

#[function_component(BarChartView)]
pub fn bar_chart_view(props: &BarChartViewProps) -> Html {
    let chart = &props.chart;
    if chart.labels.is_empty() || chart.datasets.is_empty() {
        return html! { <p class="text-sm text-muted-foreground text-center py-12">{"Belum ada data"}</p> };
    }

    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let max = match chart.max_value() {
        m if m > 0.0 => m,
        _ => 1.0,
    };
    let (zero_y, scale) = if chart.has_negative() {
        (PAD_TOP + plot_h / 2.0, plot_h / 2.0 / max)
    } else {
        (PAD_TOP + plot_h, plot_h / max)
    };
    let group_w = plot_w / chart.labels.len() as f64;
    let bar_w = group_w * 0.8 / chart.datasets.len() as f64;

    html! {
        <div>
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} class="w-full h-auto">
                <line x1={PAD_LEFT.to_string()} y1={zero_y.to_string()} x2={(WIDTH - PAD_RIGHT).to_string()} y2={zero_y.to_string()} stroke="#cbd5e1" />
                <text x={(PAD_LEFT - 6.0).to_string()} y={(PAD_TOP + 10.0).to_string()} text-anchor="end" font-size="11" fill="#64748b">{ format_thousands(max.round() as i64) }</text>
                <text x={(PAD_LEFT - 6.0).to_string()} y={(zero_y + 4.0).to_string()} text-anchor="end" font-size="11" fill="#64748b">{"0"}</text>
                { for chart.labels.iter().enumerate().map(|(i, label)| {
                    let group_x = PAD_LEFT + i as f64 * group_w;
                    html! {
                        <g>
                            { for chart.datasets.iter().enumerate().map(|(j, dataset)| {
                                let value = dataset.values.get(i).copied().unwrap_or_default();
                                let (y, height) = bar_extent(value, zero_y, scale);
                                let x = group_x + group_w * 0.1 + j as f64 * bar_w;
                                html! {
                                    <rect x={x.to_string()} y={y.to_string()} width={bar_w.to_string()} height={height.to_string()} fill={dataset.color}>
                                        <title>{ format!("{} {}: {}", dataset.label, label, format_rupiah(value)) }</title>
                                    </rect>
                                }
                            }) }
                            <text x={(group_x + group_w / 2.0).to_string()} y={(HEIGHT - 10.0).to_string()} text-anchor="middle" font-size="11" fill="#64748b">{ label.clone() }</text>
                        </g>
                    }
                }) }
            </svg>
            { legend(chart.datasets.iter().map(|d| (d.label.clone(), d.color))) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DoughnutViewProps {
    pub doughnut: Doughnut,
}

#[function_component(DoughnutView)]
pub fn doughnut_view(props: &DoughnutViewProps) -> Html {
    let doughnut = &props.doughnut;
    let circumference = 2.0 * PI * RING_RADIUS;
    let fractions = doughnut.fractions();
    let mut offset = 0.0;
    let size = RING_CENTER * 2.0;

    let arcs: Vec<Html> = doughnut
        .slices
        .iter()
        .zip(fractions)
        .filter(|(_, fraction)| *fraction > 0.0)
        .map(|(slice, fraction)| {
            let dash = fraction * circumference;
            let arc = html! {
                <circle
                    cx={RING_CENTER.to_string()} cy={RING_CENTER.to_string()} r={RING_RADIUS.to_string()}
                    fill="none" stroke={slice.color} stroke-width={RING_WIDTH.to_string()}
                    stroke-dasharray={format!("{} {}", dash, circumference - dash)}
                    stroke-dashoffset={(-offset).to_string()}
                    transform={format!("rotate(-90 {} {})", RING_CENTER, RING_CENTER)}
                >
                    <title>{ format!("{}: {}", slice.label, format_rupiah(slice.value)) }</title>
                </circle>
            };
            offset += dash;
            arc
        })
        .collect();

    html! {
        <div class="flex flex-col items-center">
            <svg viewBox={format!("0 0 {} {}", size, size)} class="w-48 h-48">
                <circle cx={RING_CENTER.to_string()} cy={RING_CENTER.to_string()} r={RING_RADIUS.to_string()} fill="none" stroke="#e2e8f0" stroke-width={RING_WIDTH.to_string()} />
                { for arcs }
                <text x={RING_CENTER.to_string()} y={(RING_CENTER + 4.0).to_string()} text-anchor="middle" font-size="12" font-weight="bold" fill="#173E63">{ format_rupiah(doughnut.total()) }</text>
            </svg>
            { legend(doughnut.slices.iter().map(|s| (format!("{} ({})", s.label, format_rupiah(s.value)), s.color))) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_bars_grow_up_from_the_baseline() {
        assert_eq!(bar_extent(50.0, 200.0, 2.0), (100.0, 100.0));
    }

    #[test]
    fn negative_bars_hang_below_the_baseline() {
        assert_eq!(bar_extent(-25.0, 120.0, 2.0), (120.0, 50.0));
    }
}
