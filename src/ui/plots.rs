use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotBounds, Points};

use crate::config::{ChartsConfig, ZoomConfig};
use crate::data::aggregate::{extent, DirectorMean};
use crate::data::Record;
use crate::ui::zoom::{clamp_window, nice_extent, Window};

const BAR_FILL: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
// #10b981 at 0.8 opacity, premultiplied.
const POINT_FILL: Color32 = Color32::from_rgba_premultiplied(13, 148, 103, 204);

pub const NO_DATA_MESSAGE: &str = "No data available for the selected filters.";

fn no_data(ui: &mut egui::Ui) {
    ui.label(NO_DATA_MESSAGE);
}

/// Horizontal bars of mean popularity per director, best first from the
/// top. The x domain is a fixed [0, popularity_max]; out-of-range means
/// overflow rather than clamp.
pub fn bar_plot(ui: &mut egui::Ui, charts: &ChartsConfig, means: &[DirectorMean]) {
    if means.is_empty() {
        no_data(ui);
        return;
    }

    let n = means.len();
    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(rank, m)| {
            // Rank 0 sits at the highest y so the best director is on top.
            Bar::new((n - 1 - rank) as f64, m.mean_popularity)
                .name(m.director.clone())
                .width(0.7)
        })
        .collect();
    let chart = BarChart::new("avg_popularity", bars)
        .horizontal()
        .color(BAR_FILL)
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("{}\nAvg Popularity: {:.1}", bar.name, bar.value)
        }));

    let names: Vec<String> = means.iter().map(|m| m.director.clone()).collect();
    Plot::new("bar_chart")
        .height(charts.chart_height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
        .include_x(charts.popularity_max)
        .include_y(-0.6)
        .include_y(n as f64 - 0.4)
        .x_axis_label("Average Popularity")
        .y_axis_label("Director")
        .y_axis_formatter(move |mark: GridMark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 0.3 && idx >= 0.0 && (idx as usize) < names.len() {
                names[names.len() - 1 - idx as usize].clone()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

/// Zoom/pan state the scatter carries between frames. `None` means the
/// view sits at the base extent of the current filtered data; any filter
/// mutation invalidates it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterState {
    window: Option<Window>,
}

impl ScatterState {
    pub fn invalidate(&mut self) {
        self.window = None;
    }
}

/// One point per filtered record, length on x and popularity on y, over
/// nice-rounded extents of the filtered data. Zoom and pan gestures are
/// the plot library's; the composed window is clamped each frame to
/// scale 1..=max and to the base extent, so marks and axes always share
/// one transform.
pub fn scatter_plot(
    ui: &mut egui::Ui,
    charts: &ChartsConfig,
    zoom: &ZoomConfig,
    records: &[&Record],
    state: &mut ScatterState,
) {
    if records.is_empty() {
        state.invalidate();
        no_data(ui);
        return;
    }

    let (x_lo, x_hi) = extent(records.iter().map(|r| r.length)).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = extent(records.iter().map(|r| r.popularity)).unwrap_or((0.0, 1.0));
    let base = Window::new(nice_extent(x_lo, x_hi), nice_extent(y_lo, y_hi));
    let window = state.window.unwrap_or(base);

    let points: Vec<[f64; 2]> = records.iter().map(|r| [r.length, r.popularity]).collect();
    let films: Vec<(String, f64, f64)> = records
        .iter()
        .map(|r| (r.title.clone(), r.length, r.popularity))
        .collect();

    let response = Plot::new("scatter_plot")
        .height(charts.chart_height)
        .allow_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .x_axis_label("Film Length (minutes)")
        .y_axis_label("Popularity")
        .label_formatter(move |_name, value| {
            // Cursor label shows the nearest film when close enough,
            // otherwise the raw coordinates.
            let span_x = (window.x.1 - window.x.0).max(f64::EPSILON);
            let span_y = (window.y.1 - window.y.0).max(f64::EPSILON);
            let mut best: Option<(f64, usize)> = None;
            for (i, f) in films.iter().enumerate() {
                let dx = (f.1 - value.x) / span_x;
                let dy = (f.2 - value.y) / span_y;
                let d = dx * dx + dy * dy;
                if best.map_or(true, |(bd, _)| d < bd) {
                    best = Some((d, i));
                }
            }
            match best {
                Some((d, i)) if d.sqrt() < 0.03 => {
                    let f = &films[i];
                    format!("{}\n{} min, Pop: {}", f.0, f.1, f.2)
                }
                _ => format!("{:.1} min, Pop: {:.1}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [window.x.0, window.y.0],
                [window.x.1, window.y.1],
            ));
            plot_ui.points(
                Points::new("films", points)
                    .radius(charts.point_radius)
                    .color(POINT_FILL),
            );
        });

    // Gestures applied this frame land in the response transform; clamp
    // the result and carry it into the next frame.
    let bounds = response.transform.bounds();
    let proposed = Window::new(
        (bounds.min()[0], bounds.max()[0]),
        (bounds.min()[1], bounds.max()[1]),
    );
    state.window = Some(clamp_window(proposed, base, zoom.max_scale));
}
