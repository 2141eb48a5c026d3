use egui::{CentralPanel, ComboBox, ScrollArea, TopBottomPanel};
use tracing::debug;

use crate::config::AppConfig;
use crate::data::filter::FilterState;
use crate::data::Dataset;
use crate::ui::plots::{bar_plot, scatter_plot, ScatterState};
use crate::ui::treemap::treemap;
use crate::ui::viewdata::ViewData;

/// One dropdown: the "All" sentinel first, then every observed value of
/// the field across the full dataset.
fn filter_combo(ui: &mut egui::Ui, label: &str, options: &[String], value: &mut Option<String>) {
    let selected = value.as_deref().unwrap_or("All").to_string();
    ComboBox::from_label(label)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, "All");
            for opt in options {
                ui.selectable_value(value, Some(opt.clone()), opt);
            }
        });
}

/// === Main window ===
///
/// Every frame re-derives the filtered subset and the per-view aggregates,
/// then repaints all three views from them. Filter mutations (dropdowns,
/// the two reset buttons, a treemap click) take effect on the same frame's
/// derived data for the next repaint.
pub fn main_window(
    ctx: &egui::Context,
    cfg: &AppConfig,
    dataset: &Dataset,
    filters: &mut FilterState,
    scatter: &mut ScatterState,
) {
    TopBottomPanel::top("top").show(ctx, |ui| {
        ui.heading("Filmscope");
        ui.horizontal(|ui| {
            let before = filters.clone();
            filter_combo(ui, "Subject", &dataset.subjects, &mut filters.subject);
            filter_combo(ui, "Director", &dataset.directors, &mut filters.director);
            filter_combo(ui, "Award", &dataset.awards, &mut filters.awards);
            ui.separator();
            if ui.button("Reset filters").clicked() {
                filters.reset_all();
            }
            if ui.button("Reset genre").clicked() {
                filters.reset_subject();
            }
            if *filters != before {
                debug!(?filters, "filters changed");
                scatter.invalidate();
            }
        });
    });

    CentralPanel::default().show(ctx, |ui| {
        let view = ViewData::derive(dataset, filters, &cfg.charts);

        ScrollArea::vertical().show(ui, |ui| {
            ui.columns(2, |cols| {
                {
                    let ui = &mut cols[0];
                    ui.heading("Average Popularity by Director");
                    bar_plot(ui, &cfg.charts, &view.director_means);
                }
                {
                    let ui = &mut cols[1];
                    ui.heading("Length vs. Popularity");
                    scatter_plot(ui, &cfg.charts, &cfg.zoom, &view.filtered, scatter);
                }
            });

            ui.separator();
            ui.heading("Films by Genre");
            let clicked = treemap(
                ui,
                &cfg.treemap,
                &view.subject_counts,
                filters.subject.as_deref(),
                cfg.charts.chart_height,
            );
            if let Some(subject) = clicked {
                debug!(subject = %subject, "treemap click");
                filters.select_subject(&subject);
                scatter.invalidate();
            }
        });
    });
}
