use egui::{Align2, Color32, FontId, RichText, Sense, Stroke, StrokeKind, Vec2};

use crate::config::TreemapConfig;
use crate::data::aggregate::SubjectCount;
use crate::layout::squarify::squarify;
use crate::layout::Rect;

/// Fixed qualitative palette (Tableau 10). Colors are keyed by the
/// subject's position in the name-sorted subject list, so a subject keeps
/// its color no matter how the filters or the layout order change.
const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x4e, 0x79, 0xa7),
    Color32::from_rgb(0xf2, 0x8e, 0x2c),
    Color32::from_rgb(0xe1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xb7, 0xb2),
    Color32::from_rgb(0x59, 0xa1, 0x4f),
    Color32::from_rgb(0xed, 0xc9, 0x48),
    Color32::from_rgb(0xb0, 0x7a, 0xa1),
    Color32::from_rgb(0xff, 0x9d, 0xa7),
    Color32::from_rgb(0x9c, 0x75, 0x5f),
    Color32::from_rgb(0xba, 0xb0, 0xab),
];

pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Space-filling overview of film counts by subject. Counts are always
/// over the full dataset; only the selection outline reacts to filters.
/// Returns the clicked subject, if any; the caller writes it back into
/// the filter state.
pub fn treemap(
    ui: &mut egui::Ui,
    cfg: &TreemapConfig,
    counts: &[SubjectCount],
    selected: Option<&str>,
    height: f32,
) -> Option<String> {
    if counts.is_empty() {
        ui.label(super::plots::NO_DATA_MESSAGE);
        return None;
    }

    let size = Vec2::new(ui.available_width(), height);
    let (canvas, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter_at(canvas);

    // Largest-first gives the squarest cells; `counts` stays name-sorted
    // so color assignment is unaffected.
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by(|&a, &b| counts[b].films.cmp(&counts[a].films));

    // Every entry has at least one film, so the total is never zero here.
    let total: usize = counts.iter().map(|c| c.films).sum();
    let canvas_area = (size.x as f64) * (size.y as f64);
    let areas: Vec<f64> = order
        .iter()
        .map(|&i| counts[i].films as f64 / total as f64 * canvas_area)
        .collect();
    let layout = squarify(&areas, Rect::new(0.0, 0.0, size.x as f64, size.y as f64));

    let half_pad = (cfg.padding * 0.5) as f64;
    let mut clicked = None;
    let mut hovered: Option<usize> = None;
    let hover_pos = response.hover_pos();
    let click_pos = response
        .clicked()
        .then(|| response.interact_pointer_pos())
        .flatten();

    for (&subject_idx, cell) in order.iter().zip(&layout) {
        let cell = cell.inset(half_pad);
        let rect = egui::Rect::from_min_size(
            canvas.min + Vec2::new(cell.x as f32, cell.y as f32),
            Vec2::new(cell.w as f32, cell.h as f32),
        );
        let entry = &counts[subject_idx];

        painter.rect_filled(rect, 0.0, palette_color(subject_idx));
        if selected == Some(entry.subject.as_str()) {
            painter.rect_stroke(
                rect,
                0.0,
                Stroke::new(2.0, Color32::BLACK),
                StrokeKind::Inside,
            );
        }
        if rect.width() >= cfg.label_min_side && rect.height() >= cfg.label_min_side {
            painter.text(
                rect.min + Vec2::new(4.0, 4.0),
                Align2::LEFT_TOP,
                &entry.subject,
                FontId::proportional(11.0),
                Color32::WHITE,
            );
        }

        if hover_pos.is_some_and(|p| rect.contains(p)) {
            hovered = Some(subject_idx);
        }
        if click_pos.is_some_and(|p| rect.contains(p)) {
            clicked = Some(entry.subject.clone());
        }
    }

    if let Some(idx) = hovered {
        let entry = &counts[idx];
        response.on_hover_ui_at_pointer(|ui| {
            ui.label(RichText::new(&entry.subject).strong());
            ui.label(format!("{} films", entry.films));
        });
    }

    clicked
}
