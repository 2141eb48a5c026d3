use super::Rect;

/// Squarified treemap layout following Bruls et al.: keep adding items to
/// the current strip while the worst aspect ratio improves, then fix the
/// strip and continue in the remaining rectangle.
///
/// `areas` must sum to (approximately) the area of `bounds`; callers scale
/// their weights first. Output rectangles are in input order. Sorting the
/// areas descending beforehand gives the squarest cells, but any order is
/// valid.
pub fn squarify(areas: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut out = Vec::with_capacity(areas.len());
    let (mut x, mut y, mut w, mut h) = (bounds.x, bounds.y, bounds.w, bounds.h);

    let mut idx = 0usize;
    let mut row_start = 0usize;
    let mut row_sum = 0.0;
    let mut row_min = f64::INFINITY;
    let mut row_max = 0.0;

    while idx < areas.len() {
        if w <= 1e-6 || h <= 1e-6 {
            break;
        }

        let area = areas[idx];
        let side = w.min(h);
        let current = if row_sum > 0.0 {
            worst_aspect(row_min, row_max, row_sum, side)
        } else {
            f64::INFINITY
        };
        let next_sum = row_sum + area;
        let next_min = row_min.min(area);
        let next_max = row_max.max(area);
        let next = worst_aspect(next_min, next_max, next_sum, side);

        // Add to the strip while the aspect ratio improves (or it is empty).
        if row_sum <= 0.0 || next <= current {
            row_sum = next_sum;
            row_min = next_min;
            row_max = next_max;
            idx += 1;
            continue;
        }

        layout_row(
            &areas[row_start..idx],
            row_sum,
            &mut x,
            &mut y,
            &mut w,
            &mut h,
            &mut out,
        );
        row_start = idx;
        row_sum = 0.0;
        row_min = f64::INFINITY;
        row_max = 0.0;
    }

    if row_sum > 0.0 && row_start < idx {
        layout_row(
            &areas[row_start..idx],
            row_sum,
            &mut x,
            &mut y,
            &mut w,
            &mut h,
            &mut out,
        );
    }

    out
}

/// Lay one strip along the shortest side of the remaining rectangle and
/// shrink the remainder.
#[allow(clippy::too_many_arguments)]
fn layout_row(
    row: &[f64],
    row_sum: f64,
    x: &mut f64,
    y: &mut f64,
    w: &mut f64,
    h: &mut f64,
    out: &mut Vec<Rect>,
) {
    if row.is_empty() || row_sum <= 0.0 || *w <= 1e-8 || *h <= 1e-8 {
        return;
    }

    let horizontal = *w <= *h;
    let short = if horizontal { *w } else { *h };
    let thickness = row_sum / short;
    if !thickness.is_finite() || thickness <= 0.0 {
        return;
    }

    let mut offset = 0.0;
    for (i, &area) in row.iter().enumerate() {
        let mut length = area / thickness;
        if !length.is_finite() || length <= 0.0 {
            continue;
        }
        // Absorb floating point error into the final cell of the strip.
        if i == row.len() - 1 {
            let remaining = if horizontal {
                (*w - offset).max(0.0)
            } else {
                (*h - offset).max(0.0)
            };
            if remaining.is_finite() && remaining > 0.0 {
                length = remaining;
            }
        }

        out.push(if horizontal {
            Rect::new(*x + offset, *y, length, thickness)
        } else {
            Rect::new(*x, *y + offset, thickness, length)
        });
        offset += length;
    }

    if horizontal {
        *y += thickness;
        *h = (*h - thickness).max(0.0);
    } else {
        *x += thickness;
        *w = (*w - thickness).max(0.0);
    }
}

fn worst_aspect(min_area: f64, max_area: f64, sum: f64, side: f64) -> f64 {
    if sum <= 0.0 || side <= 0.0 || min_area <= 0.0 || max_area <= 0.0 {
        return f64::MAX;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let a = (side_sq * max_area) / sum_sq;
    let b = sum_sq / (side_sq * min_area);
    a.max(b)
}
