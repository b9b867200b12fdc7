use crate::core::config::ShapeKind;
use crate::core::grid::GridGeometry;
use std::collections::HashSet;

/// Rasterizes `kind` inside the box spanned by `start` and `end`. Outline
/// mode keeps the cells of the filled shape that touch the outside through
/// one of their four sides.
pub fn compute_shape_cells(grid: GridGeometry, start: usize, end: usize, kind: ShapeKind, filled: bool) -> Vec<usize> {
    if !grid.contains_index(start) || !grid.contains_index(end) {
        return Vec::new();
    }
    let a = grid.index_to_coords(start);
    let b = grid.index_to_coords(end);
    let points = match kind {
        ShapeKind::Square => square_points(a, b),
        ShapeKind::Circle => circle_points(a, b),
        ShapeKind::Triangle => triangle_points(a, b),
    };
    let points = if filled { points } else { outline(&points) };

    let mut cells: Vec<usize> = points.iter().filter_map(|&(x, y)| grid.checked_index(x, y)).collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}

fn bounds(a: (i32, i32), b: (i32, i32)) -> (i32, i32, i32, i32) {
    (a.0.min(b.0), a.1.min(b.1), a.0.max(b.0), a.1.max(b.1))
}

fn square_points(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (x1, y1, x2, y2) = bounds(a, b);
    (y1..=y2).flat_map(|y| (x1..=x2).map(move |x| (x, y))).collect()
}

/// Circle centered on the box, radius from the larger box side.
fn circle_points(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (x1, y1, x2, y2) = bounds(a, b);
    let cx = (x1 + x2) as f64 / 2.0;
    let cy = (y1 + y2) as f64 / 2.0;
    let r = ((x2 - x1 + 1).max(y2 - y1 + 1)) as f64 / 2.0;
    let r2 = r * r;

    let mut points = Vec::new();
    for y in (cy - r).floor() as i32..=(cy + r).ceil() as i32 {
        for x in (cx - r).floor() as i32..=(cx + r).ceil() as i32 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r2 {
                points.push((x, y));
            }
        }
    }
    points
}

/// Apex on the row the drag started from; base on the row it ended on.
fn triangle_points(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (x1, y1, x2, y2) = bounds(a, b);
    let apex_on_top = a.1 <= b.1;
    let rows = y2 - y1 + 1;
    let cx = (x1 + x2) as f64 / 2.0;
    let max_half = (x2 - x1) as f64 / 2.0;

    let mut points = Vec::new();
    for row in 0..rows {
        let t = if rows == 1 { 1.0 } else { row as f64 / (rows - 1) as f64 };
        let half = t * max_half;
        let left = (cx - half).round() as i32;
        let right = (cx + half).round() as i32;
        let y = if apex_on_top { y1 + row } else { y2 - row };
        points.extend((left.max(x1)..=right.min(x2)).map(|x| (x, y)));
    }
    points
}

fn outline(points: &[(i32, i32)]) -> Vec<(i32, i32)> {
    let set: HashSet<(i32, i32)> = points.iter().copied().collect();
    points
        .iter()
        .copied()
        .filter(|&(x, y)| {
            [(1, 0), (-1, 0), (0, 1), (0, -1)]
                .iter()
                .any(|(dx, dy)| !set.contains(&(x + dx, y + dy)))
        })
        .collect()
}
