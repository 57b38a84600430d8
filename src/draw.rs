// Software rasterizers: each one writes solid colors straight into the frame buffer.
// No blending, no anti-aliasing; a pixel either gets the new color or keeps the old one.
// Coordinates may sit far outside the canvas; loops are clipped to the buffer first so
// huge shapes cost no more than the pixels they actually cover.

use crate::color::Color;
use crate::types::FrameBuffer;

/// Clip the inclusive run [lo, hi] to [0, len). None when nothing is left.
#[inline]
fn clip(lo: i64, hi: i64, len: usize) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(len as i64 - 1);
    if lo > hi {
        return None;
    }
    Some((lo as i32, hi as i32))
}

/// Fill rows `top..=bottom` of column `x`, in either order.
/// Visual: one solid vertical stroke, cut off at the canvas edges.
fn fill_column(fb: &mut FrameBuffer, x: i32, a: i64, b: i64, color: Color) {
    let (top, bottom) = if a <= b { (a, b) } else { (b, a) };
    if let Some((top, bottom)) = clip(top, bottom, fb.height()) {
        for y in top..=bottom {
            fb.put(x, y, color);
        }
    }
}

/// Fill the inclusive rectangle [x1, x2] x [y1, y2].
/// Reversed corners (x1 > x2 or y1 > y2) give an empty range, so nothing is drawn.
/// Visual: a solid block; the parts hanging off the canvas are simply missing.
pub fn fill_rect(fb: &mut FrameBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    let Some((x1, x2)) = clip(x1 as i64, x2 as i64, fb.width()) else { return };
    let Some((y1, y2)) = clip(y1 as i64, y2 as i64, fb.height()) else { return };
    for y in y1..=y2 {
        for x in x1..=x2 {
            fb.put(x, y, color);
        }
    }
}

/// Visit every pixel of the half-open box [cx-r, cx+r) x [cy-r, cy+r) that is on the
/// buffer, passing its squared distance to the center.
fn scan_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, mut hit: impl FnMut(i64) -> bool, color: Color) {
    let (w, h) = (fb.width() as i64, fb.height() as i64);
    let (cx, cy, r) = (cx as i64, cy as i64, r as i64);

    for y in (cy - r).max(0)..(cy + r).min(h) {
        for x in (cx - r).max(0)..(cx + r).min(w) {
            let dx = cx - x;
            let dy = cy - y;
            if hit(dx * dx + dy * dy) {
                fb.put(x as i32, y as i32, color);
            }
        }
    }
}

/// Filled disc: pixels strictly closer than `r` to the center.
/// Visual: a round blob; the outermost ring of radius `r` stays untouched.
pub fn fill_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, color: Color) {
    let r2 = (r as i64) * (r as i64);
    scan_disc(fb, cx, cy, r, |d2| d2 < r2, color);
}

/// Annulus between two radii, both edges excluded.
/// Visual: a donut; whatever was drawn in the hole shows through.
pub fn fill_ring(fb: &mut FrameBuffer, cx: i32, cy: i32, r_inner: i32, r_outer: i32, color: Color) {
    let inner2 = (r_inner as i64) * (r_inner as i64);
    let outer2 = (r_outer as i64) * (r_outer as i64);
    scan_disc(fb, cx, cy, r_outer, |d2| inner2 < d2 && d2 < outer2, color);
}

/// Draw a 1-pixel line from (x1,y1) to (x2,y2).
///
/// Walks columns left to right and, per column, fills the vertical run between where
/// the line sits at `x` and at `x + 1` (both truncated). Steep lines therefore stay
/// connected: neighbouring columns share the row where one run ends and the next begins.
/// Visual: a thin unbroken stroke at any angle, no dotted diagonals.
pub fn fill_line(fb: &mut FrameBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    if x1 == x2 {
        if x1 >= 0 && (x1 as usize) < fb.width() {
            fill_column(fb, x1, y1 as i64, y2 as i64, color);
        }
        return;
    }

    // Always walk left to right.
    let (x1, y1, x2, y2) = if x1 > x2 { (x2, y2, x1, y1) } else { (x1, y1, x2, y2) };
    // Differences of two i32s need more than 32 bits.
    let slope = (y2 as f64 - y1 as f64) / (x2 as f64 - x1 as f64);
    let line_y = |x: i64| (y1 as f64 + slope * (x - x1 as i64) as f64) as i64; // `as` truncates (and saturates)

    let Some((first, last)) = clip(x1 as i64, x2 as i64, fb.width()) else { return };
    for x in first..=last {
        let x64 = x as i64;
        fill_column(fb, x, line_y(x64), line_y(x64 + 1), color);
    }
}
