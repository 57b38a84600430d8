// The demo picture: dark background, green panel, blue disc inside a red ring,
// and two red diagonals corner to corner. Offsets are in pixels from the edges /
// center, so small canvases simply lose the pieces that no longer fit.

use log::debug;

use crate::color::{BLACK, BLUE, GREEN, RED};
use crate::draw::{fill_circle, fill_line, fill_rect, fill_ring};
use crate::types::FrameBuffer;

const PANEL_INSET: i32 = 150;
const DISC_RADIUS: i32 = 200;
const RING_INNER: i32 = 220;
const RING_OUTER: i32 = 240;

pub fn render_demo(fb: &mut FrameBuffer) {
    let (w, h) = (fb.width() as i32, fb.height() as i32);
    let (cx, cy) = (w / 2, h / 2);

    debug!("scene: background {w}x{h}");
    fill_rect(fb, 0, 0, w - 1, h - 1, BLACK);

    debug!("scene: panel inset {PANEL_INSET}");
    fill_rect(fb, PANEL_INSET, PANEL_INSET, w - PANEL_INSET - 1, h - PANEL_INSET - 1, GREEN);

    debug!("scene: disc r={DISC_RADIUS} ring {RING_INNER}..{RING_OUTER} at ({cx},{cy})");
    fill_circle(fb, cx, cy, DISC_RADIUS, BLUE);
    fill_ring(fb, cx, cy, RING_INNER, RING_OUTER, RED);

    debug!("scene: diagonals");
    fill_line(fb, 0, 0, w - 1, h - 1, RED);
    fill_line(fb, 0, h - 1, w - 1, 0, RED);
}
