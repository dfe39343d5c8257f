use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ui::backdrop::row_position;
use crate::ui::theme::{gradient_at, mix, rgb, CIRCLE_ALPHA, MINT_RGB};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Share of the stage the full-size circle may occupy.
const MAX_FILL: f64 = 0.9;

/// Translucent filled circle centered in its area.
///
/// `ratio` is the displayed diameter over the maximum diameter.
pub struct BreathCircle {
    ratio: f64,
    /// Area the background gradient was painted over, for blending.
    backdrop: Rect,
}

impl BreathCircle {
    pub fn new(ratio: f64, backdrop: Rect) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            backdrop,
        }
    }

    /// Radius in columns for a stage of `area`.
    pub fn radius(&self, area: Rect) -> f64 {
        let span = f64::from(area.width).min(f64::from(area.height) * CELL_ASPECT);
        span * MAX_FILL * self.ratio / 2.0
    }
}

impl Widget for BreathCircle {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let radius = self.radius(area);
        if radius <= 0.0 {
            return;
        }
        let cx = f64::from(area.x) + f64::from(area.width) / 2.0;
        let cy = f64::from(area.y) + f64::from(area.height) / 2.0;

        for y in area.top()..area.bottom() {
            let dy = (f64::from(y) + 0.5 - cy) * CELL_ASPECT;
            let under = gradient_at(row_position(self.backdrop, y));
            let color = rgb(mix(under, MINT_RGB, CIRCLE_ALPHA));
            for x in area.left()..area.right() {
                let dx = f64::from(x) + 0.5 - cx;
                if dx * dx + dy * dy <= radius * radius {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(color);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn painted(buf: &Buffer, area: Rect) -> usize {
        let mut count = 0;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buf.cell((x, y)).is_some_and(|c| c.bg != Color::Reset) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn empty_circle_paints_nothing() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        BreathCircle::new(0.0, area).render(area, &mut buf);
        assert_eq!(painted(&buf, area), 0);
    }

    #[test]
    fn larger_ratio_paints_more_cells() {
        let area = Rect::new(0, 0, 40, 20);
        let mut small = Buffer::empty(area);
        let mut large = Buffer::empty(area);
        BreathCircle::new(0.4, area).render(area, &mut small);
        BreathCircle::new(1.0, area).render(area, &mut large);
        assert!(painted(&small, area) > 0);
        assert!(painted(&large, area) > painted(&small, area));
    }

    #[test]
    fn full_circle_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 20);
        let circle = BreathCircle::new(1.0, area);
        assert!(circle.radius(area) * 2.0 <= f64::from(area.width));
    }
}
