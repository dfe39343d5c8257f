use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::ui::theme::{gradient_at, rgb};

/// Paints the vertical background gradient; leaves symbols untouched.
pub struct GradientBackground;

/// Vertical position of `row` within `area`, in `[0, 1]`.
pub fn row_position(area: Rect, row: u16) -> f64 {
    if area.height <= 1 {
        return 0.0;
    }
    f64::from(row.saturating_sub(area.y)) / f64::from(area.height - 1)
}

impl Widget for GradientBackground {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            let color = rgb(gradient_at(row_position(area, y)));
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_bg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::GRADIENT_STOPS;

    #[test]
    fn paints_top_and_bottom_stops() {
        let area = Rect::new(0, 0, 4, 5);
        let mut buf = Buffer::empty(area);
        GradientBackground.render(area, &mut buf);

        let top = buf.cell((0, 0)).map(|c| c.bg);
        let bottom = buf.cell((3, 4)).map(|c| c.bg);
        assert_eq!(top, Some(rgb(GRADIENT_STOPS[0].1)));
        assert_eq!(bottom, Some(rgb((0xff, 0xff, 0xff))));
    }
}
