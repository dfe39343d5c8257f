use ratatui::layout::Rect;

/// Split the screen into the exercise body and a one-line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = area.height.min(1);
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    (body, footer)
}

/// A `width × height` rect centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rows reserved under the stage for the button and its padding.
pub const BUTTON_ROWS: u16 = 4;

/// The stage above the button row.
pub fn stage_rect(body: Rect) -> Rect {
    Rect {
        height: body.height.saturating_sub(BUTTON_ROWS),
        ..body
    }
}

/// A single-row, `width`-wide rect centered horizontally near the bottom.
pub fn button_rect(body: Rect, width: u16) -> Rect {
    let width = width.min(body.width);
    let offset = BUTTON_ROWS.saturating_sub(1).min(body.height);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + body.height.saturating_sub(offset),
        width,
        height: body.height.min(1),
    }
}
