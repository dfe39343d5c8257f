use crate::ui::navigation::Screen;
use crate::ui::theme::FOOTER_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(screen: Screen) -> &'static str {
        match screen {
            Screen::Launch => " q: Quit",
            Screen::StartExercise => " Enter/Space: Start │ q: Quit",
            Screen::Breathing => " Enter/Esc: Stop │ q: Quit",
        }
    }

    pub fn widget(&self, screen: Screen, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(screen);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the separator is multi-byte.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(FOOTER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left)
    }
}
