use crate::ui::app::App;
use crate::ui::backdrop::GradientBackground;
use crate::ui::circle::BreathCircle;
use crate::ui::countdown::CountdownState;
use crate::ui::footer::Footer;
use crate::ui::layout::{button_rect, centered_rect_by_size, layout_regions, stage_rect};
use crate::ui::navigation::Screen;
use crate::ui::theme::{BUTTON_TEXT, INK, LAVENDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::time::Instant;

pub const TITLE: &str = "breathe 🧘";
pub const START_BUTTON: &str = "start exercise";
pub const STOP_BUTTON: &str = "stop exercise";
const FIGURE: &str = "🧘";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);

    frame.render_widget(GradientBackground, area);
    match app.screen() {
        Screen::Launch => draw_launch(frame, body),
        Screen::StartExercise => draw_start(frame, body, app.countdown_state()),
        Screen::Breathing => draw_breathing(frame, body, area, app),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.screen(), footer), footer);
}

fn draw_launch(frame: &mut Frame<'_>, body: Rect) {
    headline(frame, body, TITLE.to_string());
}

fn draw_start(frame: &mut Frame<'_>, body: Rect, countdown: CountdownState) {
    if let Some(remaining) = countdown.remaining() {
        headline(frame, body, format!("ready in {remaining}"));
    } else if countdown == CountdownState::Idle {
        button(frame, body, START_BUTTON);
    }
}

fn draw_breathing(frame: &mut Frame<'_>, body: Rect, screen: Rect, app: &App) {
    let stage = stage_rect(body);
    let fill = app.circle_fill(Instant::now());
    frame.render_widget(BreathCircle::new(fill, screen), stage);

    let ink = Style::default().fg(INK).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(FIGURE, ink)),
        Line::from(""),
        Line::from(Span::styled(app.breath_label().to_string(), ink)),
    ];
    let text_area = centered_rect_by_size(stage, stage.width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);

    button(frame, body, STOP_BUTTON);
}

fn headline(frame: &mut Frame<'_>, body: Rect, text: String) {
    let style = Style::default().fg(LAVENDER).add_modifier(Modifier::BOLD);
    let area = centered_rect_by_size(body, body.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center),
        area,
    );
}

fn button(frame: &mut Frame<'_>, body: Rect, label: &'static str) {
    let text = format!("   {label}   ");
    let area = button_rect(body, text.chars().count() as u16);
    let style = Style::default()
        .fg(BUTTON_TEXT)
        .bg(LAVENDER)
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}
