use crate::ui::app::App;
use crate::ui::navigation::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_plain_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Launch => {}
        Screen::StartExercise => {
            if is_activate(key) {
                app.start_countdown();
            }
        }
        Screen::Breathing => {
            if is_activate(key) || key.code == KeyCode::Esc {
                app.stop_breathing();
            }
        }
    }
}

/// Keys that press the on-screen button.
fn is_activate(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) || is_plain_char(key, 's')
}

fn is_plain_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && !key.modifiers.contains(KeyModifiers::CONTROL)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn activate_keys() {
        assert!(is_activate(key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(is_activate(key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(is_activate(key(KeyCode::Char('S'), KeyModifiers::SHIFT)));
        assert!(!is_activate(key(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!is_activate(key(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_c_is_not_plain_c() {
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_ctrl_char(ctrl_c, 'c'));
        assert!(!is_plain_char(ctrl_c, 'c'));
    }
}
