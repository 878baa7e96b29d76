use crate::ui::app::App;
use crate::ui::counter::{control_at, CounterControl};
use crate::ui::layout::body_rect;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Activate(CounterControl),
    ActivateFocused,
    FocusNext,
    FocusPrev,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('+' | '=' | 'i' | 'k') | KeyCode::Up => {
            InputAction::Activate(CounterControl::Increment)
        }
        KeyCode::Char('-' | '_' | 'd' | 'j') | KeyCode::Down => {
            InputAction::Activate(CounterControl::Decrement)
        }
        KeyCode::Char('f') => InputAction::Activate(CounterControl::Fetch),
        KeyCode::Tab | KeyCode::Right => InputAction::FocusNext,
        KeyCode::BackTab | KeyCode::Left => InputAction::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::ActivateFocused,
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = map_key(key);
    match action {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::Activate(control) => app.activate(control),
        InputAction::ActivateFocused => app.activate(app.focused()),
        InputAction::FocusNext => app.focus_next(),
        InputAction::FocusPrev => app.focus_prev(),
    }
    action
}

/// Left click on a button activates it. Returns the activated control.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Option<CounterControl> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let control = control_at(body_rect(app.area()), mouse.column, mouse.row)?;
    app.activate(control);
    Some(control)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
