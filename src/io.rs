use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::button::Button;
use crate::events::Event;

/// Converts a crossterm event into an application event. Positions stay in terminal coordinates.
///
/// A left click on `button` begins the simulation instead of painting under it.
pub fn convert_event(event: CrossTermEvent, button: &Button) -> Option<Event> {
    match event {
        CrossTermEvent::Key(key_event) => convert_key(key_event),
        CrossTermEvent::Mouse(mouse_event) => convert_mouse(mouse_event, button),
        CrossTermEvent::Resize(cols, rows) => Some(Event::Resize { cols, rows }),
        _ => None,
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    // Some platforms also report releases
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event {
        KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Event::Exit),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => Some(Event::Begin),
        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Some(Event::TogglePause),
        KeyEvent {
            code: KeyCode::Char('r'),
            ..
        } => Some(Event::Reset),
        _ => None,
    }
}

fn convert_mouse(mouse_event: MouseEvent, button: &Button) -> Option<Event> {
    let MouseEvent {
        kind, column, row, ..
    } = mouse_event;

    match kind {
        MouseEventKind::Down(MouseButton::Left) if button.contains(column, row) => {
            Some(Event::Begin)
        }
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Event::Paint { col: column, row })
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(Event::Erase { col: column, row })
        }
        _ => None,
    }
}
