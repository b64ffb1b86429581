//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some
/// terminals. The optimizer runs only from the trigger keys here; no
/// other path recomputes results.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let step = i64::from(app.scenario.input.step_kw);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Left => app.select_prev(),
        KeyCode::Right | KeyCode::Tab => app.select_next(),
        KeyCode::Up => app.adjust(1),
        KeyCode::Down => app.adjust(-1),
        KeyCode::PageUp => app.adjust(step),
        KeyCode::PageDown => app.adjust(-step),
        KeyCode::Char('o') | KeyCode::Enter => app.optimize(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('1') => app.switch_preset("neon"),
        KeyCode::Char('2') => app.switch_preset("aurora"),
        KeyCode::Char('3') => app.switch_preset("classic"),
        KeyCode::Char('4') => app.switch_preset("midnight"),
        _ => {}
    }
}
