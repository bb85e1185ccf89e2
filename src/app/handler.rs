use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    let clock = state.tick_count;
    state.page.update_props(|props| props.clock = clock);
    state.dirty = true;
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![Action::Quit];
    }

    state.status_message = None;
    match key.code {
        KeyCode::Tab => {
            state.page.focus_next();
            vec![]
        }
        KeyCode::BackTab => {
            state.page.focus_prev();
            vec![]
        }
        KeyCode::Esc => {
            state.page.blur();
            vec![]
        }
        KeyCode::F(4) => {
            let loading = !state.page.props().loading;
            state.page.update_props(|props| props.loading = loading);
            state.config.demo.loading = loading;
            vec![]
        }
        KeyCode::F(5) => vec![Action::Remount],
        KeyCode::F(6) => vec![Action::SaveConfig],
        _ => {
            if !state.page.key(key) {
                state.set_status("No field focused. Press Tab to focus one.");
            }
            vec![]
        }
    }
}
