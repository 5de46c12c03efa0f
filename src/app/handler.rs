use crate::api::ApiCall;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::screen::Mode;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

const PAGE: usize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::ApiResponse { call, result } => {
            state.dirty = true;
            match state.screen_mut(call.screen) {
                Some(screen) => request(screen.handle_response(call.intent, result)),
                None => vec![],
            }
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn request(call: Option<ApiCall>) -> Vec<Action> {
    call.map(Action::Request).into_iter().collect()
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);

    let now = Instant::now();
    for screen in state.screens.iter_mut() {
        if screen.state_mut().expire_notice(now) {
            state.dirty = true;
        }
    }

    // Spinner
    if state.any_loading() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.active_screen().state().mode() {
        Mode::Confirm => handle_confirm_key(state, key),
        Mode::Form => handle_form_key(state, key),
        Mode::Details => handle_details_key(state, key),
        Mode::Table => handle_table_key(state, key),
    }
}

fn handle_table_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Tab => {
            state.next_screen();
            vec![]
        }
        KeyCode::BackTab => {
            state.prev_screen();
            vec![]
        }
        KeyCode::Char(c @ '1'..='9') => {
            state.select_screen(c as usize - '1' as usize);
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.active_screen_mut().state_mut().select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.active_screen_mut().state_mut().select_next();
            vec![]
        }
        KeyCode::PageUp => {
            let s = state.active_screen_mut().state_mut();
            for _ in 0..PAGE {
                s.select_prev();
            }
            vec![]
        }
        KeyCode::PageDown => {
            let s = state.active_screen_mut().state_mut();
            for _ in 0..PAGE {
                s.select_next();
            }
            vec![]
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.active_screen_mut().state_mut().select_first();
            vec![]
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.active_screen_mut().state_mut().select_last();
            vec![]
        }
        KeyCode::Char('a') | KeyCode::Insert => request(state.active_screen_mut().open_create()),
        KeyCode::Char('e') | KeyCode::Enter => match selected_id(state) {
            Some(id) => request(Some(state.active_screen_mut().open_edit(&id))),
            None => vec![],
        },
        KeyCode::Char('v') => match selected_id(state) {
            Some(id) => request(Some(state.active_screen_mut().open_details(&id))),
            None => vec![],
        },
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = selected_id(state) {
                state.active_screen_mut().request_delete(&id);
            }
            vec![]
        }
        KeyCode::Char('r') | KeyCode::F(5) => request(Some(state.active_screen_mut().list())),
        KeyCode::Esc => {
            state.active_screen_mut().state_mut().dismiss_notice();
            vec![]
        }
        _ => vec![],
    }
}

fn selected_id(state: &AppState) -> Option<String> {
    state
        .active_screen()
        .state()
        .selected_row()
        .map(|row| row.id.clone())
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let screen = state.active_screen_mut();
    match key.code {
        KeyCode::Esc => {
            screen.state_mut().close_modal();
            return vec![];
        }
        KeyCode::Enter => return request(screen.save()),
        _ => {}
    }

    let Some(form) = screen.state_mut().form.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left | KeyCode::Right => {
            let forward = key.code == KeyCode::Right;
            if let Some(field) = form.focused_field_mut() {
                if field.is_choice() {
                    field.cycle_choice(forward);
                } else if forward {
                    field.input.move_right();
                } else {
                    field.input.move_left();
                }
            }
        }
        KeyCode::Home => {
            if let Some(field) = form.focused_field_mut() {
                field.input.move_home();
            }
        }
        KeyCode::End => {
            if let Some(field) = form.focused_field_mut() {
                field.input.move_end();
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = form.focused_field_mut().filter(|f| !f.is_choice()) {
                field.input.delete_back();
            }
        }
        KeyCode::Delete => {
            if let Some(field) = form.focused_field_mut().filter(|f| !f.is_choice()) {
                field.input.delete_forward();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = form.focused_field_mut().filter(|f| !f.is_choice()) {
                field.input.clear();
            }
        }
        KeyCode::Char(' ') if form.focused_field().is_some_and(|f| f.is_choice()) => {
            if let Some(field) = form.focused_field_mut() {
                field.cycle_choice(true);
            }
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            form.insert_char(c);
        }
        _ => {}
    }
    vec![]
}

fn handle_details_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        state.active_screen_mut().state_mut().close_modal();
    }
    vec![]
}

fn handle_confirm_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let answer = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
        _ => return vec![],
    };
    request(state.active_screen_mut().resolve_delete(answer))
}

/// A left click outside the open popup closes it.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let mode = state.active_screen().state().mode();
    if !matches!(mode, Mode::Form | Mode::Details) {
        return vec![];
    }
    let popup = layout::modal_area(state.viewport);
    if !popup.contains(Position::new(mouse.column, mouse.row)) {
        state.active_screen_mut().state_mut().close_modal();
    }
    vec![]
}
