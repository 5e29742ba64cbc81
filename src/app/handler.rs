use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::SubmissionFinished { token, outcome } => {
            if !state.store.complete_submission(token, &outcome) {
                return vec![];
            }
            state.dirty = true;
            vec![Action::ScheduleStatusReset { token }]
        }
        AppEvent::StatusReset { token } => {
            if state.store.reset_status(token) {
                state.dirty = true;
            }
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Keep the spinner moving while a request is out
            if state.store.form_status().is_loading() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    // Global keybindings
    if (ctrl && key.code == KeyCode::Char('c')) || key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }
    if (ctrl && key.code == KeyCode::Char('s')) || (alt && key.code == KeyCode::Enter) {
        return submit(state);
    }

    match key.code {
        KeyCode::Tab => {
            state.focus_next();
            return vec![];
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return vec![];
        }
        _ => {}
    }

    match state.focus.field() {
        Some(_) => handle_field_key(state, key),
        None => handle_send_key(state, key),
    }
}

fn handle_send_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit(state),
        KeyCode::Up | KeyCode::Left => {
            state.focus_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Right => {
            state.focus_next();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_field_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let Some(field) = state.focus.field() else {
        return vec![];
    };
    let multiline = state.focus == Focus::Message;

    match key.code {
        KeyCode::Enter if multiline => {
            edit(state, |b| b.insert_char('\n'));
        }
        KeyCode::Enter => state.focus_next(),
        KeyCode::Up => {
            let moved = multiline && state.edit_field(field, |b| b.move_up());
            if !moved {
                state.focus_prev();
            }
        }
        KeyCode::Down => {
            let moved = multiline && state.edit_field(field, |b| b.move_down());
            if !moved {
                state.focus_next();
            }
        }
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                edit(state, |b| b.delete_word_back());
            } else {
                edit(state, |b| b.delete_back());
            }
        }
        KeyCode::Delete => edit(state, |b| b.delete_forward()),
        KeyCode::Left => state.edit_field(field, |b| b.move_left()),
        KeyCode::Right => state.edit_field(field, |b| b.move_right()),
        KeyCode::Home => state.edit_field(field, |b| b.move_home()),
        KeyCode::End => state.edit_field(field, |b| b.move_end()),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => state.edit_field(field, |b| b.move_home()),
                    'e' => state.edit_field(field, |b| b.move_end()),
                    'w' => edit(state, |b| b.delete_word_back()),
                    'u' => edit(state, |b| b.clear()),
                    _ => {}
                }
            } else {
                edit(state, |b| b.insert_char(c));
            }
        }
        _ => {}
    }
    vec![]
}

/// Change the focused field's value. Any change dismisses a validation hint.
fn edit(state: &mut AppState, f: impl FnOnce(&mut EditBuffer<'_>)) {
    let Some(field) = state.focus.field() else {
        return;
    };
    state.edit_field(field, f);
    state.status_message = None;
}

/// Validate the form and start a submission unless one is already in flight.
fn submit(state: &mut AppState) -> Vec<Action> {
    if state.store.form_status().is_loading() {
        tracing::debug!("submit pressed while sending, ignored");
        return vec![];
    }
    if let Err(e) = state.store.form_data().check_required() {
        state.set_focus(e.field().into());
        state.status_message = Some(e.to_string());
        return vec![];
    }
    state.status_message = None;
    match state.store.begin_submission() {
        Some((token, form)) => vec![Action::Submit { token, form }],
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::contact::error::ContactError;
    use crate::contact::form::{FormData, FormStatus};
    use crate::contact::submit::tests::FakeClient;
    use crate::contact::submit::{spawn_status_reset, spawn_submission, STATUS_RESET_DELAY};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' { KeyCode::Enter } else { KeyCode::Char(c) };
            assert!(handle_event(state, key(code)).is_empty());
        }
    }

    fn filled_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "Jane");
        handle_event(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "jane@x.com");
        handle_event(&mut state, key(KeyCode::Tab));
        type_text(&mut state, "Hi");
        state
    }

    /// Drive one submission through the same steps the event loop takes and
    /// record every status the store passes through.
    async fn run_submission(state: &mut AppState, client: FakeClient) -> Vec<FormStatus> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let client: Arc<FakeClient> = Arc::new(client);
        let mut seen = Vec::new();

        let actions = handle_event(state, ctrl('s'));
        let [Action::Submit { token, form }] = actions.as_slice() else {
            panic!("expected a submit action, got {:?}", actions);
        };
        seen.push(state.store.form_status());
        spawn_submission(client.clone(), *token, form.clone(), tx.clone());

        let finished = rx.recv().await.unwrap();
        let actions = handle_event(state, finished);
        seen.push(state.store.form_status());
        let [Action::ScheduleStatusReset { token }] = actions.as_slice() else {
            panic!("expected a reset action, got {:?}", actions);
        };
        spawn_status_reset(*token, STATUS_RESET_DELAY, tx);

        let reset = rx.recv().await.unwrap();
        handle_event(state, reset);
        seen.push(state.store.form_status());
        seen
    }

    #[test]
    fn test_typing_fills_only_focused_field() {
        let state = filled_state();
        assert_eq!(state.store.form_data(), &FormData::new("Jane", "jane@x.com", "Hi"));
    }

    #[test]
    fn test_editing_email_leaves_others() {
        let mut state = filled_state();
        state.set_focus(Focus::Email);
        handle_event(&mut state, ctrl('u'));
        type_text(&mut state, "j@y.io");
        let data = state.store.form_data();
        assert_eq!(data.name, "Jane");
        assert_eq!(data.email, "j@y.io");
        assert_eq!(data.message, "Hi");
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut state = filled_state();
        type_text(&mut state, "\nthere");
        assert_eq!(state.store.form_data().message, "Hi\nthere");
        assert_eq!(state.focus, Focus::Message);
    }

    #[test]
    fn test_enter_on_single_line_field_moves_focus() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.focus, Focus::Email);
        assert_eq!(state.store.form_data(), &FormData::default());
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "Jane");
        state.set_focus(Focus::Send);

        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert!(actions.is_empty());
        assert_eq!(state.store.form_status(), FormStatus::None);
        assert_eq!(state.focus, Focus::Email);
        assert_eq!(state.status_message.as_deref(), Some("Please fill out the Email field."));

        // Typing dismisses the hint
        type_text(&mut state, "j");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut state = filled_state();
        let first = handle_event(&mut state, ctrl('s'));
        assert!(matches!(first.as_slice(), [Action::Submit { token: 0, .. }]));

        let second = handle_event(&mut state, ctrl('s'));
        assert!(second.is_empty());
        assert_eq!(state.store.form_status(), FormStatus::Loading);
    }

    #[test]
    fn test_escape_quits() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
        assert_eq!(handle_event(&mut state, ctrl('c')), vec![Action::Quit]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_created_response_clears_form_then_status() {
        let mut state = filled_state();
        let start = tokio::time::Instant::now();

        let seen = run_submission(&mut state, FakeClient::status(201)).await;

        assert_eq!(seen, vec![FormStatus::Loading, FormStatus::Success, FormStatus::None]);
        assert_eq!(state.store.form_data(), &FormData::new("", "", ""));
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_server_error_keeps_form() {
        for status in [400, 500] {
            let mut state = filled_state();
            let seen = run_submission(&mut state, FakeClient::status(status)).await;
            assert_eq!(seen, vec![FormStatus::Loading, FormStatus::Error, FormStatus::None]);
            assert_eq!(state.store.form_data(), &FormData::new("Jane", "jane@x.com", "Hi"));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_becomes_error_status() {
        let mut state = filled_state();
        let seen = run_submission(&mut state, FakeClient::unreachable()).await;
        assert_eq!(seen, vec![FormStatus::Loading, FormStatus::Error, FormStatus::None]);
        assert_eq!(state.store.form_data().name, "Jane");
    }

    fn submit_token(state: &mut AppState) -> u64 {
        match handle_event(state, ctrl('s')).as_slice() {
            [Action::Submit { token, .. }] => *token,
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_reset_keeps_newer_error() {
        let mut state = filled_state();
        let first = submit_token(&mut state);
        handle_event(&mut state, AppEvent::SubmissionFinished { token: first, outcome: Ok(()) });

        state.store.set_form_data(FormData::new("Jane", "jane@x.com", "Again"));
        let second = submit_token(&mut state);
        handle_event(
            &mut state,
            AppEvent::SubmissionFinished {
                token: second,
                outcome: Err(ContactError::UnexpectedResponse { status: 500 }),
            },
        );

        // First submission's timer fires while the second's error is showing
        handle_event(&mut state, AppEvent::StatusReset { token: first });
        assert_eq!(state.store.form_status(), FormStatus::Error);

        handle_event(&mut state, AppEvent::StatusReset { token: second });
        assert_eq!(state.store.form_status(), FormStatus::None);
    }
}
