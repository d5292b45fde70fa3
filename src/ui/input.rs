use crate::ui::app::App;
use crate::ui::credential::CredentialDialogState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: i32 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Notices are modal until acknowledged.
    if app.session().has_notice() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    match app.credential_dialog() {
        CredentialDialogState::Prompting { .. } => return handle_prompt_key(app, key),
        CredentialDialogState::ConfirmExit { .. } => return handle_confirm_key(app, key),
        CredentialDialogState::Hidden => {}
    }

    handle_form_key(app, key);
}

/// Bracketed paste goes wherever typing would.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.session().has_notice()
        || matches!(app.credential_dialog(), CredentialDialogState::ConfirmExit { .. })
    {
        return;
    }
    app.insert_text(text);
}

fn handle_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_credential(),
        KeyCode::Esc => app.cancel_credential(),
        KeyCode::Backspace => app.delete_backward(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.insert_char(ch)
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_exit(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.decline_exit(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = key.code {
            match ch.to_ascii_lowercase() {
                's' => {
                    app.submit();
                }
                'r' => app.random_task(),
                'n' => app.reset(),
                'l' => app.clear_input(),
                'k' => app.clear_output(),
                'y' => app.copy_input(),
                'o' => app.copy_output(),
                _ => {}
            }
        }
        return;
    }

    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::F(5) => {
            app.submit();
        }
        KeyCode::Tab | KeyCode::BackTab => app.toggle_mode(),
        KeyCode::PageUp => app.scroll_output(-PAGE),
        KeyCode::PageDown => app.scroll_output(PAGE),
        KeyCode::Up if alt => app.scroll_output(-1),
        KeyCode::Down if alt => app.scroll_output(1),
        KeyCode::Enter => app.insert_char('\n'),
        KeyCode::Backspace => app.delete_backward(),
        KeyCode::Char(ch) if !alt => app.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
