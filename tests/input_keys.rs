//! Key routing between the form, notices and the API key prompt.

mod common;

use common::{Harness, ScriptedClient};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formula_assistant::prompt::Mode;
use formula_assistant::ui::credential::CredentialDialogState;
use formula_assistant::ui::input::{handle_key, handle_paste};

fn press(harness: &mut Harness, code: KeyCode) {
    handle_key(&mut harness.app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(harness: &mut Harness, ch: char) {
    handle_key(
        &mut harness.app,
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL),
    );
}

fn type_keys(harness: &mut Harness, text: &str) {
    for ch in text.chars() {
        press(harness, KeyCode::Char(ch));
    }
}

fn no_key_harness() -> Harness {
    Harness::new(Harness::factory_for(ScriptedClient::replying(vec![])), None)
}

#[test]
fn test_typing_and_submit_shortcut() {
    let client = ScriptedClient::replying(vec![Ok("=TODAY()".to_string())]);
    let mut harness = Harness::with_client(client.clone());

    type_keys(&mut harness, "today");
    press(&mut harness, KeyCode::Backspace);
    type_keys(&mut harness, "y's date");
    assert_eq!(harness.app.session().input, "today's date");

    ctrl(&mut harness, 's');
    assert!(harness.app.session().is_busy());
    harness.deliver_next();
    assert_eq!(harness.app.session().output, "=TODAY()");
}

#[test]
fn test_tab_toggles_mode() {
    let mut harness = Harness::with_client(ScriptedClient::replying(vec![]));

    press(&mut harness, KeyCode::Tab);
    assert_eq!(harness.app.session().mode, Mode::ExplainFormula);
    press(&mut harness, KeyCode::BackTab);
    assert_eq!(harness.app.session().mode, Mode::GenerateFormula);
}

#[test]
fn test_notice_swallows_keys_until_dismissed() {
    let mut harness = Harness::with_client(ScriptedClient::replying(vec![]));

    ctrl(&mut harness, 's');
    assert!(harness.app.session().has_notice());

    type_keys(&mut harness, "abc");
    assert!(harness.app.session().input.is_empty());

    press(&mut harness, KeyCode::Enter);
    assert!(!harness.app.session().has_notice());
    type_keys(&mut harness, "abc");
    assert_eq!(harness.app.session().input, "abc");
}

#[test]
fn test_prompt_receives_typing_and_paste() {
    let mut harness = no_key_harness();

    type_keys(&mut harness, "sk-");
    handle_paste(&mut harness.app, "abc\n");
    assert_eq!(harness.app.credential_dialog().input(), Some("sk-abc"));
    assert!(harness.app.session().input.is_empty());

    press(&mut harness, KeyCode::Enter);
    assert!(!harness.app.credential_dialog().is_visible());
    assert!(harness.app.has_credential());
}

#[test]
fn test_escape_then_yes_quits() {
    let mut harness = no_key_harness();

    press(&mut harness, KeyCode::Esc);
    assert!(matches!(
        harness.app.credential_dialog(),
        CredentialDialogState::ConfirmExit { .. }
    ));
    press(&mut harness, KeyCode::Char('y'));
    assert!(harness.app.should_quit());
}

#[test]
fn test_escape_then_no_returns_to_prompt() {
    let mut harness = no_key_harness();

    type_keys(&mut harness, "sk");
    press(&mut harness, KeyCode::Esc);
    press(&mut harness, KeyCode::Char('n'));

    assert_eq!(harness.app.credential_dialog().input(), Some("sk"));
    assert!(!harness.app.should_quit());
}

#[test]
fn test_ctrl_q_quits_anywhere() {
    let mut harness = no_key_harness();
    ctrl(&mut harness, 'q');
    assert!(harness.app.should_quit());
}

#[test]
fn test_enter_inserts_newline_in_form() {
    let mut harness = Harness::with_client(ScriptedClient::replying(vec![]));

    type_keys(&mut harness, "a");
    press(&mut harness, KeyCode::Enter);
    type_keys(&mut harness, "b");
    assert_eq!(harness.app.session().input, "a\nb");

    ctrl(&mut harness, 'l');
    assert!(harness.app.session().input.is_empty());
}
