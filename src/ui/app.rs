use crate::clipboard::{system_clipboard, ClipboardSink};
use crate::completion::{CompletionClient, CompletionError, CompletionOutcome, RequestMediator};
use crate::config::{CredentialError, CredentialStatus, CredentialStore, SecureString};
use crate::prompt::{build_messages, Mode};
use crate::ui::credential::{CredentialDialogState, CredentialIntent, CredentialReducer};
use crate::ui::events::AppEvent;
use crate::ui::layout::output_viewport;
use crate::ui::markdown::markdown_to_lines;
use crate::ui::mvi::Reducer;
use crate::ui::session::{
    random_task, validate_submission, Notice, SessionIntent, SessionReducer, SessionState,
    ValidationError,
};
use ratatui::widgets::{Paragraph, Wrap};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Builds an authorized completion client from an API key.
pub type ClientFactory =
    Arc<dyn Fn(&SecureString) -> Result<Arc<dyn CompletionClient>, CompletionError> + Send + Sync>;

/// Opens the clipboard on first use.
pub type ClipboardProvider = Arc<dyn Fn() -> Result<Box<dyn ClipboardSink>, String> + Send + Sync>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session controller: owns all UI state, the credential and the client.
///
/// Every method runs on the interactive thread. Requests are handed to the
/// [`RequestMediator`], whose outcome comes back as [`AppEvent::Completion`].
pub struct App {
    should_quit: bool,
    /// Form state (MVI pattern).
    session: SessionState,
    /// API key prompt (MVI pattern).
    credential_dialog: CredentialDialogState,
    credential: Option<SecureString>,
    client: Option<Arc<dyn CompletionClient>>,
    client_factory: ClientFactory,
    credential_store: CredentialStore,
    mediator: RequestMediator,
    events: Sender<AppEvent>,
    clipboard: Option<Box<dyn ClipboardSink>>,
    clipboard_provider: ClipboardProvider,
    /// Wrapped text area of the output block, `(width, height)`; zero until
    /// the terminal size is known.
    output_viewport: (u16, u16),
}

impl App {
    pub fn new(
        credential_store: CredentialStore,
        client_factory: ClientFactory,
        mediator: RequestMediator,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            session: SessionState::default(),
            credential_dialog: CredentialDialogState::default(),
            credential: None,
            client: None,
            client_factory,
            credential_store,
            mediator,
            events,
            clipboard: None,
            clipboard_provider: Arc::new(system_clipboard),
            output_viewport: (0, 0),
        }
    }

    pub fn with_clipboard_provider(mut self, provider: ClipboardProvider) -> Self {
        self.clipboard_provider = provider;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn credential_dialog(&self) -> &CredentialDialogState {
        &self.credential_dialog
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some() && self.client.is_some()
    }

    // ========================================================================
    // Credential lifecycle
    // ========================================================================

    /// Adopt the result of reading the credential file at startup.
    ///
    /// A missing key, an unreadable file, or a key the client refuses all
    /// open the prompt instead of failing.
    pub fn install_credential(&mut self, status: Result<CredentialStatus, CredentialError>) {
        match status {
            Ok(CredentialStatus::Configured(key)) => match (self.client_factory)(&key) {
                Ok(client) => {
                    tracing::info!("Using stored API key");
                    self.credential = Some(key);
                    self.client = Some(client);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Stored API key rejected");
                    self.open_credential_prompt(Some(format!(
                        "The stored API key was rejected: {}",
                        err
                    )));
                }
            },
            Ok(CredentialStatus::Unconfigured { reason }) => {
                tracing::info!(reason = %reason, "No API key stored");
                self.open_credential_prompt(None);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Could not read credential file");
                self.open_credential_prompt(Some(err.to_string()));
            }
        }
    }

    fn open_credential_prompt(&mut self, error: Option<String>) {
        self.dispatch_credential(CredentialIntent::Open { error });
    }

    /// Enter in the API key prompt.
    pub fn submit_credential(&mut self) {
        let CredentialDialogState::Prompting { input, .. } = &self.credential_dialog else {
            return;
        };
        let key = input.trim().to_string();
        if key.is_empty() {
            self.dispatch_credential(CredentialIntent::Rejected {
                message: CredentialError::Empty.to_string(),
            });
            return;
        }

        let secret = SecureString::new(key);
        let client = match (self.client_factory)(&secret) {
            Ok(client) => client,
            Err(err) => {
                self.dispatch_credential(CredentialIntent::Rejected {
                    message: err.to_string(),
                });
                return;
            }
        };

        if let Err(err) = self.credential_store.save(secret.expose()) {
            tracing::warn!(error = %err, "API key kept for this session only");
            self.dispatch_session(SessionIntent::SetStatus(format!(
                "API key not saved: {}",
                err
            )));
        }

        self.credential = Some(secret);
        self.client = Some(client);
        self.dispatch_credential(CredentialIntent::Accepted);
    }

    /// Esc in the prompt or in the exit question.
    pub fn cancel_credential(&mut self) {
        self.dispatch_credential(CredentialIntent::Cancel);
    }

    /// "Yes" to the exit question.
    pub fn confirm_exit(&mut self) {
        if matches!(self.credential_dialog, CredentialDialogState::ConfirmExit { .. }) {
            tracing::info!("Exiting without an API key");
            self.request_quit();
        }
    }

    /// "No" to the exit question.
    pub fn decline_exit(&mut self) {
        self.dispatch_credential(CredentialIntent::DeclineExit);
    }

    // ========================================================================
    // Text entry
    // ========================================================================

    pub fn insert_char(&mut self, ch: char) {
        if self.credential_dialog.is_visible() {
            self.dispatch_credential(CredentialIntent::InsertChar(ch));
        } else {
            self.dispatch_session(SessionIntent::InsertChar(ch));
        }
    }

    pub fn insert_text(&mut self, text: &str) {
        if self.credential_dialog.is_visible() {
            self.dispatch_credential(CredentialIntent::InsertText(text.to_string()));
        } else {
            self.dispatch_session(SessionIntent::InsertText(text.to_string()));
        }
    }

    pub fn delete_backward(&mut self) {
        if self.credential_dialog.is_visible() {
            self.dispatch_credential(CredentialIntent::DeleteBackward);
        } else {
            self.dispatch_session(SessionIntent::DeleteBackward);
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.dispatch_session(SessionIntent::SelectMode(mode));
    }

    pub fn toggle_mode(&mut self) {
        self.dispatch_session(SessionIntent::ToggleMode);
    }

    pub fn clear_input(&mut self) {
        self.dispatch_session(SessionIntent::ClearInput);
    }

    pub fn clear_output(&mut self) {
        self.dispatch_session(SessionIntent::ClearOutput);
    }

    // ========================================================================
    // Request cycle
    // ========================================================================

    /// Idle → Busy. Returns whether a request was dispatched.
    pub fn submit(&mut self) -> bool {
        if !self.session.can_submit() {
            if let Some(pending) = self.session.in_flight.filter(|_| !self.session.is_busy()) {
                tracing::debug!(pending, "Submission refused; earlier request still running");
                self.dispatch_session(SessionIntent::SetStatus(
                    "Previous request is still finishing".to_string(),
                ));
            }
            return false;
        }

        let input = match validate_submission(&self.session, self.has_credential()) {
            Ok(input) => input,
            Err(err) => {
                tracing::debug!(reason = %err, "Submission refused");
                self.dispatch_session(SessionIntent::ShowNotice(Notice::warning(err.to_string())));
                if err == ValidationError::MissingCredential {
                    self.open_credential_prompt(None);
                }
                return false;
            }
        };

        let Some(client) = self.client.clone() else {
            return false;
        };

        let mode = self.session.mode;
        let messages = build_messages(mode, &input);
        self.dispatch_session(SessionIntent::Submitted);

        let generation = self.session.generation;
        let events = self.events.clone();
        tracing::info!(?mode, generation, "Dispatching request");
        self.mediator.dispatch(client, messages, move |outcome| {
            if events
                .send(AppEvent::Completion {
                    generation,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(generation, "UI gone before completion arrived");
            }
        });
        true
    }

    /// Busy → Idle.
    ///
    /// Every outcome releases the outstanding request; only the awaited
    /// generation touches the form.
    pub fn on_completion(&mut self, generation: u64, outcome: CompletionOutcome) {
        if !self.session.is_busy() || self.session.generation != generation {
            tracing::debug!(
                generation,
                current = self.session.generation,
                "Discarding stale completion"
            );
        }

        let intent = match outcome {
            CompletionOutcome::Success(text) => SessionIntent::Completed { generation, text },
            CompletionOutcome::Failure(message) => SessionIntent::Failed {
                generation,
                message,
            },
        };
        self.dispatch_session(intent);
    }

    pub fn on_tick(&mut self) {
        if self.session.is_busy() {
            self.dispatch_session(SessionIntent::Tick);
        }
    }

    // ========================================================================
    // Utility actions
    // ========================================================================

    pub fn random_task(&mut self) {
        let task = random_task(&mut rand::thread_rng());
        self.dispatch_session(SessionIntent::RandomTask {
            task: task.to_string(),
        });
    }

    /// "Start Fresh".
    pub fn reset(&mut self) {
        if self.session.is_busy() {
            tracing::info!(
                generation = self.session.generation,
                "Reset while busy; pending result will be ignored"
            );
        }
        self.dispatch_session(SessionIntent::Reset);
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch_session(SessionIntent::DismissNotice);
    }

    /// The terminal was resized; keep the output scroll within range.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.output_viewport = output_viewport(cols, rows);
        self.scroll_output(0);
    }

    pub fn scroll_output(&mut self, delta: i32) {
        let max = self.max_output_scroll();
        let target = i64::from(self.session.output_scroll) + i64::from(delta);
        let clamped = target.clamp(0, max as i64);
        let step = clamped - i64::from(self.session.output_scroll);
        self.dispatch_session(SessionIntent::ScrollOutput(step as i32));
    }

    /// Scroll offset that puts the last wrapped output line at the bottom.
    fn max_output_scroll(&self) -> usize {
        let lines = markdown_to_lines(&self.session.output);
        let (width, height) = self.output_viewport;
        if width == 0 {
            return lines.len().saturating_sub(1);
        }
        let wrapped = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .line_count(width);
        wrapped.saturating_sub(usize::from(height))
    }

    pub fn copy_input(&mut self) {
        let text = self.session.input.clone();
        self.copy_to_clipboard("input", &text);
    }

    pub fn copy_output(&mut self) {
        let text = self.session.output.clone();
        self.copy_to_clipboard("output", &text);
    }

    fn copy_to_clipboard(&mut self, what: &str, text: &str) {
        if self.clipboard.is_none() {
            match (self.clipboard_provider)() {
                Ok(clipboard) => self.clipboard = Some(clipboard),
                Err(err) => {
                    tracing::warn!(error = %err, "Clipboard unavailable");
                    self.dispatch_session(SessionIntent::SetStatus(err));
                    return;
                }
            }
        }

        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text),
            None => return,
        };

        let status = match result {
            Ok(()) => format!("Copied {} to clipboard", what),
            Err(err) => {
                tracing::warn!(error = %err, "Copy failed");
                err
            }
        };
        self.dispatch_session(SessionIntent::SetStatus(status));
    }

    // ========================================================================
    // MVI dispatch
    // ========================================================================

    fn dispatch_session(&mut self, intent: SessionIntent) {
        dispatch_mvi!(self, session, SessionReducer, intent);
    }

    fn dispatch_credential(&mut self, intent: CredentialIntent) {
        dispatch_mvi!(self, credential_dialog, CredentialReducer, intent);
    }
}
