//! Runs one completion request off the interactive thread.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::client::CompletionClient;
use super::error::CompletionError;
use super::types::ChatMessage;

/// Terminal result of a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Text of the first completion choice.
    Success(String),
    /// Stringified error from any stage of the call.
    Failure(String),
}

/// Spawns completion calls on a tokio runtime and reports each result once.
///
/// The mediator never touches UI state; it hands the outcome to the sink
/// passed to [`RequestMediator::dispatch`].
#[derive(Clone)]
pub struct RequestMediator {
    runtime: Handle,
}

impl RequestMediator {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Start a request in the background.
    ///
    /// `deliver` is called exactly once, with either the completion text or
    /// the error message, even if the client panics.
    pub fn dispatch<F>(
        &self,
        client: Arc<dyn CompletionClient>,
        messages: Vec<ChatMessage>,
        deliver: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(CompletionOutcome) + Send + 'static,
    {
        self.runtime.spawn(async move {
            let outcome = run(client, messages).await;
            deliver(outcome);
        })
    }
}

/// Perform the call and fold every failure into `CompletionOutcome::Failure`.
pub async fn run(client: Arc<dyn CompletionClient>, messages: Vec<ChatMessage>) -> CompletionOutcome {
    // Separate task so a panicking client surfaces as a JoinError.
    let call = tokio::spawn(async move { client.complete(messages).await });

    match call.await {
        Ok(Ok(text)) => {
            tracing::info!(len = text.len(), "Completion succeeded");
            CompletionOutcome::Success(text)
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "Completion failed");
            CompletionOutcome::Failure(err.to_string())
        }
        Err(join_err) => {
            let err = CompletionError::TaskFailed(join_err.to_string());
            tracing::error!(error = %err, "Completion task aborted");
            CompletionOutcome::Failure(err.to_string())
        }
    }
}
