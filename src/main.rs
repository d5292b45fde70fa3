use anyhow::Context;
use clap::Parser;
use formula_assistant::completion::{
    CompletionClient, CompletionError, OpenAiClient, RequestMediator,
};
use formula_assistant::config::{Config, CredentialStore, SecureString};
use formula_assistant::logging::init_tracing;
use formula_assistant::ui::app::{App, ClientFactory};
use formula_assistant::ui::events::EventHandler;
use formula_assistant::ui::runtime;
use std::sync::Arc;
use std::time::Duration;

/// Excel formula assistant for the terminal.
///
/// Describe a formula to generate it, or paste one to have it explained.
/// The OpenAI API key is read from `.env` next to the executable and asked
/// for on first start.
#[derive(Debug, Parser)]
#[command(name = "formula-assistant", version, about, long_about)]
struct Cli {}

/// Progress indicator step interval.
const TICK_RATE: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = Config::load();
    tracing::info!(
        model = %config.model,
        credential_path = %config.credential_path.display(),
        "Starting formula assistant"
    );

    let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client_config = config.clone();
    let client_factory: ClientFactory = Arc::new(
        move |key: &SecureString| -> Result<Arc<dyn CompletionClient>, CompletionError> {
            let client = OpenAiClient::new(key, &client_config)?;
            Ok(Arc::new(client))
        },
    );

    let credential_store = CredentialStore::new(config.credential_path.clone());
    let stored = credential_store.load();

    let events = EventHandler::new(TICK_RATE);
    let mediator = RequestMediator::new(tokio_runtime.handle().clone());
    let mut app = App::new(credential_store, client_factory, mediator, events.sender());
    app.install_credential(stored);

    runtime::run(app, events, TICK_RATE).context("Terminal UI failed")?;

    tokio_runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
