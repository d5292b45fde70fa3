use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Cleanup = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back the way it was, exactly once: on drop or on a
/// panic of the thread that set it up, whichever comes first.
///
/// Panics on other threads (request tasks on the tokio runtime) are caught
/// and reported by their owners; they leave the terminal alone.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Cleanup>>>,
}

impl TerminalGuard {
    fn new(cleanup: Cleanup) -> Self {
        let guard = Self {
            cleanup: Arc::new(Mutex::new(Some(cleanup))),
        };
        guard.install_panic_hook(thread::current().id());
        guard
    }

    fn install_panic_hook(&self, owner: ThreadId) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if restore_on_panic(&cleanup, owner) {
                default_hook(info);
            } else {
                // Stderr would land on top of the alternate screen.
                tracing::error!(panic = %info, "Background thread panicked");
            }
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.cleanup);
    }
}

/// Restore the terminal if the panicking thread is `owner`.
/// Returns whether it was.
fn restore_on_panic(slot: &Mutex<Option<Cleanup>>, owner: ThreadId) -> bool {
    if thread::current().id() != owner {
        return false;
    }
    run_once(slot);
    true
}

fn run_once(slot: &Mutex<Option<Cleanup>>) {
    let cleanup = slot.lock().ok().and_then(|mut slot| slot.take());
    if let Some(cleanup) = cleanup {
        cleanup();
    }
}

/// Raw mode, alternate screen, bracketed paste.
pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let guard = TerminalGuard::new(Box::new(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
        tracing::debug!("Terminal restored");
    }));

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn cleanup_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let slot: Mutex<Option<Cleanup>> = Mutex::new(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        run_once(&slot);
        run_once(&slot);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    fn counting_slot(calls: &Arc<AtomicUsize>) -> Arc<Mutex<Option<Cleanup>>> {
        let counter = Arc::clone(calls);
        Arc::new(Mutex::new(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))))
    }

    #[test]
    fn worker_panic_leaves_terminal_alone() {
        let calls = Arc::new(AtomicUsize::new(0));
        let slot = counting_slot(&calls);
        let owner = thread::current().id();

        let worker_slot = Arc::clone(&slot);
        let restored = thread::spawn(move || restore_on_panic(&worker_slot, owner))
            .join()
            .unwrap();

        assert!(!restored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(slot.lock().unwrap().is_some());
    }

    #[test]
    fn owner_panic_restores_terminal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let slot = counting_slot(&calls);

        assert!(restore_on_panic(&slot, thread::current().id()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
