use std::path::{Path, PathBuf};

use crate::config::types::Config;

/// Name of the credential file kept next to the executable.
pub const CREDENTIAL_FILE_NAME: &str = ".env";

/// Returns the path of the credential file.
///
/// The file lives in the directory containing the running executable, so an
/// installed binary and a `cargo run` build each find their own key. Falls
/// back to the current directory if the executable path is unavailable.
pub fn credential_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    credential_path_in(exe_dir)
}

fn credential_path_in(exe_dir: Option<PathBuf>) -> PathBuf {
    exe_dir
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CREDENTIAL_FILE_NAME)
}

impl Config {
    /// Build the runtime configuration.
    ///
    /// Nothing is read from disk here; the credential file is only located.
    pub fn load() -> Self {
        let path = credential_path();
        tracing::debug!(path = %path.display(), "Resolved credential file");
        Config::with_credential_path(path)
    }
}
