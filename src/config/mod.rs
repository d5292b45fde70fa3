pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{CredentialError, CredentialStatus, CredentialStore, SecureString};
pub use loader::credential_path;
pub use types::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL};
