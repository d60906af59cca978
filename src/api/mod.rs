//! Client for the companion task server.
//!
//! kaglo can mirror its local store against a small REST API (JWT bearer
//! auth, JSON bodies). The `Session` trait owns the token lifecycle: cached
//! token file in the data directory, interactive credential prompt, bounded
//! re-authentication retries.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};
use std::fs;
use std::io::Write;

pub mod remote;

pub use remote::RemoteConfig;

/// Maximum number of authentication retry attempts before giving up.
const MAX_RETRY_COUNT: i32 = 3;

/// Token lifecycle management for API clients.
///
/// A session is an explicit object: it is created by `login`, cached on
/// disk, and destroyed by `delete_session`. Nothing else in the application
/// touches authentication state.
#[allow(async_fn_in_trait)]
pub trait Session {
    /// Authenticates against the API and returns a bearer token.
    async fn login(&self) -> Result<String>;

    /// Stores the password for the next `login` call.
    fn set_credentials(&mut self, password: &str);

    /// File name used to cache the session token.
    fn session_file(&self) -> &str;

    /// Prompt text shown when asking for the password.
    fn password_prompt(&self) -> &str;

    fn retry(&self) -> i32;

    fn inc_retry(&mut self);

    /// Retrieves the cached token or authenticates to obtain a new one.
    async fn get_token(&mut self) -> Result<String> {
        let session_path = DataStorage::new().get_path(self.session_file()).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if let Ok(token) = fs::read_to_string(&session_path) {
            return Ok(token);
        }

        loop {
            let password = Password::with_theme(&ColorfulTheme::default())
                .with_prompt(self.password_prompt())
                .interact()?;
            self.set_credentials(&password);

            match self.login().await {
                Ok(token) => {
                    let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(&session_path)?;
                    file.write_all(token.as_bytes())?;
                    return Ok(token);
                }
                Err(_) if self.retry() < MAX_RETRY_COUNT => {
                    self.inc_retry();
                }
                Err(_) => {
                    return Err(msg_error_anyhow!(Message::WrongPassword(MAX_RETRY_COUNT)));
                }
            }
        }
    }

    /// Removes the cached session token, forcing a fresh login next time.
    fn delete_session(&self) -> Result<()> {
        let session_path = DataStorage::new().get_path(self.session_file()).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if session_path.exists() {
            fs::remove_file(session_path)?;
        }
        Ok(())
    }

    /// True when a cached session token exists.
    fn has_session(&self) -> bool {
        DataStorage::new()
            .get_path(self.session_file())
            .map(|path| path.exists())
            .unwrap_or(false)
    }
}
