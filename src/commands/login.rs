use crate::api::remote::Remote;
use crate::api::Session;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;

/// Establishes a session with the sync server.
///
/// Prompts for the account password, exchanges it for a bearer token and
/// caches the token in the data directory. A later `logout` removes it.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let remote_config = match config.remote {
        Some(remote_config) => remote_config,
        None => {
            msg_error!(Message::RemoteNotConfigured);
            return Ok(());
        }
    };

    let mut remote = Remote::new(&remote_config);
    if remote.has_session() {
        msg_info!(Message::LoggedIn(remote_config.email));
        return Ok(());
    }

    match remote.get_token().await {
        Ok(_) => {
            msg_success!(Message::LoggedIn(remote_config.email));
            Ok(())
        }
        Err(_) => {
            msg_error!(Message::LoginFailed);
            Ok(())
        }
    }
}
