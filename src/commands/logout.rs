use crate::api::remote::{Remote, RemoteConfig};
use crate::api::Session;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success};
use anyhow::Result;

/// Ends the sync server session by removing the cached token.
pub fn cmd() -> Result<()> {
    // Session removal works even when the server config was deleted.
    let remote_config = Config::read()?.remote.unwrap_or(RemoteConfig {
        email: String::new(),
        api_url: String::new(),
    });

    let remote = Remote::new(&remote_config);
    if !remote.has_session() {
        msg_info!(Message::NotLoggedIn);
        return Ok(());
    }

    remote.delete_session()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
