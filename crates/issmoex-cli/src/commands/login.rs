use issmoex_core::IssClient;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: &Cli, client: &IssClient) -> Result<Value, CliError> {
    let (username, password) = credentials(cli).ok_or(CliError::MissingCredentials)?;
    login(client, username, password).await?;
    Ok(json!({ "authenticated": true, "username": username }))
}

/// Logs in before AlgoPack requests when credentials are configured.
///
/// Without credentials the request still goes out; the server answers
/// with whatever an anonymous or cookie-authenticated session may see.
pub async fn ensure_session(cli: &Cli, client: &IssClient) -> Result<(), CliError> {
    match credentials(cli) {
        Some((username, password)) => login(client, username, password).await,
        None => {
            if cli.passport_cert.is_none() {
                warn!("no passport credentials configured; AlgoPack data may be unavailable");
            }
            Ok(())
        }
    }
}

async fn login(client: &IssClient, username: &str, password: &str) -> Result<(), CliError> {
    if client.authenticate(username, password).await? {
        debug!(username, "passport session established");
        Ok(())
    } else {
        Err(CliError::AuthenticationFailed {
            username: username.to_owned(),
        })
    }
}

fn credentials(cli: &Cli) -> Option<(&str, &str)> {
    match (cli.username.as_deref(), cli.password.as_deref()) {
        (Some(username), Some(password)) if !username.is_empty() => Some((username, password)),
        _ => None,
    }
}
