// src/cli/account.rs — login, register, logout, whoami

use inquire::{Password, PasswordDisplayMode, Text};

use crate::api::Backend;
use crate::infra::config::Config;
use crate::session::{FileTokenStore, LoginOutcome, SessionManager, VerifyOutcome};

/// Prompt for credentials (unless given) and store the session token.
pub async fn run_login(
    config: &Config,
    backend: &dyn Backend,
    email: Option<&str>,
) -> anyhow::Result<()> {
    if let Some(hint) = config.auth.hint() {
        println!("  {hint}");
    }
    let email = match email {
        Some(e) => e.to_string(),
        None => Text::new("Email:").prompt()?,
    };
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let mut session = SessionManager::new(Box::new(FileTokenStore::default_location()));
    match session.login(backend, email.trim(), &password).await {
        LoginOutcome::Authenticated(user) => {
            println!("Signed in as {} <{}>", user.display_name(), user.email);
            Ok(())
        }
        LoginOutcome::Rejected(e) => anyhow::bail!(e.alert_text()),
        LoginOutcome::Stale => anyhow::bail!("login superseded"),
    }
}

/// Create an account. Does not sign in.
pub async fn run_register(
    backend: &dyn Backend,
    email: Option<&str>,
    name: Option<&str>,
) -> anyhow::Result<()> {
    let email = match email {
        Some(e) => e.to_string(),
        None => Text::new("Email:").prompt()?,
    };
    let name = match name {
        Some(n) => n.to_string(),
        None => Text::new("Name:").prompt()?,
    };
    let password = Password::new("Password:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()?;

    let resp = backend
        .register(email.trim(), &password, name.trim())
        .await
        .map_err(|e| anyhow::anyhow!(e.alert_text()))?;

    match resp.message {
        Some(message) => println!("{message}: {}", resp.email),
        None => println!("Registered {}", resp.email),
    }
    println!("Run `weatherdeck login` to sign in.");
    Ok(())
}

pub fn run_logout() -> anyhow::Result<()> {
    let mut session = SessionManager::new(Box::new(FileTokenStore::default_location()));
    session.logout()?;
    println!("Signed out.");
    Ok(())
}

/// Verify the stored token the same way the dashboard does at startup.
pub async fn run_whoami(backend: &dyn Backend) -> anyhow::Result<()> {
    let mut session = SessionManager::new(Box::new(FileTokenStore::default_location()));
    let Some(ticket) = session.restore()? else {
        println!("Not signed in.");
        return Ok(());
    };

    match session.verify(backend, ticket.token).await {
        VerifyOutcome::Verified(user) => {
            println!("{} <{}>", user.display_name(), user.email);
        }
        VerifyOutcome::Revoked => {
            println!("Session expired. Run `weatherdeck login`.");
        }
        VerifyOutcome::Unchanged => {
            println!("Token stored, but the gateway could not be reached.");
        }
        VerifyOutcome::Stale => {}
    }
    Ok(())
}
