//! `login`, `logout` and `status` commands

use super::output::Output;
use crate::auth::{jwt, AuthClient};
use crate::http::HttpBackend;
use crate::nav::Navigator;
use crate::store::KeyValueStore;
use crate::views::LoginView;
use anyhow::{bail, Context};
use chrono::Utc;
use dialoguer::{Input, Password};

/// Sign in, prompting for whichever credential was not given.
pub async fn login<H, K, N>(
    auth: &AuthClient<H, K, N>,
    username: Option<String>,
    password: Option<String>,
    output: &Output,
) -> anyhow::Result<()>
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    let mut view = LoginView::new();
    if view.on_mount(auth) {
        let name = auth
            .store()
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default();
        output.info(&format!("Already signed in as {}", name));
        output.hint("Run `campus-chat logout` to switch accounts");
        return Ok(());
    }

    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };
    view.set_username(username);
    view.set_password(password);

    if !view.submit(auth).await {
        bail!("{}", view.error().unwrap_or("Login failed"));
    }

    let name = auth
        .store()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();
    output.success(&format!("Signed in as {}", name));
    Ok(())
}

pub fn logout<H, K, N>(auth: &AuthClient<H, K, N>, output: &Output)
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    let had_session = auth.store().has_session();
    auth.logout();
    if had_session {
        output.success("Signed out");
    } else {
        output.info("No session was stored");
    }
}

/// Print the stored session. Never signs out, even for an unreadable token.
pub fn status<H, K, N>(auth: &AuthClient<H, K, N>, output: &Output)
where
    H: HttpBackend,
    K: KeyValueStore,
    N: Navigator,
{
    let Some(session) = auth.store().load() else {
        output.info("Not signed in");
        output.hint("Run `campus-chat login` to sign in");
        return;
    };

    output.success(&format!("Signed in as {}", session.user.display_name()));
    output.kv("username", &session.user.username);
    output.kv("role", &session.user.role);
    if let Some(email) = &session.user.email {
        output.kv("email", email);
    }
    output.kv("api", auth.api_url());
    output.kv("token", &token_status(&session.token));
}

fn token_status(token: &str) -> String {
    match jwt::expires_at(token) {
        Ok(exp) if exp < Utc::now() => format!("expired at {}", exp.format("%Y-%m-%d %H:%M UTC")),
        Ok(exp) => format!("valid until {}", exp.format("%Y-%m-%d %H:%M UTC")),
        Err(_) => "no readable expiry".to_string(),
    }
}
