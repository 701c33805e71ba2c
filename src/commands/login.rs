use agenda_core::session::{DEFAULT_API_URL, SessionContext};
use anyhow::{Context, Result};

use crate::client::ApiClient;

pub async fn run(email: &str, api_url: Option<String>) -> Result<()> {
    let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let password = prompt_password("Password")?;

    let client = ApiClient::new(&api_url);
    let token = client.login(email, &password).await?;

    // The admin flag gates `agenda new` client-side.
    let user = client.me(&token).await?;

    let session = SessionContext {
        token,
        is_admin: user.is_admin,
        api_url,
    };
    session.save()?;

    println!("Logged in as {email}");
    if user.is_admin {
        println!("Admin account: `agenda new` is available.");
    }

    Ok(())
}

/// Prompt the user for password input (hidden).
fn prompt_password(label: &str) -> Result<String> {
    let prompt = format!("{}: ", label);
    rpassword::prompt_password(&prompt).context("Failed to read password")
}
