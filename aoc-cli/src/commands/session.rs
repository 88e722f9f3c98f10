//! `aoc session` - register the session token

use crate::commands::prompt;
use crate::error::CliError;
use aoc_client::SessionStore;

pub fn run(token: Option<String>) -> Result<(), CliError> {
    let store = SessionStore::new()?;

    let token = match token {
        Some(t) => t,
        None => rpassword::prompt_password("Provide your AoC session token > ")
            .map_err(|e| CliError::Config(format!("failed to read session token: {}", e)))?,
    };
    if token.is_empty() {
        return Err(CliError::Config("session token is required".to_string()));
    }

    if store.exists() {
        let question = format!(
            "The file {:?} already exists.\nAre you sure you want to overwrite it with a new session?",
            store.path()
        );
        // Declining is a clean no-op
        if !prompt::confirm(&question)? {
            return Ok(());
        }
    }

    store.save(&token)?;
    println!("Session saved to {:?}.", store.path());
    Ok(())
}
