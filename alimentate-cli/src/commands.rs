use anyhow::Result;
use colored::Colorize;

use alimentate_session::SessionCheck;
use alimentate_types::{Destination, SignInRequest, SignUpRequest};

use crate::app::App;
use crate::cli::ConfigCommands;
use crate::config_commands;

pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show { json } => config_commands::show_config(json),
        ConfigCommands::Get { key } => config_commands::get_config_value(&key),
        ConfigCommands::Set { key, value } => config_commands::set_config_value(&key, &value),
    }
}

pub async fn handle_sign_in(app: &App, username: String, password: String) -> Result<()> {
    let request = SignInRequest::new(username, password);
    let destination = app.store.sign_in(&request).await;

    if destination == Destination::SignIn {
        anyhow::bail!("Sign-in failed for {} (run with -l info for details)", request.username);
    }
    println!(
        "{} Signed in as {} (user {})",
        "✓".green(),
        app.store.current_username().bold(),
        app.store.current_user_id()
    );
    print_destination(destination);
    Ok(())
}

pub async fn handle_sign_up(
    app: &App,
    username: String,
    password: String,
    roles: Vec<String>,
) -> Result<()> {
    let request = SignUpRequest::new(username, password).with_roles(roles);
    let destination = app.store.sign_up(&request).await;

    if destination == Destination::SignUp {
        anyhow::bail!("Sign-up failed for {}", request.username);
    }
    println!("{} Account {} registered", "✓".green(), request.username.bold());
    print_destination(destination);
    Ok(())
}

pub fn handle_sign_out(app: &App) -> Result<()> {
    let destination = app.store.sign_out();
    println!("{} Signed out", "✓".green());
    print_destination(destination);
    Ok(())
}

pub fn handle_status(app: &App, json: bool) -> Result<()> {
    let state = app.store.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!("{}", "Alimentate Session".cyan().bold());
    if state.is_signed_in() {
        println!("  State: {}", "signed in".green());
        println!("  User: {} (id {})", state.username(), state.user_id());
    } else {
        println!("  State: {}", "signed out".yellow());
    }
    match app.store.current_token() {
        Some(token) => println!("  Token: {}", mask_token(&token)),
        None => println!("  Token: {}", "none".dimmed()),
    }
    println!("  After sign-in: {}", app.store.settings().post_sign_in);
    println!("  API: {}", app.client.config().base_url);
    Ok(())
}

pub fn handle_validate(app: &App) -> Result<()> {
    match app.store.validate_session() {
        SessionCheck::Valid => {
            println!("{} Session valid", "✓".green());
            Ok(())
        }
        SessionCheck::Invalid { redirect } => {
            println!("{} Session invalid, local session cleared", "✗".red());
            print_destination(redirect);
            anyhow::bail!("Session invalid")
        }
    }
}

pub fn handle_restore(app: &App) -> Result<()> {
    app.store.restore_from_storage();
    handle_status(app, false)
}

pub async fn handle_get(app: &App, path: &str) -> Result<()> {
    let value: serde_json::Value = app.client.get(path).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_destination(destination: Destination) {
    println!("  {} {}", "→".cyan(), destination);
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abc"), "***");
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload"), "eyJh...yload");
    }
}
