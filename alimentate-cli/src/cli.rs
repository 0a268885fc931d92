use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "alimentate",
    about = "Alimentate - session client for the nutrition API",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign in and persist the session")]
    SignIn {
        #[arg(help = "Account username")]
        username: String,

        #[arg(long, env = "ALIMENTATE_PASSWORD", hide_env_values = true, help = "Account password")]
        password: String,
    },

    #[command(about = "Register a new account")]
    SignUp {
        #[arg(help = "Account username")]
        username: String,

        #[arg(long, env = "ALIMENTATE_PASSWORD", hide_env_values = true, help = "Account password")]
        password: String,

        #[arg(long = "role", help = "Role to request (repeatable)")]
        roles: Vec<String>,
    },

    #[command(about = "Sign out and purge every session-related entry")]
    SignOut,

    #[command(about = "Show the current session")]
    Status {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Check persisted session against the in-memory one")]
    Validate,

    #[command(about = "Re-read the session from durable storage")]
    Restore,

    #[command(about = "Authorized GET against an API path, printed as JSON")]
    Get {
        #[arg(help = "Path relative to the API base URL (e.g. 'profiles/3')")]
        path: String,
    },

    #[command(subcommand, about = "View and modify configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show current configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Get a specific configuration value")]
    Get {
        #[arg(help = "Configuration key (e.g., 'api.base_url', 'session.post_sign_in')")]
        key: String,
    },

    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key")]
        key: String,

        #[arg(help = "New value")]
        value: String,
    },
}
