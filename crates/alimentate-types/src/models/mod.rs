//! Core domain models for the Alimentate client.

mod auth;
mod config;
mod navigation;
mod session;
pub mod storage_keys;

pub use auth::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
pub use config::{ApiConfig, AppConfig, SessionSettings};
pub use navigation::Destination;
pub use session::SessionState;
