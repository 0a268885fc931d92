//! # Alimentate Client
//!
//! HTTP wrapper over the Alimentate REST API. Every request passes through a
//! [`BearerInterceptor`] that attaches `Authorization: Bearer <token>` whenever
//! the configured [`TokenSource`] holds a token.

mod auth;
mod client;
mod error;
mod interceptor;
mod resource;

pub use auth::AuthApi;
pub use client::AlimentateClient;
pub use error::ClientError;
pub use interceptor::{BearerInterceptor, NoToken, TokenSource};
pub use resource::Resource;
