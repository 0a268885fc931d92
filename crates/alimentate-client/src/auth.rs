//! Authentication endpoints.

use alimentate_types::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};
use async_trait::async_trait;

use crate::client::AlimentateClient;
use crate::error::ClientError;

/// The two upstream calls the session store depends on.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ClientError>;
    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ClientError>;
}

#[async_trait]
impl AuthApi for AlimentateClient {
    async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ClientError> {
        self.post(&self.config().sign_in_path, request).await
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, ClientError> {
        self.post(&self.config().sign_up_path, request).await
    }
}
