use alimentate_types::ApiConfig;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::error::ClientError;
use crate::interceptor::{BearerInterceptor, TokenSource};
use crate::resource::Resource;

pub struct AlimentateClient {
    client: Client,
    config: ApiConfig,
    base_url: Url,
    interceptor: BearerInterceptor,
}

impl AlimentateClient {
    pub fn new(config: ApiConfig, token_source: Arc<dyn TokenSource>) -> Result<Self, ClientError> {
        let base_url = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config, base_url, interceptor: BearerInterceptor::new(token_source) })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidConfig(format!("bad endpoint {:?}: {}", path, e)))
    }

    /// Client over a REST collection, e.g. `client.resource("recipes")`.
    pub fn resource(&self, path: impl Into<String>) -> Resource<'_> {
        Resource::new(self, path.into())
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        let url = self.endpoint(path)?;
        let resp = self.execute(self.client.get(url)).await?;
        decode(resp).await
    }

    pub async fn post<A, R>(&self, path: &str, body: &A) -> Result<R, ClientError>
    where
        A: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let resp = self.execute(self.client.post(url).json(body)).await?;
        decode(resp).await
    }

    pub async fn put<A, R>(&self, path: &str, body: &A) -> Result<R, ClientError>
    where
        A: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let resp = self.execute(self.client.put(url).json(body)).await?;
        decode(resp).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.endpoint(path)?;
        self.execute(self.client.delete(url)).await?;
        Ok(())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let request = self.interceptor.apply(builder).build()?;
        tracing::debug!("{} {}", request.method(), request.url());

        let resp = self.client.execute(request).await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            tracing::debug!("Request rejected with {}", status);
            return Err(ClientError::Rejected { status: status.as_u16(), message });
        }

        Ok(resp)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    // Url::join drops the last segment unless the base ends with '/'
    let normalized = if raw.ends_with('/') { raw.to_string() } else { format!("{}/", raw) };
    let url = Url::parse(&normalized)
        .map_err(|e| ClientError::InvalidConfig(format!("bad base_url {:?}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ClientError::InvalidConfig(format!("bad base_url {:?}", raw)));
    }
    Ok(url)
}

async fn decode<R: DeserializeOwned>(resp: Response) -> Result<R, ClientError> {
    resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
