//! Request interception: bearer-token injection.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::sync::Arc;

/// Supplies the bearer credential for outgoing requests.
///
/// Read once per request, so a token written after the client was built is
/// picked up by the next call.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Token source that never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Attaches `Authorization: Bearer <token>` to every request it sees.
#[derive(Clone)]
pub struct BearerInterceptor {
    source: Arc<dyn TokenSource>,
}

impl BearerInterceptor {
    pub fn new(source: Arc<dyn TokenSource>) -> Self {
        Self { source }
    }

    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.source.bearer_token() {
            Some(token) if !token.is_empty() => {
                builder.header(AUTHORIZATION, format!("Bearer {}", token))
            }
            _ => builder,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl TokenSource for Fixed {
        fn bearer_token(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn build(interceptor: &BearerInterceptor) -> reqwest::Request {
        let client = reqwest::Client::new();
        interceptor.apply(client.get("http://localhost/ping")).build().unwrap()
    }

    #[test]
    fn test_header_attached_when_token_present() {
        let request = build(&BearerInterceptor::new(Arc::new(Fixed("tok-1"))));
        assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok-1");
    }

    #[test]
    fn test_no_header_without_token() {
        let request = build(&BearerInterceptor::new(Arc::new(NoToken)));
        assert!(request.headers().get(AUTHORIZATION).is_none());

        let request = build(&BearerInterceptor::new(Arc::new(Fixed(""))));
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
