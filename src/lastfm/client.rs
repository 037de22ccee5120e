use reqwest::{Client, Response, StatusCode};

use crate::{config, debug, error::CollageError, types::ApiErrorResponse};

/// Handle to the Last.fm Web API for a single API key.
///
/// The wrapped [`reqwest::Client`] is reused for every request of a run,
/// cover art downloads included (see [`LastFmClient::http`]).
#[derive(Debug, Clone)]
pub struct LastFmClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl LastFmClient {
    /// Creates a client for the endpoint returned by [`config::api_url`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_url(api_key, config::api_url())
    }

    /// Creates a client for an explicit endpoint.
    pub fn with_api_url(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_url: api_url.into(),
        }
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Issues a single API call and returns the successful response.
    ///
    /// The API key, the JSON response format and the method name are appended
    /// to `params`.
    pub(crate) async fn call(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<Response, CollageError> {
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("api_key", self.api_key.as_str()));
        query.push(("format", "json"));
        query.push(("method", method));

        debug!("GET {} method={}", self.api_url, method);
        let response = self.client.get(&self.api_url).query(&query).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        Err(remote_error(status, response).await)
    }
}

async fn remote_error(status: StatusCode, response: Response) -> CollageError {
    let fallback = status.canonical_reason().unwrap_or("unknown error").to_string();
    let message = match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorResponse>(&body) {
            Ok(api_error) => format!("{} (error {})", api_error.message, api_error.error),
            Err(_) => fallback,
        },
        Err(_) => fallback,
    };

    CollageError::RemoteService {
        status: status.as_u16(),
        message,
    }
}
