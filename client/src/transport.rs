use serde_json::Value;

const TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unexpected status: {status}")]
    Status { status: http::StatusCode },
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error("JSON decoding error")]
    Json(#[from] serde_json::Error),
    #[error("Token response has no access_token")]
    MissingToken,
}

impl Error {
    /// Whether this failure is a 4xx response from the endpoint, as opposed
    /// to a network or decoding failure.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Status { status } => status.is_client_error(),
            _ => false,
        }
    }
}

/// An authenticated, blocking GET returning the parsed JSON body.
///
/// The client consumes this capability but never constructs it; credentials
/// and timeouts are the implementation's concern.
pub trait Transport {
    fn get_json(&self, url: &str) -> Result<Value, Error>;
}

/// A [`Transport`] that attaches a bearer token to every request.
pub struct BearerTransport {
    client: reqwest::blocking::Client,
    token: String,
}

impl BearerTransport {
    /// Wraps an already-issued bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            token: token.into(),
        }
    }

    /// Exchanges an application's consumer key and secret for a bearer token
    /// via the `oauth2/token` endpoint.
    pub fn connect(consumer_key: &str, consumer_secret: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::new();

        let response = client
            .post(TOKEN_URL)
            .basic_auth(consumer_key, Some(consumer_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        let body: Value = serde_json::from_str(&response.text()?)?;
        let token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(Error::MissingToken)?;

        Ok(Self {
            client,
            token: token.to_string(),
        })
    }
}

impl Transport for BearerTransport {
    fn get_json(&self, url: &str) -> Result<Value, Error> {
        let response = self.client.get(url).bearer_auth(&self.token).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        Ok(serde_json::from_str(&response.text()?)?)
    }
}
