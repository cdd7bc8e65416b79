use crate::Error;
use crate::cursor::CursorIter;
use crate::transport::Transport;
use birdfeed_api::model::{Tweet, User};
use birdfeed_api::parse;
use serde_json::Value;

const API_BASE: &str = "https://api.twitter.com/1.1";

/// Read-only operations against a user's timeline, profile, and friends list.
pub trait TwitterClient {
    /// Fetches one page of a user's timeline, most recent first, in the
    /// order the endpoint provides. With a `since_id`, only tweets newer
    /// than that id are requested.
    fn user_timeline(
        &self,
        screen_name: &str,
        since_id: Option<u64>,
    ) -> Result<Vec<Tweet>, Error>;

    /// Fetches a user's profile. A non-success response propagates as a
    /// transport error; there is no "absent" result for profiles.
    fn user_profile(&self, profile_id: u64) -> Result<User, Error>;

    /// Fetches a single tweet. Any client-error response (deleted tweet,
    /// protected account, unknown id) yields `Ok(None)` so that one missing
    /// tweet cannot abort a batch of lookups; every other failure
    /// propagates.
    fn tweet(&self, tweet_id: u64) -> Result<Option<Tweet>, Error>;

    /// Walks a user's friends list lazily, one page of 200 per fetch.
    fn friends(&self, profile_id: u64) -> impl Iterator<Item = Result<User, Error>>;
}

/// The [`TwitterClient`] implementation over an injected [`Transport`].
pub struct HttpTwitterClient<C> {
    transport: C,
}

impl<C: Transport> HttpTwitterClient<C> {
    pub fn new(transport: C) -> Self {
        Self { transport }
    }

    fn get(&self, url: &str) -> Result<Value, Error> {
        self.transport
            .get_json(url)
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl<C: Transport> TwitterClient for HttpTwitterClient<C> {
    fn user_timeline(
        &self,
        screen_name: &str,
        since_id: Option<u64>,
    ) -> Result<Vec<Tweet>, Error> {
        let since_id_param = since_id
            .map(|id| format!("&since_id={id}"))
            .unwrap_or_default();
        let url = format!(
            "{API_BASE}/statuses/user_timeline.json?include_rts=1&tweet_mode=extended&count=200&screen_name={screen_name}{since_id_param}"
        );

        let body = self.get(&url)?;

        parse::tweets(&body).map_err(|source| Error::Payload { url, source })
    }

    fn user_profile(&self, profile_id: u64) -> Result<User, Error> {
        let url = format!("{API_BASE}/users/show.json?user_id={profile_id}");

        let body = self.get(&url)?;

        parse::user(&body).map_err(|source| Error::Payload { url, source })
    }

    fn tweet(&self, tweet_id: u64) -> Result<Option<Tweet>, Error> {
        let url = format!("{API_BASE}/statuses/show.json?id={tweet_id}&tweet_mode=extended");

        match self.transport.get_json(&url) {
            Ok(body) => {
                let tweet = parse::tweet(&body).map_err(|source| Error::Payload { url, source })?;
                Ok(Some(tweet))
            }
            Err(error) if error.is_client_error() => {
                log::error!("Client error for tweet {}: {}", tweet_id, error);
                Ok(None)
            }
            Err(source) => Err(Error::Transport { url, source }),
        }
    }

    fn friends(&self, profile_id: u64) -> impl Iterator<Item = Result<User, Error>> {
        let url = format!("{API_BASE}/friends/list.json?user_id={profile_id}&count=200");

        CursorIter::new(&self.transport, url, |page: &Value| {
            page.get("users")
                .ok_or(parse::Error::MissingField("users"))?
                .as_array()
                .ok_or(parse::Error::InvalidField("users"))?
                .iter()
                .map(parse::user)
                .collect()
        })
    }
}
