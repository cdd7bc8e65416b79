use chrono::{DateTime, Utc};
use url::Url;

/// A Twitter account as returned by the profile and friends endpoints.
///
/// The numeric id is the only identity; every other field is a point-in-time
/// snapshot of the profile.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub screen_name: String,
    pub location: String,
    pub description: String,
    pub url: Option<Url>,
}

/// A single status in extended mode.
///
/// The authoring [`User`] is embedded by value; users are not deduplicated
/// across tweets. The reply target id is kept in string form, since it may
/// exceed safe-integer ranges in downstream ecosystems.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Tweet {
    pub created_at: DateTime<Utc>,
    pub id: u64,
    pub text: String,
    pub truncated: bool,
    pub in_reply_to_status_id: Option<String>,
    pub entities: Entities,
    pub user: User,
}

impl Tweet {
    pub fn is_reply(&self) -> bool {
        self.in_reply_to_status_id.is_some()
    }

    pub fn canonical_url(&self) -> String {
        format!(
            "https://twitter.com/{}/status/{}",
            self.user.screen_name, self.id
        )
    }
}

/// The embedded hashtags, mentions, and links of a tweet.
///
/// Every sequence is present (possibly empty), never absent, even when the
/// wire payload omits the corresponding attribute.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Serialize)]
pub struct Entities {
    pub hashtags: Vec<Hashtag>,
    pub user_mentions: Vec<UserMention>,
    pub urls: Vec<Url>,
}

/// A hashtag without its leading `#`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Hashtag {
    pub text: String,
}

/// A denormalized mention stub, not a full [`User`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct UserMention {
    pub screen_name: String,
    pub name: String,
    pub id: u64,
}
