use crate::model::{Entities, Hashtag, Tweet, User, UserMention};
use crate::timestamp;
use serde_json::Value;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),
    #[error("Invalid numeric identifier")]
    InvalidId(#[from] std::num::ParseIntError),
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
}

/// Maps a profile or friends-list element into a [`User`].
///
/// The profile `url` is optional: absent, empty, or unparseable values all
/// yield no URL (the last with a logged warning), never an error.
pub fn user(node: &Value) -> Result<User, Error> {
    let url = match node.get("url").and_then(Value::as_str) {
        Some(value) if !value.is_empty() => match Url::parse(value) {
            Ok(url) => Some(url),
            Err(error) => {
                log::warn!("Unparseable profile url {:?}: {}", value, error);
                None
            }
        },
        _ => None,
    };

    Ok(User {
        id: id_field(node, "id_str")?,
        name: text_field(node, "name")?.to_string(),
        screen_name: text_field(node, "screen_name")?.to_string(),
        location: text_field(node, "location")?.to_string(),
        description: text_field(node, "description")?.to_string(),
        url,
    })
}

/// Maps a single status node into a [`Tweet`].
///
/// `created_at` is soft: an absent or mangled value is replaced with the
/// current time rather than failing the tweet. The identifier and text are
/// hard requirements.
pub fn tweet(node: &Value) -> Result<Tweet, Error> {
    let created_at = timestamp::parse_or_now(node.get("created_at").and_then(Value::as_str));

    let entities = match node.get("entities") {
        Some(entities_node) => entities(entities_node)?,
        None => Entities::default(),
    };

    let user_node = node.get("user").ok_or(Error::MissingField("user"))?;

    Ok(Tweet {
        created_at,
        id: id_field(node, "id_str")?,
        text: text_field(node, "full_text")?.to_string(),
        truncated: bool_field(node, "truncated")?,
        in_reply_to_status_id: node
            .get("in_reply_to_status_id_str")
            .and_then(Value::as_str)
            .map(String::from),
        entities,
        user: user(user_node)?,
    })
}

/// Maps a timeline response body (a JSON array of statuses) in order.
pub fn tweets(node: &Value) -> Result<Vec<Tweet>, Error> {
    node.as_array()
        .ok_or(Error::InvalidField("statuses"))?
        .iter()
        .map(tweet)
        .collect()
}

/// Maps the `entities` sub-node of a status.
///
/// Each of the three attributes may be missing from the payload entirely, in
/// which case the corresponding sequence is empty.
pub fn entities(node: &Value) -> Result<Entities, Error> {
    Ok(Entities {
        hashtags: collection_from_attribute(node, "hashtags", hashtag)?,
        user_mentions: collection_from_attribute(node, "user_mentions", user_mention)?,
        urls: collection_from_attribute(node, "urls", expanded_url)?,
    })
}

fn hashtag(node: &Value) -> Result<Hashtag, Error> {
    Ok(Hashtag {
        text: text_field(node, "text")?.to_string(),
    })
}

fn user_mention(node: &Value) -> Result<UserMention, Error> {
    Ok(UserMention {
        screen_name: text_field(node, "screen_name")?.to_string(),
        name: text_field(node, "name")?.to_string(),
        id: id_field(node, "id_str")?,
    })
}

// Unlike the profile url, a malformed expanded_url fails the whole mapping:
// it signals a contract change on the endpoint, not a substitutable value.
fn expanded_url(node: &Value) -> Result<Url, Error> {
    Ok(Url::parse(text_field(node, "expanded_url")?)?)
}

fn collection_from_attribute<T>(
    node: &Value,
    attribute: &'static str,
    element: impl Fn(&Value) -> Result<T, Error>,
) -> Result<Vec<T>, Error> {
    match node.get(attribute) {
        Some(values) => values
            .as_array()
            .ok_or(Error::InvalidField(attribute))?
            .iter()
            .map(element)
            .collect(),
        None => Ok(vec![]),
    }
}

fn text_field<'a>(node: &'a Value, field: &'static str) -> Result<&'a str, Error> {
    node.get(field)
        .ok_or(Error::MissingField(field))?
        .as_str()
        .ok_or(Error::InvalidField(field))
}

fn id_field(node: &Value, field: &'static str) -> Result<u64, Error> {
    Ok(text_field(node, field)?.parse()?)
}

fn bool_field(node: &Value, field: &'static str) -> Result<bool, Error> {
    match node.get(field).ok_or(Error::MissingField(field))? {
        Value::Bool(value) => Ok(*value),
        Value::String(value) => Ok(value == "true"),
        _ => Err(Error::InvalidField(field)),
    }
}
