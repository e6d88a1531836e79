use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

pub type UserId = String;
pub type AuctionId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
}

impl User {
    pub fn new(name: &str) -> Self {
        User {
            user_id: name.to_lowercase(),
            name: name.to_string(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        match text.split_once('|') {
            Some((user_id, name)) => Ok(User {
                user_id: user_id.to_string(),
                name: name.to_string(),
            }),
            None => Err(serde::de::Error::custom(format!(
                "parsing User failed, expected 'user_id|name': {:?}",
                text
            ))),
        }
    }
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.user_id, self.name)
    }
}

/// Failures raised by collaborators (repositories, notifiers, evaluators).
///
/// The services only care that an error occurred; the variants exist for
/// logging and for the binary's exit status.
#[derive(Debug, Error)]
pub enum Errors {
    #[error("Repository failure: {0}")]
    Repository(String),

    #[error("Notification failure: {0}")]
    Notification(String),

    #[error("Auction has no bids: {0}")]
    NoBids(AuctionId),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
