//! Wire and domain records for the forum API.

mod category;
mod comment;
mod topic;

pub use category::{Category, DEFAULT_CATEGORY};
pub use comment::{Comment, CommentsResponse, NewComment};
pub use topic::{CreatedResponse, NewTopic, Topic, TopicsResponse};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize an id sent as either an integer or a numeric string
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("id {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("id '{}' is not numeric", value)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize a nullable field as its default value.
/// Handles both missing fields (with `#[serde(default)]`) and explicit nulls.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
