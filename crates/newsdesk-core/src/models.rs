//! Domain model for news records.
//!
//! A `NewsArticle` is deliberately loose: every field is optional and the
//! store is the final validator. The one typed concession is the identifier,
//! which is a native ObjectId in BSON but a 24-character hex string in JSON
//! responses.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A single news record as stored in the `news` collection.
///
/// `date` is an ISO `YYYY-MM-DD` string, not a date type; ordering and
/// filtering are string comparisons. `category` is free-form text, with the
/// value `"All"` reserved by the query layer to mean "no category filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Store-assigned identifier. `None` until the record is persisted.
    #[serde(
        rename = "_id",
        default,
        skip_serializing_if = "Option::is_none",
        with = "object_id_hex"
    )]
    pub id: Option<ObjectId>,

    /// Headline text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// URI of the cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Publication date as an ISO `YYYY-MM-DD` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// URI of the original story.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Free-form category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewsArticle {
    /// Returns a copy with the identifier cleared.
    ///
    /// Useful for comparing a persisted record against the submitted draft.
    pub fn without_id(&self) -> Self {
        Self { id: None, ..self.clone() }
    }
}

/// Serde bridge for the `_id` field.
///
/// JSON (human-readable) carries the identifier as a hex string; BSON keeps
/// the native ObjectId so the store can index it. bson's serializers report
/// non-human-readable, which is the discriminator used here.
mod object_id_hex {
    use mongodb::bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // skip_serializing_if filters out None before this is reached.
        match id {
            Some(oid) if serializer.is_human_readable() => {
                serializer.serialize_str(&oid.to_hex())
            }
            Some(oid) => oid.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let hex: Option<String> = Option::deserialize(deserializer)?;
            match hex {
                Some(hex) => ObjectId::parse_str(&hex)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        } else {
            Option::<ObjectId>::deserialize(deserializer)
        }
    }
}
