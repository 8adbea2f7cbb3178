use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents one submitted message as it is kept in the document store.
///
/// Records are written once and never updated. On the wire this is the flat
/// document `{id, content, img_path, timestamp}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    /// Primary key, generated when the record is built
    pub id: Uuid,
    /// The submitted text, possibly empty
    pub content: String,
    /// Public address of the attached image, stored as `""` when there is none
    #[serde(rename = "img_path", default, with = "empty_as_none")]
    pub image_url: Option<String>,
    /// Creation time in local time, whole seconds
    #[serde(with = "second_precision")]
    pub timestamp: NaiveDateTime,
}

impl MessageRecord {
    /// Creates a record with a fresh id, stamped with the current time.
    pub fn new(content: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            image_url,
            timestamp: Local::now().naive_local().trunc_subsecs(0),
        }
    }
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|url| !url.is_empty()))
    }
}

mod second_precision {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(de::Error::custom)
    }
}
