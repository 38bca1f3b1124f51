use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
        )]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(TalkId);

/// One talk record as it appears in the schedule export.
///
/// Missing fields and explicit `null`s both fall back to the type's empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTalk {
    #[serde(rename = "ID", deserialize_with = "null_as_default")]
    pub id: TalkId,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Event_Start", deserialize_with = "null_as_default")]
    pub event_start: String,
    #[serde(rename = "Event_End", deserialize_with = "null_as_default")]
    pub event_end: String,
    #[serde(rename = "Event_Type", deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(rename = "Format", deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(rename = "Venue", deserialize_with = "null_as_default")]
    pub venue: String,
    #[serde(rename = "VenueID", deserialize_with = "null_as_default")]
    pub venue_id: String,
    #[serde(rename = "Speakers", deserialize_with = "null_as_default")]
    pub speakers: String,
    #[serde(rename = "Description", deserialize_with = "null_as_default")]
    pub description: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A talk together with the presentation fields derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub raw: RawTalk,
    pub day: i32,
    pub day_label: String,
    pub start_hour: i32,
    pub start_minute: i32,
    pub end_hour: i32,
    pub end_minute: i32,
    pub duration_total: i32,
    pub duration_hours: i32,
    pub duration_minutes: i32,
    pub speakers: Vec<String>,
    pub description_html: String,
}

impl Talk {
    pub fn id(&self) -> TalkId {
        self.raw.id
    }

    pub fn venue(&self) -> &str {
        &self.raw.venue
    }

    pub fn first_speaker(&self) -> Option<&str> {
        self.speakers.first().map(String::as_str)
    }
}

/// Talks sharing the same day and start time, in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkGroup<'a> {
    pub day: i32,
    pub day_label: &'a str,
    pub start_hour: i32,
    pub start_minute: i32,
    pub talks: Vec<&'a Talk>,
}

/// Maps a day of month to the short weekday label printed in slot headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLabels(BTreeMap<i32, String>);

impl DayLabels {
    pub const WEEKDAYS: [&'static str; 3] = ["Me", "Je", "Ve"];

    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(day, label)| (day, label.into()))
                .collect(),
        )
    }

    /// Three consecutive days labelled Wednesday, Thursday, Friday.
    pub fn wednesday_to_friday(first_day: i32) -> Self {
        Self::from_pairs(
            Self::WEEKDAYS
                .iter()
                .zip(first_day..)
                .map(|(label, day)| (day, *label)),
        )
    }

    pub fn shifted() -> Self {
        Self::wednesday_to_friday(19)
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::default()),
            "shifted" => Some(Self::shifted()),
            _ => None,
        }
    }

    /// Empty when the day is not part of the table.
    pub fn label(&self, day: i32) -> &str {
        self.0.get(&day).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for DayLabels {
    fn default() -> Self {
        Self::wednesday_to_friday(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels_cover_wednesday_to_friday() {
        let labels = DayLabels::default();
        assert_eq!(labels.label(20), "Me");
        assert_eq!(labels.label(21), "Je");
        assert_eq!(labels.label(22), "Ve");
        assert_eq!(labels.label(19), "");
        assert_eq!(labels.label(23), "");
    }

    #[test]
    fn shifted_labels_start_one_day_earlier() {
        let labels = DayLabels::preset("shifted").expect("preset");
        assert_eq!(labels.label(19), "Me");
        assert_eq!(labels.label(20), "Je");
        assert_eq!(labels.label(21), "Ve");
        assert_eq!(labels.label(22), "");
        assert!(DayLabels::preset("unknown").is_none());
    }

    #[test]
    fn raw_talk_tolerates_missing_null_and_unknown_fields() {
        let raw: RawTalk = serde_json::from_value(serde_json::json!({
            "ID": 12,
            "Name": "Rust in prod",
            "Speakers": null,
            "Room": "ignored",
        }))
        .expect("raw talk");

        assert_eq!(raw.id, TalkId(12));
        assert_eq!(raw.name, "Rust in prod");
        assert_eq!(raw.speakers, "");
        assert_eq!(raw.event_start, "");
    }
}
