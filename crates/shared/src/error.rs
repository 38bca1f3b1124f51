use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TalkId;

/// Time component extracted from a talk's timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Day,
    StartHour,
    StartMinute,
    EndHour,
    EndMinute,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::StartHour => "start_hour",
            Self::StartMinute => "start_minute",
            Self::EndHour => "end_hour",
            Self::EndMinute => "end_minute",
        };
        f.write_str(name)
    }
}

/// A time component that could not be read and was replaced by zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWarning {
    pub talk_id: TalkId,
    pub field: TimeField,
    pub raw: String,
}

impl FieldWarning {
    pub fn new(talk_id: TalkId, field: TimeField, raw: impl Into<String>) -> Self {
        Self {
            talk_id,
            field,
            raw: raw.into(),
        }
    }
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "talk {}: {} '{}' is not a number, using 0",
            self.talk_id, self.field, self.raw
        )
    }
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{}' as a talk list: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("talk {talk_id}: malformed {field} timestamp '{value}'")]
    MalformedTimestamp {
        talk_id: TalkId,
        field: &'static str,
        value: String,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
