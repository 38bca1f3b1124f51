use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use shared::{
    domain::{DayLabels, RawTalk, Talk, TalkId},
    error::{FieldWarning, ScheduleError, TimeField},
    markup::escape_html,
};

use crate::config::TimestampMode;

/// Speaker entry emitted by the export when both names are unknown.
pub const UNKNOWN_SPEAKER: &str = "null null";

const DAY_OFFSET: usize = 8;
const HOUR_OFFSET: usize = 11;
const MINUTE_OFFSET: usize = 14;

const PARAGRAPH_OPEN: &str = "<p class=\"desc\">";
const PARAGRAPH_CLOSE: &str = "</p>";
const LINE_BREAK: &str = "<br/>";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Clock {
    day: i32,
    hour: i32,
    minute: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedTalk {
    pub talk: Talk,
    pub warnings: Vec<FieldWarning>,
}

pub fn compute_talk(
    raw: RawTalk,
    labels: &DayLabels,
    mode: TimestampMode,
) -> Result<ComputedTalk, ScheduleError> {
    let mut warnings = Vec::new();
    let (start, end) = match mode {
        TimestampMode::Lenient => {
            let mut read = |timestamp: &str, offset, field| {
                lenient_component(timestamp, offset, raw.id, field, &mut warnings)
            };
            let start = Clock {
                day: read(&raw.event_start, DAY_OFFSET, TimeField::Day),
                hour: read(&raw.event_start, HOUR_OFFSET, TimeField::StartHour),
                minute: read(&raw.event_start, MINUTE_OFFSET, TimeField::StartMinute),
            };
            let end = Clock {
                day: 0,
                hour: read(&raw.event_end, HOUR_OFFSET, TimeField::EndHour),
                minute: read(&raw.event_end, MINUTE_OFFSET, TimeField::EndMinute),
            };
            (start, end)
        }
        TimestampMode::Strict => (
            strict_clock(&raw.event_start, raw.id, "start")?,
            strict_clock(&raw.event_end, raw.id, "end")?,
        ),
    };

    let duration_total = duration_minutes(start.hour, start.minute, end.hour, end.minute);
    let talk = Talk {
        day: start.day,
        day_label: labels.label(start.day).to_string(),
        start_hour: start.hour,
        start_minute: start.minute,
        end_hour: end.hour,
        end_minute: end.minute,
        duration_total,
        duration_hours: duration_total / 60,
        duration_minutes: duration_total % 60,
        speakers: clean_speakers(&raw.speakers),
        description_html: description_to_html(&raw.description),
        raw,
    };

    Ok(ComputedTalk { talk, warnings })
}

/// Compute every talk, keeping input order and collecting all warnings.
pub fn compute_all(
    raws: Vec<RawTalk>,
    labels: &DayLabels,
    mode: TimestampMode,
) -> Result<(Vec<Talk>, Vec<FieldWarning>), ScheduleError> {
    let mut talks = Vec::with_capacity(raws.len());
    let mut warnings = Vec::new();
    for raw in raws {
        let computed = compute_talk(raw, labels, mode)?;
        talks.push(computed.talk);
        warnings.extend(computed.warnings);
    }
    Ok((talks, warnings))
}

/// Minutes between start and end on the same calendar day.
///
/// A talk ending after midnight comes out short or negative; the inputs carry
/// no date for the end, so this is left as is.
pub fn duration_minutes(
    start_hour: i32,
    start_minute: i32,
    end_hour: i32,
    end_minute: i32,
) -> i32 {
    (end_hour - start_hour) * 60 - start_minute + end_minute
}

pub fn clean_speakers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|speaker| !speaker.is_empty() && *speaker != UNKNOWN_SPEAKER)
        .map(str::to_string)
        .collect()
}

/// Escape the description and lay it out as `desc` paragraphs.
///
/// Single newlines become line breaks; a blank line starts a new paragraph.
pub fn description_to_html(description: &str) -> String {
    let html = format!("{PARAGRAPH_OPEN}{}{PARAGRAPH_CLOSE}", escape_html(description));
    let html = html.replace('\n', LINE_BREAK);
    html.replace(
        &format!("{LINE_BREAK}{LINE_BREAK}"),
        &format!("{PARAGRAPH_CLOSE}{PARAGRAPH_OPEN}"),
    )
}

fn lenient_component(
    timestamp: &str,
    offset: usize,
    talk_id: TalkId,
    field: TimeField,
    warnings: &mut Vec<FieldWarning>,
) -> i32 {
    let raw = timestamp.get(offset..offset + 2).unwrap_or_default();
    match raw.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            warnings.push(FieldWarning::new(talk_id, field, raw));
            0
        }
    }
}

fn strict_clock(
    timestamp: &str,
    talk_id: TalkId,
    which: &'static str,
) -> Result<Clock, ScheduleError> {
    let parsed = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| DateTime::parse_from_rfc3339(timestamp).map(|dt| dt.naive_local()))
        .map_err(|_| ScheduleError::MalformedTimestamp {
            talk_id,
            field: which,
            value: timestamp.to_string(),
        })?;

    Ok(Clock {
        day: parsed.day() as i32,
        hour: parsed.hour() as i32,
        minute: parsed.minute() as i32,
    })
}

#[cfg(test)]
#[path = "tests/fields_tests.rs"]
mod tests;
