use std::path::PathBuf;

use shared::domain::DayLabels;

pub const DEFAULT_INPUTS: [&str; 2] = ["input/program.json", "input/program_others.json"];
pub const DEFAULT_OUTPUT: &str = "index.html";

/// How timestamps are turned into day, hour and minute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampMode {
    /// Read fixed character offsets; unreadable components become zero.
    #[default]
    Lenient,
    /// Parse the whole timestamp and reject anything malformed.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub day_labels: DayLabels,
    pub timestamp_mode: TimestampMode,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(PathBuf::from).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            day_labels: DayLabels::default(),
            timestamp_mode: TimestampMode::default(),
        }
    }
}
