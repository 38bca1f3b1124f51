use shared::{
    domain::{DayLabels, RawTalk, Talk, TalkGroup},
    error::{FieldWarning, ScheduleError},
};
use tracing::{info, warn};

pub mod config;
pub mod fields;
pub mod grouping;
pub mod loader;
pub mod sorter;

pub use config::{ScheduleConfig, TimestampMode};
pub use fields::{compute_all, compute_talk, ComputedTalk};
pub use grouping::group_by_slot;
pub use loader::{load_all, load_talks};
pub use sorter::sort_talks;

/// Talks ready for rendering: computed and in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub talks: Vec<Talk>,
    pub warnings: Vec<FieldWarning>,
}

impl Schedule {
    pub fn from_raw(
        raws: Vec<RawTalk>,
        labels: &DayLabels,
        mode: TimestampMode,
    ) -> Result<Self, ScheduleError> {
        let (mut talks, warnings) = compute_all(raws, labels, mode)?;
        for warning in &warnings {
            warn!(
                talk_id = %warning.talk_id,
                field = %warning.field,
                raw = %warning.raw,
                "unreadable time component, using 0"
            );
        }
        sort_talks(&mut talks);
        Ok(Self { talks, warnings })
    }

    pub fn groups(&self) -> Vec<TalkGroup<'_>> {
        group_by_slot(&self.talks)
    }
}

/// Load every configured input and compute the sorted schedule.
///
/// Nothing is rendered here, so a failure leaves no partial output behind.
pub fn build_schedule(config: &ScheduleConfig) -> Result<Schedule, ScheduleError> {
    let raws = load_all(&config.inputs)?;
    info!(
        files = config.inputs.len(),
        talks = raws.len(),
        "loaded schedule"
    );
    Schedule::from_raw(raws, &config.day_labels, config.timestamp_mode)
}
