use shared::domain::{Talk, TalkGroup};

use crate::sorter::{slot_key, SlotKey};

fn group_key(group: &TalkGroup<'_>) -> SlotKey {
    (group.day, group.start_hour, group.start_minute)
}

/// Split sorted talks into runs sharing a day and start time.
///
/// Expects `talks` to be sorted by slot already; unsorted input yields one
/// group per run rather than one per slot.
pub fn group_by_slot(talks: &[Talk]) -> Vec<TalkGroup<'_>> {
    let mut groups: Vec<TalkGroup<'_>> = Vec::new();

    for talk in talks {
        let starts_new_slot = groups
            .last()
            .map_or(true, |group| group_key(group) != slot_key(talk));
        if starts_new_slot {
            groups.push(TalkGroup {
                day: talk.day,
                day_label: &talk.day_label,
                start_hour: talk.start_hour,
                start_minute: talk.start_minute,
                talks: Vec::new(),
            });
        }
        if let Some(group) = groups.last_mut() {
            group.talks.push(talk);
        }
    }

    groups
}

#[cfg(test)]
#[path = "tests/grouping_tests.rs"]
mod tests;
