use std::cmp::Ordering;

use shared::domain::Talk;

/// Day of month, start hour, start minute.
pub type SlotKey = (i32, i32, i32);

pub fn slot_key(talk: &Talk) -> SlotKey {
    (talk.day, talk.start_hour, talk.start_minute)
}

/// Presentation order: slot first, then venue name byte by byte.
pub fn compare_talks(a: &Talk, b: &Talk) -> Ordering {
    slot_key(a)
        .cmp(&slot_key(b))
        .then_with(|| a.venue().cmp(b.venue()))
}

/// Stable, so talks with equal keys keep their input order.
pub fn sort_talks(talks: &mut [Talk]) {
    talks.sort_by(compare_talks);
}
