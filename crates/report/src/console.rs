use std::io::{self, Write};

use shared::domain::Talk;

use crate::{format_duration, format_slot};

/// One fixed-width row; long event types and names are cut, not wrapped.
pub fn console_line(talk: &Talk) -> String {
    format!(
        "| {} | {} | {:<7.7} | {:<14} | {:>40.40} | {:<100.100} | {:>44} |",
        format_slot(&talk.day_label, talk.start_hour, talk.start_minute),
        format_duration(talk.duration_hours, talk.duration_minutes),
        talk.venue(),
        talk.raw.format,
        talk.raw.event_type,
        talk.raw.name,
        talk.speakers.join(", "),
    )
}

pub fn render_console(talks: &[Talk]) -> String {
    talks
        .iter()
        .map(|talk| console_line(talk) + "\n")
        .collect()
}

pub fn print_console<W: Write>(talks: &[Talk], mut out: W) -> io::Result<()> {
    for talk in talks {
        writeln!(out, "{}", console_line(talk))?;
    }
    out.flush()
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
