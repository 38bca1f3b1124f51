pub mod console;
pub mod html;

pub use console::{console_line, print_console, render_console};
pub use html::{render_html, write_html};

/// `H:MM`, signs kept as computed.
pub(crate) fn format_duration(hours: i32, minutes: i32) -> String {
    format!("{hours}:{minutes:02}")
}

/// `<label> HH:MM` slot heading.
pub(crate) fn format_slot(day_label: &str, hour: i32, minute: i32) -> String {
    format!("{day_label} {hour:02}:{minute:02}")
}
