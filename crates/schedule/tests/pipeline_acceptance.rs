use std::fs;

use report::{render_console, render_html};
use schedule::{build_schedule, ScheduleConfig, TimestampMode};
use shared::domain::DayLabels;
use tempfile::TempDir;

const PROGRAM: &str = r#"[
    {"ID": 11, "Name": "Talk B", "Event_Start": "2019-06-19T09:00:00",
     "Event_End": "2019-06-19T10:30:00", "Venue": "Hall B", "Format": "Talk",
     "Event_Type": "Conference", "Speakers": "Bob Jones"},
    {"ID": 12, "Name": "Closing", "Event_Start": "2019-06-21T17:00:00",
     "Event_End": "2019-06-21T17:30:00", "Venue": "Amphi", "Speakers": "null null"},
    {"ID": 10, "Name": "Talk A", "Event_Start": "2019-06-19T09:00:00",
     "Event_End": "2019-06-19T10:30:00", "Venue": "Hall A", "Format": "Talk",
     "Event_Type": "Conference", "Speakers": "Alice Smith, null null, , Carol White"}
]"#;

const OTHERS: &str = r#"[
    {"ID": 20, "Name": "Lunch", "Event_Start": "2019-06-20T12:00:00",
     "Event_End": "2019-06-20T13:30:00", "Venue": "Hall"}
]"#;

fn config(dir: &TempDir) -> ScheduleConfig {
    let program = dir.path().join("program.json");
    let others = dir.path().join("program_others.json");
    fs::write(&program, PROGRAM).expect("program");
    fs::write(&others, OTHERS).expect("others");

    ScheduleConfig {
        inputs: vec![program, others],
        output: dir.path().join("index.html"),
        day_labels: DayLabels::shifted(),
        timestamp_mode: TimestampMode::Lenient,
    }
}

#[test]
fn same_slot_talks_share_a_group_ordered_by_venue() {
    let dir = TempDir::new().expect("tempdir");
    let schedule = build_schedule(&config(&dir)).expect("schedule");
    let groups = schedule.groups();

    assert_eq!(groups.len(), 3);
    let opening = &groups[0];
    assert_eq!(opening.day_label, "Me");
    assert_eq!((opening.start_hour, opening.start_minute), (9, 0));

    let names: Vec<&str> = opening.talks.iter().map(|t| t.raw.name.as_str()).collect();
    assert_eq!(names, vec!["Talk A", "Talk B"]);
    assert_eq!(opening.talks[0].duration_total, 90);
    assert_eq!(
        opening.talks[0].speakers,
        vec!["Alice Smith".to_string(), "Carol White".to_string()]
    );

    assert_eq!(groups[1].day_label, "Je");
    assert_eq!(groups[2].day_label, "Ve");
    assert!(groups[2].talks[0].speakers.is_empty());
    assert!(schedule.warnings.is_empty());
}

#[test]
fn console_has_one_sorted_line_per_talk_whatever_the_input_order() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = config(&dir);
    let forward = render_console(&build_schedule(&config).expect("schedule").talks);

    config.inputs.reverse();
    let reversed = render_console(&build_schedule(&config).expect("schedule").talks);

    assert_eq!(forward, reversed);
    let lines: Vec<&str> = forward.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("| Me 09:00 | 1:30 | Hall A "));
    assert!(lines[1].starts_with("| Me 09:00 | 1:30 | Hall B "));
    assert!(lines[2].starts_with("| Je 12:00 | 1:30 | Hall "));
    assert!(lines[3].starts_with("| Ve 17:00 | 0:30 | Amphi "));
}

#[test]
fn html_report_lists_first_speaker_in_summary_and_all_in_detail() {
    let dir = TempDir::new().expect("tempdir");
    let schedule = build_schedule(&config(&dir)).expect("schedule");
    let html = render_html(&schedule.groups());

    assert!(html.contains("<td colspan=\"5\">Me 09:00</td>"));
    assert!(html.contains("<td>Alice Smith</td>"));
    assert!(!html.contains("<td>Carol White</td>"));
    assert!(html.contains("<i>Alice Smith, Carol White</i>"));
}

#[test]
fn unparseable_file_fails_the_whole_build() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir);
    fs::write(&config.inputs[1], "{not json").expect("corrupt");

    assert!(build_schedule(&config).is_err());
}
