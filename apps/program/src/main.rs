use std::{io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use report::{render_html, write_html};
use schedule::{build_schedule, ScheduleConfig};
use shared::domain::DayLabels;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::{load_settings, timestamp_mode};

#[derive(Parser, Debug)]
#[command(about = "Render the conference schedule as a static HTML page")]
struct Args {
    /// Settings file, defaults to ./program.toml when present.
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Schedule export to read; repeat for several files.
    #[arg(long = "input")]
    inputs: Vec<PathBuf>,
    #[arg(long)]
    output: Option<PathBuf>,
    /// Day label preset: `default` or `shifted`.
    #[arg(long)]
    day_labels: Option<String>,
    /// Reject malformed timestamps instead of reading them as zero.
    #[arg(long)]
    strict: bool,
    #[arg(long)]
    no_console: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut config = load_settings(args.settings.as_deref())?;
    apply_args(&mut config, &args)?;

    run(&config, !args.no_console)
}

fn apply_args(config: &mut ScheduleConfig, args: &Args) -> Result<()> {
    if !args.inputs.is_empty() {
        config.inputs = args.inputs.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(name) = &args.day_labels {
        let Some(labels) = DayLabels::preset(name) else {
            bail!("unknown day label preset '{name}', expected 'default' or 'shifted'");
        };
        config.day_labels = labels;
    }
    if args.strict {
        config.timestamp_mode = timestamp_mode(true);
    }
    Ok(())
}

/// Load, compute and render; the HTML file is only written once everything succeeded.
fn run(config: &ScheduleConfig, print_console: bool) -> Result<()> {
    let schedule = build_schedule(config).context("failed to build schedule")?;
    let groups = schedule.groups();
    let html = render_html(&groups);

    if print_console {
        report::print_console(&schedule.talks, io::stdout().lock())
            .context("failed to print schedule to stdout")?;
    }
    write_html(&config.output, &html)?;

    info!(
        output = %config.output.display(),
        talks = schedule.talks.len(),
        groups = groups.len(),
        warnings = schedule.warnings.len(),
        "report written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use schedule::TimestampMode;
    use tempfile::TempDir;

    use super::*;

    fn write_inputs(dir: &TempDir) -> (PathBuf, PathBuf) {
        let program = dir.path().join("program.json");
        let others = dir.path().join("program_others.json");
        fs::write(
            &program,
            r#"[
                {"ID": 2, "Name": "Second", "Event_Start": "2018-03-20T09:00:00",
                 "Event_End": "2018-03-20T10:00:00", "Venue": "Hall B", "Speakers": "Bob Jones",
                 "Description": "one\n\ntwo"},
                {"ID": 1, "Name": "First", "Event_Start": "2018-03-20T09:00:00",
                 "Event_End": "2018-03-20T10:30:00", "Venue": "Hall A",
                 "Speakers": "Alice Smith, null null"}
            ]"#,
        )
        .expect("program");
        fs::write(
            &others,
            r#"[{"ID": 3, "Name": "Lunch <3", "Event_Start": "2018-03-20T12:00:00",
                "Event_End": "2018-03-20T13:30:00", "Venue": "Hall"}]"#,
        )
        .expect("others");
        (program, others)
    }

    #[test]
    fn run_writes_grouped_report() {
        let dir = TempDir::new().expect("tempdir");
        let (program, others) = write_inputs(&dir);
        let config = ScheduleConfig {
            inputs: vec![program, others],
            output: dir.path().join("index.html"),
            ..ScheduleConfig::default()
        };

        run(&config, false).expect("run");

        let html = fs::read_to_string(&config.output).expect("report");
        assert_eq!(html.matches("<h2>").count(), 2);
        assert!(html.contains("<h2>Me 09:00</h2>"));
        assert!(html.contains("<h2>Me 12:00</h2>"));
        assert!(html.find("<h3>First</h3>") < html.find("<h3>Second</h3>"));
        assert!(html.contains("<h3>Lunch &lt;3</h3>"));
        assert!(html.contains("<p class=\"desc\">one</p><p class=\"desc\">two</p>"));
    }

    #[test]
    fn failed_load_leaves_no_output() {
        let dir = TempDir::new().expect("tempdir");
        let (program, _) = write_inputs(&dir);
        let config = ScheduleConfig {
            inputs: vec![program, dir.path().join("missing.json")],
            output: dir.path().join("index.html"),
            ..ScheduleConfig::default()
        };

        assert!(run(&config, false).is_err());
        assert!(!config.output.exists());
    }

    #[test]
    fn command_line_overrides_settings() {
        let args = Args::try_parse_from([
            "program",
            "--input",
            "a.json",
            "--input",
            "b.json",
            "--output",
            "site/index.html",
            "--day-labels",
            "shifted",
            "--strict",
        ])
        .expect("args");

        let mut config = ScheduleConfig::default();
        apply_args(&mut config, &args).expect("apply");

        assert_eq!(
            config.inputs,
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        assert_eq!(config.output, PathBuf::from("site/index.html"));
        assert_eq!(config.day_labels, DayLabels::shifted());
        assert_eq!(config.timestamp_mode, TimestampMode::Strict);
    }

    #[test]
    fn unknown_preset_on_command_line_is_an_error() {
        let args = Args::try_parse_from(["program", "--day-labels", "lundi"]).expect("args");
        let mut config = ScheduleConfig::default();
        assert!(apply_args(&mut config, &args).is_err());
    }

    #[test]
    fn no_flags_keep_configured_values() {
        let args = Args::try_parse_from(["program"]).expect("args");
        let mut config = ScheduleConfig::default();
        apply_args(&mut config, &args).expect("apply");
        assert_eq!(config, ScheduleConfig::default());
    }
}
