use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use slotfinder_core::error::Result;
use slotfinder_core::{
    format_clock, CalendarFile, ClockStyle, Config, Event, MeetingQuery, MeetingRequest,
    OutputFormat, TimeRange,
};

#[derive(Args)]
pub struct FindArgs {
    /// Calendar file (.json or .toml) with the day's events
    #[arg(short, long)]
    calendar: PathBuf,
    /// Meeting length in minutes (defaults to query.default_duration)
    #[arg(short, long)]
    duration: Option<u32>,
    /// Attendees who must be free (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    mandatory: Vec<String>,
    /// Attendees who should be free if possible (comma separated)
    #[arg(short, long, value_delimiter = ',')]
    optional: Vec<String>,
    /// Print windows as JSON
    #[arg(long)]
    json: bool,
    /// Print times as minutes from midnight
    #[arg(long)]
    minutes: bool,
}

/// A window as printed in JSON output.
#[derive(Serialize)]
struct WindowRow {
    start: u32,
    end: u32,
    duration: u32,
}

impl From<&TimeRange> for WindowRow {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            duration: range.duration(),
        }
    }
}

pub fn run(args: FindArgs) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let events = load_events(&args.calendar)?;

    let request = MeetingRequest::new(
        args.duration.unwrap_or(config.query.default_duration),
        args.mandatory,
    )
    .with_optional(args.optional);

    let outcome = MeetingQuery::new().query_detailed(&events, &request);
    tracing::debug!(tier = outcome.tier.as_str(), "query answered");

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let clock = if args.minutes {
        ClockStyle::Minutes
    } else {
        config.output.clock
    };

    println!("{}", render(&outcome.windows, format, clock)?);
    Ok(())
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    Ok(CalendarFile::load(path)?.events)
}

fn render(windows: &[TimeRange], format: OutputFormat, clock: ClockStyle) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<WindowRow> = windows.iter().map(WindowRow::from).collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Text if windows.is_empty() => Ok("no available windows".to_string()),
        OutputFormat::Text => Ok(windows
            .iter()
            .map(|w| {
                let span = match clock {
                    ClockStyle::Hhmm => format!("{}-{}", format_clock(w.start()), format_clock(w.end())),
                    ClockStyle::Minutes => format!("{}-{}", w.start(), w.end()),
                };
                format!("{span} ({} min)", w.duration())
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: u32, end: u32) -> TimeRange {
        TimeRange::from_start_end(start, end).unwrap()
    }

    #[test]
    fn test_render_text_hhmm() {
        let out = render(
            &[range(0, 540), range(600, 1440)],
            OutputFormat::Text,
            ClockStyle::Hhmm,
        )
        .unwrap();
        assert_eq!(out, "00:00-09:00 (540 min)\n10:00-24:00 (840 min)");
    }

    #[test]
    fn test_render_text_minutes_and_empty() {
        let out = render(&[range(600, 700)], OutputFormat::Text, ClockStyle::Minutes).unwrap();
        assert_eq!(out, "600-700 (100 min)");

        let empty = render(&[], OutputFormat::Text, ClockStyle::Hhmm).unwrap();
        assert_eq!(empty, "no available windows");
    }

    #[test]
    fn test_render_json() {
        let out = render(&[range(600, 700)], OutputFormat::Json, ClockStyle::Hhmm).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{"start": 600, "end": 700, "duration": 100}])
        );

        let empty = render(&[], OutputFormat::Json, ClockStyle::Hhmm).unwrap();
        assert_eq!(empty, "[]");
    }
}
