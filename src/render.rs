//! Terminal rendering for ews-core types.

use clap::ValueEnum;
use ews_core::{SerializableTimeZone, TransitionRule};
use owo_colors::OwoColorize;

/// Output format for resolved time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Xml,
}

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for TransitionRule {
    fn render(&self) -> String {
        let year = match self.year_string() {
            Some(year) => year,
            None => "yearly".dimmed().to_string(),
        };
        format!(
            "{} {:02}-{:02} ({}) {}, bias {:+} min",
            year,
            self.month,
            self.day_of_month,
            self.day_of_week,
            self.time_string(),
            self.offset_delta_minutes
        )
    }
}

impl Render for SerializableTimeZone {
    fn render(&self) -> String {
        let mut lines = vec![format!("  Bias:     {} min", self.bias)];
        if self.is_fixed() {
            lines.push(format!("  {}", "No daylight saving time".dimmed()));
        }
        lines.push(format!("  {} {}", "Standard:".cyan(), self.standard_time.render()));
        lines.push(format!("  {} {}", "Daylight:".yellow(), self.daylight_time.render()));
        lines.join("\n")
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
