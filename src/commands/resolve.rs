use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use ews_core::{timezone, xml};
use owo_colors::OwoColorize;

use crate::render::{Format, Render};

pub fn run(zone: Tz, at: Option<&str>, format: Format) -> Result<()> {
    let reference = match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("Invalid instant '{}'. Expected RFC 3339, e.g. 2013-08-20T14:39:38Z", s))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let resolved = timezone::resolve(&zone, reference)?;

    match format {
        Format::Text => {
            println!("{} {}", zone.name().bold(), format!("as of {}", reference.to_rfc3339()).dimmed());
            println!("{}", resolved.render());
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        Format::Xml => println!("{}", xml::to_xml_string(&resolved)?),
    }

    Ok(())
}
