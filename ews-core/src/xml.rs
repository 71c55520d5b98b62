//! Rendering time zones as EWS wire XML.

use std::io::{Cursor, Write};

use quick_xml::Writer;
use quick_xml::events::BytesText;

use crate::error::EwsResult;
use crate::ns::{TYPES_NS_URI, TYPES_PREFIX, types_name};
use crate::timezone::{SerializableTimeZone, TransitionRule};

/// Write `tz` as a `t:TimeZone` element.
///
/// The element declares the types namespace itself so it can be embedded
/// in a request body or written on its own.
pub fn write_time_zone<W: Write>(
    writer: &mut Writer<W>,
    tz: &SerializableTimeZone,
) -> EwsResult<()> {
    let xmlns = format!("xmlns:{}", TYPES_PREFIX);
    writer
        .create_element(&types_name("TimeZone").prefixed())
        .with_attribute((xmlns.as_str(), TYPES_NS_URI))
        .write_inner_content(|w| {
            write_text(w, "Bias", &tz.bias.to_string())?;
            write_rule(w, "StandardTime", &tz.standard_time)?;
            write_rule(w, "DaylightTime", &tz.daylight_time)?;
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

/// Render `tz` as an indented, standalone `t:TimeZone` document.
pub fn to_xml_string(tz: &SerializableTimeZone) -> EwsResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    write_time_zone(&mut writer, tz)?;
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_rule<W: Write>(
    writer: &mut Writer<W>,
    element: &str,
    rule: &TransitionRule,
) -> quick_xml::Result<()> {
    writer
        .create_element(&types_name(element).prefixed())
        .write_inner_content(|w| {
            write_text(w, "Bias", &rule.offset_delta_minutes.to_string())?;
            write_text(w, "Time", &rule.time_string())?;
            write_text(w, "DayOrder", &rule.day_of_month.to_string())?;
            write_text(w, "Month", &rule.month.to_string())?;
            write_text(w, "DayOfWeek", rule.day_of_week.as_str())?;
            if let Some(year) = rule.year_string() {
                write_text(w, "Year", &year)?;
            }
            Ok::<(), quick_xml::Error>(())
        })?;
    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, element: &str, text: &str) -> quick_xml::Result<()> {
    writer
        .create_element(&types_name(element).prefixed())
        .write_text_content(BytesText::new(text))?;
    Ok(())
}
