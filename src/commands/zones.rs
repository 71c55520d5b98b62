use anyhow::Result;
use ews_core::timezone::WindowsZones;
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run() -> Result<()> {
    let zones = WindowsZones::global();

    for windows_id in zones.windows_ids() {
        let count = zones.standard_ids(windows_id)?.len();
        println!(
            "{} {}",
            windows_id,
            format!("({} {})", count, pluralize("zone", count)).dimmed()
        );
    }

    Ok(())
}
