use anyhow::Result;
use chrono_tz::Tz;
use ews_core::timezone;

pub fn run(zone: Tz) -> Result<()> {
    let windows_id = timezone::windows_id_for(&zone)?;
    println!("{}", windows_id);
    Ok(())
}
