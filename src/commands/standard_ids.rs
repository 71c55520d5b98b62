use anyhow::Result;
use ews_core::timezone;

pub fn run(windows_id: &str) -> Result<()> {
    for standard_id in timezone::standard_ids(windows_id)? {
        println!("{}", standard_id);
    }
    Ok(())
}
