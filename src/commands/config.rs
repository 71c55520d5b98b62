use anyhow::Result;
use ews_core::EwsResult;
use ews_core::config::EwsConfig;
use owo_colors::OwoColorize;

pub fn run(config: EwsResult<EwsConfig>, init: bool) -> Result<()> {
    let config_path = EwsConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("{}", "Config file already exists, leaving it untouched".dimmed());
        } else {
            EwsConfig::create_default_config(&config_path)?;
            println!("{} {}", "Created".green(), config_path.display());
        }
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("{}", "Settings".bold());

    for (name, value) in settings(&config) {
        println!("  {:<11} {}", format!("{}:", name), value);
    }

    if config.is_err() {
        println!("  {}", "Fix or remove the config file to use the defaults".dimmed());
    }

    Ok(())
}

/// Settings as (name, value) rows. A config that failed to load gets a single error row.
fn settings(config: &EwsResult<EwsConfig>) -> Vec<(&'static str, String)> {
    let config = match config {
        Ok(config) => config,
        Err(e) => return vec![("Error", e.red().to_string())],
    };

    let zone = match &config.time_zone {
        Some(id) => id.clone(),
        None => match config.zone() {
            Ok(tz) => format!("{} (system)", tz.name()),
            Err(e) => format!("unknown ({})", e),
        },
    };

    vec![("Time zone", zone), ("Log filter", config.log_filter.clone())]
}

#[cfg(test)]
mod tests {
    use ews_core::EwsError;

    use super::*;

    #[test]
    fn test_settings_for_loaded_config() {
        let config = Ok(EwsConfig {
            time_zone: Some("Europe/Dublin".into()),
            log_filter: "info".into(),
        });

        assert_eq!(
            settings(&config),
            vec![
                ("Time zone", "Europe/Dublin".to_string()),
                ("Log filter", "info".to_string()),
            ]
        );
    }

    #[test]
    fn test_malformed_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "time_zone = [").unwrap();

        let config = EwsConfig::load_from(&path);
        assert!(matches!(config, Err(EwsError::Config(_))));

        let rows = settings(&config);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Error");
        assert!(rows[0].1.contains("config.toml"), "Expected the path, got {}", rows[0].1);
    }
}
