//! Configuration and connection validation commands.

use std::path::Path;
use std::time::Instant;

use crate::adapter::CrmApiClient;
use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate the configuration file without touching the network.
pub fn config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();

    if !path.exists() {
        output::note(&format!(
            "No config file at {}; built-in defaults apply.",
            path.display()
        ));
    } else {
        println!("Checking configuration: {}", path.display());
    }

    match Config::load_or_default(path) {
        Ok(config) => {
            output::ok("Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Backend:   {}", config.api.base_url);
            println!("  Timeout:   {}s", config.api.timeout_secs);
            println!("  Data dir:  {}", config.storage.data_dir().display());
            println!("  Logging:   {} ({})", config.logging.level, config.logging.format);

            if config.api.api_key.is_some() {
                output::ok("API key configured");
            } else {
                output::warn("No API key set; the backend may reject requests");
                println!("  Set the COHORT_API_KEY environment variable");
            }
            Ok(())
        }
        Err(e) => {
            output::error(&format!("Configuration error: {e}"));
            std::process::exit(1);
        }
    }
}

/// Probe CRM backend connectivity.
pub async fn connection(config: &Config) -> Result<()> {
    println!("Checking backend: {}", config.api.base_url);

    let client = CrmApiClient::new(&config.api)?;
    let started = Instant::now();
    match client.health().await {
        Ok(()) => {
            output::ok(&format!(
                "Backend reachable ({} ms)",
                started.elapsed().as_millis()
            ));
        }
        Err(e) => {
            output::error(&format!("Backend unreachable: {e}"));
            output::note("Segment commands will fall back to local estimates and storage.");
            std::process::exit(1);
        }
    }
    Ok(())
}
