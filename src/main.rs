use std::path::Path;

use anyhow::Context;
use map_clean::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load(Path::new(".")).context("Failed to load configuration")?;

    // Logs go to stderr; stdout only carries the completion message.
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    map_clean::run_pass(&config).with_context(|| {
        format!(
            "Sanitization pass failed ({} -> {})",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!("Complete");
    Ok(())
}
