//! Configuration management commands.

use console::style;

use crate::cli::icons::arrow;
use crate::config::{Config, Settings};
use crate::utils::format_size;

/// Print the effective configuration with secrets redacted.
pub fn cmd_config_show(config: &Config, settings: &Settings) -> anyhow::Result<()> {
    let source = config
        .source_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "none (defaults and environment)".to_string());

    println!("{} Config file: {}", arrow(), source);
    println!("  {} {}", style("user agent:").dim(), settings.user_agent);
    println!(
        "  {} {}s",
        style("request timeout:").dim(),
        settings.request_timeout
    );
    println!(
        "  {} {}",
        style("max upload:").dim(),
        format_size(settings.max_upload_bytes as u64)
    );
    println!();

    let rendered = config.to_display_toml().map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", rendered);
    Ok(())
}
