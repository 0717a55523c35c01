use std::path::Path;

use stampr_config::Config;

/// Effective config: a JSON profile if one is given, the environment
/// otherwise, with the CLI margin override applied last.
pub fn load_config(path: Option<&Path>, bottom_margin: Option<u32>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)?,
        None => {
            tracing::debug!("No config profile given, reading environment");
            Config::new()
        }
    };

    if let Some(margin) = bottom_margin {
        tracing::info!("Bottom margin overridden to {}px", margin);
        config.crop = config.crop.with_bottom_margin(margin);
    }

    Ok(config)
}

pub fn render_config(config: &Config) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
