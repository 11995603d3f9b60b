use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::builtin_themes;
use crate::config::types::{AppConfig, Theme};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "ISSUE_TABLE_CONFIG";

/// Wrapper used to parse a theme-only TOML file (contains only `[theme.*]`).
#[derive(Deserialize, Default)]
struct ThemeFile {
    #[serde(default)]
    theme: Theme,
}

/// Discover and load the app config.
///
/// Priority:
/// 1. `--config` flag (explicit path)
/// 2. `$ISSUE_TABLE_CONFIG`
/// 3. `$XDG_CONFIG_HOME/issue-table/config.toml`
/// 4. `~/.config/issue-table/config.toml`
///
/// Falls back to built-in defaults when no file is found.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit_path {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(|name| std::env::var(name).ok()),
    };

    let mut config = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config_file(&path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            AppConfig::default()
        }
    };

    apply_theme_file(&mut config)?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parsing TOML from {}", path.display()))
}

/// If `config.theme_file` is set, load it as the base theme.
///
/// Inline `[theme.*]` in the config always wins over the file theme.
fn apply_theme_file(config: &mut AppConfig) -> Result<()> {
    let Some(theme_file) = config.theme_file.clone() else {
        return Ok(());
    };

    let file_theme: ThemeFile = if let Some(name) = theme_file.strip_prefix("builtin:") {
        let src = builtin_themes::get(name).with_context(|| {
            let names = builtin_themes::list().join(", ");
            format!("unknown built-in theme {name:?}; available: {names}")
        })?;
        toml::from_str(src).with_context(|| format!("parsing built-in theme {name:?}"))?
    } else {
        let path = expand_tilde(&theme_file);
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("reading theme file {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("parsing theme file {theme_file:?}"))?
    };

    let inline = std::mem::take(&mut config.theme);
    config.theme = Theme::merge(file_theme.theme, inline);
    Ok(())
}

/// Walk the discovery chain using `var` to read environment variables.
fn discover_config(var: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let candidates = [
        var(CONFIG_ENV).map(PathBuf::from),
        var("XDG_CONFIG_HOME").map(|xdg| PathBuf::from(xdg).join("issue-table/config.toml")),
        var("HOME").map(|home| PathBuf::from(home).join(".config/issue-table/config.toml")),
    ];
    candidates.into_iter().flatten().find(|p| p.is_file())
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(path)
}
