/// Look up a built-in theme by name, returning its TOML source.
///
/// Theme names correspond to files in `themes/`. Pass a bare name (e.g.
/// `"dracula"`), not the full filename.
pub fn get(name: &str) -> Option<&'static str> {
    match name {
        "dracula" => Some(include_str!("../../themes/dracula.toml")),
        "nord" => Some(include_str!("../../themes/nord.toml")),
        "plain-16" => Some(include_str!("../../themes/plain-16.toml")),
        "solarized-light" => Some(include_str!("../../themes/solarized-light.toml")),
        _ => None,
    }
}

/// List all built-in theme names in alphabetical order.
pub fn list() -> &'static [&'static str] {
    &["dracula", "nord", "plain-16", "solarized-light"]
}
