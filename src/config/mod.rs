pub mod builtin_themes;
pub mod keybindings;
pub mod loader;
pub mod types;
