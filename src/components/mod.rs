pub mod footer;
pub mod help_overlay;
pub mod table;
