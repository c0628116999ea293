pub mod ai;
pub mod chat;
pub mod format;
pub mod profile;
pub mod render;
pub mod settings;
