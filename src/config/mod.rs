//! Configuration loaded from `.safevault.toml`.

pub mod settings;

pub use settings::Settings;
