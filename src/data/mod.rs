pub mod settings;
pub mod spectrum;
