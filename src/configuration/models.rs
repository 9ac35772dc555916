pub mod engine_settings;
