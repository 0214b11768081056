/// Errors raised while loading, saving or validating the configuration file.
pub mod configuration_error;
