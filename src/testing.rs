pub mod account_context;

/// Every pillar has something to report.
pub const EXPOSED_ACCOUNT: &str = include_str!("testing/fixtures/exposed_account.yaml");

/// Nothing to report anywhere.
pub const SECURE_ACCOUNT: &str = include_str!("testing/fixtures/secure_account.yaml");
