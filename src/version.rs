// Package identity baked in at build time; stamped into the page and the JSON export.

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// "name version", e.g. for `<meta name="generator">`.
pub fn generator_tag() -> String {
    format!("{NAME} {VERSION}")
}
