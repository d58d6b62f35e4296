//! Build-time identity of this library.

/// Library name as published.
pub fn name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

/// Full semantic version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn version_major() -> u32 {
    env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0)
}

pub fn version_minor() -> u32 {
    env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0)
}

pub fn version_patch() -> u32 {
    env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0)
}
