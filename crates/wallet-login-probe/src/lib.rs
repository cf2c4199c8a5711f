/*
[INPUT]:  Public API exports for wallet-login-probe crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod report;

// Re-export main types for convenience
pub use config::{Overrides, ProbeConfig};
