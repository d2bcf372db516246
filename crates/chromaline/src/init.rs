//! Logging setup.

/// Installs `env_logger` as the `log` backend.
///
/// Output is controlled through `RUST_LOG`, e.g.
/// `RUST_LOG=chromaline_core=debug` to see clean and compose point counts.
/// Calling this more than once, or after another logger was installed, is
/// harmless.
pub fn init_logging() {
    let _ = env_logger::try_init();
    log::debug!("chromaline logging initialized");
}
