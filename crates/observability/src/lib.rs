//! Tracing setup shared by the storefront and its tests.

/// Subscriber installation (native JSON, browser console).
pub mod subscriber;

#[cfg(target_arch = "wasm32")]
pub mod console;

/// Default filter directive when neither `RUST_LOG` nor a caller directive is set.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Initialize process-wide tracing from `RUST_LOG` (default `info`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init(None);
}

/// Initialize with an explicit filter directive, e.g. from storefront config.
pub fn init_with(directive: &str) {
    subscriber::init(Some(directive));
}
