#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// This works on std and no_std and is harmless.
extern crate alloc;

// Exports some symbols publicly so that downstream crates building nodes by
// hand can refer to the same allocation types.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, fmt, format, string::String, string::ToString, vec, vec::Vec};
}

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod api;
pub mod ast;
pub mod codegen;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see every emitted
    /// instruction and register allocation.
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_call_lowering() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
