//! One-time runtime setup
//!
//! The engine itself is stateless; the only process-wide resource is the
//! worker pool that large sorts fan out over. `initialize` builds it once.
//! Calling it again (or from several threads at once) is a no-op: the
//! first call wins.

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::{EngineError, Result};

static INIT: OnceCell<()> = OnceCell::new();

/// Perform one-time engine setup.
///
/// Builds the global worker pool used by large `order_by` calls.
/// Idempotent and race-safe. If the host application already built a
/// global pool of its own, that pool is reused and this still succeeds.
/// A genuine setup failure surfaces as [`EngineError::InitFailure`] and
/// may be retried.
pub fn initialize() -> Result<()> {
    INIT.get_or_try_init(|| {
        let threads = std::thread::available_parallelism()
            .map_err(|e| EngineError::InitFailure(e.to_string()))?
            .get();

        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("fasterdash-{}", i))
            .build_global()
        {
            Ok(()) => {
                debug!(threads, "worker pool initialized");
            }
            Err(_) => {
                // The only way build_global fails after the once-guard is
                // that the host installed its own global pool first.
                debug!("global worker pool already present, reusing it");
            }
        }
        Ok(())
    })?;
    Ok(())
}

/// Whether `initialize` has completed successfully.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}
