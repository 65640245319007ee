//! Concurrency management for astgraph.
//! Sizes the thread pool used for batch visualization.

use anyhow::Result;
use tracing::info;

/// Initialize the global rayon thread pool with controlled worker count.
/// Uses half of the available cores, minimum 1 worker.
pub fn init_thread_pool() -> Result<usize> {
    let cores = num_cpus::get();
    let workers = std::cmp::max(1, cores / 2);

    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()?;

    info!(workers, cores, "initialized thread pool");

    Ok(workers)
}
