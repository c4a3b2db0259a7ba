//! Process-wide switch for rayon-backed tree construction.
//!
//! Without the `parallel` feature every helper here is inert and
//! [`parallelism_enabled`] always reports `false`.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
static PARALLEL_ENABLED: AtomicBool = AtomicBool::new(true);

/// Levels with fewer pairs than this are hashed sequentially.
pub const MIN_PARALLEL_PAIRS: usize = 256;

const DEFAULT_CHUNK_SIZE: usize = 64;

/// Number of pairs handed to a single rayon task.
pub fn preferred_chunk_size(total_pairs: usize) -> usize {
    if total_pairs == 0 {
        1
    } else {
        DEFAULT_CHUNK_SIZE.min(total_pairs)
    }
}

/// Whether a level holding `pairs` parent computations should fan out.
pub fn should_parallelize(pairs: usize) -> bool {
    parallelism_enabled() && pairs >= MIN_PARALLEL_PAIRS
}

#[cfg(feature = "parallel")]
pub fn parallelism_enabled() -> bool {
    PARALLEL_ENABLED.load(Ordering::SeqCst)
}

#[cfg(not(feature = "parallel"))]
pub fn parallelism_enabled() -> bool {
    false
}

/// Overrides the switch until the returned guard is dropped.
#[cfg(feature = "parallel")]
pub fn set_parallelism(enabled: bool) -> ParallelismGuard {
    let previous = PARALLEL_ENABLED.swap(enabled, Ordering::SeqCst);
    ParallelismGuard { previous }
}

#[cfg(not(feature = "parallel"))]
pub fn set_parallelism(_enabled: bool) -> ParallelismGuard {
    ParallelismGuard {}
}

/// Restores the previous setting on drop.
pub struct ParallelismGuard {
    #[cfg(feature = "parallel")]
    previous: bool,
}

#[cfg(feature = "parallel")]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {
        PARALLEL_ENABLED.store(self.previous, Ordering::SeqCst);
    }
}

#[cfg(not(feature = "parallel"))]
impl Drop for ParallelismGuard {
    fn drop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_size_is_never_zero() {
        assert_eq!(preferred_chunk_size(0), 1);
        assert_eq!(preferred_chunk_size(3), 3);
        assert_eq!(preferred_chunk_size(10_000), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn small_levels_stay_sequential() {
        assert!(!should_parallelize(MIN_PARALLEL_PAIRS - 1));
    }
}
