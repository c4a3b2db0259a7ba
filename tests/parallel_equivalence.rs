#![cfg(feature = "parallel")]

mod _fixtures;

use _fixtures::counter_leaves;
use merkle_drop::hash::{Blake2sHasher, Keccak256Hasher};
use merkle_drop::merkle::{MerkleHasher, MerkleTree};
use merkle_drop::utils::{parallelism_enabled, set_parallelism};
use std::sync::{Mutex, MutexGuard};

/// The parallelism switch is process-wide; tests that flip it hold this lock.
static TOGGLE_LOCK: Mutex<()> = Mutex::new(());

fn lock_toggle() -> MutexGuard<'static, ()> {
    TOGGLE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn sequential_and_parallel<H: MerkleHasher>(count: usize) -> (MerkleTree<H>, MerkleTree<H>) {
    let _lock = lock_toggle();
    let leaves = counter_leaves(count);
    let baseline = {
        let _guard = set_parallelism(false);
        MerkleTree::<H>::new(leaves.clone()).expect("sequential build")
    };
    let _guard = set_parallelism(true);
    let parallel = MerkleTree::<H>::new(leaves).expect("parallel build");
    (baseline, parallel)
}

#[test]
fn merkle_parallel_matches_sequential() {
    // Odd widths at several levels and well past the fan-out threshold.
    for count in [1, 3, 511, 513, 1_000, 4_097] {
        let (baseline, parallel) = sequential_and_parallel::<Keccak256Hasher>(count);
        assert_eq!(baseline.root(), parallel.root(), "count {count}");
        for depth in 0..=baseline.depth() {
            assert_eq!(baseline.level(depth), parallel.level(depth));
        }
    }
}

#[test]
fn blake2s_parallel_matches_sequential() {
    let (baseline, parallel) = sequential_and_parallel::<Blake2sHasher>(2_049);
    assert_eq!(baseline.root(), parallel.root());
    assert_eq!(baseline.proof(2_048).unwrap(), parallel.proof(2_048).unwrap());
}

#[test]
fn guards_restore_the_switch() {
    let _lock = lock_toggle();
    assert!(parallelism_enabled());
    {
        let _outer = set_parallelism(false);
        assert!(!parallelism_enabled());
        {
            let _inner = set_parallelism(true);
            assert!(parallelism_enabled());
        }
        assert!(!parallelism_enabled());
    }
    assert!(parallelism_enabled());
}
