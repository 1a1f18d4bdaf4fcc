//! Golden hash vectors, checked through the public Keyspace API.
//!
//! Every release must hash these sequences to exactly these values: indexes
//! persisted by consumers depend on them.

use codepoint_kernel::{HashScheme, KernelConfig, Keyspace};
use codepoint_kernel_testkit::vectors::all_vectors;

fn keyspace(scheme: HashScheme) -> Keyspace {
    Keyspace::new(KernelConfig {
        hash_scheme: scheme,
        ..KernelConfig::default()
    })
}

#[test]
fn golden_vectors_folded() -> anyhow::Result<()> {
    let ks = keyspace(HashScheme::Folded);
    for v in all_vectors() {
        let key = ks.key(v.elements.to_vec())?;
        assert_eq!(ks.hash(&key), v.folded, "vector {}", v.name);
    }
    Ok(())
}

#[test]
fn golden_vectors_legacy() -> anyhow::Result<()> {
    let ks = keyspace(HashScheme::Legacy);
    for v in all_vectors() {
        let key = ks.key(v.elements.to_vec())?;
        assert_eq!(ks.hash(&key), v.legacy, "vector {}", v.name);
    }
    Ok(())
}

#[test]
fn golden_vectors_are_stable_across_calls() -> anyhow::Result<()> {
    let ks = keyspace(HashScheme::Folded);
    for v in all_vectors() {
        let key = ks.key(v.elements.to_vec())?;
        let first = ks.hash(&key);
        assert_eq!(ks.hash(&key), first, "vector {}", v.name);
        assert_eq!(ks.hash(&key.clone()), first, "vector {}", v.name);
    }
    Ok(())
}
