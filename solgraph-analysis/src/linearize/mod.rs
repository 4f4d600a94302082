//! C3 inheritance linearization.
//!
//! Consumed as a pure function over the collected base map. Each contract's
//! order starts with itself, followed by its ancestors merged monotonically
//! with the declared base list reversed, so the most-derived (rightmost
//! declared) base is nearest — Solidity's "closest override wins" order.
//! The entry at index 1, when present, is the `super` target.

use solgraph_core::errors::LinearizeError;
use solgraph_core::types::collections::{FxHashMap, FxHashSet};

use crate::collect::Declarations;

/// Contract name → linearized order, self first, most-derived-first.
pub type Linearization = FxHashMap<String, Vec<String>>;

/// Linearize every collected contract.
///
/// Bases never declared in the input set linearize as single-entry leaves
/// (external dependencies). A cycle or an unmergeable hierarchy is fatal —
/// malformed source is surfaced, not silently broken.
pub fn linearize(decls: &Declarations) -> Result<Linearization, LinearizeError> {
    let mut memo = Linearization::default();
    let mut visiting = FxHashSet::default();
    for name in decls.contracts.keys() {
        linearize_contract(name, decls, &mut memo, &mut visiting)?;
    }
    Ok(memo)
}

fn linearize_contract(
    name: &str,
    decls: &Declarations,
    memo: &mut Linearization,
    visiting: &mut FxHashSet<String>,
) -> Result<(), LinearizeError> {
    if memo.contains_key(name) {
        return Ok(());
    }
    if !visiting.insert(name.to_string()) {
        return Err(LinearizeError::Cycle {
            contract: name.to_string(),
        });
    }

    // Reverse the declared base order: Solidity linearizes right-to-left.
    let bases: Vec<String> = decls
        .get(name)
        .map(|decl| decl.bases.iter().rev().cloned().collect())
        .unwrap_or_default();

    let mut sequences: Vec<Vec<String>> = Vec::with_capacity(bases.len() + 1);
    for base in &bases {
        linearize_contract(base, decls, memo, visiting)?;
        if let Some(order) = memo.get(base) {
            sequences.push(order.clone());
        }
    }
    if !bases.is_empty() {
        sequences.push(bases);
    }

    let mut order = vec![name.to_string()];
    match merge(sequences) {
        Some(rest) => order.extend(rest),
        None => {
            return Err(LinearizeError::Inconsistent {
                contract: name.to_string(),
            })
        }
    }

    visiting.remove(name);
    memo.insert(name.to_string(), order);
    Ok(())
}

/// C3 merge: repeatedly take the first head that appears in no sequence
/// tail. Returns `None` when no such head exists (inconsistent hierarchy).
fn merge(mut sequences: Vec<Vec<String>>) -> Option<Vec<String>> {
    let mut out = Vec::new();
    sequences.retain(|seq| !seq.is_empty());
    while !sequences.is_empty() {
        let head = sequences.iter().find_map(|seq| {
            let candidate = &seq[0];
            let in_a_tail = sequences
                .iter()
                .any(|other| other[1..].contains(candidate));
            (!in_a_tail).then(|| candidate.clone())
        })?;
        for seq in &mut sequences {
            seq.retain(|entry| entry != &head);
        }
        sequences.retain(|seq| !seq.is_empty());
        out.push(head);
    }
    Some(out)
}
