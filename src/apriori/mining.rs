use std::collections::HashMap;
use std::hash::Hash;

use rayon::prelude::*;

use super::error::MiningError;
use super::storage::{FrequentLattice, FrequentLevel};
use super::transactions::{SupportCounter, TransactionLog};

/// A size-k candidate awaiting counting, with the indices of its k
/// size-(k-1) subsets in the previous level.
struct Candidate {
    items: Vec<usize>,
    parents: Vec<usize>,
}

/// Level-wise Apriori search over a transaction log.
///
/// Level 1 counts every distinct item; level k joins pairs of frequent
/// (k-1)-itemsets sharing their first k-2 items, prunes candidates with
/// any infrequent (k-1)-subset, counts the survivors in parallel and
/// keeps those meeting the threshold. The search stops at the first
/// level that yields nothing. While filtering level k, an
/// immediate-superset edge is recorded from each of a surviving
/// candidate's subsets, which is all the closed/maximal extractors need.
pub fn mine_frequent_itemsets<I>(
    log: &TransactionLog<I>,
    min_support: f64,
) -> Result<FrequentLattice, MiningError>
where
    I: Clone + Eq + Hash + Ord,
{
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MiningError::InvalidThreshold(min_support));
    }

    let counter = SupportCounter::new(log);
    let num_transactions = counter.num_transactions();
    let min_count = ((min_support * num_transactions as f64).ceil() as usize).max(1);

    // Level 1: item ids ascending keeps the level lexicographically sorted.
    let mut level1 = FrequentLevel::new(1);
    for item in 0..log.num_items() {
        let count = counter.item_count(item);
        if count >= min_count {
            level1.add_itemset(vec![item], count);
        }
    }

    let mut levels = vec![level1];
    loop {
        let prev = levels.last().expect("at least level 1 exists");
        let candidates = generate_candidates(prev);
        if candidates.is_empty() {
            break;
        }

        // Each worker returns its own tally; nothing shared is mutated.
        let counted: Vec<usize> = candidates
            .par_iter()
            .map(|candidate| counter.count(&candidate.items))
            .collect::<Result<_, _>>()?;

        let mut next = FrequentLevel::new(prev.itemset_size + 1);
        let prev = levels.last_mut().expect("at least level 1 exists");
        for (candidate, count) in candidates.into_iter().zip(counted) {
            if count >= min_count {
                let child = next.add_itemset(candidate.items, count);
                for &parent in &candidate.parents {
                    prev.add_child(parent, child);
                }
            }
        }

        if next.is_empty() {
            break;
        }
        levels.push(next);
    }

    Ok(FrequentLattice::new(levels, num_transactions))
}

/// Join + prune step: candidates of size k from the frequent level of
/// size k-1.
///
/// The level is lexicographically sorted, so itemsets sharing their
/// first k-2 items form contiguous runs and every size-k union is
/// produced by exactly one pair; candidates come out in lexicographic
/// order themselves, preserving the sort invariant for the next level.
fn generate_candidates(prev: &FrequentLevel) -> Vec<Candidate> {
    let index: HashMap<&[usize], usize> = (0..prev.len())
        .map(|idx| (prev.get_itemset(idx), idx))
        .collect();

    let k = prev.itemset_size + 1;
    let mut candidates = Vec::new();
    let mut subset = Vec::with_capacity(k - 1);

    for i in 0..prev.len() {
        let left = prev.get_itemset(i);
        for j in (i + 1)..prev.len() {
            let right = prev.get_itemset(j);
            // Runs of equal prefixes are contiguous; past them, stop.
            if left[..k - 2] != right[..k - 2] {
                break;
            }

            let mut items = left.to_vec();
            items.push(right[k - 2]);

            // Anti-monotonicity pruning: every (k-1)-subset must itself
            // be frequent. The subsets found here are exactly the
            // candidate's lattice parents.
            let mut parents = Vec::with_capacity(k);
            let frequent_subsets = (0..k).all(|omit| {
                subset.clear();
                subset.extend(
                    items
                        .iter()
                        .enumerate()
                        .filter(|&(pos, _)| pos != omit)
                        .map(|(_, &item)| item),
                );
                match index.get(subset.as_slice()) {
                    Some(&parent) => {
                        parents.push(parent);
                        true
                    }
                    None => false,
                }
            });

            if frequent_subsets {
                candidates.push(Candidate { items, parents });
            }
        }
    }

    candidates
}
