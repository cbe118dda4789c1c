//! Backtracking enumeration of valid section combinations.
//!
//! Given a candidate pool of sections (already filtered to the requested
//! course codes and term), the search produces every subset that satisfies
//! both scheduling invariants:
//!
//! 1. **No overlap** — no two sections in the subset conflict in time.
//! 2. **One per course** — no two sections share a course key.
//!
//! The output deliberately includes every valid *partial* selection — the
//! empty set and every strict subset of a larger valid combination — not only
//! maximal ones. Callers wanting complete timetables apply a minimum-size
//! filter on the result; the `horaire` CLI keeps combinations with
//! `len >= number of requested courses`.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::overlap::sections_overlap;
use crate::section::{Section, UNPARSED_MINUTES};

/// A valid combination of sections (a candidate timetable).
///
/// Identity is the set of member identifiers: two combinations are equal iff
/// their identifier sets are equal, regardless of discovery order. The
/// `identifiers` vector is always sorted ascending, which makes it directly
/// usable as a deduplication key and gives serialized output a stable shape;
/// a combination serializes transparently as that bare identifier array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Combination {
    /// Member section identifiers, sorted ascending.
    pub identifiers: Vec<String>,
}

impl Combination {
    /// Build a combination from identifiers in any order; they are sorted.
    pub fn new(mut identifiers: Vec<String>) -> Self {
        identifiers.sort();
        Self { identifiers }
    }

    /// Number of sections in the combination.
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Whether this is the empty combination.
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Result of a budgeted search: the combinations found, plus a flag telling
/// the caller whether the node budget ran out before the search space was
/// exhausted. Truncation is never silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Deduplicated combinations, in ascending identifier-sequence order.
    pub combinations: Vec<Combination>,
    /// True iff the budget was exhausted and results may be incomplete.
    pub truncated: bool,
}

/// Enumerate every valid combination of the given sections.
///
/// The result is deduplicated (by identifier-set equality) and sorted, and
/// contains **all** overlap-free, one-per-course subsets of the input — the
/// empty combination and every partial selection included. Re-running on the
/// same sections in any order yields the same set.
///
/// # Preconditions
///
/// Each section must have a non-empty `slots` list; the engine does not
/// defend against empty ones, and their behavior is unspecified. Sections are
/// expected to be pre-filtered to the requested course codes — no re-filtering
/// happens here.
///
/// # Complexity
///
/// Worst case exponential in the number of distinct course keys (bounded by
/// the product over course keys of 1 + the number of alternate sections).
/// Callers needing bounded latency should use [`find_schedules_budgeted`].
///
/// # Examples
/// ```
/// use horaire_engine::{find_schedules, Section, TimeSlot};
///
/// let algebra = Section::new(
///     "MAT1000-automne2025-A",
///     vec![TimeSlot::new("Lundi", 600, 660)],
/// );
/// let logic = Section::new(
///     "INF1120-automne2025-A",
///     vec![TimeSlot::new("Mardi", 600, 660)],
/// );
///
/// // Compatible sections: {}, each singleton, and the pair.
/// let combos = find_schedules(&[algebra, logic]);
/// assert_eq!(combos.len(), 4);
/// ```
pub fn find_schedules(sections: &[Section]) -> Vec<Combination> {
    find_schedules_budgeted(sections, None).combinations
}

/// Enumerate valid combinations under an optional node budget.
///
/// Identical to [`find_schedules`], but visits at most `budget` recursion
/// nodes when `Some(budget)` is given. When the budget runs out the search
/// stops and `truncated` is set — combinations found so far are returned, so
/// the result is a subset of the unbudgeted one. A budget of zero yields no
/// combinations at all (not even the empty one). `None` never truncates.
pub fn find_schedules_budgeted(sections: &[Section], budget: Option<usize>) -> SearchOutcome {
    // Traversal heuristic only: explore sections in ascending order of their
    // first slot's start time. Stable, so ties keep input order. The final
    // result set does not depend on this ordering.
    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_key(|s| s.slots.first().map_or(UNPARSED_MINUTES, |slot| slot.start));

    let mut selection: Vec<&Section> = Vec::new();
    let mut used_keys: HashSet<&str> = HashSet::new();
    let mut results: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut budget = NodeBudget::new(budget);

    backtrack(
        &ordered,
        0,
        &mut selection,
        &mut used_keys,
        &mut results,
        &mut budget,
    );

    SearchOutcome {
        combinations: results.into_iter().map(Combination::new).collect(),
        truncated: budget.truncated,
    }
}

/// Remaining node allowance for a budgeted search. `None` means unlimited.
struct NodeBudget {
    remaining: Option<usize>,
    truncated: bool,
}

impl NodeBudget {
    fn new(limit: Option<usize>) -> Self {
        Self {
            remaining: limit,
            truncated: false,
        }
    }

    /// Consume one node. Returns false (and records truncation) when spent.
    fn visit(&mut self) -> bool {
        match self.remaining.as_mut() {
            None => true,
            Some(0) => {
                self.truncated = true;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// One recursion node: record the current selection if valid, then branch on
/// every admissible section at or after `cursor`, undoing on return.
fn backtrack<'a>(
    ordered: &[&'a Section],
    cursor: usize,
    selection: &mut Vec<&'a Section>,
    used_keys: &mut HashSet<&'a str>,
    results: &mut BTreeSet<Vec<String>>,
    budget: &mut NodeBudget,
) {
    if !budget.visit() {
        return;
    }

    // Every node emits: partial selections are results too. The pairwise
    // check over the whole selection restates the invariant the branching
    // below maintains incrementally.
    if pairwise_disjoint(selection) {
        let mut identifiers: Vec<String> =
            selection.iter().map(|s| s.identifier.clone()).collect();
        identifiers.sort();
        results.insert(identifiers);
    }

    for index in cursor..ordered.len() {
        let candidate = ordered[index];
        let key = candidate.course_key();
        if used_keys.contains(key) {
            continue;
        }
        if selection
            .iter()
            .any(|chosen| sections_overlap(chosen, candidate))
        {
            continue;
        }

        selection.push(candidate);
        used_keys.insert(key);
        backtrack(ordered, index + 1, selection, used_keys, results, budget);
        selection.pop();
        used_keys.remove(key);
    }
}

/// All O(k²) pairs of the selection are conflict-free.
fn pairwise_disjoint(selection: &[&Section]) -> bool {
    for (i, a) in selection.iter().enumerate() {
        for b in &selection[i + 1..] {
            if sections_overlap(a, b) {
                return false;
            }
        }
    }
    true
}
