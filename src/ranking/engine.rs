//! Rule composition engine.

use std::cmp::Ordering;

use super::types::{PriorityRule, Score};

/// Engine for composing and applying multiple priority rules.
///
/// Rules are applied in order. A later rule is only consulted when every
/// earlier rule produced exactly equal scores. Items that tie on every
/// rule keep their input order: the earliest one ranks first.
///
/// The engine only ever borrows the items it ranks. Selection is a single
/// linear pass and full ranking sorts a private index vector, so the
/// caller's slice is never reordered.
///
/// # Examples
///
/// ```
/// use dupe_keeper::ranking::{PriorityRule, RuleEngine, Score};
///
/// struct ByLen;
/// impl PriorityRule<&'static str, ()> for ByLen {
///     fn name(&self) -> &str { "ByLen" }
///     fn score(&self, s: &&'static str, _ctx: &()) -> Score { -(s.len() as Score) }
/// }
///
/// let engine = RuleEngine::new().with_rule(ByLen);
/// let words = ["ab", "abcd", "wxyz", "a"];
///
/// // "abcd" and "wxyz" tie; the earlier one wins
/// assert_eq!(engine.select_best_index(&words, &()), Some(1));
/// assert_eq!(engine.sort_indices(&words, &()), vec![1, 2, 0, 3]);
/// ```
pub struct RuleEngine<T, C> {
    rules: Vec<Box<dyn PriorityRule<T, C>>>,
}

impl<T, C> RuleEngine<T, C> {
    /// Creates an engine with no rules. Every item ties.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule. It breaks ties left by all previously added rules.
    pub fn with_rule<R: PriorityRule<T, C> + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Scores an item under every rule, in rule order.
    pub fn scores(&self, item: &T, context: &C) -> Vec<Score> {
        self.rules
            .iter()
            .map(|rule| rule.score(item, context))
            .collect()
    }

    /// Compares two items. `Ordering::Less` means `a` ranks before `b`.
    ///
    /// Rules are evaluated lazily: scoring stops at the first rule that
    /// separates the items.
    pub fn compare(&self, a: &T, b: &T, context: &C) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.score(a, context).cmp(&rule.score(b, context)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Returns the index of the highest-priority item.
    ///
    /// Keeps a running best and replaces it only when a later item scores
    /// strictly better, so among full ties the first one wins. A single
    /// item is returned without being scored.
    ///
    /// Returns `None` if the slice is empty.
    pub fn select_best_index(&self, items: &[T], context: &C) -> Option<usize> {
        let best = match items.len() {
            0 => None,
            1 => Some(0),
            _ => {
                let mut best = 0;
                let mut best_scores = self.scores(&items[0], context);
                for (index, item) in items.iter().enumerate().skip(1) {
                    let scores = self.scores(item, context);
                    if scores < best_scores {
                        best = index;
                        best_scores = scores;
                    }
                }
                Some(best)
            }
        };
        tracing::trace!(items = items.len(), best = ?best, "selected best item");
        best
    }

    /// Returns a reference to the highest-priority item.
    ///
    /// The reference points into `items`; nothing is cloned.
    pub fn select_best<'a>(&self, items: &'a [T], context: &C) -> Option<&'a T> {
        self.select_best_index(items, context).map(|i| &items[i])
    }

    /// Ranks all items, highest priority first.
    ///
    /// Returns indices into the original slice. Each item is scored once.
    /// The sort is stable, so `sort_indices(..)[0]` always agrees with
    /// [`select_best_index`](Self::select_best_index).
    pub fn sort_indices(&self, items: &[T], context: &C) -> Vec<usize> {
        if self.rules.is_empty() {
            return (0..items.len()).collect();
        }

        let scores: Vec<Vec<Score>> = items
            .iter()
            .map(|item| self.scores(item, context))
            .collect();

        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| scores[a].cmp(&scores[b]));
        indices
    }

    /// Ranks all items and returns references in priority order.
    pub fn sort<'a>(&self, items: &'a [T], context: &C) -> Vec<&'a T> {
        self.sort_indices(items, context)
            .into_iter()
            .map(|i| &items[i])
            .collect()
    }
}

impl<T, C> Default for RuleEngine<T, C> {
    fn default() -> Self {
        Self::new()
    }
}
