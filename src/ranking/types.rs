//! Core trait for priority rules.

/// Integer score produced by a rule. **Lower is higher priority.**
///
/// Wide enough to hold the negation of any `u64` product of two `i64`
/// magnitudes, so maximizing rules can negate exact values instead of
/// going through floating point.
pub type Score = i128;

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return [`Score`]s where **lower is higher priority**. A rule
/// that prefers larger values negates them.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
///
/// # Examples
///
/// ```
/// use dupe_keeper::ranking::{PriorityRule, Score};
///
/// struct Photo { pixels: u64 }
///
/// // Most pixels first
/// struct LargestFirst;
///
/// impl PriorityRule<Photo, ()> for LargestFirst {
///     fn name(&self) -> &str { "LargestFirst" }
///     fn score(&self, photo: &Photo, _ctx: &()) -> Score {
///         -(photo.pixels as Score)
///     }
/// }
///
/// assert!(LargestFirst.score(&Photo { pixels: 10 }, &()) < LargestFirst.score(&Photo { pixels: 5 }, &()));
/// ```
pub trait PriorityRule<T, C>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Must be deterministic: equal inputs give equal scores.
    fn score(&self, item: &T, context: &C) -> Score;
}
