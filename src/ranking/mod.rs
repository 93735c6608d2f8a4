//! Generic priority rule composition.
//!
//! A domain-agnostic engine that ranks items with an ordered list of
//! scoring rules. Rules are evaluated sequentially: a later rule acts
//! only as a tie-breaker for items every earlier rule scored equally.
//! Items tied on all rules keep their input order.
//!
//! Scores are exact integers, so "tied" means equal, with no epsilon.
//!
//! # Design
//!
//! This module contains NO asset-specific concepts. The duplicate-keep
//! rules live in [`keeper`](crate::keeper) and plug in through the
//! [`PriorityRule`] trait.

mod engine;
mod types;

pub use engine::RuleEngine;
pub use types::{PriorityRule, Score};
