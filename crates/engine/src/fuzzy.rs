//! Case-insensitive subsequence matching over item names.
//!
//! A query matches a name when every query character appears in the name
//! in order, gaps allowed. Alignment and quality scoring come from
//! `nucleo-matcher`. Ranking is by tier first (exact, prefix, other) and by
//! nucleo's score second, so a weaker fuzzy hit never outranks an exact or
//! prefix hit however long the names are.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use rulescope_common::Rule;

pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Rule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Fuzzy,
    Prefix,
    Exact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub tier: Tier,
    pub score: u16,
    /// Matched positions, as char indices into the name.
    pub positions: Vec<usize>,
}

impl Match {
    /// Ordering key: tier dominates, the quality score breaks ties.
    pub fn rank(&self) -> (Tier, u16) {
        (self.tier, self.score)
    }
}

#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    folded: String,
    atom: Option<Atom>,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new("")
    }
}

impl FuzzyMatcher {
    pub fn new(query: &str) -> Self {
        // a single literal atom: whitespace and `^ $ ! '` in rule names are
        // ordinary characters, not pattern syntax
        let atom = (!query.is_empty()).then(|| {
            Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
                false,
            )
        });
        Self {
            folded: query.to_lowercase(),
            atom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atom.is_none()
    }

    pub fn score(&self, name: &str) -> Option<Match> {
        let mut scratch = Scratch::new();
        self.score_with(&mut scratch, name)
    }

    pub fn matches(&self, name: &str) -> bool {
        self.score(name).is_some()
    }

    /// Matching items, best first. Equal ranks keep their input order.
    pub fn filter<'a, T: Named>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.is_empty() {
            return items.iter().collect();
        }
        let mut scratch = Scratch::new();
        let mut scored: Vec<((Tier, u16), &'a T)> = items
            .iter()
            .filter_map(|item| {
                self.score_with(&mut scratch, item.name())
                    .map(|m| (m.rank(), item))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, item)| item).collect()
    }

    /// Matching items in their input order.
    pub fn filter_in_order<'a, T: Named>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.is_empty() {
            return items.iter().collect();
        }
        let mut scratch = Scratch::new();
        items
            .iter()
            .filter(|item| self.score_with(&mut scratch, item.name()).is_some())
            .collect()
    }

    fn score_with(&self, scratch: &mut Scratch, name: &str) -> Option<Match> {
        let Some(atom) = &self.atom else {
            return Some(Match {
                tier: Tier::Fuzzy,
                score: 0,
                positions: Vec::new(),
            });
        };

        scratch.indices.clear();
        let haystack = Utf32Str::new(name, &mut scratch.chars);
        let score = atom.indices(haystack, &mut scratch.matcher, &mut scratch.indices)?;
        scratch.indices.sort_unstable();
        scratch.indices.dedup();

        let folded = name.to_lowercase();
        let tier = if folded == self.folded {
            Tier::Exact
        } else if folded.starts_with(&self.folded) {
            Tier::Prefix
        } else {
            Tier::Fuzzy
        };

        Some(Match {
            tier,
            score,
            positions: scratch.indices.iter().map(|&i| i as usize).collect(),
        })
    }
}

/// Reusable matcher state; nucleo's `Matcher` owns a sizeable scoring matrix.
struct Scratch {
    matcher: Matcher,
    chars: Vec<char>,
    indices: Vec<u32>,
}

impl Scratch {
    fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            chars: Vec::new(),
            indices: Vec::new(),
        }
    }
}
