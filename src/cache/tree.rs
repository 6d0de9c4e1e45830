//! On-disk shape of the result cache
//!
//! The document maps each cached first guess to its rank, its foil and, per
//! feedback, the best guesses for the following turn:
//!
//! ```json
//! {
//! 	"arise": {
//! 		"rank": 168.0075,
//! 		"foil": "bbbbb",
//! 		"next_turn": {
//! 			"bbbbb": { "clout": { "rank": 23.0123, "foil": "bbbbb" } }
//! 		}
//! 	}
//! }
//! ```

use crate::core::{Feedback, Turn, Word};
use crate::error::{Error, Result};
use crate::solver::{BestGuesses, Rank};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Best guesses at one point of a game, keyed by guess
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuessTable(BTreeMap<Word, CacheNode>);

/// One cached guess
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheNode {
    pub rank: Rank,
    pub foil: Feedback,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub next_turn: BTreeMap<Feedback, GuessTable>,
}

impl GuessTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, guess: &Word) -> Option<&CacheNode> {
        self.0.get(guess)
    }

    /// The table reached by playing `turns` from here
    #[must_use]
    pub fn lookup(&self, turns: &[Turn]) -> Option<&Self> {
        turns.iter().try_fold(self, |table, (guess, feedback)| {
            table.0.get(guess)?.next_turn.get(feedback)
        })
    }

    /// The stored result, `None` when nothing is stored
    ///
    /// # Errors
    /// Returns `Error::CacheCorrupt` if the stored guesses disagree on rank.
    pub fn best(&self) -> Result<Option<BestGuesses>> {
        let mut nodes = self.0.iter();
        let Some((_, first)) = nodes.next() else {
            return Ok(None);
        };
        if let Some((guess, node)) = nodes.find(|(_, node)| node.rank != first.rank) {
            return Err(Error::CacheCorrupt(format!(
                "{guess} has rank {} but its siblings have {}",
                node.rank, first.rank
            )));
        }

        Ok(Some(BestGuesses::new(
            first.rank,
            self.0.iter().map(|(guess, node)| (*guess, node.foil)),
        )))
    }

    /// Store `best` at the point reached by `turns`
    ///
    /// Guesses kept from an earlier store keep their next-turn tables.
    /// Returns false without storing when a turn's guess has no node.
    pub fn store(&mut self, turns: &[Turn], best: &BestGuesses) -> bool {
        let mut table = self;
        for (guess, feedback) in turns {
            let Some(node) = table.0.get_mut(guess) else {
                return false;
            };
            table = node.next_turn.entry(*feedback).or_default();
        }

        let mut previous = std::mem::take(&mut table.0);
        table.0 = best
            .iter()
            .map(|(guess, foil)| {
                let next_turn = previous
                    .remove(&guess)
                    .map(|node| node.next_turn)
                    .unwrap_or_default();
                (
                    guess,
                    CacheNode {
                        rank: best.rank,
                        foil,
                        next_turn,
                    },
                )
            })
            .collect();
        true
    }

    /// Feedbacks with a stored next turn after `guess`
    #[must_use]
    pub fn next_feedbacks(&self, guess: &Word) -> BTreeSet<Feedback> {
        self.0
            .get(guess)
            .map(|node| node.next_turn.keys().copied().collect())
            .unwrap_or_default()
    }
}
