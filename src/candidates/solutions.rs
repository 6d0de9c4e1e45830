//! Candidate solutions and their partition by feedback

use super::set::CandidateSet;
use crate::core::{Feedback, LetterSet, Variant, Word, all_feedbacks};
use crate::error::Result;
use std::ops::Deref;

/// Words that could still be the answer
#[derive(Debug, Clone)]
pub struct SolutionCandidates(CandidateSet);

impl SolutionCandidates {
    /// # Errors
    /// Returns `Error::InvalidWord` if a word does not have the variant's length.
    pub fn new(variant: Variant, words: impl IntoIterator<Item = Word>) -> Result<Self> {
        CandidateSet::new(variant, words).map(Self)
    }

    #[must_use]
    pub const fn from_set(set: CandidateSet) -> Self {
        Self(set)
    }

    #[must_use]
    pub fn into_set(self) -> CandidateSet {
        self.0
    }

    /// Remove every word inconsistent with `guess` having received `feedback`
    pub fn restrict(&mut self, guess: &Word, feedback: Feedback) {
        self.0.restrict(guess, feedback);
    }

    /// Letters that no remaining solution contains
    #[must_use]
    pub fn excluded_letters(&self) -> LetterSet {
        self.0.letters_present().complement()
    }

    /// Split the solutions by the feedback `guess` would receive
    ///
    /// Feedbacks are tried in partition order and each part only draws from
    /// words no earlier part claimed. Empty parts are skipped.
    ///
    /// # Panics
    /// Panics if the parts do not cover the solutions exactly once
    #[must_use]
    pub fn partition(&self, guess: &Word) -> Vec<(Feedback, Self)> {
        let mut base = self.0.clone();
        base.refresh();

        let total = base.len();
        let mut remaining = base.members().clone();
        let mut parts = Vec::new();

        for &feedback in all_feedbacks(guess.len()) {
            if remaining.is_empty() {
                break;
            }
            if !feedback.is_consistent_with(guess) {
                continue;
            }

            let mut part = base.clone();
            part.set_members(remaining.clone());
            part.apply(guess, feedback);
            if part.is_empty() {
                continue;
            }

            debug_assert!(
                part.iter()
                    .all(|word| Feedback::calculate(guess, &word) == feedback),
                "{guess} partition {feedback} holds words with other feedback"
            );

            remaining.difference_with(part.members());
            parts.push((feedback, Self(part)));
        }

        let covered: usize = parts.iter().map(|(_, part)| part.len()).sum();
        assert!(
            remaining.is_empty() && covered == total,
            "partitions of {guess} cover {covered} of {total} solutions"
        );

        parts
    }
}

impl Deref for SolutionCandidates {
    type Target = CandidateSet;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{feedback_for, letter_index};
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn solutions(list: &[&str]) -> SolutionCandidates {
        SolutionCandidates::new(Variant::new("test", 5), list.iter().map(|w| word(w))).unwrap()
    }

    #[test]
    fn ghost_partitions() {
        let candidates = solutions(&["close", "pound", "ghost"]);
        let ghost = word("ghost");

        assert_eq!(feedback_for(&ghost, &word("close")).to_string(), "bbggb");
        assert_eq!(feedback_for(&ghost, &word("pound")).to_string(), "bbybb");

        let parts: Vec<(String, Vec<Word>)> = candidates
            .partition(&ghost)
            .into_iter()
            .map(|(feedback, part)| (feedback.to_string(), part.to_vec()))
            .collect();

        assert_eq!(
            parts,
            [
                ("bbybb".to_owned(), vec![word("pound")]),
                ("bbggb".to_owned(), vec![word("close")]),
                ("ggggg".to_owned(), vec![word("ghost")]),
            ]
        );
    }

    #[test]
    fn partition_groups_shared_feedback() {
        let candidates = solutions(&["crane", "crate", "grate", "irate", "slate"]);
        let parts = candidates.partition(&word("zzzzz"));
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0.to_string(), "bbbbb");
        assert_eq!(parts[0].1.len(), 5);
    }

    #[test]
    fn partition_of_restricted_set() {
        let mut candidates = solutions(&["crane", "crate", "grate", "irate", "slate"]);
        candidates.restrict(&word("crane"), "bggbg".parse().unwrap());
        assert!(candidates.is_stale());

        let parts = candidates.partition(&word("grate"));
        let sizes: Vec<usize> = parts.iter().map(|(_, part)| part.len()).collect();
        assert_eq!(sizes, [1, 1]);
        // The original is untouched
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn excluded_letters_tracks_remaining_words() {
        let mut candidates = solutions(&["crane", "slate"]);
        let excluded = candidates.excluded_letters();
        assert!(excluded.contains(letter_index(b'z')));
        assert!(!excluded.contains(letter_index(b's')));

        candidates.restrict(&word("crane"), "ggggg".parse().unwrap());
        let excluded = candidates.excluded_letters();
        assert!(excluded.contains(letter_index(b's')));
        assert_eq!(excluded.len(), 26 - 5);
    }

    const POOL: &[&str] = &[
        "abbey", "abide", "aback", "crane", "crate", "eerie", "erase", "geese", "ghost", "grate",
        "irate", "close", "pound", "sheep", "slate", "speed", "steed", "sleep", "spell", "press",
        "mamma", "llama", "kayak", "fluff", "tatty",
    ];

    fn pool_words() -> impl Strategy<Value = Vec<&'static str>> {
        proptest::sample::subsequence(POOL, 1..POOL.len())
    }

    proptest! {
        #[test]
        fn partition_is_complete_and_disjoint(list in pool_words(), guess in proptest::sample::select(POOL)) {
            let candidates = solutions(&list);
            let guess = word(guess);
            let parts = candidates.partition(&guess);

            let mut seen: Vec<Word> = Vec::new();
            for (feedback, part) in &parts {
                prop_assert!(!part.is_empty());
                for member in part.iter() {
                    prop_assert_eq!(feedback_for(&guess, &member), *feedback);
                    prop_assert!(!seen.contains(&member));
                    seen.push(member);
                }
            }
            seen.sort_unstable();
            prop_assert_eq!(seen, candidates.to_vec());
        }

        #[test]
        fn restriction_keeps_true_solution(list in pool_words(), guess in proptest::sample::select(POOL), pick in any::<prop::sample::Index>()) {
            let mut candidates = solutions(&list);
            let solution = word(list[pick.index(list.len())]);
            let before = candidates.len();

            candidates.restrict(&word(guess), feedback_for(&word(guess), &solution));
            prop_assert!(candidates.contains(&solution));
            prop_assert!(candidates.len() <= before);
        }

        #[test]
        fn restriction_never_grows(list in pool_words(), guess in proptest::sample::select(POOL), code in 0u32..243) {
            let mut candidates = solutions(&list);
            let before = candidates.len();
            let marks: String = (0..5)
                .map(|position| ['b', 'y', 'g'][(code / 3u32.pow(4 - position) % 3) as usize])
                .collect();
            candidates.restrict(&word(guess), marks.parse().unwrap());
            prop_assert!(candidates.len() <= before);
        }
    }
}
