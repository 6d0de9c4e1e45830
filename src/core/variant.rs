//! Game variants and the context a game is played in
//!
//! A variant fixes the word list source and the supported word lengths. The
//! context adds the chosen length and whether solutions are drawn from the
//! narrow solution list (smart) or the full guess list (naive).

use crate::error::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// Static description of a supported game variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub lengths: RangeInclusive<usize>,
    /// Every string of the right length is an accepted guess
    pub all_words: bool,
}

/// Every variant the solver knows about
pub const VARIANTS: &[VariantInfo] = &[
    VariantInfo {
        id: "new_york_times",
        name: "New York Times Wordle",
        lengths: 5..=5,
        all_words: false,
    },
    VariantInfo {
        id: "wordlegame_org",
        name: "wordlegame.org Wordle",
        lengths: 4..=11,
        all_words: false,
    },
    VariantInfo {
        id: "wordplay_com",
        name: "wordplay.com Wordle",
        lengths: 5..=5,
        all_words: false,
    },
    VariantInfo {
        id: "wordlewebsite_com_daily",
        name: "wordlewebsite.com Wordle (Daily)",
        lengths: 5..=5,
        all_words: false,
    },
    VariantInfo {
        id: "wordlewebsite_com_unlimited",
        name: "wordlewebsite.com Wordle (Unlimited)",
        lengths: 5..=5,
        all_words: false,
    },
    VariantInfo {
        id: "absurdle",
        name: "Absurdle",
        lengths: 5..=5,
        all_words: false,
    },
    VariantInfo {
        id: "flappy_birdle",
        name: "Flappy Birdle",
        lengths: 5..=5,
        all_words: true,
    },
];

/// Look up a variant by id
///
/// # Errors
/// Returns `Error::InvalidVariant` for unknown ids.
pub fn variant_info(id: &str) -> Result<&'static VariantInfo> {
    VARIANTS
        .iter()
        .find(|info| info.id == id)
        .ok_or_else(|| Error::InvalidVariant(format!("unknown variant {id:?}")))
}

/// Game variant parameters that candidate sets are bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    pub id: String,
    pub word_length: usize,
}

impl Variant {
    #[must_use]
    pub fn new(id: impl Into<String>, word_length: usize) -> Self {
        Self {
            id: id.into(),
            word_length,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} letters)", self.id, self.word_length)
    }
}

/// Where the candidate solutions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every word in the guess list is an equally likely solution
    Naive,
    /// Only the game's official solution list
    Smart,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Smart => "smart",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The variant, length and mode a game is played with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub info: &'static VariantInfo,
    pub variant: Variant,
    pub mode: Mode,
}

impl Context {
    /// Create a context, inferring the length when the variant has only one
    ///
    /// # Errors
    /// Returns `Error::InvalidVariant` if the variant is unknown, the length is
    /// unsupported or cannot be inferred, or naive mode is requested for a
    /// variant where every word is a valid guess.
    pub fn new(id: &str, mode: Mode, word_length: Option<usize>) -> Result<Self> {
        let info = variant_info(id)?;

        if mode == Mode::Naive && info.all_words {
            return Err(Error::InvalidVariant(format!(
                "naive mode is not valid for {id}, every word is a guess"
            )));
        }

        let word_length = match word_length {
            Some(length) if info.lengths.contains(&length) => length,
            Some(length) => {
                return Err(Error::InvalidVariant(format!(
                    "{id} does not support {length} letter words"
                )));
            }
            None if info.lengths.start() == info.lengths.end() => *info.lengths.start(),
            None => {
                return Err(Error::InvalidVariant(format!(
                    "{id} supports lengths {}-{}, pick one",
                    info.lengths.start(),
                    info.lengths.end()
                )));
            }
        };

        Ok(Self {
            info,
            variant: Variant::new(id, word_length),
            mode,
        })
    }

    /// Every supported (variant, mode, length) combination
    pub fn all() -> impl Iterator<Item = Self> {
        VARIANTS.iter().flat_map(|info| {
            [Mode::Smart, Mode::Naive]
                .into_iter()
                .filter(move |&mode| !(mode == Mode::Naive && info.all_words))
                .flat_map(move |mode| {
                    info.lengths.clone().map(move |word_length| Self {
                        info,
                        variant: Variant::new(info.id, word_length),
                        mode,
                    })
                })
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.variant.word_length
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} length {}",
            self.mode, self.info.name, self.variant.word_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_infers_single_length() {
        let context = Context::new("new_york_times", Mode::Smart, None).unwrap();
        assert_eq!(context.word_length(), 5);
        assert_eq!(context.variant, Variant::new("new_york_times", 5));
    }

    #[test]
    fn context_requires_length_for_ranges() {
        assert!(Context::new("wordlegame_org", Mode::Smart, None).is_err());
        assert!(Context::new("wordlegame_org", Mode::Smart, Some(3)).is_err());
        assert_eq!(
            Context::new("wordlegame_org", Mode::Naive, Some(7))
                .unwrap()
                .word_length(),
            7
        );
    }

    #[test]
    fn context_rejects_naive_all_words() {
        assert!(matches!(
            Context::new("flappy_birdle", Mode::Naive, None),
            Err(Error::InvalidVariant(_))
        ));
        assert!(Context::new("flappy_birdle", Mode::Smart, None).is_ok());
    }

    #[test]
    fn context_unknown_variant() {
        assert!(Context::new("nope", Mode::Smart, None).is_err());
    }

    #[test]
    fn all_contexts_enumerated() {
        let contexts: Vec<Context> = Context::all().collect();
        // 5 single-length variants with two modes, flappy birdle smart only,
        // and wordlegame.org with 8 lengths in two modes
        assert_eq!(contexts.len(), 5 * 2 + 1 + 8 * 2);
        assert!(
            contexts
                .iter()
                .all(|c| !(c.info.all_words && c.mode == Mode::Naive))
        );
    }
}
