//! Clue derivation and representation
//!
//! A clue is the per-position feedback a guess receives against a solution:
//! one tile per guess letter, each tile `Correct`, `PartialMatch`, or
//! `Incorrect`.
//!
//! Derivation uses a simplified per-position rule: a letter is `Correct` on an
//! exact position match, `PartialMatch` whenever it occurs anywhere else in
//! the solution, and `Incorrect` otherwise. Unlike the official game, repeated
//! guess letters are NOT capped by the solution's letter multiplicity, so a
//! guess with duplicates can collect more `PartialMatch` tiles than the
//! solution has copies of that letter.

use super::Word;
use std::fmt;

/// Outcome for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileStatus {
    /// Letter absent from the solution
    Incorrect,
    /// Letter present in the solution, but at a different position
    PartialMatch,
    /// Letter present at exactly this position
    Correct,
}

/// One guess letter together with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub status: TileStatus,
}

/// Ordered per-position feedback for a guess
///
/// Length always equals the guess length. Hashable so clues can key
/// partition maps during entropy scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    tiles: Vec<Tile>,
}

/// Guess and solution lengths disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub guess_len: usize,
    pub solution_len: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The guess is {} letters, but the solution is {} letters long",
            self.guess_len, self.solution_len
        )
    }
}

impl std::error::Error for LengthMismatch {}

/// Error type for malformed clue text typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseClueError {
    WrongLength { expected: usize, actual: usize },
    BadMarker(char),
}

impl fmt::Display for ParseClueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Expected {expected} clue markers, got {actual}")
            }
            Self::BadMarker(c) => {
                write!(f, "Invalid clue marker '{c}' (use g, y, or -)")
            }
        }
    }
}

impl std::error::Error for ParseClueError {}

impl Clue {
    /// Derive the clue for `guess` against a known `solution`
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordlet::core::{Clue, Word};
    ///
    /// let solution = Word::new("share", 5).unwrap();
    /// let guess = Word::new("slate", 5).unwrap();
    /// let clue = Clue::derive(&solution, &guess).unwrap();
    /// assert_eq!(clue.to_string(), "g-g-g");
    /// ```
    pub fn derive(solution: &Word, guess: &Word) -> Result<Self, LengthMismatch> {
        if guess.len() != solution.len() {
            return Err(LengthMismatch {
                guess_len: guess.len(),
                solution_len: solution.len(),
            });
        }
        Ok(Self::derive_unchecked(solution, guess))
    }

    /// Derivation core, lengths already known to agree
    pub(crate) fn derive_unchecked(solution: &Word, guess: &Word) -> Self {
        debug_assert_eq!(solution.len(), guess.len());

        let tiles = guess
            .bytes()
            .iter()
            .zip(solution.bytes())
            .map(|(&g, &s)| {
                let status = if g == s {
                    TileStatus::Correct
                } else if solution.contains(g) {
                    TileStatus::PartialMatch
                } else {
                    TileStatus::Incorrect
                };
                Tile { letter: g, status }
            })
            .collect();

        Self { tiles }
    }

    /// Parse a clue from marker text typed by the player
    ///
    /// One marker per guess letter: `g`/`G` for correct, `y`/`Y` for partial
    /// match, `-`/`_`/`x`/`X` for incorrect.
    ///
    /// # Errors
    /// Returns `ParseClueError` when the marker count differs from the guess
    /// length or an unknown marker appears.
    ///
    /// # Examples
    /// ```
    /// use wordlet::core::{Clue, Word};
    ///
    /// let guess = Word::new("slate", 5).unwrap();
    /// let clue = Clue::parse(&guess, "g-g-g").unwrap();
    /// assert_eq!(clue.to_string(), "g-g-g");
    ///
    /// assert!(Clue::parse(&guess, "g-g").is_err());
    /// assert!(Clue::parse(&guess, "g-g-q").is_err());
    /// ```
    pub fn parse(guess: &Word, markers: &str) -> Result<Self, ParseClueError> {
        let chars: Vec<char> = markers.chars().collect();

        if chars.len() != guess.len() {
            return Err(ParseClueError::WrongLength {
                expected: guess.len(),
                actual: chars.len(),
            });
        }

        let tiles = guess
            .bytes()
            .iter()
            .zip(chars)
            .map(|(&letter, c)| {
                let status = match c {
                    'g' | 'G' => TileStatus::Correct,
                    'y' | 'Y' => TileStatus::PartialMatch,
                    '-' | '_' | 'x' | 'X' => TileStatus::Incorrect,
                    other => return Err(ParseClueError::BadMarker(other)),
                };
                Ok(Tile { letter, status })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tiles })
    }

    /// The all-Correct clue for `guess` (the "I won" shortcut)
    #[must_use]
    pub fn solved(guess: &Word) -> Self {
        let tiles = guess
            .bytes()
            .iter()
            .map(|&letter| Tile {
                letter,
                status: TileStatus::Correct,
            })
            .collect();
        Self { tiles }
    }

    /// Number of tiles (equals the guess length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True for the zero-length clue
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in position order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate over tiles in position order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.status == TileStatus::Correct)
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            let marker = match tile.status {
                TileStatus::Correct => 'g',
                TileStatus::PartialMatch => 'y',
                TileStatus::Incorrect => '-',
            };
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}
