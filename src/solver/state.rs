//! Positional letter knowledge accumulated from clues
//!
//! Tracks, per position, which letters are still permissible, plus the
//! letters confirmed to occur somewhere in the solution. Position sets only
//! ever shrink; a clue that conflicts with established knowledge is a
//! contradiction and fails the session.

use crate::core::{Clue, TileStatus, Word};
use std::fmt;

const ALPHABET_MASK: u32 = (1 << 26) - 1;

/// Set of candidate letters, one bit per letter `a..=z`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// The full lowercase alphabet
    pub const FULL: Self = Self(ALPHABET_MASK);

    /// The singleton set holding one letter
    #[must_use]
    pub fn single(letter: u8) -> Self {
        Self(Self::bit(letter))
    }

    #[inline]
    fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Remove a letter; removing an absent letter is a no-op
    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    /// Add a letter
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True when no letters remain
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

/// A clue conflicted with knowledge established by earlier clues
///
/// Fatal to the session: it means the clue stream is inconsistent, either
/// malformed external input or a solution the model cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contradiction {
    /// `Incorrect` asserted for a letter already confirmed in the solution
    AbsentButConfirmed { letter: char },
    /// `Correct` asserted at a position the letter was already excluded from
    PinnedButExcluded { letter: char, position: usize },
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsentButConfirmed { letter } => {
                write!(
                    f,
                    "Letter '{letter}' was previously clued to be in the solution"
                )
            }
            Self::PinnedButExcluded { letter, position } => {
                write!(
                    f,
                    "Letter '{letter}' was previously clued NOT to be in position {position}"
                )
            }
        }
    }
}

impl std::error::Error for Contradiction {}

/// Per-position letter constraints plus confirmed letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateState {
    positions: Vec<LetterSet>,
    correct_letters: LetterSet,
}

impl CandidateState {
    /// Fresh state: every letter possible at every position
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            positions: vec![LetterSet::FULL; word_length],
            correct_letters: LetterSet::EMPTY,
        }
    }

    /// Configured word length
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }

    /// Letters still permissible at a position
    ///
    /// # Panics
    /// Panics if `position >= word_length()`
    #[must_use]
    pub fn position(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    /// Letters confirmed to occur somewhere in the solution
    #[must_use]
    pub fn correct_letters(&self) -> LetterSet {
        self.correct_letters
    }

    /// Fold one clue into the state, tile by tile in position order
    ///
    /// - `Correct` collapses the position to that single letter.
    /// - `PartialMatch` removes the letter from that position and confirms it
    ///   occurs elsewhere.
    /// - `Incorrect` removes the letter from every position.
    ///
    /// # Errors
    /// Returns `Contradiction` when a tile conflicts with earlier clues:
    /// `Incorrect` for a confirmed letter, or `Correct` at a position the
    /// letter was already excluded from.
    pub fn apply_clue(&mut self, clue: &Clue) -> Result<(), Contradiction> {
        debug_assert_eq!(clue.len(), self.positions.len());

        for (i, tile) in clue.iter().enumerate() {
            match tile.status {
                TileStatus::Incorrect => {
                    if self.correct_letters.contains(tile.letter) {
                        return Err(Contradiction::AbsentButConfirmed {
                            letter: tile.letter as char,
                        });
                    }
                    for set in &mut self.positions {
                        set.remove(tile.letter);
                    }
                }
                TileStatus::PartialMatch => {
                    self.positions[i].remove(tile.letter);
                    self.correct_letters.insert(tile.letter);
                }
                TileStatus::Correct => {
                    if !self.positions[i].contains(tile.letter) {
                        return Err(Contradiction::PinnedButExcluded {
                            letter: tile.letter as char,
                            position: i,
                        });
                    }
                    self.positions[i] = LetterSet::single(tile.letter);
                    self.correct_letters.insert(tile.letter);
                }
            }
        }

        Ok(())
    }

    /// Whether a word is still consistent with everything learned so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if word.len() != self.positions.len() {
            return false;
        }
        if !self.correct_letters.iter().all(|letter| word.contains(letter)) {
            return false;
        }
        word.bytes()
            .iter()
            .zip(&self.positions)
            .all(|(&letter, set)| set.contains(letter))
    }

    /// True once every position is pinned to a single letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.positions.iter().all(|set| set.len() == 1)
    }

    /// True when some position has no permissible letters left
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        self.positions.iter().any(|set| set.is_empty())
    }

    /// The pinned word, once solved
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        let mut text = String::with_capacity(self.positions.len());
        for set in &self.positions {
            if set.len() != 1 {
                return None;
            }
            text.push(set.iter().next()? as char);
        }
        Word::new(text, self.positions.len()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Clue;

    fn word(s: &str) -> Word {
        Word::new(s, s.len()).unwrap()
    }

    fn clue(guess: &str, markers: &str) -> Clue {
        Clue::parse(&word(guess), markers).unwrap()
    }

    #[test]
    fn letter_set_basics() {
        let mut set = LetterSet::FULL;
        assert_eq!(set.len(), 26);
        assert!(set.contains(b'a'));
        assert!(set.contains(b'z'));

        set.remove(b'q');
        assert_eq!(set.len(), 25);
        assert!(!set.contains(b'q'));

        // Removing again is a no-op
        set.remove(b'q');
        assert_eq!(set.len(), 25);

        set.insert(b'q');
        assert_eq!(set, LetterSet::FULL);
    }

    #[test]
    fn letter_set_single_and_iter() {
        let set = LetterSet::single(b'm');
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![b'm']);
        assert!(LetterSet::EMPTY.is_empty());
    }

    #[test]
    fn fresh_state_allows_everything() {
        let state = CandidateState::new(5);
        assert_eq!(state.word_length(), 5);
        assert!(!state.is_solved());
        assert!(!state.is_impossible());
        assert!(state.matches(&word("crane")));
        assert!(state.matches(&word("zebra")));
        assert!(!state.matches(&word("lengthy")));
    }

    #[test]
    fn correct_collapses_position() {
        // sonic: s correct at position 0, the other letters ruled out
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("sonic", "g----")).unwrap();

        assert_eq!(state.position(0), LetterSet::single(b's'));
        assert!(state.correct_letters().contains(b's'));
        assert!(state.matches(&word("share")));
        assert!(!state.matches(&word("crane")));
    }

    #[test]
    fn partial_match_excludes_position_and_confirms_letter() {
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("slate", "-y---")).unwrap();

        assert!(!state.position(1).contains(b'l'));
        assert!(state.position(0).contains(b'l'));
        assert!(state.correct_letters().contains(b'l'));

        // Words without an l are no longer consistent
        assert!(!state.matches(&word("crane")));
        // l elsewhere is fine
        assert!(state.matches(&word("frill")));
    }

    #[test]
    fn incorrect_excludes_letter_everywhere() {
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("slate", "----x")).unwrap();

        for i in 0..5 {
            assert!(!state.position(i).contains(b'e'));
        }
        assert!(!state.matches(&word("crane")));
        assert!(state.matches(&word("humid")));
    }

    #[test]
    fn incorrect_on_confirmed_letter_is_contradiction() {
        let mut state = CandidateState::new(5);
        // 'l' confirmed somewhere
        state.apply_clue(&clue("slate", "-y---")).unwrap();

        // A later clue claiming 'l' absent must fail loudly
        let err = state.apply_clue(&clue("label", "x----")).unwrap_err();
        assert_eq!(err, Contradiction::AbsentButConfirmed { letter: 'l' });
    }

    #[test]
    fn correct_on_excluded_letter_is_contradiction() {
        let mut state = CandidateState::new(5);
        // 'x' ruled out everywhere
        state.apply_clue(&clue("xenon", "x----")).unwrap();

        // Claiming 'x' correct at position 0 now conflicts
        let err = state.apply_clue(&clue("xylem", "g----")).unwrap_err();
        assert_eq!(
            err,
            Contradiction::PinnedButExcluded {
                letter: 'x',
                position: 0
            }
        );
    }

    #[test]
    fn contradiction_reports_offending_letter() {
        // Tiles are applied in order; the error carries enough context to
        // report which tile conflicted
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("slate", "-y---")).unwrap();

        let err = state.apply_clue(&clue("lions", "x----")).unwrap_err();
        assert_eq!(err, Contradiction::AbsentButConfirmed { letter: 'l' });
    }

    #[test]
    fn state_solves_after_all_correct_clue() {
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("crane", "ggggg")).unwrap();

        assert!(state.is_solved());
        assert_eq!(state.solution(), Some(word("crane")));
    }

    #[test]
    fn solved_stays_solved() {
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("crane", "ggggg")).unwrap();
        assert!(state.is_solved());

        // Re-applying a consistent clue keeps the solved state
        state.apply_clue(&clue("crane", "ggggg")).unwrap();
        assert!(state.is_solved());
    }

    #[test]
    fn state_impossible_when_position_empties() {
        let mut state = CandidateState::new(2);
        let guess = Word::new("ab", 2).unwrap();

        // Pin position 0 to 'a', then partial-match 'a' there: the set empties
        state
            .apply_clue(&Clue::parse(&guess, "g-").unwrap())
            .unwrap();
        state
            .apply_clue(&Clue::parse(&guess, "y-").unwrap())
            .unwrap();

        assert!(state.is_impossible());
        assert!(state.solution().is_none());
    }

    #[test]
    fn matches_requires_confirmed_letters_somewhere() {
        let mut state = CandidateState::new(5);
        state.apply_clue(&clue("slate", "yy---")).unwrap();

        // Both s and l must appear somewhere
        assert!(state.matches(&word("gulls")));
        assert!(!state.matches(&word("rings")));
        assert!(!state.matches(&word("crane")));
    }

    #[test]
    fn matches_true_for_real_solution() {
        // Soundness: the true solution always survives its own clues
        let solution = word("share");
        let mut state = CandidateState::new(5);

        for guess in ["slate", "crane", "share"] {
            let c = Clue::derive(&solution, &word(guess)).unwrap();
            state.apply_clue(&c).unwrap();
            assert!(state.matches(&solution), "after guessing {guess}");
        }
        assert!(state.is_solved());
    }
}
