//! The guess/clue/filter session loop
//!
//! A `Solver` owns one solve session: the candidate state, the shrinking
//! candidate pool, and the current guess. Callers obtain a clue for the
//! current guess (derived against a known target, or typed in by the player)
//! and feed it back through `advance`, which folds it into the state,
//! re-filters the pool, and either terminates the session or picks the next
//! guess by maximal entropy.

use super::entropy::select_guess;
use super::state::{CandidateState, Contradiction};
use crate::core::{Clue, LengthMismatch, Word, WordError};
use std::fmt;

/// Default opening guess, a strong heuristic opener for five-letter play
pub const DEFAULT_OPENER: &str = "slate";

/// Where candidate guesses are drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuessUniverse {
    /// Only words still consistent with every clue seen so far
    #[default]
    Remaining,
    /// Any dictionary word, including ones already ruled out, purely for the
    /// information their clue would carry
    FullDictionary,
}

/// Solve session parameters
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// First guess, used before any clue is available
    pub opener: String,
    /// Guess universe for every guess after the opener
    pub universe: GuessUniverse,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opener: DEFAULT_OPENER.to_string(),
            universe: GuessUniverse::default(),
        }
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Still guessing
    Active,
    /// Every position pinned to a single letter
    Solved,
    /// No dictionary word is consistent with the clues seen
    Impossible,
}

/// Errors that end a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A configured word failed validation
    Word(WordError),
    /// Guess and solution lengths disagreed
    LengthMismatch(LengthMismatch),
    /// A clue conflicted with established knowledge
    Contradiction(Contradiction),
    /// Batch target not present in the dictionary
    UnknownWord(String),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "{e}"),
            Self::LengthMismatch(e) => write!(f, "{e}"),
            Self::Contradiction(e) => write!(f, "Contradictory clue: {e}"),
            Self::UnknownWord(w) => write!(f, "Word '{w}' is not in the dictionary"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            Self::LengthMismatch(e) => Some(e),
            Self::Contradiction(e) => Some(e),
            Self::UnknownWord(_) => None,
        }
    }
}

impl From<WordError> for SolveError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

impl From<LengthMismatch> for SolveError {
    fn from(e: LengthMismatch) -> Self {
        Self::LengthMismatch(e)
    }
}

impl From<Contradiction> for SolveError {
    fn from(e: Contradiction) -> Self {
        Self::Contradiction(e)
    }
}

/// One solve session over an immutable dictionary
///
/// The dictionary is the total word set; the pool starts equal to it and only
/// ever shrinks. The session owns its state exclusively.
pub struct Solver<'a> {
    dictionary: Vec<&'a Word>,
    pool: Vec<&'a Word>,
    state: CandidateState,
    universe: GuessUniverse,
    guess: Word,
    status: SolverStatus,
    iterations: usize,
}

impl<'a> Solver<'a> {
    /// Start a session: full pool, fresh state, opener as the first guess
    ///
    /// The word length is taken from the dictionary (or, for an empty
    /// dictionary, from the opener itself).
    ///
    /// # Errors
    /// Returns `SolveError::Word` if the configured opener is not a valid
    /// word of the dictionary's length.
    pub fn new(dictionary: &'a [Word], config: &SolverConfig) -> Result<Self, SolveError> {
        let word_length = dictionary.first().map_or(config.opener.len(), Word::len);
        let opener = Word::new(config.opener.as_str(), word_length)?;

        Ok(Self {
            dictionary: dictionary.iter().collect(),
            pool: dictionary.iter().collect(),
            state: CandidateState::new(word_length),
            universe: config.universe,
            guess: opener,
            status: SolverStatus::Active,
            iterations: 0,
        })
    }

    /// The guess to play next
    #[must_use]
    pub fn current_guess(&self) -> &Word {
        &self.guess
    }

    /// Session lifecycle state
    #[must_use]
    pub fn status(&self) -> SolverStatus {
        self.status
    }

    /// Loop passes completed so far; the guess count once the session ends
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Words still consistent with every clue
    #[must_use]
    pub fn pool(&self) -> &[&'a Word] {
        &self.pool
    }

    /// Size of the candidate pool
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Accumulated positional knowledge
    #[must_use]
    pub fn state(&self) -> &CandidateState {
        &self.state
    }

    /// Feed back the clue for the current guess and run one loop pass
    ///
    /// Folds the clue into the state, drops pool words the state no longer
    /// matches, then transitions: `Impossible` when the state or pool rules
    /// everything out, `Solved` when every position is pinned, otherwise the
    /// next guess is selected and the session stays `Active`.
    ///
    /// # Errors
    /// Propagates `Contradiction` from the state; the session is then dead
    /// and must be abandoned.
    pub fn advance(&mut self, clue: &Clue) -> Result<SolverStatus, SolveError> {
        debug_assert_eq!(self.status, SolverStatus::Active);

        self.iterations += 1;
        self.state.apply_clue(clue)?;

        let state = &self.state;
        self.pool.retain(|word| state.matches(word));

        if self.state.is_impossible() || self.pool.is_empty() {
            self.status = SolverStatus::Impossible;
        } else if self.state.is_solved() {
            self.status = SolverStatus::Solved;
        } else {
            self.guess = self.next_guess();
        }

        Ok(self.status)
    }

    /// Pick the next guess from the configured universe
    ///
    /// A pool of one short-circuits: that word is the answer, and entropy is
    /// zero information at that point anyway.
    fn next_guess(&self) -> Word {
        if let [only] = self.pool.as_slice() {
            return (*only).clone();
        }

        let universe: &[&Word] = match self.universe {
            GuessUniverse::Remaining => &self.pool,
            GuessUniverse::FullDictionary => &self.dictionary,
        };

        match select_guess(universe, &self.pool) {
            Some((word, _)) => word.clone(),
            // Unreachable: the pool is non-empty here and is a subset of
            // every universe choice
            None => (*self.pool[0]).clone(),
        }
    }
}
