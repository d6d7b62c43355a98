//! Game state machine
//!
//! One `Game` owns one session: the hidden goal, the committed attempt
//! history, the in-progress line editor, and the status. Frontends drive it
//! through `start`/`select`/`deselect`/`submit` and render exclusively from
//! the query methods; every invalid call is absorbed as a silent no-op, so
//! the engine stays correct even when a frontend bypasses its input gates.

use super::{GameConfig, LineEditor};
use crate::core::{Color, Score};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Constructed but never started
    Idle,
    /// A goal exists and attempts remain
    InProgress,
    /// The last committed guess matched the goal exactly
    Won,
    /// The attempt limit was reached without a full match
    Lost,
}

impl GameStatus {
    /// True for the terminal states `Won` and `Lost`
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A committed, scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Vec<Color>,
    score: Score,
}

impl Attempt {
    /// The submitted sequence
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &[Color] {
        &self.guess
    }

    /// Its feedback
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }
}

/// A single game session
///
/// Generic over the random source so tests can seed one deterministically;
/// normal play uses the thread RNG.
#[derive(Debug)]
pub struct Game<R: Rng = ThreadRng> {
    config: GameConfig,
    rng: R,
    goal: Vec<Color>,
    attempts: Vec<Attempt>,
    editor: LineEditor,
    status: GameStatus,
}

impl Game {
    /// Create an idle game using the thread RNG
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create an idle game drawing goals from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let editor = LineEditor::new(config.code_length());
        Self {
            config,
            rng,
            goal: Vec::new(),
            attempts: Vec::new(),
            editor,
            status: GameStatus::Idle,
        }
    }

    /// Start a fresh game with a random goal
    ///
    /// Callable from any state. Discards the previous goal, history, and
    /// editor content. Goal colors are drawn independently and uniformly
    /// from the palette, so repeats are expected.
    pub fn start(&mut self) {
        let goal = self.random_goal();
        self.reset(goal);
    }

    /// Start a fresh game with a known goal
    ///
    /// For deterministic replays and tests. A goal of the wrong length is
    /// ignored, matching the engine's no-op policy for invalid input.
    pub fn start_with_goal(&mut self, goal: Vec<Color>) {
        if goal.len() == self.config.code_length() {
            self.reset(goal);
        }
    }

    fn reset(&mut self, goal: Vec<Color>) {
        self.goal = goal;
        self.attempts.clear();
        self.editor.clear();
        self.status = GameStatus::InProgress;
    }

    fn random_goal(&mut self) -> Vec<Color> {
        let palette = self.config.palette();
        (0..self.config.code_length())
            .map(|_| palette[self.rng.random_range(0..palette.len())])
            .collect()
    }

    /// Append a color to the in-progress guess
    ///
    /// No-op unless the game is in progress and the editor has room.
    pub fn select(&mut self, color: Color) {
        if self.status == GameStatus::InProgress {
            self.editor.select(color);
        }
    }

    /// Remove the last color from the in-progress guess
    pub fn deselect(&mut self) {
        if self.status == GameStatus::InProgress {
            self.editor.deselect();
        }
    }

    /// Commit the in-progress guess
    ///
    /// No-op unless the game is in progress and the editor holds a complete
    /// guess. Otherwise the guess is scored and appended to history, the
    /// status transition runs (win checked before loss), and the editor is
    /// cleared.
    pub fn submit(&mut self) {
        if self.status != GameStatus::InProgress || !self.editor.is_full() {
            return;
        }

        let guess = self.editor.take();
        // Lengths are equal by construction; a mismatch would mean a broken
        // engine invariant, absorbed rather than propagated.
        let Ok(score) = Score::calculate(&self.goal, &guess) else {
            return;
        };

        self.attempts.push(Attempt { guess, score });

        if score.is_win(self.config.code_length()) {
            self.status = GameStatus::Won;
        } else if self.attempts.len() == self.config.max_attempts() {
            self.status = GameStatus::Lost;
        }
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Length of the hidden code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.config.code_length()
    }

    /// Attempt limit for this session
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts()
    }

    /// Colors the goal is drawn from
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        self.config.palette()
    }

    /// Number of committed attempts so far
    #[inline]
    #[must_use]
    pub fn attempts_committed(&self) -> usize {
        self.attempts.len()
    }

    /// True when the editor holds a complete guess
    #[inline]
    #[must_use]
    pub fn is_submitable(&self) -> bool {
        self.editor.is_full()
    }

    /// True when the editor is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.editor.is_empty()
    }

    /// The board row at `index`, as a renderer sees it
    ///
    /// Committed rows return their guess. The row directly after the last
    /// committed attempt, while the game is in progress, is the editor row:
    /// its selected colors followed by `None` placeholders. Every other row
    /// is all placeholders.
    #[must_use]
    pub fn attempt(&self, index: usize) -> Vec<Option<Color>> {
        if let Some(attempt) = self.attempts.get(index) {
            return attempt.guess.iter().copied().map(Some).collect();
        }

        let mut row = vec![None; self.config.code_length()];
        if index == self.attempts.len() && self.status == GameStatus::InProgress {
            for (slot, &color) in row.iter_mut().zip(self.editor.as_slice()) {
                *slot = Some(color);
            }
        }
        row
    }

    /// The score at row `index`, or `Score::ZERO` for uncommitted rows
    #[must_use]
    pub fn score(&self, index: usize) -> Score {
        self.attempts
            .get(index)
            .map_or(Score::ZERO, |attempt| attempt.score())
    }

    /// Committed attempts in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The hidden goal
    ///
    /// Frontends must only read this once `status().is_over()`; the game is
    /// only fair if the goal stays hidden until then.
    #[inline]
    #[must_use]
    pub fn goal(&self) -> &[Color] {
        &self.goal
    }
}
