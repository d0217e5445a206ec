use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::{board::InitialLayout, Board, Loc, MoveResult, PlayerNumber, Side};
use crate::heuristics::{PieceWeights, TacticalHeuristic, WeightMode};
use crate::utils::make_rng;

use super::options::EngineOptions;
use super::repetition::RepetitionGuard;
use super::search::{search, SearchOptions, SearchResult};

/// Engine holds everything this side knows during one match and answers the
/// referee's events.
pub struct Engine {
    pub board: Board,
    pub options: EngineOptions,
    pub search_options: SearchOptions,
    pub player: PlayerNumber,
    weights: PieceWeights,
    guard: RepetitionGuard,
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            board: Board::new_match(),
            options,
            search_options: SearchOptions::default(),
            player: PlayerNumber::ONE,
            weights: PieceWeights::fixed(),
            guard: RepetitionGuard::new(),
        }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    /// Start a match as `player`, returning the opening layout to announce.
    pub fn init(&mut self, player: PlayerNumber, move_time: Duration) -> Result<InitialLayout> {
        self.player = player;
        self.search_options = SearchOptions::new(move_time);
        self.board = Board::new_match();
        self.guard = RepetitionGuard::new();
        self.weights = match self.options.weights {
            WeightMode::Fixed => PieceWeights::fixed(),
            WeightMode::Random => {
                let mut rng = make_rng(self.options.seed)?;
                let weights = PieceWeights::random(&mut rng);
                debug!(customised = ?weights.customised_ranks()?, "drew random weights");
                weights
            }
        };

        info!(%player, ?move_time, weights = ?self.options.weights, "match started");
        Ok(self.board.initial_layout())
    }

    pub fn is_to_move(&self, player: PlayerNumber) -> bool {
        player.side(self.player) == Side::Ally
    }

    pub fn weights(&self) -> &PieceWeights {
        &self.weights
    }

    pub fn repetition(&self) -> &RepetitionGuard {
        &self.guard
    }

    /// Pick this turn's move, or `None` to resign.
    pub fn go(&mut self) -> Option<(Loc, Loc)> {
        let (result, time) = self.search();

        let (from, to) = result.best?;
        self.guard.record(from, to);

        info!(%from, %to, score = result.score, candidates = result.candidates,
            complete = result.complete, time, "chose move");
        Some((from, to))
    }

    /// Evaluate the position without committing to a move.
    pub fn search(&self) -> (SearchResult, f64) {
        let heuristic = TacticalHeuristic::new(&self.weights);
        search(&self.board, &heuristic, &self.guard, &self.search_options)
    }

    /// Apply the referee's report of the last move, whoever made it.
    /// A report that contradicts the board is ignored.
    pub fn outcome(&mut self, from: Loc, to: Loc, result: MoveResult) {
        if let Err(err) = self.board.resolve(from, to, result) {
            warn!(%from, %to, %result, "ignoring outcome: {:#}", err);
            return;
        }
        debug!("board after {} {}:\n{}", from, to, self.board);
    }

    /// The referee disclosed the flag of `player` on `loc`.
    pub fn flag(&mut self, player: PlayerNumber, loc: Loc) {
        if player.side(self.player) != Side::Enemy {
            return;
        }

        if self.board.is_enemy(loc) {
            info!(%loc, "enemy flag revealed");
            self.board.reveal_opponent_flag(loc);
        } else {
            warn!(%loc, "flag reported on a square without an enemy piece");
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
