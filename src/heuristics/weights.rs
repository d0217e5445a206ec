//! Per-rank coefficients of the tactical evaluator.

use std::str::FromStr;

use anyhow::{bail, Result};
use rand::{prelude::*, rngs::StdRng};

use crate::core::{
    convert::{FromIndex, ToIndex},
    loc::Loc,
    rank::Rank,
};

const NUM_RANKS: usize = Rank::FieldMarshal as usize + 1;

/// Scale applied to every randomly drawn coefficient.
const RANDOM_SCALE: f64 = 4.0;

/// Coefficients used when scoring a move of one particular rank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector {
    pub attack_unknown: f64,
    pub beat_opponent: f64,
    pub move_towards_rail: f64,
    pub approach_enemy_flag: f64,
    pub approach_enemy_camp: f64,
    pub approach_own_camp: f64,
    pub protect_base: f64,
    pub kill_intruder: f64,
    pub brave_patriot: f64,
    pub defuse_mine: f64,
    pub capture_flag: f64,
    pub all_out_attack: f64,
    pub forward: f64,
    pub backward: f64,
    pub sideways: f64,
    pub diagonal: f64,
}

impl WeightVector {
    pub const DEFAULT: WeightVector = WeightVector {
        attack_unknown: 1.0,
        beat_opponent: 2.0,
        move_towards_rail: -0.5,
        approach_enemy_flag: 0.5,
        approach_enemy_camp: 0.5,
        approach_own_camp: 0.3,
        protect_base: 0.5,
        kill_intruder: 2.0,
        brave_patriot: 0.5,
        defuse_mine: 1.0,
        capture_flag: 5.0,
        all_out_attack: 3.0,
        forward: 1.0,
        backward: -1.0,
        sideways: 0.0,
        diagonal: 0.5,
    };

    /// Draw every coefficient as `(u - offset) * 4` for uniform `u` in
    /// `[0, 1)`. The offsets bias each term towards its useful sign.
    pub fn random(rng: &mut StdRng) -> Self {
        let mut draw = |offset: f64| (rng.random::<f64>() - offset) * RANDOM_SCALE;

        Self {
            attack_unknown: draw(0.0),
            beat_opponent: draw(0.5),
            move_towards_rail: draw(0.8),
            approach_enemy_flag: draw(0.0),
            approach_enemy_camp: draw(0.0),
            approach_own_camp: draw(0.5),
            protect_base: draw(0.0),
            kill_intruder: draw(0.0),
            brave_patriot: draw(0.5),
            defuse_mine: draw(0.0),
            capture_flag: draw(0.5),
            all_out_attack: draw(0.0),
            forward: draw(0.0),
            backward: draw(0.8),
            sideways: draw(0.5),
            diagonal: draw(0.0),
        }
    }

    /// Bonus for the general direction of travel from `from` to `to`.
    /// Forward means towards the enemy back rank.
    pub fn heading(&self, from: Loc, to: Loc) -> f64 {
        let dx = to.x - from.x;
        let dy = to.y - from.y;

        match (dx, dy) {
            (0, dy) if dy > 0 => self.forward,
            (0, _) => self.backward,
            (_, 0) => self.sideways,
            _ => self.diagonal,
        }
    }
}

impl Default for WeightVector {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immutable weight table for a match, one vector per rank.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceWeights {
    ranks: [WeightVector; NUM_RANKS],
}

impl PieceWeights {
    pub fn fixed() -> Self {
        let mut ranks = [WeightVector::DEFAULT; NUM_RANKS];

        // Engineers are worth more on the rails and in the mine field
        ranks[Rank::Engineer as usize].move_towards_rail = -1.0;
        ranks[Rank::Engineer as usize].forward = 2.0;
        ranks[Rank::Engineer as usize].defuse_mine = 4.0;
        ranks[Rank::Bomb as usize].beat_opponent = 3.0;

        Self { ranks }
    }

    pub fn random(rng: &mut StdRng) -> Self {
        let mut ranks = [WeightVector::DEFAULT; NUM_RANKS];
        for weights in ranks.iter_mut() {
            *weights = WeightVector::random(rng);
        }
        Self { ranks }
    }

    pub fn for_rank(&self, rank: Rank) -> &WeightVector {
        &self.ranks[rank as usize]
    }

    /// Replace the vector of one rank.
    pub fn with_rank(mut self, rank: Rank, weights: WeightVector) -> Self {
        self.ranks[rank as usize] = weights;
        self
    }

    /// Ranks whose weights differ from the fixed table, for logging.
    pub fn customised_ranks(&self) -> Result<Vec<Rank>> {
        let fixed = Self::fixed();
        let mut ranks = Vec::new();
        for (idx, weights) in self.ranks.iter().enumerate() {
            let rank = Rank::from_index(idx)?;
            if *weights != fixed.ranks[rank.to_index()?] {
                ranks.push(rank);
            }
        }
        Ok(ranks)
    }
}

impl Default for PieceWeights {
    fn default() -> Self {
        Self::fixed()
    }
}

/// How the weight table is built at the start of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    Fixed,
    Random,
}

impl FromStr for WeightMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(WeightMode::Fixed),
            "random" => Ok(WeightMode::Random),
            _ => bail!("Unknown weight mode: {}", s),
        }
    }
}
