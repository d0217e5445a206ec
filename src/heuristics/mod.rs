pub mod tactical;
pub mod weights;

mod traits;
pub use tactical::TacticalHeuristic;
pub use traits::*;
pub use weights::{PieceWeights, WeightMode, WeightVector};
