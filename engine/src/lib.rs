pub mod config;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

mod error;

pub use error::{EngineError, Result};
pub use session_rng::{MoveRandom, SessionRng};
