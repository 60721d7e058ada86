//! Game state: board, alphabet summary and the session driving them

mod alphabet;
mod board;
mod config;
mod error;
mod session;

pub use alphabet::{AlphabetEntry, AlphabetTracker};
pub use board::{Board, Row};
pub use config::{DEFAULT_ROWS, GameConfig};
pub use error::{SessionError, ValidationError};
pub use session::{GameSession, GameState};
