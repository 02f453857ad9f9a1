//! Core engine types: coordinates, players, state, move records, RNG, configuration.
//!
//! Everything here is plain data. Rule logic lives in `rules`, and turn
//! sequencing lives in `turn`.

pub mod position;
pub mod player;
pub mod rng;
pub mod config;
pub mod record;
pub mod state;

pub use position::{OffBoard, Position, BOARD_SIZE, TEMPLE_COL};
pub use player::{Facing, InvalidPlayer, Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use config::{is_valid_player_name, GameConfig, DEFAULT_MOVE_LOG_CAPACITY, MAX_NAME_LEN};
pub use record::{ExportedMove, MoveLog, MoveRecord};
pub use state::{GameState, SetupError};
