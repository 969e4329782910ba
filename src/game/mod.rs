//! Game orchestration: turn order, legality, move application, undo.
//!
//! ## Move flow
//!
//! `make_move` checks legality against the board, snapshots the board into
//! the history, relocates the token, exchanges the played style and passes
//! the turn. `undo` pops the snapshot, restores board and styles and hands
//! the turn back. Each runs to completion; no partial move is observable.
//!
//! ```
//! use onitama::core::Player;
//! use onitama::game::Game;
//!
//! let mut game = Game::new(5, Player::new("id1"), Player::new("id2")).unwrap();
//! assert!(game.make_move(0, 2, 1, 2, "crab"));
//! assert!(game.make_move(4, 2, 0, 2, "mantis"));
//! assert_eq!(game.get_winner().map(|p| p.name()), Some("id2"));
//!
//! game.undo();
//! assert!(game.get_winner().is_none());
//! ```

mod state;
mod turn;

pub use state::Game;
pub use turn::Turn;
