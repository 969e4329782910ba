//! The game state machine.

use tracing::{debug, trace};

use crate::board::{Board, Grid};
use crate::core::{validate_game_size, GameConfig, Player, PlayerId, PlayerMap, Result, Style, Token};
use crate::history::{HistoryStack, Snapshot};
use crate::rules::{self, Victory};

use super::turn::Turn;

/// A game of Onitama between two registered players.
///
/// Mutated only through [`Game::make_move`] and [`Game::undo`] (and
/// [`Game::set_board`] to install a preset position). Whether the game is
/// over is recomputed from the board on every query.
#[derive(Clone, Debug)]
pub struct Game {
    size: usize,
    players: PlayerMap<Player>,
    board: Board,
    whose_turn: PlayerId,
    history: HistoryStack,
}

impl Game {
    /// Create a game in the starting position with player 1 to move.
    ///
    /// The size must be odd and at least 5.
    pub fn new(size: usize, player1: Player, player2: Player) -> Result<Self> {
        validate_game_size(size)?;
        Self::from_board(Board::new(size)?, player1, player2)
    }

    /// Create a game from a preset grid, for resuming or testing a position.
    pub fn with_board(size: usize, player1: Player, player2: Player, grid: Grid) -> Result<Self> {
        validate_game_size(size)?;
        Self::from_board(Board::with_grid(size, grid)?, player1, player2)
    }

    /// Create a game with fresh players named by the config.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let [first, second] = &config.player_names;
        Self::new(config.board_size, Player::new(first.as_str()), Player::new(second.as_str()))
    }

    fn from_board(board: Board, player1: Player, player2: Player) -> Result<Self> {
        Ok(Self {
            size: board.size(),
            players: PlayerMap::from_pair(player1, player2),
            board,
            whose_turn: PlayerId::FIRST,
            history: HistoryStack::new(),
        })
    }

    // === Players ===

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn player1(&self) -> &Player {
        &self.players[PlayerId::FIRST]
    }

    #[must_use]
    pub fn player2(&self) -> &Player {
        &self.players[PlayerId::SECOND]
    }

    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Seat of a registered player, by identity.
    #[must_use]
    pub fn seat_of(&self, player: &Player) -> Option<PlayerId> {
        self.players.position(|p| p.is(player))
    }

    /// The opponent of `player`, or `None` if `player` is not registered
    /// with this game. Compares identity, not names.
    #[must_use]
    pub fn other_player(&self, player: &Player) -> Option<&Player> {
        self.seat_of(player).map(|seat| &self.players[seat.opponent()])
    }

    /// The player to move.
    #[must_use]
    pub fn whose_turn(&self) -> &Player {
        &self.players[self.whose_turn]
    }

    /// Seat of the player to move.
    #[must_use]
    pub fn whose_turn_seat(&self) -> PlayerId {
        self.whose_turn
    }

    // === Board access ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Token at a coordinate, empty when off the board.
    #[must_use]
    pub fn get_token(&self, row: i32, col: i32) -> Token {
        self.board.get_token(row, col)
    }

    /// Independent copy of the grid.
    #[must_use]
    pub fn get_board(&self) -> Grid {
        self.board.deep_copy()
    }

    /// Live styles.
    #[must_use]
    pub fn get_styles(&self) -> &[Style] {
        self.board.styles()
    }

    /// Independent copies of the styles.
    #[must_use]
    pub fn get_styles_deep_copy(&self) -> Vec<Style> {
        self.board.styles_deep_copy()
    }

    /// Replace the board with a fresh one of the given size and layout.
    ///
    /// Styles return to their starting distribution and the undo history is
    /// cleared; the turn is unchanged.
    pub fn set_board(&mut self, size: usize, grid: Grid) -> Result<()> {
        validate_game_size(size)?;
        self.board = Board::with_grid(size, grid)?;
        self.size = size;
        self.history.clear();
        debug!(size, "installed preset board");
        Ok(())
    }

    // === Moves ===

    /// Legal iff both coordinates are on the board, the origin holds a token
    /// of the player to move, and the destination does not.
    ///
    /// The destination is not checked against any style's pattern; callers
    /// choosing moves are trusted to have done so.
    #[must_use]
    pub fn is_legal_move(&self, row_o: i32, col_o: i32, row_d: i32, col_d: i32) -> bool {
        if !self.board.valid_coordinate(row_o, col_o) || !self.board.valid_coordinate(row_d, col_d) {
            return false;
        }
        self.get_token(row_o, col_o).belongs_to(self.whose_turn)
            && !self.get_token(row_d, col_d).belongs_to(self.whose_turn)
    }

    /// Move a token and play a style card.
    ///
    /// On success the pre-move board is pushed to the history, the token
    /// moves (capturing whatever stood on the destination), the first style
    /// named `style_name` is exchanged with the floating style, and the turn
    /// passes. An unknown or floating style name skips the exchange but the
    /// move still happens.
    ///
    /// Returns false, changing nothing, if the move is not legal.
    pub fn make_move(&mut self, row_o: i32, col_o: i32, row_d: i32, col_d: i32, style_name: &str) -> bool {
        if !self.is_legal_move(row_o, col_o, row_d, col_d) {
            trace!(row_o, col_o, row_d, col_d, style_name, "rejected illegal move");
            return false;
        }

        self.history.push(Snapshot::capture(&self.board));

        let token = self.get_token(row_o, col_o);
        let captured = self.get_token(row_d, col_d);
        self.board.set_token(row_d, col_d, token);
        self.board.set_token(row_o, col_o, Token::Empty);

        let played = self.board.find_style(style_name).cloned();
        let exchanged = played.as_ref().is_some_and(|style| self.board.exchange_style(style));

        debug!(
            player = %self.whose_turn,
            from = ?(row_o, col_o),
            to = ?(row_d, col_d),
            style = style_name,
            exchanged,
            captured = %captured,
            "applied move"
        );
        self.whose_turn = self.whose_turn.opponent();
        true
    }

    /// [`Game::make_move`] with the fields of a turn.
    pub fn apply_turn(&mut self, turn: &Turn) -> bool {
        self.make_move(turn.row_o, turn.col_o, turn.row_d, turn.col_d, &turn.style_name)
    }

    /// Restore the board and styles from before the last move and hand the
    /// turn back. Does nothing when there is no history.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.pop() else {
            trace!("undo with empty history");
            return;
        };
        self.board.restore(snapshot.grid, snapshot.styles);
        self.whose_turn = self.whose_turn.opponent();
        debug!(remaining = self.history.len(), "undid move");
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    // === Outcome ===

    /// Winner and how they won, if the game is over.
    #[must_use]
    pub fn victory(&self) -> Option<Victory> {
        rules::evaluate(&self.board)
    }

    #[must_use]
    pub fn winner_seat(&self) -> Option<PlayerId> {
        self.victory().map(|v| v.winner)
    }

    /// The winning player, or `None` while the game is in progress.
    #[must_use]
    pub fn get_winner(&self) -> Option<&Player> {
        self.winner_seat().map(|seat| &self.players[seat])
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.victory().is_some()
    }

    // === Rendering ===

    #[must_use]
    pub fn get_board_string(&self) -> String {
        self.board.to_string()
    }

    /// Styles grouped as player 1's, player 2's, then the floating one.
    #[must_use]
    pub fn get_styles_string(&self) -> String {
        let mut out = String::new();
        for (seat, player) in self.players.iter() {
            out.push_str(&format!("Player {} styles:\n", player.name()));
            for style in self.board.styles_of(seat) {
                out.push_str(&format!("{style}\n"));
            }
        }
        out.push_str("Fifth style:\n");
        if let Some(style) = self.board.floating_style() {
            out.push_str(&format!("{style}\n"));
        }
        out
    }
}
