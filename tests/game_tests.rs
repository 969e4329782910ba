//! Game integration tests: turn order, winning lines, undo.

use onitama::core::{Player, PlayerId, Token};
use onitama::{Game, Grid, WinCondition};

fn new_game() -> (Game, Player, Player) {
    let player1 = Player::new("id1");
    let player2 = Player::new("id2");
    let game = Game::new(5, player1.clone(), player2.clone()).unwrap();
    (game, player1, player2)
}

// =============================================================================
// Winning Lines
// =============================================================================

#[test]
fn test_throne_win() {
    let (mut game, _, player2) = new_game();

    assert!(game.make_move(0, 2, 1, 2, "crab"));
    assert!(game.make_move(4, 2, 0, 2, "mantis"));

    assert_eq!(game.get_winner(), Some(&player2));
    assert_eq!(game.victory().map(|v| v.condition), Some(WinCondition::Throne));
}

#[test]
fn test_kill_win() {
    let (mut game, _, player2) = new_game();

    assert!(game.make_move(0, 2, 1, 2, "crab"));
    assert!(game.make_move(4, 2, 1, 2, "mantis"));

    assert_eq!(game.get_winner(), Some(&player2));
    assert_eq!(game.victory().map(|v| v.condition), Some(WinCondition::Capture));
}

#[test]
fn test_player1_win_by_throne() {
    let (mut game, player1, player2) = new_game();

    let token = game.get_token(0, 2);
    assert_eq!(game.whose_turn(), &player1);
    assert!(game.make_move(0, 2, 1, 2, "crab"));
    assert_eq!(game.get_token(1, 2), token);

    let token = game.get_token(4, 2);
    assert_eq!(game.whose_turn(), &player2);
    assert!(game.make_move(4, 2, 3, 3, "mantis"));
    assert_eq!(game.get_token(3, 3), token);

    assert!(game.get_winner().is_none());

    let token = game.get_token(1, 2);
    assert_eq!(game.whose_turn(), &player1);
    assert!(game.make_move(1, 2, 4, 2, "horse"));
    assert_eq!(game.get_token(4, 2), token);

    assert_eq!(game.get_winner(), Some(&player1));
}

#[test]
fn test_player1_win_by_kill() {
    let (mut game, player1, _) = new_game();

    assert!(game.make_move(0, 2, 1, 2, "crab"));
    assert!(game.make_move(4, 2, 3, 2, "mantis"));
    assert!(game.get_winner().is_none());
    assert!(game.make_move(1, 2, 3, 2, "horse"));

    assert_eq!(game.get_winner(), Some(&player1));
    assert_eq!(game.winner_seat(), Some(PlayerId::FIRST));
    assert!(game.is_over());
}

#[test]
fn test_no_winner_after_one_move() {
    let (mut game, _, _) = new_game();
    assert!(game.make_move(0, 0, 1, 0, "horse"));
    assert!(game.get_winner().is_none());
    assert!(!game.is_over());
}

// =============================================================================
// Illegal Moves
// =============================================================================

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let (mut game, player1, _) = new_game();
    let grid = game.get_board();
    let styles = game.get_styles_deep_copy();

    // Off the board.
    assert!(!game.make_move(0, 1, 6, -2, "crab"));
    // Onto an own piece.
    assert!(!game.make_move(0, 1, 0, 2, "crab"));
    // Opponent's piece on player 1's turn.
    assert!(!game.make_move(4, 2, 2, 3, "mantis"));
    // Empty origin.
    assert!(!game.make_move(2, 2, 1, 2, "crab"));

    assert_eq!(game.get_board(), grid);
    assert_eq!(game.get_styles_deep_copy(), styles);
    assert_eq!(game.whose_turn(), &player1);
    assert_eq!(game.history_len(), 0);
}

#[test]
fn test_second_player_cannot_move_first_players_piece() {
    let (mut game, _, _) = new_game();
    assert!(game.make_move(0, 0, 1, 0, "horse"));
    assert!(!game.make_move(0, 3, 1, 3, "horse"));
    assert!(game.make_move(4, 1, 1, 2, "mantis"));
}

// =============================================================================
// Style Exchange Through Moves
// =============================================================================

#[test]
fn test_move_keeps_one_floating_style() {
    let (mut game, _, _) = new_game();
    let moves = [
        (0, 0, 1, 0, "horse"),
        (4, 0, 3, 0, "rooster"),
        (1, 0, 2, 0, "dragon"),
        (3, 0, 2, 1, "horse"),
    ];

    for (ro, co, rd, cd, style) in moves {
        assert!(game.make_move(ro, co, rd, cd, style));
        let styles = game.get_styles();
        assert_eq!(styles.iter().filter(|s| s.is_floating()).count(), 1);
        for seat in PlayerId::both() {
            assert_eq!(styles.iter().filter(|s| s.owner() == Some(seat)).count(), 2);
        }
        assert_eq!(game.board().floating_style().map(|s| s.name()), Some(style));
    }
}

#[test]
fn test_floating_style_name_skips_exchange() {
    let (mut game, _, _) = new_game();
    let styles = game.get_styles_deep_copy();

    assert!(game.make_move(0, 0, 1, 0, "dragon"));
    assert_eq!(game.get_styles_deep_copy(), styles);
    assert_eq!(game.whose_turn_seat(), PlayerId::SECOND);
}

// =============================================================================
// Undo
// =============================================================================

#[test]
fn test_undo_restores_token() {
    let (mut game, _, _) = new_game();
    assert!(game.make_move(0, 2, 1, 2, "crab"));
    let token = game.get_token(1, 2);
    game.undo();
    assert_eq!(game.get_token(0, 2), token);
    assert_eq!(game.get_token(1, 2), Token::Empty);
}

#[test]
fn test_undo_restores_styles() {
    let (mut game, _, _) = new_game();
    let styles = game.get_styles_deep_copy();
    assert!(game.make_move(0, 2, 1, 2, "crab"));
    game.undo();
    assert_eq!(styles, game.get_styles_deep_copy());
}

#[test]
fn test_undo_reverts_win() {
    let (mut game, _, player2) = new_game();
    assert!(game.make_move(0, 2, 1, 2, "crab"));
    assert!(game.make_move(4, 2, 0, 2, "mantis"));
    assert_eq!(game.get_winner(), Some(&player2));

    game.undo();
    assert!(game.get_winner().is_none());
    assert_eq!(game.whose_turn(), &player2);
}

#[test]
fn test_undo_all_the_way_back() {
    let (mut game, player1, _) = new_game();
    let grid = game.get_board();
    let styles = game.get_styles_deep_copy();

    assert!(game.make_move(0, 0, 1, 0, "horse"));
    assert!(game.make_move(4, 0, 3, 0, "rooster"));
    assert!(game.make_move(1, 0, 2, 0, "dragon"));
    assert_eq!(game.history_len(), 3);

    game.undo();
    game.undo();
    game.undo();
    game.undo();

    assert_eq!(game.get_board(), grid);
    assert_eq!(game.get_styles_deep_copy(), styles);
    assert_eq!(game.whose_turn(), &player1);
}

// =============================================================================
// Preset Boards
// =============================================================================

#[test]
fn test_preset_board() {
    let grid = Grid::from_rows(&["..X..", ".....", "..x..", "..Y..", "....."]).unwrap();
    let mut game = Game::with_board(5, Player::new("a"), Player::new("b"), grid).unwrap();

    assert!(game.make_move(2, 2, 3, 2, "crab"));
    assert_eq!(game.winner_seat(), Some(PlayerId::FIRST));
    assert_eq!(game.victory().map(|v| v.condition), Some(WinCondition::Capture));
}

#[test]
fn test_larger_board() {
    let mut game = Game::new(7, Player::new("a"), Player::new("b")).unwrap();
    assert_eq!(game.get_token(0, 3), Token::FirstGrandmaster);
    assert_eq!(game.get_token(6, 3), Token::SecondGrandmaster);
    assert!(game.make_move(0, 3, 1, 3, "crab"));
    assert!(game.make_move(6, 3, 0, 3, "mantis"));
    assert_eq!(game.winner_seat(), Some(PlayerId::SECOND));
}

#[test]
fn test_malformed_grid_never_reaches_game() {
    let mut game = Game::new(5, Player::new("a"), Player::new("b")).unwrap();
    assert!(serde_json::from_str::<Grid>(r#"{"size":5,"cells":[]}"#).is_err());

    let grid: Grid = serde_json::from_str(&serde_json::to_string(&Grid::starting(5)).unwrap()).unwrap();
    game.set_board(5, grid).unwrap();
    assert_eq!(game.get_token(0, 0), Token::FirstMonk);
    assert_eq!(game.get_token(4, 4), Token::SecondMonk);
}
