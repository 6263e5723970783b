use gridline_engine::builder::{GameBuilder, PLAYER_COUNT};
use gridline_engine::errors::GameError;
use gridline_engine::player::{Player, ScriptedMoves};
use gridline_engine::symbol::GameSymbol;

fn scripted(symbol: GameSymbol) -> Player {
    Player::new(symbol, Box::new(ScriptedMoves::new(vec![])))
}

#[test]
fn build_rejects_empty_roster() {
    let result = GameBuilder::new().with_size(3).build();
    assert_eq!(
        result.err(),
        Some(GameError::InvalidPlayers {
            expected: PLAYER_COUNT
        })
    );
}

#[test]
fn build_rejects_single_player() {
    let result = GameBuilder::new()
        .with_size(3)
        .with_player(scripted(GameSymbol::X))
        .build();
    assert!(matches!(result, Err(GameError::InvalidPlayers { .. })));
}

#[test]
fn build_rejects_three_players() {
    let result = GameBuilder::new()
        .with_size(3)
        .with_player(scripted(GameSymbol::X))
        .with_player(scripted(GameSymbol::O))
        .with_player(scripted(GameSymbol::new('Z')))
        .build();
    assert!(matches!(result, Err(GameError::InvalidPlayers { .. })));
}

#[test]
fn build_rejects_duplicate_symbols() {
    let result = GameBuilder::new()
        .with_size(3)
        .with_player(scripted(GameSymbol::X))
        .with_player(scripted(GameSymbol::X))
        .build();
    assert!(matches!(result, Err(GameError::InvalidPlayers { .. })));
}

#[test]
fn build_rejects_zero_board_size() {
    let result = GameBuilder::new()
        .with_size(0)
        .with_player(scripted(GameSymbol::X))
        .with_player(scripted(GameSymbol::O))
        .build();
    assert_eq!(result.err(), Some(GameError::InvalidBoardSize { size: 0 }));
}

#[test]
fn build_accepts_two_players_with_unique_symbols() {
    let game = GameBuilder::new()
        .with_size(5)
        .with_player(scripted(GameSymbol::new('A')))
        .with_player(scripted(GameSymbol::new('B')))
        .build()
        .expect("valid configuration");
    assert_eq!(game.board().size(), 5);
    assert_eq!(game.next_player_index(), 0);
    assert_eq!(game.winner(), None);
}

#[test]
fn with_size_replaces_previous_size() {
    let game = GameBuilder::new()
        .with_size(7)
        .with_size(3)
        .with_player(scripted(GameSymbol::X))
        .with_player(scripted(GameSymbol::O))
        .build()
        .unwrap();
    assert_eq!(game.board().size(), 3);
}

#[test]
fn default_board_size_is_three() {
    let game = GameBuilder::new()
        .with_player(scripted(GameSymbol::X))
        .with_player(scripted(GameSymbol::O))
        .build()
        .unwrap();
    assert_eq!(game.board().size(), 3);
}
