//! Feature extraction over whole games.

mod common;

use chess_analyzers::{analyze_game, CastlingType, ExtractorSet, GameAnalyzer};
use common::{italian_castled, moves, queen_trade, queens_gambit_long_castle, ruy_lopez};

#[test]
fn test_ruy_lopez_scenario() {
    let record = analyze_game(&ruy_lopez()).unwrap();
    assert_eq!(record.trades, 0);
    assert_eq!(record.game_length, 5);
    assert_eq!(record.queen_moves, 0);
    assert_eq!(record.castling_type, CastlingType::None);
    // e4 (rank 4) and e5 (rank 5 for Black) stay home; only Bb5 crosses.
    assert_eq!(record.piece_advancement, 1);
    // After each move: 1, 2, 2, 2, 2 central pawns.
    assert_eq!(record.central_pawns, 1);
}

#[test]
fn test_queen_trade_scenario() {
    let record = analyze_game(&queen_trade()).unwrap();
    assert_eq!(record.queen_lifetime, Some(10));
    assert!(record.queen_moves >= 2);
    assert_eq!(record.trades, 4);
    assert_eq!(record.game_length, 12);
}

#[test]
fn test_game_length_and_piece_totals_match_input() {
    for game in [ruy_lopez(), queen_trade(), italian_castled(), queens_gambit_long_castle()] {
        let record = analyze_game(&game).unwrap();
        assert_eq!(record.game_length as usize, game.len());
        assert_eq!(record.piece_moves.unwrap().total(), record.game_length);
    }
}

#[test]
fn test_trades_never_decrease_along_a_game() {
    let game = italian_castled();
    let mut last = 0;
    for n in 0..=game.len() {
        let trades = analyze_game(&game[..n]).unwrap().trades;
        assert!(trades >= last, "trades dropped at ply {n}");
        last = trades;
    }
    assert_eq!(last, 2);
}

#[test]
fn test_white_castling_only() {
    let record = analyze_game(&italian_castled()).unwrap();
    assert_eq!(record.castling_type, CastlingType::KingSide);

    let record = analyze_game(&queens_gambit_long_castle()).unwrap();
    assert_eq!(record.castling_type, CastlingType::QueenSide);
}

#[test]
fn test_italian_statistics() {
    let record = analyze_game(&italian_castled()).unwrap();
    assert_eq!(record.trades, 2);
    assert_eq!(record.queen_moves, 2);
    assert_eq!(record.piece_advancement, 3);
    assert_eq!(record.central_pawns, 1);
    assert_eq!(record.queen_lifetime, Some(18));

    let counts = record.piece_moves.unwrap();
    assert_eq!(counts.pawns, 5);
    assert_eq!(counts.kings, 2);
}

#[test]
fn test_no_central_pawns_in_flank_opening() {
    let record = analyze_game(&moves(&["g1f3", "g8f6", "g2g3", "g7g6", "f1g2", "f8g7"])).unwrap();
    assert_eq!(record.central_pawns, 0);
}

#[test]
fn test_empty_game_defaults() {
    let record = analyze_game(&[]).unwrap();
    assert_eq!(record.trades, 0);
    assert_eq!(record.game_length, 0);
    assert_eq!(record.central_pawns, 0);
    assert_eq!(record.castling_type, CastlingType::None);
    assert_eq!(record.queen_lifetime, Some(0));
}

#[test]
fn test_player_set_matches_full_set_on_shared_columns() {
    let game = queens_gambit_long_castle();
    let full = GameAnalyzer::new(ExtractorSet::ALL).analyze(&game).unwrap();
    let player = GameAnalyzer::new(ExtractorSet::PLAYER).analyze(&game).unwrap();

    assert_eq!(player.trades, full.trades);
    assert_eq!(player.piece_advancement, full.piece_advancement);
    assert_eq!(player.central_pawns, full.central_pawns);
    assert_eq!(player.castling_type, full.castling_type);
    assert_eq!(player.queen_lifetime, None);
}

#[test]
fn test_malformed_game_yields_no_record() {
    let game = moves(&["e2e4", "e6e5"]);
    let err = analyze_game(&game).unwrap_err();
    assert_eq!(err.ply(), 1);
}
