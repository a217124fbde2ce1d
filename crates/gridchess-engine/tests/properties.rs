//! Board-wide properties of the rules, checked with proptest.

use gridchess_core::{Color, Piece, PieceKind, Placement, Square};
use gridchess_engine::movegen::squares_between;
use gridchess_engine::{
    is_in_check, is_legal_move, Board, ClassicRules, RuleSet, SavedGame, StrictRules,
};
use proptest::prelude::*;
use proptest::sample::Index;

const DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// How many steps fit on the board from `start` in direction `dir`.
fn reach(start: Square, dir: usize) -> i8 {
    let (d_row, d_col) = DIRECTIONS[dir];
    (1..8)
        .take_while(|&k| start.offset(d_row * k, d_col * k).is_some())
        .count() as i8
}

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_map(|(row, col)| Square::new(row, col).unwrap())
}

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

fn arb_piece() -> impl Strategy<Value = Piece> {
    (0usize..6, arb_color()).prop_map(|(kind, color)| Piece::new(PieceKind::ALL[kind], color))
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(proptest::option::weighted(0.3, arb_piece()), 64).prop_map(
        |cells| {
            let mut board = Board::empty();
            for (sq, cell) in Square::all().zip(cells) {
                if let Some(piece) = cell {
                    board.set(sq, piece);
                }
            }
            board
        },
    )
}

proptest! {
    #[test]
    fn empty_board_is_empty_everywhere(sq in arb_square()) {
        prop_assert_eq!(Board::empty().get(sq), None);
    }

    #[test]
    fn blocked_sliders_are_never_legal(
        board in arb_board(),
        start in arb_square(),
        dir in 0usize..8,
        distance_at in any::<Index>(),
        blocker_at in any::<Index>(),
        blocker in arb_piece(),
        mover_color in arb_color(),
    ) {
        let max = reach(start, dir);
        prop_assume!(max >= 2);
        let distance = 2 + distance_at.index(max as usize - 1) as i8;
        let (d_row, d_col) = DIRECTIONS[dir];
        let end = start.offset(d_row * distance, d_col * distance).unwrap();

        let between: Vec<Square> = squares_between(start, end).collect();
        prop_assert_eq!(between.len(), distance as usize - 1);

        let mut board = board;
        board.set(between[blocker_at.index(between.len())], blocker);
        for kind in [PieceKind::Rook, PieceKind::Bishop, PieceKind::Queen] {
            let mover = Piece::new(kind, mover_color);
            board.set(start, mover);
            prop_assert!(!is_legal_move(mover, start, end, &board));
            prop_assert!(!StrictRules.is_legal_move(mover, start, end, &board));
        }
    }

    #[test]
    fn open_lines_are_legal_for_matching_sliders(
        start in arb_square(),
        dir in 0usize..8,
        distance_at in any::<Index>(),
        color in arb_color(),
    ) {
        let max = reach(start, dir);
        prop_assume!(max >= 1);
        let distance = 1 + distance_at.index(max as usize) as i8;
        let (d_row, d_col) = DIRECTIONS[dir];
        let end = start.offset(d_row * distance, d_col * distance).unwrap();
        let diagonal = d_row != 0 && d_col != 0;

        let board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, color);
        let bishop = Piece::new(PieceKind::Bishop, color);
        let queen = Piece::new(PieceKind::Queen, color);
        prop_assert_eq!(is_legal_move(rook, start, end, &board), !diagonal);
        prop_assert_eq!(is_legal_move(bishop, start, end, &board), diagonal);
        prop_assert!(is_legal_move(queen, start, end, &board));
    }

    #[test]
    fn knight_ignores_everything_but_the_destination(
        first in arb_board(),
        second in arb_board(),
        start in arb_square(),
        end in arb_square(),
        color in arb_color(),
    ) {
        let knight = Piece::new(PieceKind::Knight, color);
        let mut second = second;
        match first.get(end) {
            Some(p) => { second.set(end, p); }
            None => { second.clear(end); }
        }
        prop_assert_eq!(
            is_legal_move(knight, start, end, &first),
            is_legal_move(knight, start, end, &second)
        );

        let (d_row, d_col) = (start.row().abs_diff(end.row()), start.col().abs_diff(end.col()));
        let jump = matches!((d_row, d_col), (2, 1) | (1, 2));
        let open = first.get(end).map_or(true, |t| t.color != color);
        prop_assert_eq!(is_legal_move(knight, start, end, &first), jump && open);
    }

    #[test]
    fn kingless_boards_are_never_in_check(board in arb_board()) {
        let mut board = board;
        let kings: Vec<Square> = board
            .occupants()
            .filter(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
            .collect();
        for sq in kings {
            board.clear(sq);
        }
        for color in Color::ALL {
            prop_assert!(!is_in_check(&ClassicRules, &board, color));
            prop_assert!(!StrictRules.is_in_checkmate(&board, color));
        }
    }

    #[test]
    fn saves_restore_every_cell(board in arb_board(), to_move in arb_color()) {
        let saved = SavedGame::new(board, to_move);
        let restored = SavedGame::from_json(&saved.to_json().unwrap()).unwrap();
        for sq in Square::all() {
            prop_assert_eq!(restored.board.get(sq), board.get(sq));
        }
        prop_assert_eq!(restored.to_move, to_move);

        let text = board.to_placement();
        prop_assert!(Placement::parse(&text).is_ok());
        prop_assert_eq!(Board::from_placement(&text).unwrap(), board);
    }

    #[test]
    fn apply_move_relocates_the_occupant(
        board in arb_board(),
        start in arb_square(),
        end in arb_square(),
    ) {
        prop_assume!(start != end);
        let mut after = board;
        let captured = after.apply_move(start, end);
        match board.get(start) {
            Some(piece) => {
                prop_assert_eq!(after.get(end), Some(piece));
                prop_assert_eq!(after.get(start), None);
                prop_assert_eq!(captured, board.get(end));
            }
            None => prop_assert_eq!(after, board),
        }
        for sq in Square::all().filter(|&sq| sq != start && sq != end) {
            prop_assert_eq!(after.get(sq), board.get(sq));
        }
    }

    #[test]
    fn checkmate_implies_check(board in arb_board(), color in arb_color()) {
        if StrictRules.is_in_checkmate(&board, color) {
            prop_assert!(StrictRules.is_in_check(&board, color));
        }
        if ClassicRules.is_in_checkmate(&board, color) {
            prop_assert!(ClassicRules.is_in_check(&board, color));
        }
    }
}
