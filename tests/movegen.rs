use knight_paths::core::coord::{Coord, KNIGHT_STEPS};
use knight_paths::error::SearchError;
use knight_paths::rules::movegen::{is_knight_step, knight_moves};

#[test]
fn eight_moves_each_offset_exactly_once() {
    let from = Coord::new(2, 3);
    let moves = knight_moves(from).unwrap();
    assert_eq!(moves.len(), 8);

    let mut offsets: Vec<(i64, i64)> = moves.iter().map(|&m| from.delta_to(m)).collect();
    offsets.sort();
    let mut expected: Vec<(i64, i64)> = KNIGHT_STEPS
        .iter()
        .map(|d| (i64::from(d.row), i64::from(d.col)))
        .collect();
    expected.sort();
    assert_eq!(offsets, expected);
    assert!(moves.iter().all(|&m| is_knight_step(from, m)));
}

#[test]
fn moves_are_unfiltered_at_the_board_edge() {
    let moves = knight_moves(Coord::new(1, 1)).unwrap();
    assert_eq!(
        moves,
        [
            Coord::new(3, 2),
            Coord::new(3, 0),
            Coord::new(-1, 2),
            Coord::new(-1, 0),
            Coord::new(2, 3),
            Coord::new(2, -1),
            Coord::new(0, 3),
            Coord::new(0, -1),
        ]
    );
}

#[test]
fn knight_step_relation_is_symmetric() {
    let a = Coord::new(0, 0);
    assert!(is_knight_step(a, Coord::new(1, 2)));
    assert!(is_knight_step(Coord::new(1, 2), a));
    assert!(!is_knight_step(a, Coord::new(2, 2)));
    assert!(!is_knight_step(a, a));
}

#[test]
fn moves_near_the_i32_limits_error_instead_of_wrapping() {
    for cell in [
        Coord::new(i32::MAX, 0),
        Coord::new(i32::MAX - 1, 0),
        Coord::new(0, i32::MIN),
        Coord::new(i32::MIN + 1, i32::MAX),
    ] {
        match knight_moves(cell) {
            Err(SearchError::CoordinateOverflow { cell: c }) => assert_eq!(c, cell),
            other => panic!("{cell} should overflow, got {other:?}"),
        }
    }

    let inner = Coord::new(i32::MAX - 2, i32::MIN + 2);
    let moves = knight_moves(inner).unwrap();
    assert_eq!(moves[0], Coord::new(i32::MAX, i32::MIN + 3));
    assert_eq!(moves[7], Coord::new(i32::MAX - 3, i32::MIN));
    assert!(moves.iter().all(|&m| is_knight_step(inner, m)));
}

#[test]
fn knight_step_test_does_not_overflow_on_distant_cells() {
    assert!(!is_knight_step(Coord::new(i32::MAX, 0), Coord::new(i32::MIN, 0)));
    assert!(!is_knight_step(Coord::new(0, i32::MIN), Coord::new(1, i32::MAX)));
    assert!(is_knight_step(
        Coord::new(i32::MIN, i32::MIN),
        Coord::new(i32::MIN + 1, i32::MIN + 2)
    ));
}
