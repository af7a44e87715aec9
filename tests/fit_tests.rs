//! Fit analyzer tests against hand-checked board fixtures.

use tetrafall::core::shapes;
use tetrafall::core::{analyze, Board, TouchFlags};
use tetrafall::types::PieceKind;

/// 4x4 board with a vertical bar in column 2, rows 0-1.
fn bar_board() -> Board {
    Board::from_rows(&["..#.", "..#.", "....", "...."]).unwrap()
}

fn touch(above: bool, below: bool, left: bool, right: bool) -> TouchFlags {
    TouchFlags {
        above,
        below,
        left,
        right,
    }
}

#[test]
fn z_piece_fixtures() {
    let board = bar_board();
    let z = shapes::lookup(PieceKind::Z, 1).unwrap();

    let res = analyze(&z, &board, 0, 0);
    assert!(!res.fits);
    assert_eq!(res.touch, touch(true, false, true, true));

    let res = analyze(&z, &board, 1, 0);
    assert!(res.fits);
    assert_eq!(res.touch, touch(true, false, true, true));

    let res = analyze(&z, &board, 2, 1);
    assert!(res.fits);
    assert_eq!(res.touch, touch(true, true, false, true));
}

#[test]
fn square_fixtures() {
    let board = bar_board();
    let o = shapes::lookup(PieceKind::O, 1).unwrap();

    let res = analyze(&o, &board, 2, 0);
    assert!(res.fits);
    assert_eq!(res.touch, touch(false, true, true, false));
    assert_eq!(res.slots.as_slice(), &[(2, 0), (2, 1), (3, 0), (3, 1)]);

    let res = analyze(&o, &board, 2, 2);
    assert!(res.fits);
    assert_eq!(res.touch, touch(true, true, false, true));
}

#[test]
fn own_cells_never_touch() {
    let board = Board::from_rows(&["....", "....", "....", "...."]).unwrap();
    let o = shapes::lookup(PieceKind::O, 1).unwrap();

    let res = analyze(&o, &board, 1, 1);
    assert!(res.fits);
    assert!(!res.touch.any());
}

#[test]
fn piece_above_board_reports_above_only() {
    let board = Board::new();
    let t = shapes::lookup(PieceKind::T, 1).unwrap();

    let res = analyze(&t, &board, -3, 3);
    assert!(!res.fits);
    assert!(res.slots.is_empty());
    assert_eq!(res.size, 4);
    assert_eq!(res.touch, touch(true, false, false, false));
}

#[test]
fn fitting_always_means_every_cell_has_a_free_slot() {
    let board = Board::from_rows(&[
        "..........",
        "....#.....",
        "...###....",
        "#.....##..",
        "##.#..####",
        "###.######",
    ])
    .unwrap();

    for kind in PieceKind::ALL {
        for rotation in 1..=shapes::rotation_count(kind) {
            let shape = shapes::lookup(kind, rotation).unwrap();
            for row in -4..8 {
                for col in -4..12 {
                    let res = analyze(&shape, &board, row, col);
                    assert_eq!(res.size, 4);
                    if res.fits {
                        assert_eq!(res.slots.len(), res.size);
                        assert_eq!(res.blocked, 0);
                        for &(r, c) in &res.slots {
                            assert!(!board.is_occupied(r as i32, c as i32));
                        }
                    }
                }
            }
        }
    }
}
