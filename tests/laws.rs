use proptest::prelude::*;

use knight_paths::board::bounds::Bounds;
use knight_paths::core::cellset::CoordSet;
use knight_paths::core::coord::{Coord, KNIGHT_STEPS};
use knight_paths::core::path::Path;
use knight_paths::filter::board_filter;
use knight_paths::rules::movegen::{is_knight_step, knight_moves};
use knight_paths::search::enumerate::enumerate;
use knight_paths::search::extend::extend;
use knight_paths::search::visits::count_hits;

fn coord() -> impl Strategy<Value = Coord> {
    (-20i32..20, -20i32..20).prop_map(Coord::from)
}

fn small_board() -> impl Strategy<Value = (Bounds, CoordSet, CoordSet)> {
    (1i32..5, 1i32..6).prop_flat_map(|(rows, cols)| {
        let bounds = Bounds::new(1, rows, 1, cols).unwrap();
        let cell = (1..=rows, 1..=cols).prop_map(Coord::from);
        (
            Just(bounds),
            prop::collection::vec(cell.clone(), 0..3).prop_map(CoordSet::from),
            prop::collection::vec(cell, 0..5).prop_map(CoordSet::from),
        )
    })
}

/// A random knight walk of up to 6 cells.
fn walk() -> impl Strategy<Value = Path> {
    (coord(), prop::collection::vec(0usize..8, 0..6)).prop_map(|(start, dirs)| {
        let mut p = Path::start(start);
        for d in dirs {
            p = p.extended(p.last().checked_add(KNIGHT_STEPS[d]).unwrap());
        }
        p
    })
}

proptest! {
    #[test]
    fn moves_cover_every_offset_once(c in coord()) {
        let moves = knight_moves(c).unwrap();
        for (m, d) in moves.iter().zip(KNIGHT_STEPS) {
            prop_assert_eq!(c.delta_to(*m), (i64::from(d.row), i64::from(d.col)));
            prop_assert!(is_knight_step(c, *m));
        }
    }

    #[test]
    fn extend_appends_one_cell_to_a_copy(p in walk()) {
        let out = extend(p.clone()).unwrap();
        prop_assert_eq!(out.len(), 8);
        for (child, m) in out.iter().zip(knight_moves(p.last()).unwrap()) {
            prop_assert_eq!(child.len(), p.len() + 1);
            prop_assert_eq!(&child.cells()[..p.len()], p.cells());
            prop_assert_eq!(child.last(), m);
        }
    }

    #[test]
    fn enumerated_paths_respect_every_constraint(
        (bounds, forbidden, limited) in small_board(),
        steps in 0usize..4,
        cap in 1u32..3,
        pick in 0usize..20,
    ) {
        let cells: Vec<Coord> = bounds.cells().collect();
        let start = cells[pick % cells.len()];
        let filter = board_filter(bounds, &forbidden);
        let paths = enumerate(start, steps, Some(&limited), Some(cap), &filter).unwrap();

        for p in &paths {
            prop_assert_eq!(p.len(), steps + 1);
            prop_assert_eq!(p.first(), start);
            prop_assert!(p.cells().iter().all(|&c| bounds.contains(c) && !forbidden.contains(c)));
            prop_assert!(count_hits(p.cells(), &limited) <= cap as usize);
            prop_assert!(p.cells().windows(2).all(|w| is_knight_step(w[0], w[1])));
        }

        if steps > 0 {
            let shorter = enumerate(start, steps - 1, Some(&limited), Some(cap), &filter).unwrap();
            for p in &paths {
                let prefix = Path::from_cells(p.cells()[..steps].to_vec()).unwrap();
                prop_assert!(shorter.contains(&prefix));
            }
        }

        let again = enumerate(start, steps, Some(&limited), Some(cap), &filter).unwrap();
        prop_assert_eq!(paths, again);
    }
}
