//! Built-in scenarios (compile-time configs).

use crate::board::bounds::Bounds;
use crate::core::cellset::CoordSet;
use crate::core::coord::Coord;
use crate::scenario::Scenario;
use crate::search::resources::ResourceLimits;

/// The keypad's rectangle: rows 1–4, columns 1–5.
///
/// ```text
///       1   2   3   4   5
///   1   A   B   C   D   E
///   2   F   G   H   I   J
///   3   K   L   M   N   O
///   4   ·   1   2   3   ·
/// ```
pub const KEYPAD_BOUNDS: Bounds = Bounds {
    row_min: 1,
    row_max: 4,
    col_min: 1,
    col_max: 5,
};

/// The two blank keys in the bottom corners.
pub const KEYPAD_MISSING: [Coord; 2] = [Coord::new(4, 1), Coord::new(4, 5)];

/// Keys labelled with a vowel: A, E, I, O.
pub const KEYPAD_VOWELS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, 5),
    Coord::new(2, 4),
    Coord::new(3, 5),
];

fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_paths: 5_000_000,
        max_extensions: 100_000_000,
    }
}

/// 10-key sequences (9 moves) with at most 2 vowels.
pub fn keypad() -> Scenario {
    Scenario {
        name: "keypad".to_string(),
        bounds: KEYPAD_BOUNDS,
        forbidden: CoordSet::from(KEYPAD_MISSING),
        limited: Some(CoordSet::from(KEYPAD_VOWELS)),
        cap: Some(2),
        steps: 9,
        no_immediate_return: false,
        limits: demo_limits(),
    }
}

/// Same keypad, 3 moves. Small enough to be used in tests and fast demos.
pub fn keypad_short() -> Scenario {
    Scenario {
        name: "keypad_short".to_string(),
        steps: 3,
        ..keypad()
    }
}

/// Return a config by name.
pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "keypad" => Some(keypad()),
        "keypad_short" => Some(keypad_short()),
        _ => None,
    }
}

/// Names of all built-in scenarios.
pub fn names() -> &'static [&'static str] {
    &["keypad", "keypad_short"]
}
