use knight_paths::core::coord::Coord;
use knight_paths::error::SearchError;
use knight_paths::filter::AcceptAll;
use knight_paths::scenarios;
use knight_paths::search::enumerate::{enumerate_with, EnumerateOptions};
use knight_paths::search::resources::ResourceLimits;

#[test]
fn generation_budget_stops_an_unfiltered_search() {
    let opts = EnumerateOptions {
        limits: ResourceLimits {
            max_paths: 100,
            max_extensions: u64::MAX,
        },
        parallel: false,
    };
    // 8, 64, then 512 > 100.
    match enumerate_with(Coord::new(0, 0), 5, None, &AcceptAll, &opts) {
        Err(SearchError::LimitExceeded {
            metric, observed, ..
        }) => {
            assert_eq!(metric, "paths");
            assert_eq!(observed, 512);
        }
        other => panic!("expected a limit error, got {other:?}"),
    }
}

#[test]
fn extension_budget_counts_children_before_filtering() {
    let opts = EnumerateOptions {
        limits: ResourceLimits {
            max_paths: usize::MAX,
            max_extensions: 72,
        },
        parallel: false,
    };
    let ok = enumerate_with(Coord::new(0, 0), 2, None, &AcceptAll, &opts).unwrap();
    assert_eq!(ok.paths.len(), 64);
    assert_eq!(ok.counts.extensions, 72);
    assert_eq!(ok.counts.peak_paths, 64);

    assert!(matches!(
        enumerate_with(Coord::new(0, 0), 3, None, &AcceptAll, &opts),
        Err(SearchError::LimitExceeded { metric: "extensions", .. })
    ));
}

#[test]
fn scenario_limits_apply_to_every_start() {
    let scn = scenarios::keypad_short().with_limits(ResourceLimits {
        max_paths: 10,
        max_extensions: u64::MAX,
    });
    assert!(matches!(
        scn.paths_from(Coord::new(2, 3), false),
        Err(SearchError::LimitExceeded { .. })
    ));
}
