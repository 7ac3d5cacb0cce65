//! Test suite for exporting puzzle solutions

use boardsearch::{
    Error, solve_astar,
    report::{Algorithm, SolveReport},
    sliding::SlidingBoard,
};
use tempfile::TempDir;

#[test]
fn test_report_save_and_load() {
    let start = SlidingBoard::parse("      |      |xxa   |  a   |      |      ").unwrap();
    let solution = solve_astar(&start).unwrap();
    let report = SolveReport::new(Algorithm::Astar, &solution);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("solution.json");
    report.save(&path).unwrap();

    let loaded = SolveReport::load(&path).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.moves, 2);
    assert_eq!(loaded.boards().unwrap(), solution.path);
}

#[test]
fn test_loading_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = SolveReport::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_loading_garbage_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = SolveReport::load(&path).unwrap_err();
    assert!(matches!(err, Error::Serialization(_)));
}
