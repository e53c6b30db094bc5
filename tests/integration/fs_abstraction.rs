use std::path::PathBuf;

use husched::config::load_from_path_with_fs;
use husched::config::ConfigFile;
use husched::dag::HuScheduler;
use husched::errors::HuschedError;
use husched::fs::FileSystem;
use husched::fs::mock::MockFileSystem;
use husched::input::load_graph_with_fs;
use husched::types::Delimiter;

#[test]
fn test_mock_fs_edge_list() {
    let fs = MockFileSystem::new();
    fs.add_file("./edges/in-forest.txt", "1,3\n2,3\n4,5\n");

    let graph = load_graph_with_fs(&fs, PathBuf::from("./edges/in-forest.txt"), Delimiter::default())
        .unwrap();
    assert_eq!(graph.len(), 5);

    let schedule = HuScheduler::new(2).unwrap().schedule(&graph).unwrap();
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule.makespan(), 3);
}

#[test]
fn test_mock_fs_config() {
    let fs = MockFileSystem::new();
    fs.add_file("Husched.toml", "[schedule]\nmachines = 4\n");

    let raw = load_from_path_with_fs(&fs, "Husched.toml").unwrap();
    let config = ConfigFile::try_from(raw).unwrap();

    assert_eq!(config.machines(), 4);
    assert_eq!(config.delimiter(), Delimiter::Char(','));
}

#[test]
fn test_mock_fs_missing_file() {
    let fs = MockFileSystem::new();

    assert!(!fs.exists(&PathBuf::from("nope.txt")));
    match load_graph_with_fs(&fs, "nope.txt", Delimiter::default()) {
        Err(HuschedError::Other(err)) => assert!(err.to_string().contains("nope.txt")),
        other => panic!("Expected file-system error, got: {:?}", other),
    }
}
