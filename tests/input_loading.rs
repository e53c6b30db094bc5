mod common;
use crate::common::{demo, init_tracing, temp_file};

use std::error::Error;

use husched::errors::HuschedError;
use husched::input::{graph_from_edges, load_graph, parse_edges};
use husched::types::Delimiter;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn parses_comma_separated_edges_in_file_order() -> TestResult {
    init_tracing();

    let edges = parse_edges("3,4\n1, 3\n 2 ,3 \n", Delimiter::default())?;
    assert_eq!(edges, vec![(3, 4), (1, 3), (2, 3)]);

    Ok(())
}

#[test]
fn skips_blank_and_comment_lines() -> TestResult {
    init_tracing();

    let edges = parse_edges("# header\n\n1,2\n   \n# trailing\n", Delimiter::default())?;
    assert_eq!(edges, vec![(1, 2)]);

    Ok(())
}

#[test]
fn whitespace_delimiter_accepts_runs_of_spaces_and_tabs() -> TestResult {
    init_tracing();

    let edges = parse_edges("1   2\n2\t3\n", Delimiter::Whitespace)?;
    assert_eq!(edges, vec![(1, 2), (2, 3)]);

    Ok(())
}

#[test]
fn non_integer_token_reports_line() {
    init_tracing();

    match parse_edges("1,2\n2,x\n", Delimiter::default()) {
        Err(HuschedError::MalformedInput {
            line,
            content,
            reason,
        }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "2,x");
            assert!(reason.contains("\"x\""), "{reason}");
        }
        other => panic!("Expected MalformedInput, got: {:?}", other),
    }
}

#[test]
fn wrong_arity_reports_field_count() {
    init_tracing();

    match parse_edges("1,2,3\n", Delimiter::default()) {
        Err(HuschedError::MalformedInput { line, reason, .. }) => {
            assert_eq!(line, 1);
            assert!(reason.contains("3 field(s)"), "{reason}");
        }
        other => panic!("Expected MalformedInput, got: {:?}", other),
    }

    // A single id without delimiter is one field.
    assert!(matches!(
        parse_edges("\n\n7\n", Delimiter::default()),
        Err(HuschedError::MalformedInput { line: 3, .. })
    ));
}

#[test]
fn tasks_are_added_on_first_appearance() -> TestResult {
    init_tracing();

    let graph = graph_from_edges(&[(1, 3), (2, 3), (3, 4), (1, 3)])?;

    assert_eq!(graph.tasks().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.successors_of(1).contains(&3));
    assert_eq!(graph.in_degree(3), 2);

    Ok(())
}

#[test]
fn loads_graph_from_temp_file() -> TestResult {
    init_tracing();

    let file = temp_file("10;20\n20;30\n");
    let graph = load_graph(file.path(), Delimiter::Char(';'))?;

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.predecessors_of(30).iter().copied().collect::<Vec<_>>(), vec![20]);

    Ok(())
}

#[test]
fn loads_demo_out_forest() -> TestResult {
    init_tracing();

    let graph = load_graph(demo("out-forest.txt"), Delimiter::default())?;
    assert_eq!(graph.len(), 9);
    assert_eq!(graph.edge_count(), 7);

    Ok(())
}

#[test]
fn missing_file_is_an_error() {
    init_tracing();

    let result = load_graph(demo("does-not-exist.txt"), Delimiter::default());
    assert!(result.is_err());
}

#[test]
fn delimiter_parsing() {
    assert_eq!(",".parse::<Delimiter>(), Ok(Delimiter::Char(',')));
    assert_eq!("tab".parse::<Delimiter>(), Ok(Delimiter::Char('\t')));
    assert_eq!("Whitespace".parse::<Delimiter>(), Ok(Delimiter::Whitespace));
    assert_eq!(" ".parse::<Delimiter>(), Ok(Delimiter::Whitespace));
    assert!("::".parse::<Delimiter>().is_err());

    assert!(!Delimiter::Char('-').is_valid());
    assert!(!Delimiter::Char('7').is_valid());
    assert!(Delimiter::Char(';').is_valid());
}
