mod common;

use searoute_lib::{find_path, Graph};

use common::fixture_graph;

fn port_graph() -> Graph {
    let mut graph = Graph::new();
    for name in ["Rotterdam", "Rostock", "Hamburg", "Antwerp"] {
        graph.add_node(name);
    }
    graph
}

#[test]
fn fuzzy_matches_returns_similar_names() {
    let graph = port_graph();

    let exact = graph.fuzzy_node_matches("Hamburg", 3);
    assert_eq!(exact.first().map(String::as_str), Some("Hamburg"));

    let typo = graph.fuzzy_node_matches("Rotterdm", 3);
    assert_eq!(typo.first().map(String::as_str), Some("Rotterdam"));
}

#[test]
fn unknown_node_includes_suggestions() {
    let graph = port_graph();

    let err = find_path(&graph, "Antwrp", "Hamburg", 10.0).expect_err("unknown start");
    let message = err.to_string();
    assert!(message.contains("unknown node name"), "{message}");
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("Antwerp"), "{message}");
}

#[test]
fn fuzzy_matches_respects_limit() {
    let graph = port_graph();
    let matches = graph.fuzzy_node_matches("Ro", 1);
    assert!(matches.len() <= 1);
}

#[test]
fn single_letter_names_are_not_suggested_for_unrelated_input() {
    let graph = fixture_graph();
    let err = find_path(&graph, "Z", "A", 10.0).expect_err("unknown start");
    assert_eq!(err.to_string(), "unknown node name: Z");
}
