//! Integration tests for graph_poet

use graph_poet::*;
use std::io::Write;

/// Corpus used across the poem tests
const CORPUS: &str = r#"
To explore strange new worlds
To seek out new life and new civilizations
To boldly go where no one has gone before
"#;

#[test]
fn test_full_pipeline() {
    // Tokenize
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize(CORPUS);
    assert_eq!(tokens.len(), 22);
    assert_eq!(tokens[0].text, "To");
    assert_eq!(tokens[0].canonical(), "to");

    // Build graph
    let graph = WordGraphBuilder::new().build(&tokens);
    assert_eq!(graph.weight("to", "explore"), 1);
    assert_eq!(graph.weight("new", "life"), 1);
    assert_eq!(graph.weight("new", "worlds"), 1);
    assert_eq!(graph.weight("worlds", "to"), 1);

    // Bridge
    let inserter = BridgeInserter::new(&graph);
    assert_eq!(
        inserter.poem("Seek to explore new and exciting synergies!"),
        "Seek to explore strange new life and exciting synergies!"
    );
}

#[test]
fn test_case_folded_vertices_and_self_loop() {
    let poet = GraphPoet::from_text("Hello, HELLO, hello, goodbye.");
    let graph = poet.graph();

    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.contains("hello,"));
    assert!(graph.contains("goodbye."));
    assert!(!graph.contains("Hello,"));

    assert_eq!(graph.weight("hello,", "hello,"), 2);
    assert_eq!(graph.weight("hello,", "goodbye."), 1);
    assert_eq!(graph.weight("goodbye.", "hello,"), 0);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_poem_inserts_bridges() {
    let poet = GraphPoet::from_text("Seek to explore strange new life and exciting synergies!");

    assert_eq!(
        poet.poem("Seek to explore new and exciting synergies!"),
        "Seek to explore strange new life and exciting synergies!"
    );
}

#[test]
fn test_single_word_unchanged() {
    let poet = GraphPoet::from_text(CORPUS);

    assert_eq!(poet.poem("Like"), "Like");
    assert_eq!(poet.poem("explore"), "explore");
    assert_eq!(poet.poem(""), "");
}

#[test]
fn test_unbridged_pair_left_alone() {
    let poet = GraphPoet::from_text(CORPUS);

    // Nothing leads from "new" to "boldly" or from "boldly" to "gone" in two hops
    assert_eq!(
        poet.poem("explore new boldly gone"),
        "explore strange new boldly gone"
    );
}

#[test]
fn test_equal_bridges_are_deterministic() {
    let corpus = "we saw red fish we saw blue fish we saw one fish we saw two fish";
    let poet = GraphPoet::from_text(corpus);

    let first = poet.poem("saw fish");
    assert_eq!(first, "saw blue fish");
    for _ in 0..20 {
        assert_eq!(poet.poem("saw fish"), first);
        assert_eq!(GraphPoet::from_text(corpus).poem("saw fish"), first);
    }

    let reverse = GraphPoet::from_text_with_config(
        corpus,
        PoetConfig::default().with_tie_break(TieBreak::ReverseLexical),
    )
    .unwrap();
    assert_eq!(reverse.poem("saw fish"), "saw two fish");
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph: WeightedDiGraph<String> = WeightedDiGraph::new();
    graph.set("a".to_string(), "b".to_string(), 4).unwrap();

    let err = graph
        .set("a".to_string(), "c".to_string(), -1)
        .unwrap_err();
    assert!(err.is_invalid_weight());
    assert!(matches!(err, PoetError::InvalidWeight { weight: -1 }));

    // Untouched
    assert!(!graph.contains("c"));
    assert_eq!(graph.weight("a", "b"), 4);
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_remove_cascades() {
    let mut graph = GraphPoet::from_text(CORPUS).graph().clone();
    assert!(graph.contains("new"));
    let edges_before = graph.edge_count();
    let incident = graph.targets("new").len() + graph.sources("new").len();

    assert!(graph.remove("new"));
    assert!(!graph.remove("new"));

    assert!(!graph.contains("new"));
    assert_eq!(graph.edge_count(), edges_before - incident);
    assert!(graph.targets("strange").is_empty());
    assert!(graph.sources("life").is_empty());
    assert!(graph
        .edges()
        .all(|(source, target, _)| source != "new" && target != "new"));
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a quick\nbrown fox\n").unwrap();
    file.flush().unwrap();

    let poet = GraphPoet::from_path(file.path()).unwrap();

    assert_eq!(poet.corpus_words(), &["a", "quick", "brown", "fox"]);
    assert_eq!(poet.graph().weight("quick", "brown"), 1);
    assert_eq!(poet.poem("Quick fox"), "Quick brown fox");
}

#[test]
fn test_from_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-corpus.txt");

    let result = GraphPoet::from_path(&missing);
    assert!(matches!(result, Err(PoetError::Io(_))));
}

#[test]
fn test_config_from_json() {
    let config = PoetConfig::from_json(r#"{"tie_break": "reverse_lexical"}"#).unwrap();
    assert_eq!(config.tie_break, TieBreak::ReverseLexical);
    assert_eq!(config.parallel_threshold, PoetConfig::default().parallel_threshold);

    let invalid = PoetConfig::from_json(r#"{"parallel_threshold": 1}"#);
    assert!(matches!(invalid, Err(PoetError::InvalidConfig { .. })));

    let malformed = PoetConfig::from_json("{");
    assert!(matches!(malformed, Err(PoetError::Serialization { .. })));
}

#[test]
fn test_parallel_build_matches_sequential() {
    let text = CORPUS.repeat(100);
    let tokens = Tokenizer::new().tokenize(&text);

    let sequential = WordGraphBuilder::new().build(&tokens);
    let parallel = WordGraphBuilder::new()
        .with_parallel_threshold(2)
        .build_parallel(&tokens);

    assert_eq!(sequential.vertices(), parallel.vertices());
    assert_eq!(sequential.edge_count(), parallel.edge_count());
    for (source, target, weight) in sequential.edges() {
        assert_eq!(parallel.weight(source, target), weight);
    }
    assert_eq!(parallel.weight("to", "seek"), 100);
    assert_eq!(parallel.to_string(), sequential.to_string());
}

#[test]
fn test_graph_display() {
    let poet = GraphPoet::from_text("b a b");

    assert_eq!(
        poet.graph().to_string(),
        "Vertices: a b\nEdges:\na -> b (1)\nb -> a (1)\n"
    );
}
