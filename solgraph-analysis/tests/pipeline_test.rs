//! End-to-end pipeline tests over the rendered DOT output.

use std::fs;

use solgraph_analysis::contract_graph;
use solgraph_core::config::GraphConfig;
use solgraph_core::errors::{ConfigError, ParseError, PipelineError};

fn contents_config() -> GraphConfig {
    GraphConfig {
        contents_in_file_path: Some(true),
        ..GraphConfig::default()
    }
}

/// The line of the DOT output carrying the node with this label.
fn node_line<'a>(dot: &'a str, label: &str) -> &'a str {
    let needle = format!("label = \"{label}\"");
    dot.lines()
        .find(|line| line.contains(&needle))
        .unwrap_or_else(|| panic!("no node labelled {label} in output:\n{dot}"))
}

/// Call edges in the rendered body, excluding the legend's key edges.
fn edge_lines(dot: &str) -> Vec<&str> {
    dot.lines()
        .filter(|line| line.contains("->") && !line.contains("key"))
        .collect()
}

#[test]
fn end_to_end_derived_calls_base() {
    let base = "contract Base { function g() public {} }";
    let derived = r#"
        contract Derived is Base {
            function f() public { Base x = Base(address(1)); x.g(); }
        }
    "#;
    let dot = contract_graph(
        &[derived.to_string(), base.to_string()],
        &contents_config(),
    )
    .expect("pipeline must succeed");

    assert!(node_line(&dot, "Base").contains("filled"));
    assert!(node_line(&dot, "Derived").contains("filled"));

    // Exactly one Derived → Base edge plus the internal constructor edge.
    let edges = edge_lines(&dot);
    assert_eq!(edges.len(), 2, "unexpected edges: {edges:?}");
}

#[test]
fn contract_defined_in_later_file_is_still_defined_styled() {
    // The caller file comes first in input order; two-pass collection must
    // still style the callee as defined.
    let caller = "contract User { Late late; function f() public { late.poke(); } }";
    let late = "contract Late { function poke() public {} }";
    let dot = contract_graph(&[caller.to_string(), late.to_string()], &contents_config())
        .expect("pipeline must succeed");
    assert!(node_line(&dot, "Late").contains("filled"));
}

#[test]
fn never_defined_contract_is_undefined_styled() {
    let source = "contract User { Ext ext; function f() public { ext.poke(); } }";
    let dot = contract_graph(&[source.to_string()], &contents_config())
        .expect("pipeline must succeed");
    assert!(node_line(&dot, "Ext").contains("dashed"));
    assert!(node_line(&dot, "User").contains("filled"));
}

#[test]
fn duplicate_call_sites_render_one_edge() {
    let source = r#"
        contract Base { function g() public {} }
        contract C {
            Base b;
            function f() public { b.g(); b.g(); }
            function h() public { b.g(); }
        }
    "#;
    let dot = contract_graph(&[source.to_string()], &contents_config())
        .expect("pipeline must succeed");
    assert_eq!(edge_lines(&dot).len(), 1);
}

#[test]
fn interface_and_library_labels_carry_kind_suffix() {
    let source = r#"
        interface IThing { function poke() external; }
        library Math { function id(uint256 v) internal pure returns (uint256) { return v; } }
        contract C { IThing t; function f() public { t.poke(); } }
    "#;
    let dot = contract_graph(&[source.to_string()], &contents_config())
        .expect("pipeline must succeed");
    assert!(dot.contains("IThing  (iface)"));
    assert!(dot.contains("Math  (lib)"));
}

#[test]
fn legend_is_spliced_before_final_brace() {
    let dot = contract_graph(&["contract A {}".to_string()], &contents_config())
        .expect("pipeline must succeed");
    assert!(dot.contains("label = \"Legend\";"));
    assert!(dot.contains("Internal Call"));
    assert!(dot.contains("Undefined Contract"));
    // The legend lives inside the digraph: the document still ends with the
    // digraph's closing brace.
    let legend_pos = dot.find("Legend").expect("legend present");
    let last_brace = dot.rfind('}').expect("closing brace present");
    assert!(legend_pos < last_brace);
    assert_eq!(dot.trim_end().chars().last(), Some('}'));
}

#[test]
fn dark_scheme_sets_background() {
    let config = GraphConfig {
        contents_in_file_path: Some(true),
        color_scheme: Some("dark".to_string()),
        ..GraphConfig::default()
    };
    let dot = contract_graph(&["contract A {}".to_string()], &config)
        .expect("pipeline must succeed");
    assert!(dot.contains("bgcolor = \"#2e3e56\""));
}

#[test]
fn unknown_color_scheme_is_rejected() {
    let config = GraphConfig {
        contents_in_file_path: Some(true),
        color_scheme: Some("sepia".to_string()),
        ..GraphConfig::default()
    };
    let err = contract_graph(&["contract A {}".to_string()], &config)
        .expect_err("unknown scheme must fail");
    assert!(matches!(
        err,
        PipelineError::Config(ConfigError::UnknownColorScheme { .. })
    ));
}

#[test]
fn empty_input_is_rejected_up_front() {
    let err = contract_graph(&[], &GraphConfig::default()).expect_err("empty input must fail");
    assert!(matches!(
        err,
        PipelineError::Config(ConfigError::NoInputFiles)
    ));
}

#[test]
fn parse_failure_aborts_with_origin_context() {
    let err = contract_graph(&["contract {".to_string()], &contents_config())
        .expect_err("malformed source must fail");
    match err {
        PipelineError::Parse(ParseError::Solidity { origin, .. }) => {
            assert_eq!(origin, "<provided content>");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn directory_paths_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("a.sol");
    fs::write(&file, "contract A {}").expect("write source");

    let files = vec![
        dir.path().display().to_string(),
        file.display().to_string(),
    ];
    let dot = contract_graph(&files, &GraphConfig::default()).expect("pipeline must succeed");
    assert!(dot.contains("label = \"A\""));
}

#[test]
fn missing_file_is_fatal() {
    let err = contract_graph(
        &["/nonexistent/definitely-missing.sol".to_string()],
        &GraphConfig::default(),
    )
    .expect_err("missing file must fail");
    assert!(matches!(err, PipelineError::Source(_)));
}

#[test]
fn duplicate_paths_are_deduplicated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("a.sol");
    fs::write(
        &file,
        "contract C { event Ping(); function f() public { emit Ping(); } }",
    )
    .expect("write source");

    let path = file.display().to_string();
    let dot =
        contract_graph(&[path.clone(), path], &GraphConfig::default()).expect("pipeline ok");
    // The self edge from the emit renders once even though the file was
    // listed twice.
    assert_eq!(edge_lines(&dot).len(), 1);
}

#[test]
fn importer_crawls_relative_imports() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("base.sol"),
        "contract Base { function g() public {} }",
    )
    .expect("write base");
    fs::write(
        dir.path().join("user.sol"),
        r#"import "./base.sol"; contract User { Base b; function f() public { b.g(); } }"#,
    )
    .expect("write user");

    let config = GraphConfig {
        importer: Some(true),
        ..GraphConfig::default()
    };
    let dot = contract_graph(
        &[dir.path().join("user.sol").display().to_string()],
        &config,
    )
    .expect("pipeline must succeed");

    assert!(node_line(&dot, "Base").contains("filled"));
    assert_eq!(edge_lines(&dot).len(), 1);
}

#[test]
fn libraries_flag_suppresses_redirected_edges() {
    let source = r#"
        library L { function g(uint256 v) internal pure returns (uint256) { return v; } }
        contract C { using L for uint256; uint256 x; function f() public { x.g(); } }
    "#;
    let config = GraphConfig {
        contents_in_file_path: Some(true),
        libraries: Some(true),
        ..GraphConfig::default()
    };
    let dot = contract_graph(&[source.to_string()], &config).expect("pipeline must succeed");
    assert_eq!(edge_lines(&dot).len(), 0);
}
