//! Call resolver tests — classification, scope, and graph updates.

use solgraph_analysis::ast;
use solgraph_analysis::collect::{self, Declarations};
use solgraph_analysis::graph::{ContractGraph, NodeStyle};
use solgraph_analysis::linearize::linearize;
use solgraph_analysis::resolve;

fn resolve_sources(sources: &[&str], suppress_libraries: bool) -> ContractGraph {
    let units: Vec<_> = sources
        .iter()
        .map(|s| ast::parse_unit("<test>", s).expect("test source must parse"))
        .collect();
    let mut decls = Declarations::new();
    let mut graph = ContractGraph::new();
    for unit in &units {
        collect::collect_unit(&mut decls, &mut graph, unit);
    }
    let lin = linearize(&decls).expect("hierarchy must linearize");
    resolve::resolve_units(&decls, &lin, &mut graph, suppress_libraries, &units);
    graph
}

#[test]
fn super_call_targets_nearest_ancestor() {
    let graph = resolve_sources(
        &[
            "contract A { function f() public virtual {} }",
            "contract B is A { function f() public override { super.f(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("B", "A"));
}

#[test]
fn super_call_without_ancestor_is_dropped() {
    let graph = resolve_sources(
        &["contract A { function f() public { super.f(); } }"],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn state_variable_of_contract_type_resolves_to_its_type() {
    let graph = resolve_sources(
        &[
            "contract Base { function g() public {} }",
            "contract User { Base target; function f() public { target.g(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("User", "Base"));
}

#[test]
fn local_variable_of_contract_type_resolves_to_its_type() {
    let graph = resolve_sources(
        &[
            "contract Base { function g() public {} }",
            "contract User { function f() public { Base x = Base(address(0)); x.g(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("User", "Base"));
}

#[test]
fn inherited_state_variable_is_visible_in_derived_contract() {
    let graph = resolve_sources(
        &[
            "contract Token { function transfer() public {} }",
            "contract Holder { Token token; }",
            "contract Wallet is Holder { function f() public { token.transfer(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("Wallet", "Token"));
}

#[test]
fn using_for_redirects_to_library() {
    let graph = resolve_sources(
        &[
            "library L { function g(uint256 v) internal pure returns (uint256) { return v; } }",
            "contract C { using L for uint256; function h() public { uint256 x = 1; x.g(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "L"));
}

#[test]
fn using_for_suppressed_produces_no_edge() {
    let graph = resolve_sources(
        &[
            "library L { function g(uint256 v) internal pure returns (uint256) { return v; } }",
            "contract C { using L for uint256; function h() public { uint256 x = 1; x.g(); } }",
        ],
        true,
    );
    assert!(!graph.has_edge("C", "L"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn uint_state_variable_matches_uint256_using_for() {
    let graph = resolve_sources(
        &[
            "library L { function g(uint256 v) internal pure returns (uint256) { return v; } }",
            "contract C { using L for uint256; uint x; function h() public { x.g(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "L"));
}

#[test]
fn using_for_wildcard_matches_any_type() {
    let graph = resolve_sources(
        &[
            "library L { function g(bytes32 v) internal pure returns (bytes32) { return v; } }",
            "contract C { using L for *; bytes32 h; function f() public { h.g(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "L"));
}

#[test]
fn plain_typed_object_without_library_produces_no_edge() {
    let graph = resolve_sources(
        &["contract C { uint256 x; function f() public { x.unknownMember(); } }"],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn using_for_on_member_not_declared_by_library_falls_through() {
    // L attaches to uint256 but does not declare `h`, so no redirect happens
    // and the plain-typed object bails out.
    let graph = resolve_sources(
        &[
            "library L { function g(uint256 v) internal pure returns (uint256) { return v; } }",
            "contract C { using L for uint256; uint256 x; function f() public { x.h(); } }",
        ],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn locals_do_not_leak_between_functions() {
    let graph = resolve_sources(
        &[
            "contract Token { function transfer() public {} }",
            r#"
            contract C {
                function f() public { Token t = Token(address(0)); t.transfer(); }
                function g() public { t.transfer(); }
            }
            "#,
        ],
        false,
    );
    // In f, `t` resolves to Token; in g the binding is gone, so the raw
    // object name enters the graph as an undefined node.
    assert!(graph.has_edge("C", "Token"));
    assert!(graph.has_edge("C", "t"));
    assert_eq!(graph.style_of("t"), Some(NodeStyle::Undefined));
}

#[test]
fn direct_name_event_emission_is_an_internal_edge() {
    let graph = resolve_sources(
        &["contract C { event Ping(); function f() public { emit Ping(); } }"],
        false,
    );
    assert!(graph.has_edge("C", "C"));
}

#[test]
fn inherited_event_is_reachable_through_dependency_set() {
    let graph = resolve_sources(
        &[
            "contract Base { event Ping(); }",
            "contract C is Base { function f() public { emit Ping(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "C"));
}

#[test]
fn struct_literal_construction_is_an_internal_edge() {
    let graph = resolve_sources(
        &[r#"
        contract C {
            struct Entry { uint256 value; }
            Entry entry;
            function f() public { entry = Entry(1); }
        }
        "#],
        false,
    );
    assert!(graph.has_edge("C", "C"));
}

#[test]
fn plain_function_call_produces_no_edge() {
    let graph = resolve_sources(
        &["contract C { function helper() internal {} function f() public { helper(); } }"],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn this_call_is_a_self_edge() {
    let graph = resolve_sources(
        &["contract C { function g() public {} function f() public { this.g(); } }"],
        false,
    );
    assert!(graph.has_edge("C", "C"));
}

#[test]
fn contract_typecast_targets_the_cast_type() {
    let graph = resolve_sources(
        &[
            "contract Token { function transfer() public {} }",
            "contract C { function f(address a) public { Token(a).transfer(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "Token"));
}

#[test]
fn address_cast_unwraps_to_the_argument_name() {
    let graph = resolve_sources(
        &[
            "contract Registry { function ping() public {} }",
            "contract C { Registry reg; function f() public { address(reg).ping(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "Registry"));
}

#[test]
fn address_cast_of_number_literal_becomes_synthetic_node() {
    let graph = resolve_sources(
        &["contract C { function f() public { address(0).send_(); } }"],
        false,
    );
    assert!(graph.has_edge("C", "address(0)"));
    assert_eq!(graph.style_of("address(0)"), Some(NodeStyle::Undefined));
}

#[test]
fn special_variable_with_library_attachment_redirects() {
    let graph = resolve_sources(
        &[
            "library AddrLib { function safeSend(address a) internal {} }",
            "contract C { using AddrLib for address; function f() public { msg.sender.safeSend(); } }",
        ],
        false,
    );
    assert!(graph.has_edge("C", "AddrLib"));
}

#[test]
fn special_variable_without_attachment_is_dropped() {
    let graph = resolve_sources(
        &["contract C { function f() public { msg.sender.transfer(1); } }"],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn unknown_object_name_enters_graph_as_undefined() {
    let graph = resolve_sources(
        &["contract C { function f() public { externalThing.poke(); } }"],
        false,
    );
    assert!(graph.has_edge("C", "externalThing"));
    assert_eq!(graph.style_of("externalThing"), Some(NodeStyle::Undefined));
}

#[test]
fn repeated_call_sites_deduplicate_to_one_edge() {
    let graph = resolve_sources(
        &[
            "contract Base { function g() public {} }",
            r#"
            contract C {
                Base b;
                function f() public { b.g(); b.g(); }
                function h() public { b.g(); }
            }
            "#,
        ],
        false,
    );
    assert!(graph.has_edge("C", "Base"));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn calls_outside_bodies_are_ignored() {
    // A state initializer runs outside any function or modifier scope.
    let graph = resolve_sources(
        &[
            "contract Token { function totalSupply() public returns (uint256) { return 0; } }",
            "contract C { Token t; uint256 supply = t.totalSupply(); }",
        ],
        false,
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn modifier_bodies_establish_a_calling_scope() {
    let graph = resolve_sources(
        &[
            "contract Auth { function check() public {} }",
            r#"
            contract C {
                Auth auth;
                modifier guarded() { auth.check(); _; }
            }
            "#,
        ],
        false,
    );
    assert!(graph.has_edge("C", "Auth"));
}

#[test]
fn nested_call_arguments_are_traversed() {
    let graph = resolve_sources(
        &[
            "contract Oracle { function price() public returns (uint256) { return 0; } }",
            r#"
            contract C {
                Oracle oracle;
                function f() public returns (uint256) {
                    return compute(oracle.price());
                }
                function compute(uint256 v) internal pure returns (uint256) { return v; }
            }
            "#,
        ],
        false,
    );
    assert!(graph.has_edge("C", "Oracle"));
}
