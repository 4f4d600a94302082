//! DOT serialization — graph shell, petgraph content rendering, legend splice.

use petgraph::dot::{Config, Dot};
use petgraph::visit::EdgeRef;

use solgraph_core::config::ColorScheme;

use super::{CallStyle, ContractGraph, ContractNode, NodeStyle};

/// Serialize the accumulated graph as a DOT document.
///
/// The shell (graph-level attributes and node/edge defaults) comes from the
/// colour scheme; node and edge bodies are rendered by `petgraph::dot::Dot`;
/// the legend subgraph is spliced in immediately before the final closing
/// brace of the serialized output.
pub fn render(graph: &ContractGraph, scheme: &ColorScheme) -> String {
    let mut out = String::from("digraph G {\n");
    out.push_str("    ratio = \"auto\"\n");
    out.push_str("    page = \"100\"\n");
    out.push_str("    compound = true\n");
    if let Some(ref bg) = scheme.digraph.bgcolor {
        out.push_str(&format!("    bgcolor = \"{bg}\"\n"));
    }
    if !scheme.digraph.node_attribs.is_empty() {
        out.push_str(&format!(
            "    node [{}]\n",
            join_attribs(&scheme.digraph.node_attribs)
        ));
    }
    if !scheme.digraph.edge_attribs.is_empty() {
        out.push_str(&format!(
            "    edge [{}]\n",
            join_attribs(&scheme.digraph.edge_attribs)
        ));
    }

    out.push_str(&format!(
        "{}",
        Dot::with_attr_getters(
            graph.inner(),
            &[
                Config::GraphContentOnly,
                Config::NodeNoLabel,
                Config::EdgeNoLabel,
            ],
            &|_, edge| edge_attributes(scheme, edge.weight().style),
            &|_, (_, node)| node_attributes(scheme, node),
        )
    ));
    out.push_str("}\n");

    insert_before_last_occurrence(&out, '}', &legend(scheme))
}

fn join_attribs(attribs: &std::collections::BTreeMap<String, String>) -> String {
    attribs
        .iter()
        .map(|(k, v)| format!("{k} = \"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn node_attributes(scheme: &ColorScheme, node: &ContractNode) -> String {
    let colors = match node.style {
        NodeStyle::Defined => &scheme.defined,
        NodeStyle::Undefined => &scheme.undefined,
    };
    let suffix = node.kind.map(|k| k.label_suffix()).unwrap_or("");
    let mut attrs = format!(
        "label = \"{}{}\", color = \"{}\"",
        escape(&node.name),
        suffix,
        colors.color
    );
    if let Some(ref fontcolor) = colors.fontcolor {
        attrs.push_str(&format!(", fontcolor = \"{fontcolor}\""));
    }
    attrs.push_str(&format!(
        ", style = \"{}\"",
        colors.style.as_deref().unwrap_or("filled")
    ));
    attrs
}

fn edge_attributes(scheme: &ColorScheme, style: CallStyle) -> String {
    let color = match style {
        CallStyle::Regular => &scheme.call.regular,
        CallStyle::SelfCall => &scheme.call.this_call,
        CallStyle::Default => &scheme.call.default,
    };
    format!("color = \"{color}\"")
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The static legend subgraph: a fixed visual key for internal/external
/// calls and defined/undefined contracts, written in raw DOT.
fn legend(scheme: &ColorScheme) -> String {
    let defined_bg = scheme
        .defined
        .bgcolor
        .as_deref()
        .unwrap_or(&scheme.defined.color);
    format!(
        "\n\nrankdir=LR\n\
         node [shape=plaintext]\n\
         subgraph cluster_01 {{ \n\
         label = \"Legend\";\n\
         key [label=<<table border=\"0\" cellpadding=\"2\" cellspacing=\"0\" cellborder=\"0\">\n\
         \x20 <tr><td align=\"right\" port=\"i1\">Internal Call</td></tr>\n\
         \x20 <tr><td align=\"right\" port=\"i2\">External Call</td></tr>\n\
         \x20 <tr><td align=\"right\" port=\"i3\">Defined Contract</td></tr>\n\
         \x20 <tr><td align=\"right\" port=\"i4\">Undefined Contract</td></tr>\n\
         \x20 </table>>]\n\
         key2 [label=<<table border=\"0\" cellpadding=\"2\" cellspacing=\"0\" cellborder=\"0\">\n\
         \x20 <tr><td port=\"i1\">&nbsp;&nbsp;&nbsp;</td></tr>\n\
         \x20 <tr><td port=\"i2\">&nbsp;&nbsp;&nbsp;</td></tr>\n\
         \x20 <tr><td port=\"i3\" bgcolor=\"{defined_bg}\">&nbsp;&nbsp;&nbsp;</td></tr>\n\
         \x20 <tr><td port=\"i4\">\n\
         \x20   <table border=\"1\" cellborder=\"0\" cellspacing=\"0\" cellpadding=\"7\" color=\"{undefined_color}\">\n\
         \x20     <tr>\n\
         \x20      <td></td>\n\
         \x20     </tr>\n\
         \x20   </table>\n\
         \x20 </td></tr>\n\
         \x20 </table>>]\n\
         key:i1:e -> key2:i1:w [color=\"{regular}\"]\n\
         key:i2:e -> key2:i2:w [color=\"{external}\"]\n\
         }}\n",
        defined_bg = defined_bg,
        undefined_color = scheme.undefined.color,
        regular = scheme.call.regular,
        external = scheme.call.default,
    )
}

/// Insert `insert` immediately before the last occurrence of `delimiter`.
/// Returns the input unchanged when the delimiter never occurs.
fn insert_before_last_occurrence(haystack: &str, delimiter: char, insert: &str) -> String {
    match haystack.rfind(delimiter) {
        Some(pos) => {
            let mut out = String::with_capacity(haystack.len() + insert.len());
            out.push_str(&haystack[..pos]);
            out.push_str(insert);
            out.push_str(&haystack[pos..]);
            out
        }
        None => haystack.to_string(),
    }
}
