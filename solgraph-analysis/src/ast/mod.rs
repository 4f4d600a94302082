//! Adapter over the external Solidity parser (`solang-parser`).
//!
//! The parser is treated as an opaque collaborator: it consumes raw source
//! text and returns a `pt::SourceUnit` tree. This module wraps the failure
//! surface and provides the type-shape helpers the collector and resolver
//! share when classifying declared types.

use solang_parser::pt;
use solgraph_core::errors::ParseError;

/// How a variable declaration's type participates in call resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Reference to a user-defined type (contract, interface, library, or a
    /// dotted path such as `Lib.Struct`).
    UserDefined(String),
    /// Elementary value type, canonical name (`uint256`, `address`, ...).
    /// Arrays record their base type, mappings their value type.
    Elementary(String),
}

/// Parse one source unit, logging a contextual message on failure.
///
/// `origin` is the file path, or a generic label for literal content; it only
/// feeds diagnostics. The underlying parse error is re-thrown — no partial
/// result is produced.
pub fn parse_unit(origin: &str, content: &str) -> Result<pt::SourceUnit, ParseError> {
    match solang_parser::parse(content, 0) {
        Ok((unit, _comments)) => Ok(unit),
        Err(diagnostics) => {
            tracing::error!(origin, "error found while parsing source unit");
            let message = diagnostics
                .iter()
                .map(|d| d.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            Err(ParseError::Solidity {
                origin: origin.to_string(),
                message,
            })
        }
    }
}

/// Render an identifier path (`Lib.Struct`) as a dotted string.
pub fn identifier_path_string(path: &pt::IdentifierPath) -> String {
    path.identifiers
        .iter()
        .map(|id| id.name.as_str())
        .collect::<Vec<_>>()
        .join(".")
}

/// Canonical name of an elementary type, if the type is one.
///
/// All three address flavours collapse to `address`; sized integers and
/// bytes carry their width (`uint` arrives from the parser already widened
/// to `uint256`).
pub fn elementary_type_name(ty: &pt::Type) -> Option<String> {
    match ty {
        pt::Type::Address | pt::Type::AddressPayable | pt::Type::Payable => {
            Some("address".to_string())
        }
        pt::Type::Bool => Some("bool".to_string()),
        pt::Type::String => Some("string".to_string()),
        pt::Type::DynamicBytes => Some("bytes".to_string()),
        pt::Type::Int(width) => Some(format!("int{width}")),
        pt::Type::Uint(width) => Some(format!("uint{width}")),
        pt::Type::Bytes(width) => Some(format!("bytes{width}")),
        _ => None,
    }
}

/// Canonicalize elementary type aliases: `uint` → `uint256`, `int` →
/// `int256`, `byte` → `bytes1`. Any other name passes through unchanged.
pub fn canonical_elementary(name: &str) -> &str {
    match name {
        "uint" => "uint256",
        "int" => "int256",
        "byte" => "bytes1",
        other => other,
    }
}

/// Classify a declared type expression for the declaration tables.
///
/// Covers the four recorded shapes: user-defined reference, elementary type,
/// array of X (stores X), and mapping to value type X (stores X). Anything
/// else (function types, nested mappings to user types) is not recorded.
pub fn classify_declared_type(ty: &pt::Expression) -> Option<DeclaredType> {
    match ty {
        pt::Expression::Type(_, t) => match t {
            pt::Type::Mapping { value, .. } => match classify_declared_type(value)? {
                DeclaredType::Elementary(name) => Some(DeclaredType::Elementary(name)),
                // Mappings to user types carry no callable value binding.
                DeclaredType::UserDefined(_) => None,
            },
            other => elementary_type_name(other).map(DeclaredType::Elementary),
        },
        // Arrays are recorded under their base type name; a user-typed base
        // lands in the plain table, mirroring how the diagram treats arrays
        // as opaque value containers.
        pt::Expression::ArraySubscript(_, base, _) => match classify_declared_type(base)? {
            DeclaredType::Elementary(name) | DeclaredType::UserDefined(name) => {
                Some(DeclaredType::Elementary(name))
            }
        },
        pt::Expression::Variable(id) => Some(DeclaredType::UserDefined(id.name.clone())),
        pt::Expression::MemberAccess(_, base, member) => {
            let mut names = vec![member.name.clone()];
            let mut expr: &pt::Expression = base;
            while let pt::Expression::MemberAccess(_, inner, name) = expr {
                names.push(name.name.clone());
                expr = inner;
            }
            if let pt::Expression::Variable(root) = expr {
                names.push(root.name.clone());
                names.reverse();
                Some(DeclaredType::UserDefined(names.join(".")))
            } else {
                None
            }
        }
        _ => None,
    }
}
