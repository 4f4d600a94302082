//! Call-form classification — named predicates feeding a tagged decision.
//!
//! Each rule from the resolution algorithm is a small function; `classify_call`
//! runs them in order and returns a `TargetDecision` the resolver dispatches
//! on. Dropping a call (`Skip`) is deliberate best-effort policy, never an
//! error.

use solang_parser::pt;

use crate::ast::{self, DeclaredType};
use crate::collect::Declarations;

use super::scope::ResolutionScope;

/// Where a call expression leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetDecision {
    /// No edge is produced.
    Skip,
    /// Internal direct-name call: constructor, event emission, or struct
    /// literal reachable through the dependency set.
    Internal,
    /// Call through `this`.
    SelfCall,
    /// Call through `super`: nearest linearized ancestor.
    Super,
    /// Redirected to a using-for library.
    Library(String),
    /// Member call on an object resolving to the named contract.
    External(String),
}

/// Classify one call expression's callee.
pub fn classify_call(
    callee: &pt::Expression,
    decls: &Declarations,
    scope: &ResolutionScope,
    current_contract: &str,
    suppress_libraries: bool,
) -> TargetDecision {
    let callee = unwrap_callee(callee);

    // Step 1: bare identifier naming a contract, or an event/struct visible
    // through the linearized dependency set.
    if let pt::Expression::Variable(ref id) = *callee {
        if decls.contains(&id.name)
            || scope.dependency_events.contains(&id.name)
            || scope.dependency_structs.contains(&id.name)
        {
            return TargetDecision::Internal;
        }
        return TargetDecision::Skip;
    }

    let (object_expr, member) = match *callee {
        pt::Expression::MemberAccess(_, ref object, ref id) => (object.as_ref(), id.name.as_str()),
        _ => return TargetDecision::Skip,
    };

    // Step 2: determine the object reference.
    let object = object_reference(object_expr, decls);

    // Step 3: determine the static type of the object.
    let lookup = object_type(object_expr, object.as_deref(), scope);

    // Step 4: using-for override. Plain-typed objects participate here so
    // attachments on elementary base types (and the uint alias) match.
    let variable_type = match lookup {
        TypeLookup::Known(ref ty) | TypeLookup::Plain(ref ty) => Some(ty.as_str()),
        TypeLookup::Unknown => None,
    };
    if let Some(ty) = variable_type {
        let ty = ast::canonical_elementary(ty);
        for library in decls.using_for_libraries(current_contract, ty) {
            if decls.library_declares(library, member) {
                if suppress_libraries {
                    return TargetDecision::Skip;
                }
                return TargetDecision::Library(library.to_string());
            }
        }
    }

    // Objects typed by the plain elementary tables stop here: without a
    // library attachment their base type stays out of the simplified graph.
    if matches!(lookup, TypeLookup::Plain(_)) {
        return TargetDecision::Skip;
    }

    // Step 5: finalize the callee contract identity.
    match object {
        None => TargetDecision::Skip,
        Some(ref obj) if obj == "this" => TargetDecision::SelfCall,
        Some(ref obj) if obj == "super" => TargetDecision::Super,
        Some(obj) => {
            // Locals shadow state for resolution.
            if let Some(ty) = scope.user_defined_local_vars.get(&obj) {
                TargetDecision::External(ty.clone())
            } else if let Some(ty) = scope.effective_user_defined_state_vars.get(&obj) {
                TargetDecision::External(ty.clone())
            } else {
                TargetDecision::External(obj)
            }
        }
    }
}

/// Outcome of the step-3 type lookup.
enum TypeLookup {
    /// Type fixed by a special variable, a cast, or a user-defined binding.
    Known(String),
    /// Type found in the plain elementary tables (local or state): eligible
    /// for using-for matching only, never for a base-type edge.
    Plain(String),
    Unknown,
}

/// Step 3 lookup: special variable → elementary cast → declared variables,
/// locals before state.
fn object_type(
    object_expr: &pt::Expression,
    object: Option<&str>,
    scope: &ResolutionScope,
) -> TypeLookup {
    if let Some(ty) = special_variable_type(object_expr) {
        return TypeLookup::Known(ty.to_string());
    }
    if let Some(ty) = elementary_typecast_type(object_expr) {
        return TypeLookup::Known(ty);
    }
    let Some(obj) = object else {
        return TypeLookup::Unknown;
    };
    if let Some(ty) = scope.local_vars.get(obj) {
        return TypeLookup::Plain(ty.clone());
    }
    if let Some(ty) = scope.user_defined_local_vars.get(obj) {
        return TypeLookup::Known(ty.clone());
    }
    if let Some(ty) = scope.effective_user_defined_state_vars.get(obj) {
        return TypeLookup::Known(ty.clone());
    }
    if let Some(ty) = scope.effective_state_vars.get(obj) {
        return TypeLookup::Plain(ty.clone());
    }
    TypeLookup::Unknown
}

/// Step 2: the textual object reference of a member-access call, if any.
fn object_reference(object_expr: &pt::Expression, decls: &Declarations) -> Option<String> {
    match *object_expr {
        pt::Expression::Variable(ref id) => Some(id.name.clone()),
        pt::Expression::FunctionCall(_, ref func, ref args) => match **func {
            // `address(x).member(...)`: unwrap the cast argument.
            pt::Expression::Type(_, pt::Type::Address | pt::Type::AddressPayable) => {
                Some(address_cast_label(args))
            }
            // `Token(x).member(...)`: cast to a known contract type.
            pt::Expression::Variable(ref id) if decls.contains(&id.name) => {
                Some(id.name.clone())
            }
            _ => None,
        },
        _ => None,
    }
}

/// Label for the argument of an `address(...)` cast: the argument's name if
/// it is one, `address(<number>)` for numeric literals, else a flattened
/// textual form of the arguments.
fn address_cast_label(args: &[pt::Expression]) -> String {
    match args.first() {
        Some(pt::Expression::Variable(id)) => id.name.clone(),
        Some(pt::Expression::NumberLiteral(_, value, _, _)) => format!("address({value})"),
        _ => format!("address({})", flatten_arguments(args)),
    }
}

fn flatten_arguments(args: &[pt::Expression]) -> String {
    args.iter()
        .map(|arg| match arg {
            pt::Expression::Variable(id) => id.name.clone(),
            pt::Expression::NumberLiteral(_, value, _, _) => value.clone(),
            pt::Expression::HexNumberLiteral(_, value, _) => value.clone(),
            pt::Expression::MemberAccess(_, _, id) => format!(".{}", id.name),
            _ => "..".to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Built-in contextual variables with fixed, language-defined types.
fn special_variable_type(object_expr: &pt::Expression) -> Option<&'static str> {
    match *object_expr {
        pt::Expression::MemberAccess(_, ref base, ref member) => {
            let pt::Expression::Variable(ref root) = **base else {
                return None;
            };
            match (root.name.as_str(), member.name.as_str()) {
                ("msg", "sender") => Some("address"),
                ("msg", "value" | "gas") => Some("uint256"),
                ("msg", "data") => Some("bytes"),
                ("msg", "sig") => Some("bytes4"),
                ("tx", "origin") => Some("address"),
                ("tx", "gasprice") => Some("uint256"),
                ("block", "coinbase") => Some("address"),
                (
                    "block",
                    "timestamp" | "number" | "difficulty" | "gaslimit" | "basefee" | "chainid",
                ) => Some("uint256"),
                _ => None,
            }
        }
        pt::Expression::Variable(ref id) if id.name == "now" => Some("uint256"),
        _ => None,
    }
}

/// `payable(x)` and friends: a cast to an elementary type fixes the
/// object's type without consulting the variable tables.
fn elementary_typecast_type(object_expr: &pt::Expression) -> Option<String> {
    match *object_expr {
        pt::Expression::FunctionCall(_, ref func, _) => match **func {
            pt::Expression::Type(_, ref ty) => ast::elementary_type_name(ty),
            _ => None,
        },
        _ => None,
    }
}

/// Strip call-option blocks (`x.f{value: 1}(...)`) off a callee.
fn unwrap_callee(callee: &pt::Expression) -> &pt::Expression {
    match *callee {
        pt::Expression::FunctionCallBlock(_, ref inner, _)
        | pt::Expression::Parenthesis(_, ref inner) => unwrap_callee(inner),
        _ => callee,
    }
}

/// Which declared type a parameter or local variable records, reusing the
/// state-variable classification.
pub fn classify_local(ty: &pt::Expression) -> Option<DeclaredType> {
    ast::classify_declared_type(ty)
}
