//! Declaration Collector — first pass over each parsed source unit.
//!
//! Records per-contract metadata (kind, direct bases, typed state variables,
//! function/event/struct name lists, using-for attachments) into the shared
//! declaration set and registers a defined-styled graph node per contract.
//! The tables must be complete before the resolver visits any call site:
//! calls may reference contracts declared in files processed later.

use solang_parser::pt;

use solgraph_core::constants::USING_FOR_WILDCARD;
use solgraph_core::types::collections::{FxHashMap, SmallVec2, SmallVec4};
use solgraph_core::types::ContractKind;

use crate::ast::{self, DeclaredType};
use crate::graph::ContractGraph;

/// Declaration tables for a single contract. Built incrementally during
/// collection, immutable once the first pass finishes.
#[derive(Debug)]
pub struct ContractDecl {
    pub kind: ContractKind,
    /// Direct base names, as declared (unresolved).
    pub bases: SmallVec4<String>,
    /// State variable name → canonical elementary type.
    pub state_vars: FxHashMap<String, String>,
    /// State variable name → declared user type name.
    pub user_defined_state_vars: FxHashMap<String, String>,
    pub functions: Vec<String>,
    pub events: Vec<String>,
    pub structs: Vec<String>,
    /// Type name (or `"*"`) → attached library names, insertion order.
    pub using_for: FxHashMap<String, SmallVec2<String>>,
}

impl ContractDecl {
    fn new(kind: ContractKind) -> Self {
        Self {
            kind,
            bases: SmallVec4::new(),
            state_vars: FxHashMap::default(),
            user_defined_state_vars: FxHashMap::default(),
            functions: Vec::new(),
            events: Vec::new(),
            structs: Vec::new(),
            using_for: FxHashMap::default(),
        }
    }
}

/// The cross-file declaration set shared by both passes.
#[derive(Debug, Default)]
pub struct Declarations {
    pub contracts: FxHashMap<String, ContractDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a contract of this name was declared in the input set.
    pub fn contains(&self, name: &str) -> bool {
        self.contracts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ContractDecl> {
        self.contracts.get(name)
    }

    /// Libraries attached to `type_name` inside `contract`: the specific key
    /// first, then the `"*"` wildcard, duplicates removed.
    pub fn using_for_libraries(&self, contract: &str, type_name: &str) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        if let Some(decl) = self.contracts.get(contract) {
            if let Some(libs) = decl.using_for.get(type_name) {
                out.extend(libs.iter().map(String::as_str));
            }
            if let Some(libs) = decl.using_for.get(USING_FOR_WILDCARD) {
                for lib in libs {
                    if !out.contains(&lib.as_str()) {
                        out.push(lib);
                    }
                }
            }
        }
        out
    }

    /// True if `library` was collected and declares a function named `member`.
    pub fn library_declares(&self, library: &str, member: &str) -> bool {
        self.contracts
            .get(library)
            .map(|decl| decl.functions.iter().any(|f| f == member))
            .unwrap_or(false)
    }
}

/// Collect all contract declarations from one parsed source unit.
/// Mutates the shared declaration set and the shared graph; no return value.
pub fn collect_unit(decls: &mut Declarations, graph: &mut ContractGraph, unit: &pt::SourceUnit) {
    for part in &unit.0 {
        if let pt::SourceUnitPart::ContractDefinition(def) = part {
            collect_contract(decls, graph, def);
        }
    }
}

fn collect_contract(
    decls: &mut Declarations,
    graph: &mut ContractGraph,
    def: &pt::ContractDefinition,
) {
    let name = match def.name {
        Some(ref id) => id.name.clone(),
        None => return,
    };
    let kind = match def.ty {
        pt::ContractTy::Abstract(_) | pt::ContractTy::Contract(_) => ContractKind::Contract,
        pt::ContractTy::Interface(_) => ContractKind::Interface,
        pt::ContractTy::Library(_) => ContractKind::Library,
    };

    let mut decl = ContractDecl::new(kind);
    for base in &def.base {
        decl.bases.push(ast::identifier_path_string(&base.name));
    }

    for part in &def.parts {
        match part {
            pt::ContractPart::VariableDefinition(var) => collect_state_variable(&mut decl, var),
            pt::ContractPart::FunctionDefinition(func) => {
                decl.functions.push(function_name(func));
            }
            pt::ContractPart::EventDefinition(event) => {
                if let Some(ref id) = event.name {
                    decl.events.push(id.name.clone());
                }
            }
            pt::ContractPart::StructDefinition(st) => {
                if let Some(ref id) = st.name {
                    decl.structs.push(id.name.clone());
                }
            }
            pt::ContractPart::Using(using) => collect_using_for(&mut decl, using),
            _ => {}
        }
    }

    tracing::debug!(contract = %name, kind = %kind, "collected contract declaration");
    graph.define(&name, kind);
    decls.contracts.insert(name, decl);
}

/// Unnamed definitions (constructor, fallback, receive) are recorded under
/// their keyword names.
fn function_name(func: &pt::FunctionDefinition) -> String {
    match func.name {
        Some(ref id) => id.name.clone(),
        None => func.ty.to_string(),
    }
}

fn collect_state_variable(decl: &mut ContractDecl, var: &pt::VariableDefinition) {
    let name = match var.name {
        Some(ref id) => id.name.clone(),
        None => return,
    };
    match ast::classify_declared_type(&var.ty) {
        Some(DeclaredType::UserDefined(ty)) => {
            decl.user_defined_state_vars.insert(name, ty);
        }
        Some(DeclaredType::Elementary(ty)) => {
            decl.state_vars
                .insert(name, ast::canonical_elementary(&ty).to_string());
        }
        None => {}
    }
}

fn collect_using_for(decl: &mut ContractDecl, using: &pt::Using) {
    // Only whole-library attachments participate; `using {f} for T` binds
    // individual functions, which the contract-level diagram does not track.
    let library = match using.list {
        pt::UsingList::Library(ref path) => ast::identifier_path_string(path),
        _ => return,
    };
    let type_key = match using.ty {
        Some(ref ty) => match ast::classify_declared_type(ty) {
            Some(DeclaredType::Elementary(name)) => {
                ast::canonical_elementary(&name).to_string()
            }
            Some(DeclaredType::UserDefined(name)) => name,
            None => return,
        },
        None => USING_FOR_WILDCARD.to_string(),
    };

    let libs = decl.using_for.entry(type_key).or_default();
    if !libs.iter().any(|l| l == &library) {
        libs.push(library);
    }
}
