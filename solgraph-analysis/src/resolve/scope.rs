//! Lexical scope tracking during the resolution pass.
//!
//! The language has no nested function definitions, so a single active scope
//! suffices: contract → function/modifier body → locals.

use solgraph_core::types::collections::{FxHashMap, FxHashSet};

use crate::ast::{self, DeclaredType};
use crate::collect::Declarations;
use crate::linearize::Linearization;

/// The mutable scope threaded through the second pass.
#[derive(Debug, Default)]
pub struct ResolutionScope {
    /// Contract whose definition is being traversed.
    pub current_contract: Option<String>,
    /// Set while inside a function or modifier body, cleared on exit.
    pub calling_scope: Option<String>,
    /// Local name → canonical elementary type. Locals shadow state.
    pub local_vars: FxHashMap<String, String>,
    /// Local name → user-defined type name.
    pub user_defined_local_vars: FxHashMap<String, String>,
    /// Union of the contract's own elementary state variables and all
    /// linearized ancestors', own declarations taking precedence.
    pub effective_state_vars: FxHashMap<String, String>,
    /// Same union for user-defined state variables.
    pub effective_user_defined_state_vars: FxHashMap<String, String>,
    /// Event names visible through the linearized dependency set.
    pub dependency_events: FxHashSet<String>,
    /// Struct names visible through the linearized dependency set.
    pub dependency_structs: FxHashSet<String>,
}

impl ResolutionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a contract: rebuild the effective tables by folding the
    /// linearized ancestors root-to-leaf, the contract's own table last so
    /// its declarations win over same-named inherited ones.
    pub fn enter_contract(&mut self, name: &str, decls: &Declarations, lin: &Linearization) {
        self.current_contract = Some(name.to_string());
        self.effective_state_vars.clear();
        self.effective_user_defined_state_vars.clear();
        self.dependency_events.clear();
        self.dependency_structs.clear();

        if let Some(order) = lin.get(name) {
            // `order` is most-derived-first with the contract itself at the
            // head; fold reversed so later (more derived) entries overwrite.
            for ancestor in order.iter().rev() {
                if let Some(decl) = decls.get(ancestor) {
                    for (var, ty) in &decl.state_vars {
                        self.effective_state_vars.insert(var.clone(), ty.clone());
                    }
                    for (var, ty) in &decl.user_defined_state_vars {
                        self.effective_user_defined_state_vars
                            .insert(var.clone(), ty.clone());
                    }
                    self.dependency_events
                        .extend(decl.events.iter().cloned());
                    self.dependency_structs
                        .extend(decl.structs.iter().cloned());
                }
            }
        }
    }

    /// Exit a contract: clear the contract-level scope entirely.
    pub fn exit_contract(&mut self) {
        self.current_contract = None;
        self.effective_state_vars.clear();
        self.effective_user_defined_state_vars.clear();
        self.dependency_events.clear();
        self.dependency_structs.clear();
    }

    /// Enter a function or modifier body.
    pub fn enter_body(&mut self) {
        self.calling_scope = self.current_contract.clone();
    }

    /// Exit a function or modifier body: discard every local binding
    /// collected during it.
    pub fn exit_body(&mut self) {
        self.calling_scope = None;
        self.local_vars.clear();
        self.user_defined_local_vars.clear();
    }

    /// Record a parameter or local variable declaration.
    pub fn record_local(&mut self, name: &str, ty: DeclaredType) {
        match ty {
            DeclaredType::UserDefined(t) => {
                self.user_defined_local_vars.insert(name.to_string(), t);
            }
            DeclaredType::Elementary(t) => {
                self.local_vars
                    .insert(name.to_string(), ast::canonical_elementary(&t).to_string());
            }
        }
    }
}
