//! Call Resolver — second pass over each source unit.
//!
//! Walks every contract body by explicit recursive descent with the full
//! cross-file declaration set and linearization available, tracking lexical
//! scope and classifying every call expression into a graph edge (or a
//! deliberate drop). Calls outside any function or modifier body are ignored
//! — they cannot produce graph edges.

pub mod classify;
pub mod scope;

use solang_parser::pt;

use crate::collect::Declarations;
use crate::graph::{CallStyle, ContractGraph};
use crate::linearize::Linearization;

use classify::TargetDecision;
use scope::ResolutionScope;

/// The resolution pass over one or more source units.
///
/// Holds the immutable first-pass outputs by reference and mutates the shared
/// graph; the scope is rebuilt as the traversal enters and leaves contracts
/// and bodies.
pub struct CallResolver<'a> {
    decls: &'a Declarations,
    lin: &'a Linearization,
    graph: &'a mut ContractGraph,
    suppress_libraries: bool,
    scope: ResolutionScope,
}

impl<'a> CallResolver<'a> {
    pub fn new(
        decls: &'a Declarations,
        lin: &'a Linearization,
        graph: &'a mut ContractGraph,
        suppress_libraries: bool,
    ) -> Self {
        Self {
            decls,
            lin,
            graph,
            suppress_libraries,
            scope: ResolutionScope::new(),
        }
    }

    /// Resolve every call site in one parsed source unit.
    pub fn resolve_unit(&mut self, unit: &pt::SourceUnit) {
        for part in &unit.0 {
            if let pt::SourceUnitPart::ContractDefinition(def) = part {
                self.resolve_contract(def);
            }
        }
    }

    fn resolve_contract(&mut self, def: &pt::ContractDefinition) {
        let name = match def.name {
            Some(ref id) => id.name.clone(),
            None => return,
        };
        self.scope.enter_contract(&name, self.decls, self.lin);
        for part in &def.parts {
            if let pt::ContractPart::FunctionDefinition(func) = part {
                self.resolve_body(func);
            }
        }
        self.scope.exit_contract();
    }

    /// Functions, modifiers, constructors, fallback, and receive all
    /// establish a calling scope; bodiless declarations (interfaces,
    /// virtual stubs) establish none.
    fn resolve_body(&mut self, func: &pt::FunctionDefinition) {
        let Some(ref body) = func.body else {
            return;
        };
        self.scope.enter_body();
        self.record_parameters(&func.params);
        self.record_parameters(&func.returns);
        self.visit_statement(body);
        self.scope.exit_body();
    }

    /// Parameters and named returns are locals of the body.
    fn record_parameters(&mut self, params: &pt::ParameterList) {
        for (_, param) in params {
            let Some(param) = param else { continue };
            let Some(ref name) = param.name else { continue };
            if let Some(ty) = classify::classify_local(&param.ty) {
                self.scope.record_local(&name.name, ty);
            }
        }
    }

    fn visit_statement(&mut self, stmt: &pt::Statement) {
        match stmt {
            pt::Statement::Block { statements, .. } => {
                for s in statements {
                    self.visit_statement(s);
                }
            }
            pt::Statement::If(_, cond, then_branch, else_branch) => {
                self.visit_expression(cond);
                self.visit_statement(then_branch);
                if let Some(e) = else_branch {
                    self.visit_statement(e);
                }
            }
            pt::Statement::While(_, cond, body) => {
                self.visit_expression(cond);
                self.visit_statement(body);
            }
            pt::Statement::DoWhile(_, body, cond) => {
                self.visit_statement(body);
                self.visit_expression(cond);
            }
            pt::Statement::Expression(_, expr) => self.visit_expression(expr),
            pt::Statement::VariableDefinition(_, decl, init) => {
                if let Some(ref name) = decl.name {
                    if let Some(ty) = classify::classify_local(&decl.ty) {
                        self.scope.record_local(&name.name, ty);
                    }
                }
                if let Some(init) = init {
                    self.visit_expression(init);
                }
            }
            pt::Statement::For(_, init, cond, update, body) => {
                if let Some(init) = init {
                    self.visit_statement(init);
                }
                if let Some(cond) = cond {
                    self.visit_expression(cond);
                }
                if let Some(update) = update {
                    self.visit_expression(update);
                }
                if let Some(body) = body {
                    self.visit_statement(body);
                }
            }
            pt::Statement::Return(_, Some(expr)) => self.visit_expression(expr),
            pt::Statement::Revert(_, _, args) => {
                for arg in args {
                    self.visit_expression(arg);
                }
            }
            pt::Statement::RevertNamedArgs(_, _, args) => {
                for arg in args {
                    self.visit_expression(&arg.expr);
                }
            }
            pt::Statement::Emit(_, expr) => self.visit_expression(expr),
            pt::Statement::Try(_, expr, returns_clause, catch_clauses) => {
                self.visit_expression(expr);
                if let Some((_, body)) = returns_clause {
                    self.visit_statement(body);
                }
                for clause in catch_clauses {
                    match clause {
                        pt::CatchClause::Simple(_, _, body) => self.visit_statement(body),
                        pt::CatchClause::Named(_, _, _, body) => self.visit_statement(body),
                    }
                }
            }
            pt::Statement::Args(_, args) => {
                for arg in args {
                    self.visit_expression(&arg.expr);
                }
            }
            _ => {}
        }
    }

    fn visit_expression(&mut self, expr: &pt::Expression) {
        use pt::Expression as E;
        match expr {
            E::FunctionCall(_, func, args) => {
                self.handle_call(func);
                self.visit_expression(func);
                for arg in args {
                    self.visit_expression(arg);
                }
            }
            E::NamedFunctionCall(_, func, args) => {
                self.handle_call(func);
                self.visit_expression(func);
                for arg in args {
                    self.visit_expression(&arg.expr);
                }
            }
            E::FunctionCallBlock(_, func, block) => {
                self.visit_expression(func);
                self.visit_statement(block);
            }
            E::MemberAccess(_, object, _) => self.visit_expression(object),
            E::ArraySubscript(_, base, index) => {
                self.visit_expression(base);
                if let Some(index) = index {
                    self.visit_expression(index);
                }
            }
            E::ArraySlice(_, base, from, to) => {
                self.visit_expression(base);
                if let Some(from) = from {
                    self.visit_expression(from);
                }
                if let Some(to) = to {
                    self.visit_expression(to);
                }
            }
            E::ArrayLiteral(_, items) => {
                for item in items {
                    self.visit_expression(item);
                }
            }
            E::ConditionalOperator(_, cond, left, right) => {
                self.visit_expression(cond);
                self.visit_expression(left);
                self.visit_expression(right);
            }
            E::PostIncrement(_, inner)
            | E::PostDecrement(_, inner)
            | E::PreIncrement(_, inner)
            | E::PreDecrement(_, inner)
            | E::Not(_, inner)
            | E::BitwiseNot(_, inner)
            | E::Delete(_, inner)
            | E::UnaryPlus(_, inner)
            | E::Negate(_, inner)
            | E::New(_, inner)
            | E::Parenthesis(_, inner) => self.visit_expression(inner),
            E::Power(_, l, r)
            | E::Multiply(_, l, r)
            | E::Divide(_, l, r)
            | E::Modulo(_, l, r)
            | E::Add(_, l, r)
            | E::Subtract(_, l, r)
            | E::ShiftLeft(_, l, r)
            | E::ShiftRight(_, l, r)
            | E::BitwiseAnd(_, l, r)
            | E::BitwiseXor(_, l, r)
            | E::BitwiseOr(_, l, r)
            | E::Less(_, l, r)
            | E::More(_, l, r)
            | E::LessEqual(_, l, r)
            | E::MoreEqual(_, l, r)
            | E::Equal(_, l, r)
            | E::NotEqual(_, l, r)
            | E::And(_, l, r)
            | E::Or(_, l, r)
            | E::Assign(_, l, r)
            | E::AssignOr(_, l, r)
            | E::AssignAnd(_, l, r)
            | E::AssignXor(_, l, r)
            | E::AssignShiftLeft(_, l, r)
            | E::AssignShiftRight(_, l, r)
            | E::AssignAdd(_, l, r)
            | E::AssignSubtract(_, l, r)
            | E::AssignMultiply(_, l, r)
            | E::AssignDivide(_, l, r)
            | E::AssignModulo(_, l, r) => {
                self.visit_expression(l);
                self.visit_expression(r);
            }
            _ => {}
        }
    }

    /// Classify one call site and apply the decision to the graph.
    fn handle_call(&mut self, callee: &pt::Expression) {
        let Some(calling_scope) = self.scope.calling_scope.clone() else {
            return;
        };
        let Some(current) = self.scope.current_contract.clone() else {
            return;
        };

        let decision = classify::classify_call(
            callee,
            self.decls,
            &self.scope,
            &current,
            self.suppress_libraries,
        );

        match decision {
            TargetDecision::Skip => {}
            TargetDecision::Internal => {
                let idx = self.graph.ensure_referenced(&current);
                self.graph.add_call(&calling_scope, idx, CallStyle::Regular);
            }
            TargetDecision::SelfCall => {
                let idx = self.graph.ensure_referenced(&current);
                self.graph.add_call(&calling_scope, idx, CallStyle::SelfCall);
            }
            TargetDecision::Super => {
                // `super` is the entry right after the contract itself in its
                // linearized order; a contract without ancestors drops the call.
                match self.lin.get(&current).and_then(|order| order.get(1)) {
                    Some(parent) => {
                        let parent = parent.clone();
                        let idx = self.graph.ensure_referenced(&parent);
                        self.graph.add_call(&calling_scope, idx, CallStyle::Default);
                    }
                    None => {
                        tracing::trace!(contract = %current, "super call without ancestor dropped");
                    }
                }
            }
            TargetDecision::Library(library) => {
                let idx = self.graph.ensure_referenced(&library);
                self.graph.add_call(&calling_scope, idx, CallStyle::Default);
            }
            TargetDecision::External(name) => {
                let idx = self.graph.ensure_referenced(&name);
                self.graph.add_call(&calling_scope, idx, CallStyle::Default);
            }
        }
    }
}

/// Convenience wrapper resolving a batch of units against shared state.
pub fn resolve_units(
    decls: &Declarations,
    lin: &Linearization,
    graph: &mut ContractGraph,
    suppress_libraries: bool,
    units: &[pt::SourceUnit],
) {
    let mut resolver = CallResolver::new(decls, lin, graph, suppress_libraries);
    for unit in units {
        resolver.resolve_unit(unit);
    }
}
