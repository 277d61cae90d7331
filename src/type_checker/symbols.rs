use tracing::debug;

use crate::{
    ast::{
        ast::{Function, Program},
        statements::{Assignment, Statement, StatementKind},
    },
    errors::errors::Error,
};

use super::{
    context::TypeContext,
    visitor::{walk_function, walk_statement, Visitor},
};

/// Fills the scopes attached to the tree.
///
/// Parameters go into their function's scope. An assignment to a name
/// already bound in an active scope refines that binding if its type is
/// still unknown; any other assignment declares the name in the innermost
/// active scope.
pub struct DeclareSymbols {
    context: TypeContext,
    errors: Vec<Error>,
}

impl DeclareSymbols {
    pub fn new(context: TypeContext) -> Self {
        DeclareSymbols {
            context,
            errors: vec![],
        }
    }

    fn declare_assignment(&mut self, assignment: &Assignment) {
        let name = match assignment.variable_name() {
            Some(name) => name,
            None => return,
        };
        let data_type = self.context.resolve(&assignment.value);

        let outcome = match self.context.find_declaration(name) {
            Ok(Some((scope, symbol))) => {
                if !symbol.data_type.is_known() && data_type.is_known() {
                    debug!(variable = name, %data_type, "refining symbol");
                    scope.set_type(name, data_type).map(|_| ())
                } else {
                    Ok(())
                }
            }
            Ok(None) => match self.context.innermost_scope() {
                Some(scope) => scope.declare(name, data_type),
                None => Ok(()),
            },
            Err(error) => Err(error),
        };

        if let Err(error) = outcome {
            self.errors.push(error);
        }
    }
}

impl Visitor for DeclareSymbols {
    fn context(&mut self) -> &mut TypeContext {
        &mut self.context
    }

    /// Parameters left unannotated pick up the type their body assigned.
    fn visit_function(&mut self, function: &mut Function) {
        walk_function(self, function);

        for parameter in function.parameters.iter_mut() {
            if parameter.data_type.is_known() {
                continue;
            }
            match function.scope.lookup(&parameter.name) {
                Ok(Some(symbol)) => parameter.data_type = symbol.data_type,
                Ok(None) => {}
                Err(error) => self.errors.push(error),
            }
        }
    }

    fn visit_parameters(&mut self, function: &mut Function) {
        let scope = function.scope.clone();
        for parameter in &function.parameters {
            if let Err(error) = scope.declare(&parameter.name, parameter.data_type.clone()) {
                self.errors.push(error);
            }
        }
    }

    fn visit_statement(&mut self, statement: &mut Statement) {
        walk_statement(self, statement);

        if let StatementKind::Assignment(assignment) = &statement.kind {
            self.declare_assignment(assignment);
        }
    }
}

/// Populates every scope in `program`. The whole tree is visited even when
/// something fails; the first error is returned.
pub fn declare_symbols(program: &mut Program) -> Result<(), Error> {
    let mut pass = DeclareSymbols::new(TypeContext::for_program(program));
    pass.visit_program(program);

    debug!(errors = pass.errors.len(), "symbols declared");

    match pass.errors.into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
