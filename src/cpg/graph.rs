//! The arena: one `Vec` per node kind, indexed by the newtype IDs in
//! `ids.rs`. Locations are stored in a parallel array rather than
//! embedded in every node variant, keeping `builders.rs` free of
//! location concerns.

use crate::base::Location;
use crate::cpg::ids::{DeclId, ExprId, StmtId};
use crate::cpg::node::{Declaration, Expression, Statement};

/// The graph under construction for one translation unit. Mutated only
/// through `insert_*` until the translation unit is sealed, after
/// which callers are expected to stop mutating it —
/// enforced by convention, not the type system, matching the single
/// `TranslationUnit` owner the driver hands back.
#[derive(Debug, Default)]
pub struct Graph {
    declarations: Vec<Declaration>,
    declaration_locations: Vec<Location>,
    statements: Vec<Statement>,
    statement_locations: Vec<Location>,
    expressions: Vec<Expression>,
    expression_locations: Vec<Location>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_declaration(&mut self, decl: Declaration, location: Location) -> DeclId {
        let id = DeclId::from_index(self.declarations.len());
        self.declarations.push(decl);
        self.declaration_locations.push(location);
        id
    }

    pub fn insert_statement(&mut self, stmt: Statement, location: Location) -> StmtId {
        let id = StmtId::from_index(self.statements.len());
        self.statements.push(stmt);
        self.statement_locations.push(location);
        id
    }

    pub fn insert_expression(&mut self, expr: Expression, location: Location) -> ExprId {
        let id = ExprId::from_index(self.expressions.len());
        self.expressions.push(expr);
        self.expression_locations.push(location);
        id
    }

    pub fn declaration(&self, id: DeclId) -> &Declaration {
        &self.declarations[id.index()]
    }

    pub fn declaration_mut(&mut self, id: DeclId) -> &mut Declaration {
        &mut self.declarations[id.index()]
    }

    pub fn statement(&self, id: StmtId) -> &Statement {
        &self.statements[id.index()]
    }

    pub fn expression(&self, id: ExprId) -> &Expression {
        &self.expressions[id.index()]
    }

    pub fn declaration_location(&self, id: DeclId) -> Location {
        self.declaration_locations[id.index()]
    }

    pub fn statement_location(&self, id: StmtId) -> Location {
        self.statement_locations[id.index()]
    }

    pub fn expression_location(&self, id: ExprId) -> Location {
        self.expression_locations[id.index()]
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn expression_count(&self) -> usize {
        self.expressions.len()
    }

    /// All locations across the three arenas — every node carries
    /// either a physical span or the explicit no-location marker, never
    /// silently absent.
    pub fn all_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.declaration_locations
            .iter()
            .chain(self.statement_locations.iter())
            .chain(self.expression_locations.iter())
            .copied()
    }
}
