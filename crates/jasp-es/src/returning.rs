//! Tail-position rewriting.
//!
//! Lisp bodies are expressions; JavaScript function bodies are statements.
//! `returning` walks down every tail position of a statement and turns the
//! expression found there into a `return`. Rewrites borrow when nothing
//! changes, so callers can tell a no-op apart with `Cow::Borrowed`.

use std::borrow::Cow;

use crate::statement::{BlockStatement, ExpressionStatement, IfStatement, ReturnStatement, Statement};

impl Statement {
    /// Whether `returning` is defined for this statement kind.
    pub fn can_return(&self) -> bool {
        matches!(
            self,
            Statement::BlockStatement(_)
                | Statement::IfStatement(_)
                | Statement::ExpressionStatement(_)
        )
    }

    /// Rewrites this statement so that its tail position produces a value.
    ///
    /// Statements that cannot return (declarations, existing returns) come
    /// back borrowed and unchanged.
    pub fn returning(&self) -> Cow<'_, Statement> {
        match self {
            Statement::ExpressionStatement(stmt) => Cow::Owned(stmt.returning().into()),
            Statement::BlockStatement(block) => match block.returning() {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(block) => Cow::Owned(block.into()),
            },
            Statement::IfStatement(stmt) => match stmt.returning() {
                Cow::Borrowed(_) => Cow::Borrowed(self),
                Cow::Owned(stmt) => Cow::Owned(stmt.into()),
            },
            _ => Cow::Borrowed(self),
        }
    }
}

impl ExpressionStatement {
    pub fn returning(&self) -> ReturnStatement {
        ReturnStatement {
            argument: Some(self.expression.clone()),
        }
    }
}

impl BlockStatement {
    /// Rewrites the last statement of the block. An empty block, or one whose
    /// last statement cannot return, is left as is.
    pub fn returning(&self) -> Cow<'_, BlockStatement> {
        let Some(last) = self.body().last() else {
            return Cow::Borrowed(self);
        };

        match last.returning() {
            Cow::Borrowed(_) => Cow::Borrowed(self),
            Cow::Owned(new_last) => {
                let init = &self.body()[..self.body().len() - 1];
                let body = init.iter().cloned().chain(std::iter::once(new_last));
                Cow::Owned(BlockStatement::new(body))
            }
        }
    }
}

impl IfStatement {
    /// Rewrites both branches independently.
    pub fn returning(&self) -> Cow<'_, IfStatement> {
        let consequent = self.consequent.returning();
        let alternate = self.alternate.as_deref().map(Statement::returning);

        let consequent_changed = matches!(consequent, Cow::Owned(_));
        let alternate_changed = matches!(alternate, Some(Cow::Owned(_)));
        if !consequent_changed && !alternate_changed {
            return Cow::Borrowed(self);
        }

        Cow::Owned(IfStatement {
            test: self.test.clone(),
            consequent: Box::new(consequent.into_owned()),
            alternate: alternate.map(|alt| Box::new(alt.into_owned())),
        })
    }
}
