//! AST to IR translation.

use jasp_es::{
    BlockStatement, Expression, Node, Program, Statement, VariableDeclarator, VariableKind,
};
use jasp_syntax::matcher::{self, Pattern};
use jasp_syntax::{Ast, Error, Identifier, List, Result, SourceItem, Span, Vector};
use tracing::{debug, trace};

/// Lowers AST forms to IR.
///
/// The compiler holds no state between forms; one value can compile any
/// number of programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler;

fn invalid_arity(form: &str, args: &[Ast], span: Span) -> Error {
    Error::unexpected_token(format!("invalid arity {} for {form} form", args.len()), span)
}

impl Compiler {
    pub fn new() -> Self {
        Self
    }

    /// Compiles top-level forms, in order, into a program.
    pub fn compile(&self, forms: &[Ast]) -> Result<Program> {
        let body = forms
            .iter()
            .map(|form| self.statement(form))
            .collect::<Result<Vec<_>>>()?;
        debug!(forms = forms.len(), "compiled program");
        Ok(Program { body })
    }

    /// Compiles one form to whichever IR node it naturally produces.
    pub fn node(&self, ast: &Ast) -> Result<Node> {
        match ast {
            Ast::List(list) => self.list(list),
            Ast::Bool(token) => Ok(token.estree().into()),
            Ast::Num(token) => Ok(token.estree().into()),
            Ast::Str(token) => Ok(token.estree().into()),
            Ast::Keyword(token) => Ok(token.estree().into()),
            Ast::Identifier(token) => Ok(Expression::from(token.estree()).into()),
            Ast::Vector(_) | Ast::Obj(_) | Ast::Quoted(_) => Err(Error::unexpected_token(
                format!("unsupported syntax {}", ast.type_name()),
                ast.span(),
            )),
        }
    }

    /// Compiles a form that must produce a value.
    pub fn expression(&self, ast: &Ast) -> Result<Expression> {
        self.node(ast)?
            .into_expression()
            .map_err(|_| Error::unexpected_token("expected an expression", ast.span()))
    }

    /// Compiles a form in statement position.
    pub fn statement(&self, ast: &Ast) -> Result<Statement> {
        Ok(self.node(ast)?.into_statement())
    }

    fn expressions(&self, items: &[Ast]) -> Result<Vec<Expression>> {
        items.iter().map(|item| self.expression(item)).collect()
    }

    fn list(&self, list: &List) -> Result<Node> {
        if let Some((Ast::Identifier(head), args)) = matcher::head_match(&list.items, &Pattern::IDENTIFIER) {
            return self.call(head, args, list.span);
        }
        let Some((callee, args)) = list.items.split_first() else {
            return Ok(Expression::array(Vec::new()).into());
        };
        Ok(Expression::call(self.expression(callee)?, self.expressions(args)?).into())
    }

    /// Dispatches `(name args...)`. Special forms must match one of their
    /// shapes; any other name is a plain call.
    fn call(&self, head: &Identifier, args: &[Ast], span: Span) -> Result<Node> {
        let form: fn(&Self, &[Ast], Span) -> Result<Node> = match head.name.as_str() {
            "def" => Self::def,
            "let" => Self::let_block,
            "fn" => Self::function,
            "if" => Self::if_statement,
            _ => {
                let callee = Expression::from(head.estree());
                return Ok(Expression::call(callee, self.expressions(args)?).into());
            }
        };
        trace!(form = %head.name, arity = args.len(), "special form");
        form(self, args, span)
    }

    /// `(def name value)`
    fn def(&self, args: &[Ast], span: Span) -> Result<Node> {
        let Some([Ast::Identifier(name), value]) =
            matcher::matches(args, &[Pattern::IDENTIFIER, Pattern::Any])
        else {
            return Err(invalid_arity("def", args, span));
        };
        let declarator = VariableDeclarator::new(name.estree(), Some(self.expression(value)?));
        Ok(Statement::declare(VariableKind::Const, vec![declarator]).into())
    }

    /// `(let [name value ...] body)`
    ///
    /// An empty binding vector emits no declaration at all, because `const;`
    /// with no declarators is not valid JavaScript.
    fn let_block(&self, args: &[Ast], span: Span) -> Result<Node> {
        let Some([Ast::Vector(bindings), body]) =
            matcher::matches(args, &[Pattern::VECTOR, Pattern::Any])
        else {
            return Err(invalid_arity("let", args, span));
        };
        let declarations = self.bindings(bindings)?;

        let mut statements = Vec::with_capacity(2);
        if !declarations.is_empty() {
            statements.push(Statement::declare(VariableKind::Const, declarations));
        }
        statements.push(self.statement(body)?);
        Ok(Statement::block(statements).into())
    }

    fn bindings(&self, bindings: &Vector) -> Result<Vec<VariableDeclarator>> {
        if bindings.items.len() % 2 != 0 {
            return Err(Error::unexpected_token(
                "let bindings require even number of arguments",
                bindings.span,
            ));
        }
        bindings
            .items
            .chunks_exact(2)
            .map(|pair| {
                let Ast::Identifier(name) = &pair[0] else {
                    return Err(Error::unexpected_token(
                        "let binding name must be an identifier",
                        pair[0].span(),
                    ));
                };
                Ok(VariableDeclarator::new(name.estree(), Some(self.expression(&pair[1])?)))
            })
            .collect()
    }

    /// `(fn [params ...] body)`
    fn function(&self, args: &[Ast], span: Span) -> Result<Node> {
        let Some([Ast::Vector(params), body]) =
            matcher::matches(args, &[Pattern::VECTOR, Pattern::Any])
        else {
            return Err(invalid_arity("fn", args, span));
        };
        if !matcher::match_every(&params.items, &Pattern::IDENTIFIER) {
            return Err(invalid_arity("fn", args, span));
        }

        let params = params
            .items
            .iter()
            .filter_map(Ast::as_identifier)
            .map(Identifier::estree)
            .collect();
        let body = BlockStatement::new([self.statement(body)?]).returning().into_owned();
        Ok(Expression::function(None, params, body).into())
    }

    /// `(if test consequent alternate?)`
    fn if_statement(&self, args: &[Ast], span: Span) -> Result<Node> {
        let (test, consequent, alternate) =
            if let Some([test, consequent, alternate]) = matcher::matches(args, &[Pattern::Any; 3]) {
                (test, consequent, Some(alternate))
            } else if let Some([test, consequent]) = matcher::matches(args, &[Pattern::Any; 2]) {
                (test, consequent, None)
            } else {
                return Err(invalid_arity("if", args, span));
            };

        let test = self.expression(test)?;
        let consequent = self.statement(consequent)?;
        let alternate = alternate.map(|ast| self.statement(ast)).transpose()?;
        Ok(Statement::if_else(test, consequent, alternate).into())
    }
}
