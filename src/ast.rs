use super::error::{Error, ErrorKind};
use super::parser::Sexp;

/// One recognized language construct. Immutable once built; evaluation
/// never rewrites a node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Number(i64),
    Bool(bool),
    Var(String),
    Plus(Box<Expr>, Box<Expr>),
    Minus(Box<Expr>, Box<Expr>),
    Func(String, Box<Expr>),
    Call(Box<Expr>, Box<Expr>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    LetDirect(String, Box<Expr>, Box<Expr>),
    LetByFunc(String, Box<Expr>, Box<Expr>),
}

/// Turn a symbolic datum into an AST node.
///
/// Atoms: numbers are literals, `true`/`false` are the boolean keywords,
/// every other symbol is a variable reference. Lists dispatch on their
/// head symbol; a head that is not one of the recognized forms (or a
/// recognized form with the wrong shape) is an `UnknownForm` error.
pub(crate) fn build(datum: &Sexp) -> Result<Expr, Error> {
    match datum {
        Sexp::Number(n) => Ok(Expr::Number(*n)),
        Sexp::Symbol(s) => match s.as_str() {
            "true" => Ok(Expr::Bool(true)),
            "false" => Ok(Expr::Bool(false)),
            _ => Ok(Expr::Var(s.clone())),
        },
        Sexp::List(items) => build_form(items),
    }
}

fn build_form(items: &[Sexp]) -> Result<Expr, Error> {
    let tag = match items.first() {
        Some(Sexp::Symbol(s)) => s.as_str(),
        _ => return Err(unknown_form(items)),
    };

    match (tag, &items[1..]) {
        ("+", [l, r]) => Ok(Expr::Plus(boxed(l)?, boxed(r)?)),
        ("-", [l, r]) => Ok(Expr::Minus(boxed(l)?, boxed(r)?)),
        ("lambda", [Sexp::Symbol(param), body]) => Ok(Expr::Func(param.clone(), boxed(body)?)),
        ("call", [f, a]) => Ok(Expr::Call(boxed(f)?, boxed(a)?)),
        ("if", [c, t, e]) => Ok(Expr::If(boxed(c)?, boxed(t)?, boxed(e)?)),
        ("let", [Sexp::Symbol(name), value, body]) => {
            Ok(Expr::LetDirect(name.clone(), boxed(value)?, boxed(body)?))
        }
        ("letf", [Sexp::Symbol(name), value, body]) => {
            Ok(Expr::LetByFunc(name.clone(), boxed(value)?, boxed(body)?))
        }
        _ => Err(unknown_form(items)),
    }
}

fn boxed(datum: &Sexp) -> Result<Box<Expr>, Error> {
    Ok(Box::new(build(datum)?))
}

fn unknown_form(items: &[Sexp]) -> Error {
    ErrorKind::UnknownForm(Sexp::List(items.to_vec()).to_string()).into()
}
