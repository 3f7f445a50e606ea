use std::collections::HashMap;

use super::ast::Expr;
use super::error::{Error, ErrorKind};

/// Bound on `evaluate` recursion. Without a fixpoint form the language
/// cannot loop, but `letf` can tie a recursive knot through the shared
/// environment, so unbounded input would otherwise blow the stack.
/// Kept small enough that the guard fires well before the native stack
/// runs out, even in unoptimized builds.
const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Number(i64),
    Bool(bool),
    /// A closure pairs the parameter name with the unevaluated body.
    /// It carries no environment snapshot: the body is evaluated against
    /// whatever the shared environment holds at call time.
    Closure { param: String, body: Expr },
}

impl Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Closure { .. } => "closure",
        }
    }
}

/// Tree-walking evaluator. Owns the single mutable environment, which is
/// shared across every evaluation this instance performs: `call` inserts
/// its parameter binding and leaves it behind, `let` removes its binding
/// on exit, `letf` goes through the call path and so leaves its binding
/// behind as well.
pub(crate) struct Evaluator {
    pub(crate) env: HashMap<String, Value>,
    depth: usize,
}

impl Evaluator {
    pub(crate) fn new() -> Self {
        Evaluator {
            env: HashMap::new(),
            depth: 0,
        }
    }

    pub(crate) fn evaluate(&mut self, expr: &Expr) -> Result<Value, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(ErrorKind::RecursionLimit(MAX_DEPTH).into());
        }
        self.depth += 1;
        let result = self.eval_expr(expr);
        self.depth -= 1;
        result
    }

    fn eval_expr(&mut self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Var(name) => self
                .env
                .get(name)
                .cloned()
                .ok_or_else(|| ErrorKind::UnboundVariable(name.clone()).into()),
            Expr::Plus(l, r) => {
                // both operands are evaluated (left first) before either
                // is checked, so the right's env effects happen even when
                // the left turns out not to be a number
                let l = self.evaluate(l)?;
                let r = self.evaluate(r)?;
                Ok(Value::Number(numeric(l, "+")?.wrapping_add(numeric(r, "+")?)))
            }
            Expr::Minus(l, r) => {
                let l = self.evaluate(l)?;
                let r = self.evaluate(r)?;
                Ok(Value::Number(numeric(l, "-")?.wrapping_sub(numeric(r, "-")?)))
            }
            Expr::Func(param, body) => Ok(Value::Closure {
                param: param.clone(),
                body: (**body).clone(),
            }),
            Expr::Call(target, arg) => {
                let (param, body) = match self.evaluate(target)? {
                    Value::Closure { param, body } => (param, body),
                    v => {
                        return Err(ErrorKind::TypeMismatch(format!(
                            "cannot call a {}",
                            v.kind()
                        ))
                        .into())
                    }
                };
                let arg = self.evaluate(arg)?;
                self.apply(param, body, arg)
            }
            Expr::If(cond, t, f) => match self.evaluate(cond)? {
                Value::Bool(true) => self.evaluate(t),
                Value::Bool(false) => self.evaluate(f),
                v => Err(ErrorKind::TypeMismatch(format!(
                    "`if` condition must be a boolean, got {}",
                    v.kind()
                ))
                .into()),
            },
            Expr::LetDirect(name, value, body) => {
                let value = self.evaluate(value)?;
                self.env.insert(name.clone(), value);
                let result = self.evaluate(body);
                // removed on every exit path, success or error
                self.env.remove(name);
                result
            }
            Expr::LetByFunc(name, value, body) => {
                // sugar for `(call (lambda name body) value)`: the binding
                // goes through the call path and persists afterwards
                let value = self.evaluate(value)?;
                self.apply(name.clone(), (**body).clone(), value)
            }
        }
    }

    /// Bind the closure's parameter in the shared environment and run the
    /// body there. The binding overwrites any prior binding of that name
    /// and is not removed afterwards.
    fn apply(&mut self, param: String, body: Expr, arg: Value) -> Result<Value, Error> {
        self.env.insert(param, arg);
        self.evaluate(&body)
    }
}

fn numeric(value: Value, op: &str) -> Result<i64, Error> {
    match value {
        Value::Number(n) => Ok(n),
        v => Err(ErrorKind::TypeMismatch(format!(
            "`{}` expects numbers, got {}",
            op,
            v.kind()
        ))
        .into()),
    }
}
