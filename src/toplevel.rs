use super::ast;
use super::eval::{Evaluator, Value};
use super::lexer;
use super::parser;
use combine::Parser;
use std::io::{stdin, stdout, Write};

pub(crate) fn main_loop(prompt: &str) {
    let mut evaluator = Evaluator::new();

    'outer: loop {
        print!("{}", prompt);
        stdout().flush().unwrap();
        let mut line = String::new();
        if stdin().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let mut buf = line.as_str();
        let mut tokens = Vec::new();
        loop {
            match lexer::lex().parse(buf) {
                Ok((Some(token), rest)) => {
                    buf = rest;
                    tokens.push(token);
                }
                Ok(_) => break,
                Err(e) => {
                    println!("error: {}", e);
                    continue 'outer;
                }
            }
        }

        let mut ts = tokens.as_slice();

        while ts.len() > 0 {
            match parser::sexp().parse(ts) {
                Ok((datum, rest)) => {
                    ts = rest;
                    match ast::build(&datum).and_then(|expr| evaluator.evaluate(&expr)) {
                        Ok(value) => println!(" => {}", render(&value)),
                        Err(e) => println!("error: {}", e),
                    }
                }
                Err(e) => {
                    println!("Error: {:?}", e);
                    break;
                }
            }
        }
    }
}

// how a value prints is the REPL's business, not the evaluator's
fn render(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Closure { param, .. } => format!("#<closure {}>", param),
    }
}
