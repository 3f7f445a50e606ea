use super::token::Token;
use combine::error::ParseError;
use combine::parser::choice::or;
pub(crate) use combine::parser::Parser;
use combine::stream::Stream;
use combine::{between, many, parser, satisfy_map, token};
use std::fmt;

/// Symbolic datum: what the reader hands to the node builder.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sexp {
    Number(i64),
    Symbol(String),
    List(Vec<Sexp>),
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Number(n) => write!(f, "{}", n),
            Sexp::Symbol(s) => write!(f, "{}", s),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}

fn atom<Input>() -> impl Parser<Input, Output = Sexp>
where
    Input: Stream<Token = Token>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    satisfy_map(|t| match t {
        Token::Number(n) => Some(Sexp::Number(n)),
        Token::Symbol(s) => Some(Sexp::Symbol(s)),
        _ => None,
    })
}

fn list<Input>() -> impl Parser<Input, Output = Sexp>
where
    Input: Stream<Token = Token>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    between(token(Token::LParen), token(Token::RParen), many(sexp())).map(Sexp::List)
}

fn sexp_<Input>() -> impl Parser<Input, Output = Sexp>
where
    Input: Stream<Token = Token>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    or(atom(), list())
}

parser! {
    pub(crate) fn sexp[Input]()(Input) -> Sexp
        where [Input: Stream<Token=Token>]
    {
        sexp_()
    }
}

#[cfg(test)]
mod test {
    use super::super::token::Token::*;
    use super::*;

    fn lex_tokens(s: &str) -> Vec<Token> {
        let mut buf = s;
        let mut tokens = Vec::new();
        loop {
            match super::super::lexer::lex().parse(buf) {
                Ok((Some(token), rest)) => {
                    buf = rest;
                    tokens.push(token);
                }
                Ok(_) => break,
                e => {
                    println!("error: {:?}", e);
                    e.unwrap();
                }
            }
        }

        tokens
    }

    #[test]
    fn test_atom() {
        let tokens = vec![Number(5)];
        assert_eq!(
            sexp().parse(tokens.as_slice()).map(|x| x.0),
            Ok(Sexp::Number(5))
        );

        let tokens = vec![Symbol("x".to_owned())];
        assert_eq!(
            sexp().parse(tokens.as_slice()).map(|x| x.0),
            Ok(Sexp::Symbol("x".to_owned()))
        );
    }

    #[test]
    fn test_list() {
        let tokens = lex_tokens("(+ 1 2)");
        assert_eq!(
            sexp().parse(tokens.as_slice()).map(|x| x.0),
            Ok(Sexp::List(vec![
                Sexp::Symbol("+".to_owned()),
                Sexp::Number(1),
                Sexp::Number(2)
            ]))
        );
    }

    #[test]
    fn test_nested() {
        let tokens = lex_tokens("(call (lambda y (+ y 100)) 100)");
        let datum = sexp().parse(tokens.as_slice()).map(|x| x.0).unwrap();
        assert_eq!(datum.to_string(), "(call (lambda y (+ y 100)) 100)");
    }

    #[test]
    fn test_empty_list() {
        let tokens = lex_tokens("()");
        assert_eq!(
            sexp().parse(tokens.as_slice()).map(|x| x.0),
            Ok(Sexp::List(vec![]))
        );
    }
}
