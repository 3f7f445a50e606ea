use super::token::Token;
use combine::error::{ParseError, StreamError};
use combine::parser::char::{digit, newline, space};
use combine::parser::choice::or;
use combine::parser::repeat::take_until;
use combine::parser::Parser;
use combine::stream::Stream;
use combine::{
    attempt, choice, eof, many1, optional, parser, satisfy, skip_many, skip_many1, token,
};

fn number<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (optional(token('-')), many1(digit()))
        .and_then(|(sign, digits): (Option<char>, String)| {
            let mut lit = String::new();
            if sign.is_some() {
                lit.push('-');
            }
            lit.push_str(&digits);
            lit.parse::<i64>().map_err(|e| {
                <Input::Error as combine::error::ParseError<char, Input::Range, Input::Position>>
                                                         ::StreamError::other(e)
            })
        })
        .map(|n| Token::Number(n))
}

fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || "+-*/<>=!?_".contains(c)
}

fn symbol<Input>() -> impl Parser<Input, Output = Token>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    many1(satisfy(is_symbol_char)).map(|s: String| Token::Symbol(s))
}

fn comment<Input>() -> impl Parser<Input, Output = ()>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    skip_many1((
        token(';'),
        take_until::<Vec<_>, _, _>(or(newline().map(|_| ()), eof())),
    ))
}

fn lex_<Input>() -> impl Parser<Input, Output = Option<Token>>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    skip_many(space()).with(choice((
        token('(').map(|_| Some(Token::LParen)),
        token(')').map(|_| Some(Token::RParen)),
        attempt(number()).map(|x| Some(x)),
        symbol().map(|x| Some(x)),
        comment().with(lex()),
        eof().map(|_| None),
    )))
}

parser! {
    pub(crate) fn lex[Input]()(Input) -> Option<Token>
        where [Input: Stream<Token=char>]
    {
        lex_()
    }
}

#[cfg(test)]
mod test {
    use super::super::token::Token::*;
    use super::*;
    use combine::parser::EasyParser;

    #[test]
    fn test_number() {
        assert_eq!(number().easy_parse("42").map(|x| x.0), Ok(Number(42)));
        assert_eq!(number().easy_parse("-7").map(|x| x.0), Ok(Number(-7)));
    }

    #[test]
    fn test_symbol() {
        assert_eq!(
            symbol().easy_parse("lambda").map(|x| x.0),
            Ok(Symbol("lambda".to_owned()))
        );

        // a bare minus is a symbol, not a number
        assert_eq!(
            lex().easy_parse("- 1").map(|x| x.0),
            Ok(Some(Symbol("-".to_owned())))
        );
    }

    #[test]
    fn test_comment() {
        assert_eq!(comment().easy_parse("; hoge").map(|x| x.0), Ok(()));
    }

    #[test]
    fn test_lex() {
        assert_eq!(
            lex()
                .easy_parse(
                    r#"; comment
(call f 10)
"#
                )
                .map(|x| x.0),
            Ok(Some(LParen))
        );

        assert_eq!(lex().easy_parse("").map(|x| x.0), Ok(None));
    }
}
