//! Textual chain expressions.
//!
//! ```text
//! expr  = ident segment*
//! segment = "." ident | "(" [arg ("," arg)*] ")"
//! arg   = number | 'string' | "string" | expr
//! ```
//!
//! A leading `tw` is the empty chain; any other leading identifier is an
//! access on the empty chain, so `hover(bg('red'))` reads the same as
//! `tw.hover(tw.bg('red'))`.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{all_consuming, cut, map, map_res, opt, recognize},
    multi::{many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::arg::Arg;
use crate::chain::{Access, Chain};
use crate::error::{ChainError, Result};

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Access(String),
    Call(Vec<ArgExpr>),
}

#[derive(Clone, Debug, PartialEq)]
enum ArgExpr {
    Num(f64),
    Str(String),
    Chain(ChainExpr),
}

#[derive(Clone, Debug, PartialEq)]
struct ChainExpr {
    root: String,
    segments: Vec<Segment>,
}

fn ws<'a, O>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(multispace0, inner, multispace0)
}

fn parse_ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
    ))(input)
}

fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn parse_string(input: &str) -> IResult<&str, String> {
    map(
        alt((
            delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
            delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        )),
        str::to_string,
    )(input)
}

fn parse_arg(input: &str) -> IResult<&str, ArgExpr> {
    ws(alt((
        map(parse_number, ArgExpr::Num),
        map(parse_string, ArgExpr::Str),
        map(parse_expr, ArgExpr::Chain),
    )))(input)
}

fn parse_segment(input: &str) -> IResult<&str, Segment> {
    alt((
        map(preceded(ws(char('.')), cut(parse_ident)), |name| {
            Segment::Access(name.to_string())
        }),
        map(
            preceded(
                preceded(multispace0, char('(')),
                cut(terminated(
                    separated_list0(char(','), parse_arg),
                    preceded(multispace0, char(')')),
                )),
            ),
            Segment::Call,
        ),
    ))(input)
}

fn parse_expr(input: &str) -> IResult<&str, ChainExpr> {
    map(pair(parse_ident, many0(parse_segment)), |(root, segments)| {
        ChainExpr {
            root: root.to_string(),
            segments,
        }
    })(input)
}

impl ArgExpr {
    fn evaluate(&self) -> Arg {
        match self {
            ArgExpr::Num(n) => Arg::from(*n),
            ArgExpr::Str(s) => Arg::from(s.as_str()),
            ArgExpr::Chain(expr) => Arg::Chain(expr.evaluate()),
        }
    }
}

impl ChainExpr {
    fn evaluate(&self) -> Chain {
        let mut access = if self.root == "tw" {
            Access::Chain(Chain::new())
        } else {
            Chain::new().get(&self.root)
        };
        for segment in &self.segments {
            access = match segment {
                Segment::Access(name) => access.get(name),
                Segment::Call(args) => Access::Chain(access.call(args.iter().map(ArgExpr::evaluate))),
            };
        }
        access.into_chain()
    }
}

/// Parses a chain expression such as `tw.flex.gap(4).hover(bg('red'))`.
pub fn parse_chain(input: &str) -> Result<Chain> {
    match all_consuming(terminated(ws(parse_expr), multispace0))(input) {
        Ok((_, expr)) => Ok(expr.evaluate()),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            match ws(parse_expr)(input) {
                Ok((rest, _)) if !rest.is_empty() && e.input == rest => {
                    Err(ChainError::TrailingInput {
                        remainder: rest.to_string(),
                    })
                }
                _ => Err(ChainError::Syntax {
                    remainder: e.input.to_string(),
                }),
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(ChainError::Syntax {
            remainder: input.to_string(),
        }),
    }
}
