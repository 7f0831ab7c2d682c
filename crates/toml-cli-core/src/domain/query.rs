//! The query language: a "TOML path" addressing one item of a document.
//!
//! ```text
//! query  := "." | key ( "." key | "[" digits "]" )*
//! key    := bare | "\"" basic-string "\""
//! bare   := [A-Za-z0-9_-]+
//! ```
//!
//! A query must start with a key because the TOML root is always a table.
//! Quoted keys accept the TOML basic-string escapes.

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, tag, take_while_m_n, take_while1},
    character::complete::{char, digit1, none_of, one_of},
    combinator::{all_consuming, map, map_opt, map_res, value},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use crate::domain::error::DomainError;

/// One step of a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// A parsed query. An empty path addresses the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    source: String,
    segments: Vec<PathSegment>,
}

impl Query {
    /// Parse a query string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BadQuery`] with the byte position where the
    /// grammar stopped matching.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let segments = match all_consuming(path)(s) {
            Ok((_, segments)) => segments,
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                return Err(bad_query(s, s.len() - e.input.len()));
            }
            Err(nom::Err::Incomplete(_)) => return Err(bad_query(s, s.len())),
        };
        Ok(Self {
            source: s.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The query text as the user wrote it.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Query {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// ============================================================================
// Grammar
// ============================================================================

fn unicode_scalar(len: usize, s: &str) -> IResult<&str, char> {
    map_opt(take_while_m_n(len, len, |c: char| c.is_ascii_hexdigit()), |hex: &str| {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    })(s)
}

fn escape(s: &str) -> IResult<&str, char> {
    alt((
        one_of("\\\""),
        value('\u{8}', char('b')),
        value('\t', char('t')),
        value('\n', char('n')),
        value('\u{c}', char('f')),
        value('\r', char('r')),
        preceded(char('u'), |s| unicode_scalar(4, s)),
        preceded(char('U'), |s| unicode_scalar(8, s)),
    ))(s)
}

fn basic_string(s: &str) -> IResult<&str, String> {
    // escaped_transform rejects an empty body, so `""` needs its own branch.
    let body = alt((
        escaped_transform(none_of("\\\""), '\\', escape),
        map(tag(""), String::from),
    ));
    delimited(char('"'), body, char('"'))(s)
}

fn bare_key(s: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')(s)
}

fn key(s: &str) -> IResult<&str, PathSegment> {
    map(
        alt((basic_string, map(bare_key, String::from))),
        PathSegment::Key,
    )(s)
}

fn index(s: &str) -> IResult<&str, PathSegment> {
    map(
        delimited(char('['), map_res(digit1, str::parse::<usize>), char(']')),
        PathSegment::Index,
    )(s)
}

fn segment_rest(s: &str) -> IResult<&str, PathSegment> {
    alt((preceded(char('.'), key), index))(s)
}

fn path(s: &str) -> IResult<&str, Vec<PathSegment>> {
    alt((
        map(all_consuming(char('.')), |_| Vec::new()),
        map(pair(key, many0(segment_rest)), |(head, mut rest)| {
            rest.insert(0, head);
            rest
        }),
    ))(s)
}

/// `BadQuery` pointing at the first byte the grammar could not consume.
fn bad_query(input: &str, position: usize) -> DomainError {
    let reason = match input[position..].chars().next() {
        Some(c) => format!("unexpected '{c}'"),
        None => "unexpected end of query".to_string(),
    };
    DomainError::BadQuery {
        query: input.to_string(),
        position,
        reason,
    }
}
