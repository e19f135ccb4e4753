//! Action-line tokenizer and validator
//!
//! The wire grammar is positional, whitespace-separated:
//! `O <oid> <symbol> <side> <qty> <px>`, `X <oid>`, or `P`. Fields are
//! validated left to right and the first failure decides the error
//! kind. The oid rides along in a failure whenever its own token
//! parsed, so the driver can emit `E <oid> <message>` rather than the
//! bare form.

use types::errors::ParseError;
use types::ids::{OrderId, Symbol};
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::events::{ErrorRecord, Record};

/// A parsed `O` action
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub oid: OrderId,
    pub symbol: Symbol,
    pub side: Side,
    pub qty: Quantity,
    pub price: Price,
}

/// A parsed action line
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    New(NewOrder),
    Cancel { oid: OrderId },
    Print,
}

/// A rejected action line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailure {
    pub oid: Option<OrderId>,
    pub error: ParseError,
}

impl ParseFailure {
    fn bare(error: ParseError) -> Self {
        Self { oid: None, error }
    }

    fn for_oid(oid: OrderId, error: ParseError) -> Self {
        Self {
            oid: Some(oid),
            error,
        }
    }
}

impl From<ParseFailure> for Record {
    fn from(failure: ParseFailure) -> Self {
        Record::Error(ErrorRecord {
            oid: failure.oid,
            error: failure.error.into(),
        })
    }
}

/// Tokenize and validate one action line
pub fn parse(line: &str) -> Result<Action, ParseFailure> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&action) = tokens.first() else {
        return Err(ParseFailure::bare(ParseError::Malformed));
    };

    match action {
        "O" => parse_new(&tokens),
        "X" => parse_cancel(&tokens),
        "P" => {
            if tokens.len() == 1 {
                Ok(Action::Print)
            } else {
                Err(ParseFailure::bare(ParseError::Malformed))
            }
        }
        _ => Err(ParseFailure::bare(ParseError::BadAction)),
    }
}

fn parse_oid(token: &str) -> Option<OrderId> {
    token.parse::<u32>().ok().and_then(OrderId::try_new)
}

fn parse_side(token: &str) -> Option<Side> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Side::from_wire(c)
}

fn parse_new(tokens: &[&str]) -> Result<Action, ParseFailure> {
    let oid = tokens.get(1).and_then(|token| parse_oid(token));
    if tokens.len() != 6 {
        return Err(ParseFailure { oid, error: ParseError::Malformed });
    }
    let Some(oid) = oid else {
        return Err(ParseFailure::bare(ParseError::Malformed));
    };

    let symbol = Symbol::try_new(tokens[2])
        .ok_or_else(|| ParseFailure::for_oid(oid, ParseError::BadSymbol))?;
    let side =
        parse_side(tokens[3]).ok_or_else(|| ParseFailure::for_oid(oid, ParseError::BadSide))?;
    let qty = tokens[4]
        .parse::<u16>()
        .ok()
        .and_then(Quantity::try_new)
        .ok_or_else(|| ParseFailure::for_oid(oid, ParseError::Malformed))?;
    let price = Price::from_wire(tokens[5])
        .ok_or_else(|| ParseFailure::for_oid(oid, ParseError::Malformed))?;

    Ok(Action::New(NewOrder {
        oid,
        symbol,
        side,
        qty,
        price,
    }))
}

fn parse_cancel(tokens: &[&str]) -> Result<Action, ParseFailure> {
    let oid = tokens.get(1).and_then(|token| parse_oid(token));
    if tokens.len() != 2 {
        return Err(ParseFailure { oid, error: ParseError::Malformed });
    }
    match oid {
        Some(oid) => Ok(Action::Cancel { oid }),
        None => Err(ParseFailure::bare(ParseError::Malformed)),
    }
}
