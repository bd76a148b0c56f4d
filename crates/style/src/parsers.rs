//! Low-level nom parser functions for CSS-like setting values.
//!
//! This module provides composable parser functions for lengths, scale
//! ratios and font stacks, plus `run_parser` to apply one to a whole string.

use crate::dimension::{PT_PX, REM_PX};
use crate::font::PartialFontStack;
use crate::scale::ScaleRatio;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_till, take_till1, take_while1};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{all_consuming, map_res, opt, recognize, rest, value};
use nom::sequence::{delimited, preceded, separated_pair};
use nom::{IResult, Parser};
use thiserror::Error;

type NomError<'a> = nom::error::Error<&'a str>;

/// Errors that can occur during value parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<'a>>
where
    F: Parser<&'a str, Output = O, Error = NomError<'a>>,
{
    delimited(multispace0, inner, multispace0)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((digit1, opt((char('.'), digit1)))),
                recognize((char('.'), digit1)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

/// Runs `parser` over the whole of `input`, ignoring surrounding whitespace.
pub fn run_parser<'a, O, P>(parser: P, input: &'a str) -> Result<O, StyleParseError>
where
    P: Parser<&'a str, Output = O, Error = NomError<'a>>,
{
    all_consuming(ws(parser))
        .parse(input)
        .map(|(_, out)| out)
        .map_err(|e| StyleParseError::Parse(format!("Failed to parse '{}': {}", input, e)))
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("px")),
        value(REM_PX, tag_no_case("rem")),
        value(REM_PX, tag_no_case("em")),
        value(PT_PX, tag_no_case("pt")),
    ))
    .parse(input)
}

/// Parses a length with optional unit into pixels (e.g., "16px", "1rem", "12pt", "18").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, value * unit_multiplier.unwrap_or(1.0)))
}

// --- Ratio Parsers ---

fn ratio_from_pair((a, b): (f32, f32)) -> Result<f32, String> {
    if a <= 0.0 || b <= 0.0 {
        return Err(format!("Ratio terms must be positive, got {}:{}", a, b));
    }
    Ok(a.max(b) / a.min(b))
}

fn preset_ratio(name: &str) -> Result<f32, String> {
    ScaleRatio::preset(name)
        .map(ScaleRatio::value)
        .ok_or_else(|| format!("Unknown ratio preset: '{}'", name))
}

/// Parses a scale ratio: `"1.25"`, `"major-third"` or `"4:5"`.
///
/// Interval notation is order-agnostic, `4:5` and `5:4` both give 1.25.
pub fn parse_ratio(input: &str) -> IResult<&str, f32> {
    alt((
        map_res(
            separated_pair(parse_f32, ws(char(':')), parse_f32),
            ratio_from_pair,
        ),
        map_res(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '-' || c == '_'),
            preset_ratio,
        ),
        parse_f32,
    ))
    .parse(input)
}

// --- Font Parsers ---

fn quoted_family(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    ))
    .parse(input)
}

fn bare_family(input: &str) -> IResult<&str, &str> {
    map_res(take_till1(|c: char| c == ','), |s: &str| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Err("empty font family")
        } else {
            Ok(trimmed)
        }
    })
    .parse(input)
}

/// Parses a `font-family` value into its primary family and fallback list.
///
/// The fallback is `None` when nothing follows the family.
pub fn parse_font_stack(input: &str) -> IResult<&str, PartialFontStack> {
    let (input, family) = ws(alt((quoted_family, bare_family))).parse(input)?;
    let (input, fallback) = opt(preceded(char(','), rest)).parse(input)?;
    let fallback = fallback
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Ok((
        input,
        PartialFontStack {
            family: family.to_string(),
            fallback,
        },
    ))
}
