//! Single-line recogniser for free C function declarations.
//!
//! This is deliberately not a C parser. One physical line either is a
//! prototype of the shape
//!
//! ```text
//! <return type> <name>(<parameters>);
//! ```
//!
//! or it is ignored. Shapes we can see but cannot stub (variadics, odd
//! parameters, method declarations inside a `class`) are reported as
//! `ParseError` so the caller can warn instead of silently skipping them.
//
//  Grammar (informal):
//
//      decl   ::= ws* type sep name ws* '(' params ')' ws* ';' ws* EOL
//      params ::= '' | 'void' | param (',' param)*
//      param  ::= type sep name
//      sep    ::= ws+ | ws* '*'+ ws*
//      type   ::= [A-Za-z_:][A-Za-z0-9_:* ]*
//      name   ::= [A-Za-z_:][A-Za-z0-9_:]*

use crate::model::{Function, Parameter};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static FUNCTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?P<return_type> [A-Za-z_:][A-Za-z0-9_:*\x20]*? )
        (?: \s+ | \s* (?P<pointer> \*+ ) \s* )
        (?P<name> [A-Za-z_:][A-Za-z0-9_:]* )
        \s*
        \( (?P<parameters> .* ) \)
        \s* ; \s* $
        ",
    )
    .expect("function regex should be valid")
});

static PARAMETER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^
        (?P<type> [A-Za-z_:][A-Za-z0-9_:*\x20]*? )
        (?: \s+ | \s* (?P<pointer> \*+ ) \s* )
        (?P<name> [A-Za-z_:][A-Za-z0-9_:]* )
        $
        ",
    )
    .expect("parameter regex should be valid")
});

/// Why a declaration-looking line could not be turned into a `Function`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("variadic arguments unsupported")]
    Variadic,

    #[error("cannot parse parameter: {0}")]
    Parameter(String),

    #[error("class definitions not supported; methods cannot be stubbed")]
    ClassDefinition,
}

/// Parse one line of header text.
///
/// `Ok(None)` means "not a declaration" (blank, comment, preprocessor,
/// multi-line prototype, ...), which is never an error.
pub fn parse(line: &str) -> Result<Option<Function>, ParseError> {
    let Some(caps) = FUNCTION_PATTERN.captures(line) else {
        // a method list copied out of a class body would otherwise vanish
        if line.contains("class") {
            return Err(ParseError::ClassDefinition);
        }
        return Ok(None);
    };

    let return_type = with_pointer(
        &caps["return_type"],
        caps.name("pointer").map(|m| m.as_str()),
    );
    let parameters = parse_parameters(&caps["parameters"])?;

    Ok(Some(Function {
        name: caps["name"].to_string(),
        return_type,
        parameters,
    }))
}

/// Split the text between the parentheses on commas and parse each piece.
/// Types in the headers we target never contain commas of their own.
fn parse_parameters(list: &str) -> Result<Vec<Parameter>, ParseError> {
    let list = list.trim();
    if list.is_empty() || list == "void" {
        return Ok(Vec::new());
    }

    list.split(',').map(|piece| parse_parameter(piece.trim())).collect()
}

fn parse_parameter(piece: &str) -> Result<Parameter, ParseError> {
    if piece == "..." {
        return Err(ParseError::Variadic);
    }

    let caps = PARAMETER_PATTERN
        .captures(piece)
        .ok_or_else(|| ParseError::Parameter(piece.to_string()))?;

    Ok(Parameter {
        name: caps["name"].to_string(),
        ty: with_pointer(&caps["type"], caps.name("pointer").map(|m| m.as_str())),
    })
}

/// Fold a `*` run that was glued to the name back into the type.
fn with_pointer(ty: &str, pointer: Option<&str>) -> String {
    let ty = ty.trim_end();
    match pointer {
        Some(stars) => format!("{ty} {stars}"),
        None => ty.to_string(),
    }
}
