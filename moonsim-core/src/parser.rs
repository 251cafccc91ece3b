//! Parser for moon position lists
//!
//! Each record is a line of the form `<x=I, y=I, z=I>`. Anything that does
//! not look like a record is skipped.

use crate::engine::System;
use glam::I64Vec3;
use regex::{Captures, Regex};
use thiserror::Error;

const BODY_PATTERN: &str = r"<x=(.*), y=(.*), z=(.*)>";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid record pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Compiled record pattern, built once and borrowed by every parse
#[derive(Debug, Clone)]
pub struct BodyParser {
    pattern: Regex,
}

impl BodyParser {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            pattern: Regex::new(BODY_PATTERN)?,
        })
    }

    /// Parse a single line, returning `None` if it is not a record
    pub fn parse_line(&self, line: &str) -> Option<I64Vec3> {
        let caps = self.pattern.captures(line)?;
        Some(I64Vec3::new(
            coordinate(&caps, 1),
            coordinate(&caps, 2),
            coordinate(&caps, 3),
        ))
    }

    /// Parse every record in `source` into a system of bodies at rest
    pub fn parse(&self, source: &str) -> System {
        System::from_positions(source.lines().filter_map(|line| self.parse_line(line)))
    }
}

// Unparseable coordinates read as zero, including padded ones like ` 7`.
fn coordinate(caps: &Captures<'_>, group: usize) -> i64 {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Parse a moon list with a freshly built parser
pub fn parse_bodies(source: &str) -> Result<System, ParseError> {
    let parser = BodyParser::new()?;
    Ok(parser.parse(source))
}
