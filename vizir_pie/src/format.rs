// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting the displayed slice value.
//!
//! Charts are configured with a printf-style specifier such as `"%.1f"`. Only the subset that
//! makes sense for a single number is accepted; numbers are not localized.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::PieError;

/// Most decimals a `%.Nf` conversion may ask for; an `f64` carries no more than this.
const MAX_PRECISION: usize = 17;

/// How the number itself is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    /// Fixed-point with the given number of decimals (`%f`, `%.Nf`).
    Fixed(usize),
    /// Rounded to an integer (`%d`, `%i`).
    Integer,
}

/// A parsed printf-style value specifier: literal text around exactly one conversion.
///
/// Supported: `%%`, `%f` (6 decimals), `%.Nf`, `%d`, `%i`, and an optional `l` length modifier
/// (`%.2lf`). Precision is capped at 17 decimals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueFormat {
    spec: String,
    prefix: String,
    conversion: Conversion,
    suffix: String,
}

impl ValueFormat {
    /// The default specifier, one decimal place.
    pub const DEFAULT_SPEC: &'static str = "%.1f";

    /// Parses a specifier.
    pub fn parse(spec: &str) -> Result<Self, PieError> {
        let invalid = |reason| PieError::InvalidValueFormat {
            spec: spec.to_string(),
            reason,
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut conversion = None;
        let mut chars = spec.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if conversion.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if conversion.is_some() {
                return Err(invalid("more than one value conversion"));
            }

            let mut precision = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut digits = 0_usize;
                let mut n = 0_usize;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    chars.next();
                    digits += 1;
                    n = n
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(d as usize))
                        .ok_or_else(|| invalid("precision is too large"))?;
                }
                if n > MAX_PRECISION {
                    return Err(invalid("precision is too large"));
                }
                // A bare "." means zero decimals, as in C.
                precision = Some(if digits == 0 { 0 } else { n });
            }
            if chars.peek() == Some(&'l') {
                chars.next();
            }
            conversion = Some(match chars.next() {
                Some('f' | 'F') => Conversion::Fixed(precision.unwrap_or(6)),
                Some('d' | 'i') if precision.is_none() => Conversion::Integer,
                Some('d' | 'i') => return Err(invalid("integer conversions take no precision")),
                Some(_) => return Err(invalid("unsupported conversion")),
                None => return Err(invalid("dangling '%'")),
            });
        }

        let Some(conversion) = conversion else {
            return Err(invalid("missing value conversion"));
        };
        Ok(Self {
            spec: spec.to_string(),
            prefix,
            conversion,
            suffix,
        })
    }

    /// The specifier as given.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Renders `value`.
    pub fn format(&self, value: f64) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 8);
        out.push_str(&self.prefix);
        // Writing into a `String` cannot fail.
        let _ = match self.conversion {
            Conversion::Fixed(precision) => write!(out, "{value:.precision$}"),
            Conversion::Integer => write!(out, "{value:.0}"),
        };
        out.push_str(&self.suffix);
        out
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            spec: Self::DEFAULT_SPEC.to_string(),
            prefix: String::new(),
            conversion: Conversion::Fixed(1),
            suffix: String::new(),
        }
    }
}

impl FromStr for ValueFormat {
    type Err = PieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec)
    }
}
