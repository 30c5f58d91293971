//! Raw text fields and mode dispatch.
//!
//! [`solve`] mirrors a form with three boxes: two filled boxes compute the
//! third, three filled boxes verify.

use tracing::debug;

use super::parse_value;
use crate::engine::result::Solution;
use crate::engine::{calculate, verify, CalculationRequest, Side};
use crate::TriangleError;

/// Unparsed values for sides `a`, `b`, `c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub a: Option<String>,
    pub b: Option<String>,
    pub c: Option<String>,
}

impl RawFields {
    pub fn new(a: Option<&str>, b: Option<&str>, c: Option<&str>) -> Self {
        RawFields {
            a: a.map(str::to_string),
            b: b.map(str::to_string),
            c: c.map(str::to_string),
        }
    }

    /// Build fields from `(key, value)` pairs such as `("a", "3")`.
    ///
    /// Keys not given stay empty. Unknown or repeated keys are rejected.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self, TriangleError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut fields = RawFields::default();

        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let side = Side::from_name(key).ok_or_else(|| {
                TriangleError::invalid_request(format!(
                    "Unknown field '{}'. Data must contain only keys: a, b, c",
                    key
                ))
            })?;

            let slot = fields.slot_mut(side);
            if slot.is_some() {
                return Err(TriangleError::invalid_request(format!(
                    "Field {} given more than once.",
                    side
                )));
            }
            *slot = Some(value.into());
        }

        Ok(fields)
    }

    /// Parse `key=value` arguments, e.g. `["a=3", "b=4"]`.
    pub fn from_assignments<S: AsRef<str>>(args: &[S]) -> Result<Self, TriangleError> {
        let pairs = args
            .iter()
            .map(|arg| {
                arg.as_ref().split_once('=').ok_or_else(|| {
                    TriangleError::invalid_request(format!(
                        "Expected key=value, got '{}'.",
                        arg.as_ref()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_pairs(pairs)
    }

    pub fn get(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.a.as_deref(),
            Side::B => self.b.as_deref(),
            Side::C => self.c.as_deref(),
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
            Side::C => &mut self.c,
        }
    }

    /// Apply `f` to every present field.
    pub fn map_values(&self, f: impl Fn(&str) -> String) -> Self {
        RawFields {
            a: self.a.as_deref().map(&f),
            b: self.b.as_deref().map(&f),
            c: self.c.as_deref().map(&f),
        }
    }

    /// Parse every field; blank fields become unknown sides.
    pub fn request(&self) -> Result<CalculationRequest, TriangleError> {
        Ok(CalculationRequest {
            a: parse_value(Side::A, self.get(Side::A))?,
            b: parse_value(Side::B, self.get(Side::B))?,
            c: parse_value(Side::C, self.get(Side::C))?,
        })
    }
}

/// Parse the fields and run calculate or verify depending on how many are
/// filled in.
///
/// # Errors
///
/// Any parse error, fewer than two values, or an error from the engine.
pub fn solve(fields: &RawFields) -> Result<Solution, TriangleError> {
    let request = fields.request()?;

    match (request.missing().len(), request.a, request.b, request.c) {
        (0, Some(a), Some(b), Some(c)) => {
            debug!("three values given, verifying");
            verify(a, b, c).map(Solution::from)
        }
        (1, ..) => {
            debug!("two values given, calculating");
            calculate(&request).map(Solution::from)
        }
        _ => Err(TriangleError::invalid_request(
            "Enter exactly two values to compute the missing one, or all three values to verify.",
        )),
    }
}
