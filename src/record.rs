//! Configuration records and their canonical string encoding.
//!
//! A record is one point in a bench's parameter space. Its encoded form
//! serves two purposes at once: it is the configuration's display name in
//! the run report, and it is the `encoded_tb_cfg` generic the bench decodes
//! at run time. Both therefore have to be byte-stable between runs.

use std::fmt;

use anyhow::{bail, Context, Result};

/// A single parameter value. Bus widths and cycle counts are integers,
/// per-signal assertion probabilities are reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Int(u64),
    Real(f64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            // reals always keep a decimal point, so a probability of 1
            // encodes as "1.0" and never collides with the integer "1"
            ParamValue::Real(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            ParamValue::Real(v) => write!(f, "{}", v),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Real(v)
    }
}

/// An explicitly ordered list of `(name, value)` fields.
///
/// Field order is fixed per protocol family and determines the encoded
/// form, so two equal records always encode identically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigRecord {
    fields: Vec<(&'static str, ParamValue)>,
}

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Order of calls is the encoding order.
    pub fn push(&mut self, name: &'static str, value: impl Into<ParamValue>) {
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, ParamValue)> {
        self.fields.iter()
    }

    /// Canonical encoding: `key:value` pairs joined by commas, in field
    /// order. Doubles as the configuration name and the generic payload.
    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| format!("{}:{}", name, value))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Parse an encoded payload back into ordered `(name, value)` pairs.
///
/// This is the run-time half of the contract: the bench reconstructs its
/// configuration from the `encoded_tb_cfg` generic. Values with a decimal
/// point come back as reals, everything else as integers.
pub fn decode(payload: &str) -> Result<Vec<(String, ParamValue)>> {
    let mut fields = Vec::new();
    for pair in payload.split(',') {
        let Some((name, value)) = pair.split_once(':') else {
            bail!("malformed config field `{}` in `{}`", pair, payload);
        };
        let value = if value.contains('.') {
            ParamValue::Real(
                value
                    .parse()
                    .with_context(|| format!("bad real value in field `{}`", pair))?,
            )
        } else {
            ParamValue::Int(
                value
                    .parse()
                    .with_context(|| format!("bad integer value in field `{}`", pair))?,
            )
        };
        fields.push((name.to_string(), value));
    }
    Ok(fields)
}
