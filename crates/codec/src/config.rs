//! Configuration for the translator.
//!
//! This module defines the two settings that influence translation and the
//! readers that load them. It provides:
//! 1. **Enums:** [`IsaWidth`] (the configured choice, including `AUTO`) and
//!    [`Xlen`] (a concrete register width).
//! 2. **Structure:** [`Config`], read-only after load, with unrecognised keys
//!    retained in [`Config::extra`].
//! 3. **Readers:** The line-oriented cfg format (`KEY=value` or `KEY value`)
//!    and a JSON form deserialized through serde.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Concrete integer register width (XLEN) of the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Xlen {
    /// 32-bit base (RV32I).
    Rv32,
    /// 64-bit base (RV64I).
    Rv64,
    /// 128-bit base (RV128I).
    Rv128,
}

impl Xlen {
    /// All widths, narrowest first.
    pub const ALL: [Self; 3] = [Self::Rv32, Self::Rv64, Self::Rv128];

    /// Register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
            Self::Rv128 => 128,
        }
    }

    /// Position of this width in [`Xlen::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Rv32 => 0,
            Self::Rv64 => 1,
            Self::Rv128 => 2,
        }
    }

    /// Width of the machine this translator was compiled for.
    pub const fn host() -> Self {
        if cfg!(target_pointer_width = "32") { Self::Rv32 } else { Self::Rv64 }
    }
}

impl fmt::Display for Xlen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RV{}I", self.bits())
    }
}

/// Configured ISA width.
///
/// `AUTO` resolves through [`IsaWidth::candidates`]; the fixed widths select
/// exactly one [`Xlen`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IsaWidth {
    /// Pick the width per instruction, host width first.
    #[default]
    #[serde(alias = "auto", alias = "Auto")]
    Auto,
    /// Fixed 32-bit base.
    #[serde(alias = "rv32i")]
    Rv32i,
    /// Fixed 64-bit base.
    #[serde(alias = "rv64i")]
    Rv64i,
    /// Fixed 128-bit base.
    #[serde(alias = "rv128i")]
    Rv128i,
}

impl IsaWidth {
    /// The width this setting pins, or `None` for `AUTO`.
    pub const fn fixed(self) -> Option<Xlen> {
        match self {
            Self::Auto => None,
            Self::Rv32i => Some(Xlen::Rv32),
            Self::Rv64i => Some(Xlen::Rv64),
            Self::Rv128i => Some(Xlen::Rv128),
        }
    }

    /// Widths to try, in order.
    ///
    /// A fixed width yields itself. `AUTO` yields the host width, then the
    /// wider widths ascending, then the narrower widths descending; on a
    /// 64-bit host that is `RV64, RV128, RV32`.
    pub fn candidates(self) -> Vec<Xlen> {
        if let Some(xlen) = self.fixed() {
            return vec![xlen];
        }
        let host = Xlen::host();
        let mut order = vec![host];
        order.extend(Xlen::ALL.into_iter().filter(|x| *x > host));
        order.extend(Xlen::ALL.into_iter().rev().filter(|x| *x < host));
        order
    }
}

impl From<Xlen> for IsaWidth {
    fn from(xlen: Xlen) -> Self {
        match xlen {
            Xlen::Rv32 => Self::Rv32i,
            Xlen::Rv64 => Self::Rv64i,
            Xlen::Rv128 => Self::Rv128i,
        }
    }
}

impl fmt::Display for IsaWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed() {
            Some(xlen) => xlen.fmt(f),
            None => f.write_str("AUTO"),
        }
    }
}

impl FromStr for IsaWidth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AUTO" => Ok(Self::Auto),
            "RV32I" => Ok(Self::Rv32i),
            "RV64I" => Ok(Self::Rv64i),
            "RV128I" => Ok(Self::Rv128i),
            _ => Err(ConfigError::InvalidValue {
                key: "ISA".to_string(),
                value: s.to_string(),
                expected: "AUTO, RV32I, RV64I or RV128I",
            }),
        }
    }
}

/// A value read from the cfg format, after type inference.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// `true` / `false`, case-insensitive.
    Bool(bool),
    /// Decimal, exponent or `0x` hex numeral.
    Number(f64),
    /// Anything else, verbatim.
    Text(String),
    /// A comma-separated value; numeric items become numbers.
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Infers the type of a raw cfg value.
    pub fn infer(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains(',') {
            return Self::List(
                raw.split(',')
                    .map(str::trim)
                    .map(|item| parse_number(item).map_or_else(|| Self::Text(item.to_string()), Self::Number))
                    .collect(),
            );
        }
        if raw.eq_ignore_ascii_case("true") {
            Self::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Self::Bool(false)
        } else if let Some(n) = parse_number(raw) {
            Self::Number(n)
        } else {
            Self::Text(raw.to_string())
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Parses a numeric cfg value; `None` when the text is not a number.
fn parse_number(raw: &str) -> Option<f64> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let value = u64::from_str_radix(hex, 16).ok()? as f64;
        return Some(if negative { -value } else { value });
    }
    // Rust accepts "inf" and "nan" spellings that are not numerals here.
    if !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    if body.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Reads the line-oriented cfg format into raw key/value pairs.
///
/// One setting per line as `KEY=value` or `KEY value`; blank lines and lines
/// starting with `#` are skipped, as are lines with a key but no value.
pub fn parse_cfg(text: &str) -> BTreeMap<String, ConfigValue> {
    let mut entries = BTreeMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let split = line.split_once('=').or_else(|| line.split_once(char::is_whitespace));
        let Some((key, value)) = split else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        let _ = entries.insert(key.to_string(), ConfigValue::infer(value));
    }
    entries
}

/// Translator configuration.
///
/// Loaded once at process start and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// ISA width used to select descriptors and shift widths.
    #[serde(rename = "ISA", alias = "isa", default)]
    pub isa: IsaWidth,
    /// Render registers by ABI name and accept ABI aliases on input.
    #[serde(rename = "ABI", alias = "abi", default)]
    pub abi: bool,
    /// Unrecognised keys, kept verbatim and otherwise unused.
    #[serde(flatten)]
    pub extra: BTreeMap<String, ConfigValue>,
}

impl Config {
    /// Creates a configuration with the given width and ABI toggle.
    pub const fn new(isa: IsaWidth, abi: bool) -> Self {
        Self { isa, abi, extra: BTreeMap::new() }
    }

    /// Builds a configuration from already-parsed cfg entries.
    ///
    /// `ISA` and `ABI` are matched case-insensitively; every other key is kept
    /// in [`Config::extra`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when `ISA` is not a width name or `ABI`
    /// is not a boolean.
    pub fn from_entries(entries: BTreeMap<String, ConfigValue>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (key, value) in entries {
            match key.to_ascii_uppercase().as_str() {
                "ISA" => {
                    config.isa = match &value {
                        ConfigValue::Text(text) => text.parse()?,
                        other => return Err(invalid_isa(other)),
                    };
                }
                "ABI" => {
                    config.abi = match value {
                        ConfigValue::Bool(b) => b,
                        other => {
                            return Err(ConfigError::InvalidValue {
                                key: key.clone(),
                                value: other.to_string(),
                                expected: "true or false",
                            });
                        }
                    };
                }
                _ => {
                    let _ = config.extra.insert(key, value);
                }
            }
        }
        Ok(config)
    }

    /// Parses the cfg format.
    ///
    /// # Errors
    ///
    /// See [`Config::from_entries`].
    pub fn from_cfg_str(text: &str) -> Result<Self, ConfigError> {
        Self::from_entries(parse_cfg(text))
    }

    /// Parses the JSON form, e.g. `{"ISA": "RV64I", "ABI": true}`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] when the text is not a JSON object of the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a configuration file; `.json` files use the JSON form, everything
    /// else the cfg format.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as for the
    /// chosen format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json { Self::from_json(&text)? } else { Self::from_cfg_str(&text)? };
        tracing::debug!(path = %path.display(), isa = %config.isa, abi = config.abi, "configuration loaded");
        Ok(config)
    }
}

fn invalid_isa(value: &ConfigValue) -> ConfigError {
    ConfigError::InvalidValue {
        key: "ISA".to_string(),
        value: value.to_string(),
        expected: "AUTO, RV32I, RV64I or RV128I",
    }
}
