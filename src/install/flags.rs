//! Structured options rendered as command-line flags

use std::fmt;

/// Key reserved for positional arguments, emitted after every flag
pub const POSITIONAL_KEY: &str = "_";

/// A single flag value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `true` renders `--key`, `false` renders `--no-key`
    Bool(bool),
    Text(String),
    Int(i64),
    /// One flag per item
    List(Vec<String>),
    /// Omitted entirely
    Null,
}

impl From<bool> for FlagValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for FlagValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for FlagValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FlagValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<Vec<String>> for FlagValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

impl From<Vec<&str>> for FlagValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(String::from).collect())
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{}", v),
            Self::List(v) => f.write_str(&v.join(",")),
            Self::Null => Ok(()),
        }
    }
}

/// Ordered `key -> value` options forwarded to an installer.
///
/// Keys may be camelCase or kebab-case; camelCase is converted. Keys of a
/// single character render as short flags (`-k value`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOptions {
    entries: Vec<(String, FlagValue)>,
}

impl FlagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FlagOptions::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing an existing value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FlagValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a `KEY` or `KEY=VALUE` argument and add it.
    ///
    /// A bare key is `true`; `true`/`false` values become booleans; integer
    /// values become numbers; anything else is text. Repeating a key turns
    /// it into a list.
    pub fn push_spec(&mut self, spec: &str) {
        let (key, value) = match spec.split_once('=') {
            None => (spec, FlagValue::Bool(true)),
            Some((key, raw)) => (key, parse_value(raw)),
        };
        let key = key.trim_start_matches('-');

        let merged = match (self.get(key), value) {
            (Some(FlagValue::List(items)), new @ (FlagValue::Text(_) | FlagValue::Int(_))) => {
                let mut items = items.clone();
                items.push(new.to_string());
                FlagValue::List(items)
            }
            (
                Some(existing @ (FlagValue::Text(_) | FlagValue::Int(_))),
                new @ (FlagValue::Text(_) | FlagValue::Int(_)),
            ) => FlagValue::List(vec![existing.to_string(), new.to_string()]),
            (_, value) => value,
        };
        self.set(key, merged);
    }

    /// Render as installer arguments
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        let mut positional = Vec::new();

        for (key, value) in &self.entries {
            if key == POSITIONAL_KEY {
                match value {
                    FlagValue::List(items) => positional.extend(items.iter().cloned()),
                    FlagValue::Null => {}
                    other => positional.push(other.to_string()),
                }
                continue;
            }

            let flag = if is_short(key) {
                key.clone()
            } else {
                kebab_case(key)
            };
            match value {
                FlagValue::Null => {}
                FlagValue::Bool(true) => args.push(flag_name(&flag)),
                FlagValue::Bool(false) => args.push(format!("--no-{}", flag)),
                FlagValue::Text(v) => push_valued(&mut args, &flag, v),
                FlagValue::Int(v) => push_valued(&mut args, &flag, &v.to_string()),
                FlagValue::List(items) => {
                    for item in items {
                        push_valued(&mut args, &flag, item);
                    }
                }
            }
        }

        args.extend(positional);
        args
    }
}

impl<K: Into<String>, V: Into<FlagValue>> FromIterator<(K, V)> for FlagOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.set(key, value);
        }
        options
    }
}

fn parse_value(raw: &str) -> FlagValue {
    match raw {
        "true" => FlagValue::Bool(true),
        "false" => FlagValue::Bool(false),
        _ => raw
            .parse::<i64>()
            .map(FlagValue::Int)
            .unwrap_or_else(|_| FlagValue::Text(raw.to_string())),
    }
}

fn is_short(flag: &str) -> bool {
    flag.chars().count() == 1
}

fn flag_name(flag: &str) -> String {
    if is_short(flag) {
        format!("-{}", flag)
    } else {
        format!("--{}", flag)
    }
}

fn push_valued(args: &mut Vec<String>, flag: &str, value: &str) {
    if is_short(flag) {
        args.push(format!("-{}", flag));
        args.push(value.to_string());
    } else {
        args.push(format!("--{}={}", flag, value));
    }
}

/// `saveDev` -> `save-dev`; kebab-case keys pass through unchanged
pub(crate) fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
