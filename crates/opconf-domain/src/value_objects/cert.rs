//! Client certificate value object

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Client certificate presented to the server
///
/// Accepted either as a single path (certificate and key in one file) or as a
/// `[cert, key]` pair of paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CertSource {
    /// Combined certificate and private key file
    Single(PathBuf),
    /// Separate certificate and private key files
    Pair {
        /// Certificate file
        cert: PathBuf,
        /// Private key file
        key: PathBuf,
    },
}

impl CertSource {
    /// Combined certificate file, checked for plausibility
    pub fn single<P: AsRef<str>>(path: P) -> Result<Self> {
        Ok(Self::Single(plausible_path("cert", path.as_ref())?))
    }

    /// Separate certificate and key files, both checked for plausibility
    pub fn pair<C: AsRef<str>, K: AsRef<str>>(cert: C, key: K) -> Result<Self> {
        Ok(Self::Pair {
            cert: plausible_path("cert", cert.as_ref())?,
            key: plausible_path("cert", key.as_ref())?,
        })
    }

    /// Parse the JSON form of a certificate option
    pub fn from_value(key: &str, value: &Value) -> Result<Self> {
        const EXPECTED: &str = "path string or [cert, key] array";
        match value {
            Value::String(path) => Ok(Self::Single(plausible_path(key, path)?)),
            Value::Array(items) => match items.as_slice() {
                [Value::String(cert), Value::String(key_path)] => Ok(Self::Pair {
                    cert: plausible_path(key, cert)?,
                    key: plausible_path(key, key_path)?,
                }),
                [_, _] => Err(Error::invalid_type(key, EXPECTED, "array of non-strings")),
                _ => Err(Error::invalid_value(
                    key,
                    format!("expected exactly 2 paths, found {}", items.len()),
                )),
            },
            other => Err(Error::invalid_type(key, EXPECTED, json_type_name(other))),
        }
    }

    /// JSON form accepted by [`CertSource::from_value`]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Single(path) => Value::String(path.to_string_lossy().into_owned()),
            Self::Pair { cert, key } => Value::Array(vec![
                Value::String(cert.to_string_lossy().into_owned()),
                Value::String(key.to_string_lossy().into_owned()),
            ]),
        }
    }

    /// File holding the certificate
    pub fn cert_path(&self) -> &Path {
        match self {
            Self::Single(path) => path,
            Self::Pair { cert, .. } => cert,
        }
    }

    /// File holding the private key, when separate from the certificate
    pub fn key_path(&self) -> Option<&Path> {
        match self {
            Self::Single(_) => None,
            Self::Pair { key, .. } => Some(key),
        }
    }

    /// Re-check plausibility, e.g. after deserializing from a file
    pub fn validate(&self, key: &str) -> Result<()> {
        let paths: Vec<&Path> = match self {
            Self::Single(path) => vec![path],
            Self::Pair {
                cert,
                key: key_path,
            } => vec![cert, key_path],
        };
        for path in paths {
            plausible_path(key, &path.to_string_lossy())?;
        }
        Ok(())
    }
}

/// A path string is plausible when it is non-blank and free of NUL bytes.
///
/// Whether the file exists and can be loaded is the transport's concern.
fn plausible_path(key: &str, raw: &str) -> Result<PathBuf> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_value(key, "certificate path cannot be empty"));
    }
    if raw.contains('\0') {
        return Err(Error::invalid_value(
            key,
            "certificate path cannot contain NUL bytes",
        ));
    }
    Ok(PathBuf::from(raw))
}

/// Short description of a JSON value's type for error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
