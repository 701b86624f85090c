use crate::domain::model::CostSummary;
use crate::domain::ports::Storage;
use crate::utils::error::{EstimatorError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Single-document persistence for the latest cost summary. Every save
/// replaces the whole file; there is no history and no locking.
pub struct CostStore<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> CostStore<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn persist(&self, summary: &CostSummary) -> Result<()> {
        let data = to_json(summary)?;
        tracing::debug!("Writing cost summary ({} bytes) to {}", data.len(), self.path);
        self.storage.write_file(&self.path, &data)?;
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<CostSummary>> {
        let data = match self.storage.read_file(&self.path) {
            Ok(data) => data,
            Err(EstimatorError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No saved cost summary at {}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let summary = from_json(&data).map_err(|source| EstimatorError::ParseError {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(summary))
    }
}

/// Only a JSON object is a saved summary. Going through `Map` first rejects
/// arrays (which serde would otherwise map onto fields by position) and
/// keeps the last value of a repeated key.
pub fn from_json(data: &[u8]) -> std::result::Result<CostSummary, serde_json::Error> {
    let map: Map<String, Value> = serde_json::from_slice(data)?;
    serde_json::from_value(Value::Object(map))
}

/// Pretty JSON with four-space indentation. A total that overflowed is
/// refused; JSON would silently turn it into `null`.
pub fn to_json(summary: &CostSummary) -> Result<Vec<u8>> {
    if let Some((key, value)) = summary.entries().into_iter().find(|(_, v)| !v.is_finite()) {
        return Err(EstimatorError::NonFiniteResult {
            field: key.to_string(),
            value: value.to_string(),
        });
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    summary.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
