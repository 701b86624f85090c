use crate::utils::error::Result;

/// Byte-level storage backend. A missing file is reported as
/// `EstimatorError::IoError` with `ErrorKind::NotFound`.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
