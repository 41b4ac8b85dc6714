/// Storage errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    Read,
    #[error("storage.write_failed")]
    Write,
}

impl StorageError {
    pub fn read() -> Self {
        StorageError::Read
    }
    pub fn write() -> Self {
        StorageError::Write
    }
}
