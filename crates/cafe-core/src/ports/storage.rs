//! Storage trait for the data document

use crate::Result;

/// Raw byte access to wherever the data document lives.
///
/// `write` must replace the whole document; a reader never observes a partial
/// write.
pub trait DocumentStorage: Send + Sync {
    fn read(&self) -> Result<Vec<u8>>;
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Where the document lives, for log and error messages
    fn location(&self) -> String;
}
