// Errors from writing the image out. Every variant states *where* things went wrong.
// Drawing itself never fails: off-canvas shapes are clipped or come out empty.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The destination could not be opened for writing; nothing was written.
    #[error("cannot create {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    /// A write or flush failed part way; whatever is on disk is incomplete.
    #[error("failed writing {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}
