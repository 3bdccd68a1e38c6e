pub mod output;
pub mod source;
pub mod writers;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use source::{DrawingSource, FileSource};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
