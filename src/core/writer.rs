use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writer is responsible for persisting extracted text at a destination path.
pub trait Writer {
    /// Create or truncate `path` and write `text` to it as UTF-8.
    fn write_text<P: AsRef<Path>>(&self, path: P, text: &str) -> io::Result<()>;
}

/// TextFileWriter writes through a buffered handle that is flushed and closed before returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileWriter;

impl Writer for TextFileWriter {
    fn write_text<P: AsRef<Path>>(&self, path: P, text: &str) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path.as_ref())?);
        out.write_all(text.as_bytes())?;
        // into_inner flushes and surfaces the error instead of swallowing it in Drop.
        out.into_inner().map_err(|e| e.into_error())?;
        Ok(())
    }
}
