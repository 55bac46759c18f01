use memmap2::Mmap;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use zip::ZipArchive;

use crate::error::ExtractError;

/// Read-only memory map of a source document, alive for the duration of one job.
pub struct MmapFileReader {
    _file: File,
    mmap: Mmap,
}

impl MmapFileReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let file = File::open(path.as_ref())?;
        // Zero-length files cannot be mapped on every platform.
        if file.metadata()?.len() == 0 {
            return Err(ExtractError::EmptyFile);
        }
        // SAFETY: the map is read-only and dropped with the job; the source is not
        // expected to be modified while it is being converted.
        let mmap = unsafe { Mmap::map(&file)? };

        Ok(MmapFileReader { _file: file, mmap })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Opens the mapped bytes as a ZIP package.
    pub fn archive(&self) -> Result<ZipArchive<Cursor<&[u8]>>, ExtractError> {
        Ok(ZipArchive::new(Cursor::new(self.as_slice()))?)
    }
}
