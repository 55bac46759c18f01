use crate::error::ExtractError;
use crate::utils::mmap_reader::MmapFileReader;
use log::debug;
use roxmltree::Document;
use std::fs;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub trait Extractor {
    /// Extract the plain text of the document at `path`.
    fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError>;
}

/// DocxExtractor: flattens headers, body and footers of a `.docx` package into plain text.
///
/// Runs of text are copied verbatim, `w:tab` becomes a tab, `w:br`/`w:cr` a newline,
/// and every paragraph opens with a blank line. The result is trimmed.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    image_dir: Option<PathBuf>,
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also copy embedded `.jpg`/`.jpeg`/`.png`/`.bmp` files into `dir` on every extraction.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    pub fn image_dir(&self) -> Option<&Path> {
        self.image_dir.as_deref()
    }
}

impl Extractor for DocxExtractor {
    fn extract<P: AsRef<Path>>(&self, path: P) -> Result<String, ExtractError> {
        let source = MmapFileReader::open(path.as_ref())?;
        let mut archive = source.archive()?;
        let names = entry_names(&mut archive)?;

        if !names.iter().any(|n| n == DOCUMENT_PART) {
            return Err(ExtractError::MissingPart(DOCUMENT_PART));
        }

        let mut text = String::new();
        for name in names.iter().filter(|n| is_numbered_part(n, "header")) {
            text.push_str(&xml_to_text(name, &read_part(&mut archive, name)?)?);
        }
        text.push_str(&xml_to_text(
            DOCUMENT_PART,
            &read_part(&mut archive, DOCUMENT_PART)?,
        )?);
        for name in names.iter().filter(|n| is_numbered_part(n, "footer")) {
            text.push_str(&xml_to_text(name, &read_part(&mut archive, name)?)?);
        }

        if let Some(dir) = &self.image_dir {
            let exported = export_images(&mut archive, &names, dir)?;
            debug!("exported {} image(s) from {} to {}", exported, path.as_ref().display(), dir.display());
        }

        let text = text.trim().to_string();
        debug!(
            "extracted {} chars from {} ({} bytes)",
            text.chars().count(),
            path.as_ref().display(),
            source.len()
        );
        Ok(text)
    }
}

/// Entry names in central-directory order.
fn entry_names<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<String>, ExtractError> {
    let mut names = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        names.push(archive.by_index(i)?.name().to_string());
    }
    Ok(names)
}

/// Matches `word/<kind><digits>.xml`, e.g. `word/header2.xml`.
fn is_numbered_part(name: &str, kind: &str) -> bool {
    name.strip_prefix("word/")
        .and_then(|rest| rest.strip_prefix(kind))
        .and_then(|rest| rest.strip_suffix(".xml"))
        .is_some_and(|index| index.bytes().all(|b| b.is_ascii_digit()))
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String, ExtractError> {
    let mut bytes = Vec::new();
    archive.by_name(name)?.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| ExtractError::Encoding {
        part: name.to_string(),
    })
}

/// Flatten one WordprocessingML part to text.
fn xml_to_text(part: &str, xml: &str) -> Result<String, ExtractError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let doc = Document::parse(xml).map_err(|source| ExtractError::Xml {
        part: part.to_string(),
        source,
    })?;

    let mut text = String::new();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().namespace() == Some(W_NS))
    {
        match node.tag_name().name() {
            "t" => {
                if let Some(t) = node.text() {
                    text.push_str(t);
                }
            }
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            "p" => text.push_str("\n\n"),
            _ => {}
        }
    }
    Ok(text)
}

fn export_images<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    names: &[String],
    dir: &Path,
) -> Result<usize, ExtractError> {
    fs::create_dir_all(dir).map_err(|source| ExtractError::ImageDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut exported = 0;
    for name in names {
        let entry_path = Path::new(name);
        let is_image = entry_path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext));
        let Some(file_name) = entry_path.file_name().filter(|_| is_image) else {
            continue;
        };

        let mut bytes = Vec::new();
        archive.by_name(name)?.read_to_end(&mut bytes)?;
        fs::write(dir.join(file_name), &bytes).map_err(|source| ExtractError::Image {
            name: name.clone(),
            dir: dir.to_path_buf(),
            source,
        })?;
        exported += 1;
    }
    Ok(exported)
}
