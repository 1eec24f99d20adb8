use crate::error::GranskaError;
use crate::extraction::ContentProvider;
use crate::model::{BBox, ExtractionSnapshot, ImageSpan, PageSnapshot, WordSpan};
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF content extraction backend built on poppler-utils.
///
/// Three tools cover the snapshot: `pdfinfo` for document metadata,
/// `pdftotext -bbox` for word boxes, `pdfimages -list` for embedded image
/// dimensions. With OCR enabled, images are additionally dumped via
/// `pdfimages -png` and fed to `tesseract`.
///
/// Poppler reports no font names, so word font sizes are taken from the
/// word box height, and no image placement, so image boxes are zeroed.
pub struct PopplerProvider {
    use_ocr: bool,
}

impl PopplerProvider {
    pub fn new() -> Self {
        PopplerProvider { use_ocr: false }
    }

    pub fn with_ocr(use_ocr: bool) -> Self {
        PopplerProvider { use_ocr }
    }

    /// Check if the poppler tools are available on the system.
    pub fn is_available() -> bool {
        ["pdfinfo", "pdftotext", "pdfimages"]
            .iter()
            .all(|&tool| probe(tool))
    }

    /// Check if tesseract is available for OCR.
    pub fn ocr_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl Default for PopplerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider for PopplerProvider {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractionSnapshot, GranskaError> {
        if self.use_ocr && !Self::ocr_available() {
            return Err(GranskaError::TesseractNotFound);
        }

        // Stage the bytes in a temp file; every poppler tool wants a path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| GranskaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| GranskaError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let info_out = run_tool("pdfinfo", |c| {
            c.arg(&tmp_path);
        })?;
        let info = parse_pdfinfo(&info_out);

        let bbox_out = run_tool("pdftotext", |c| {
            c.arg("-bbox").arg(&tmp_path).arg("-");
        })?;
        let bbox_pages = parse_bbox_xml(&bbox_out);

        let list_out = run_tool("pdfimages", |c| {
            c.arg("-list").arg(&tmp_path);
        })?;
        let mut listed = parse_image_list(&list_out);

        if self.use_ocr && !listed.is_empty() {
            attach_ocr_text(&tmp_path, &mut listed)?;
        }

        // Assemble pages from the word extraction, padded out to the page
        // count pdfinfo reports, then slot images in by page number.
        let mut pages: Vec<PageSnapshot> = bbox_pages
            .into_iter()
            .enumerate()
            .map(|(i, p)| PageSnapshot {
                page_number: i + 1,
                width: p.width,
                height: p.height,
                words: p.words,
                images: Vec::new(),
            })
            .collect();
        while pages.len() < info.pages {
            pages.push(PageSnapshot {
                page_number: pages.len() + 1,
                width: 0.0,
                height: 0.0,
                words: Vec::new(),
                images: Vec::new(),
            });
        }

        for img in listed {
            let Some(page) = pages.get_mut(img.page.saturating_sub(1)) else {
                continue;
            };
            let name = format!("page{}_img{}", img.page, page.images.len());
            page.images.push(ImageSpan {
                name,
                bbox: BBox::default(),
                width: img.width,
                height: img.height,
                ocr_text: img.ocr_text,
            });
        }

        let num_pages = if info.pages > 0 { info.pages } else { pages.len() };

        Ok(ExtractionSnapshot {
            source: String::new(),
            title: info.title,
            author: info.author,
            subject: info.subject,
            creator: info.creator,
            producer: info.producer,
            num_pages,
            pages,
        })
    }

    fn backend_name(&self) -> &str {
        "poppler"
    }
}

fn probe(tool: &str) -> bool {
    Command::new(tool)
        .arg("-v")
        .output()
        .map(|o| o.status.success() || !o.stderr.is_empty())
        .unwrap_or(false)
}

fn run_tool(
    tool: &'static str,
    configure: impl FnOnce(&mut Command),
) -> Result<String, GranskaError> {
    let mut command = Command::new(tool);
    configure(&mut command);
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GranskaError::PopplerNotFound { tool }
        } else {
            GranskaError::Extraction(format!("{tool} failed: {e}"))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(GranskaError::ToolFailed {
            tool,
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[derive(Debug, Default)]
struct DocInfo {
    title: String,
    author: String,
    subject: String,
    creator: String,
    producer: String,
    pages: usize,
}

fn parse_pdfinfo(text: &str) -> DocInfo {
    let mut info = DocInfo::default();

    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Title" => info.title = value.to_string(),
            "Author" => info.author = value.to_string(),
            "Subject" => info.subject = value.to_string(),
            "Creator" => info.creator = value.to_string(),
            "Producer" => info.producer = value.to_string(),
            "Pages" => info.pages = value.parse().unwrap_or(0),
            _ => {}
        }
    }

    info
}

#[derive(Debug)]
struct BBoxPage {
    width: f32,
    height: f32,
    words: Vec<WordSpan>,
}

/// Parse `pdftotext -bbox` output. Pages carry no number attribute in this
/// mode; they are numbered by order of appearance.
fn parse_bbox_xml(xml: &str) -> Vec<BBoxPage> {
    let mut pages: Vec<BBoxPage> = Vec::new();

    for raw in xml.lines() {
        let line = raw.trim();

        if line.starts_with("<page ") {
            pages.push(BBoxPage {
                width: parse_attr_f32(line, "width").unwrap_or(0.0),
                height: parse_attr_f32(line, "height").unwrap_or(0.0),
                words: Vec::new(),
            });
            continue;
        }

        if line.starts_with("<word ") {
            let Some(page) = pages.last_mut() else {
                continue;
            };
            let Some(bbox) = parse_word_bbox(line) else {
                continue;
            };
            let Some(raw_text) = parse_word_text(line) else {
                continue;
            };
            let text = decode_xml_entities(&raw_text);
            if text.trim().is_empty() {
                continue;
            }
            let font_size = bbox.height();
            page.words.push(WordSpan {
                text,
                bbox,
                font_name: String::new(),
                font_size,
            });
        }
    }

    pages
}

#[derive(Debug)]
struct ListedImage {
    page: usize,
    width: u32,
    height: u32,
    /// Global image number, as used in `pdfimages -png -p` file names.
    num: usize,
    ocr_text: Option<String>,
}

/// Parse `pdfimages -list` output: two header lines, then one row per
/// object. Only `image` rows count; masks and smasks are rendering detail.
fn parse_image_list(text: &str) -> Vec<ListedImage> {
    let mut images = Vec::new();

    for line in text.lines().skip(2) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 || fields[2] != "image" {
            continue;
        }
        let (Ok(page), Ok(num), Ok(width), Ok(height)) = (
            fields[0].parse::<usize>(),
            fields[1].parse::<usize>(),
            fields[3].parse::<u32>(),
            fields[4].parse::<u32>(),
        ) else {
            continue;
        };
        images.push(ListedImage {
            page,
            width,
            height,
            num,
            ocr_text: None,
        });
    }

    images
}

/// Dump images as PNG and run tesseract over each one.
///
/// `pdfimages -png -p` names files `<root>-<page>-<num>.png` with both
/// numbers zero-padded to three digits, matching the -list numbering.
/// Per-image OCR failures leave the text as None.
fn attach_ocr_text(pdf_path: &Path, images: &mut [ListedImage]) -> Result<(), GranskaError> {
    let dir = tempfile::tempdir().map_err(|e| GranskaError::Extraction(e.to_string()))?;
    let root = dir.path().join("img");

    run_tool("pdfimages", |c| {
        c.arg("-png").arg("-p").arg(pdf_path).arg(&root);
    })?;

    for img in images.iter_mut() {
        let png = dir
            .path()
            .join(format!("img-{:03}-{:03}.png", img.page, img.num));
        if !png.exists() {
            continue;
        }

        let output = Command::new("tesseract").arg(&png).arg("stdout").output();
        if let Ok(o) = output {
            if o.status.success() {
                let text = String::from_utf8_lossy(&o.stdout).trim().to_string();
                if !text.is_empty() {
                    img.ocr_text = Some(text);
                }
            }
        }
    }

    Ok(())
}

fn parse_attr_f32(tag: &str, name: &str) -> Option<f32> {
    parse_attr(tag, name)?.parse().ok()
}

fn parse_attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let rest = &tag[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

fn parse_word_bbox(word_tag: &str) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f32(word_tag, "xMin")?,
        y_min: parse_attr_f32(word_tag, "yMin")?,
        x_max: parse_attr_f32(word_tag, "xMax")?,
        y_max: parse_attr_f32(word_tag, "yMax")?,
    })
}

fn parse_word_text(word_tag: &str) -> Option<String> {
    let start = word_tag.find('>')? + 1;
    let end = word_tag.rfind("</word>")?;
    Some(word_tag[start..end].to_string())
}

fn decode_xml_entities(s: &str) -> String {
    s.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
}
