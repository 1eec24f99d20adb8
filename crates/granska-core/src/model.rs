use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in the document's native coordinate space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl BBox {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        BBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }
}

/// A single word on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSpan {
    pub text: String,
    pub bbox: BBox,
    /// Font name as reported by the provider. Empty when unknown.
    #[serde(default)]
    pub font_name: String,
    /// Font size in document units. 0 means unknown. The poppler backend
    /// reports the word box height here, which is what text libraries
    /// without font metrics fall back to.
    #[serde(default)]
    pub font_size: f32,
}

/// An embedded image on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSpan {
    /// Stable identifier within the document, e.g. "page3_img1".
    pub name: String,
    /// Placement on the page. All zeros when the provider cannot report it.
    pub bbox: BBox,
    /// Pixel width of the embedded image.
    pub width: u32,
    /// Pixel height of the embedded image.
    pub height: u32,
    /// Text recovered from the image by OCR. None means no OCR was
    /// performed or nothing was found.
    #[serde(default)]
    pub ocr_text: Option<String>,
}

/// Content extracted from a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// 1-based page number.
    pub page_number: usize,
    pub width: f32,
    pub height: f32,
    pub words: Vec<WordSpan>,
    pub images: Vec<ImageSpan>,
}

impl PageSnapshot {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// Everything a content provider extracted from one document.
///
/// Produced once, then treated as immutable input by the analyzer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionSnapshot {
    /// Origin of the document (file path), empty when extracted from bytes.
    #[serde(default)]
    pub source: String,
    /// Document metadata. Empty strings mean the field is absent.
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub producer: String,
    pub num_pages: usize,
    pub pages: Vec<PageSnapshot>,
}

impl ExtractionSnapshot {
    pub fn total_words(&self) -> usize {
        self.pages.iter().map(|p| p.words.len()).sum()
    }

    pub fn total_images(&self) -> usize {
        self.pages.iter().map(|p| p.images.len()).sum()
    }
}
