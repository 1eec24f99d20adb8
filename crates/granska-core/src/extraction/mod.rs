pub mod poppler;

use crate::error::GranskaError;
use crate::model::ExtractionSnapshot;

/// Trait for PDF content extraction backends.
///
/// The analyzer never touches PDF bytes itself; everything it sees comes
/// through this seam as a fully populated snapshot.
pub trait ContentProvider: Send + Sync {
    /// Extract metadata, words and images from PDF bytes.
    fn extract(&self, pdf_bytes: &[u8]) -> Result<ExtractionSnapshot, GranskaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
