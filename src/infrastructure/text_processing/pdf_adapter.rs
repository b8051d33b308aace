use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<String, FileLoaderError> {
        let doc = PdfDocument::load_mem(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let mut text = String::new();

        // get_pages is keyed by page number, so iteration is in source order.
        for page_number in doc.get_pages().keys() {
            let page_text = doc.extract_text(&[*page_number]).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {page_number}: {e}"
                ))
            })?;

            text.push_str(page_text.strip_suffix('\n').unwrap_or(&page_text));
            text.push('\n');
        }

        Ok(text)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let bytes = data.to_vec();

        let text = tokio::task::spawn_blocking(move || Self::extract_pages(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
