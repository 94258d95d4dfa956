use crate::layout::{PackingResult, PageSpec};
use crate::pack::generate_pdf;
use crate::source::PreparedImage;
use crate::types::*;
use lopdf::Document;

/// Generate a preview of the packed document
/// Returns a document holding at most `max_pages` pages
pub async fn generate_preview(
    images: &[PreparedImage],
    result: &PackingResult,
    spec: &PageSpec,
    max_pages: usize,
) -> Result<Document> {
    if max_pages == 0 {
        return Err(PackError::Config(
            "Preview needs at least one page".to_string(),
        ));
    }

    let preview = limit_pages(result, max_pages);
    generate_pdf(images, &preview, spec).await
}

fn limit_pages(result: &PackingResult, max_pages: usize) -> PackingResult {
    let page_count = result.page_count.min(max_pages);
    let items = result
        .items
        .iter()
        .filter(|item| item.page_index < page_count)
        .cloned()
        .collect();

    PackingResult { items, page_count }
}
