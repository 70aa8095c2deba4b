//! Text extraction from uploaded documents.

use tracing::warn;

/// Uploaded document text is capped before prompting so a large PDF cannot
/// blow the model's context window.
const MAX_DOCUMENT_CHARS: usize = 6000;

/// Extracts analyzable text from an uploaded file.
///
/// PDFs are parsed in memory; plain text is read as (lossy) UTF-8; anything
/// else degrades to a one-line placeholder so the analysis endpoint still
/// responds instead of rejecting the upload.
pub fn extract_document_text(file_name: &str, content_type: &str, data: &[u8]) -> String {
    match content_type {
        "application/pdf" => match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => truncate_chars(&text, MAX_DOCUMENT_CHARS),
            Err(e) => {
                warn!("PDF text extraction failed for {file_name}: {e}");
                format!("Unable to extract text from PDF. ({e})")
            }
        },
        "text/plain" => truncate_chars(&String::from_utf8_lossy(data), MAX_DOCUMENT_CHARS),
        _ => format!("File uploaded: {file_name} ({content_type})"),
    }
}

/// Truncates to at most `max` characters, appending `...` when cut.
/// Counts characters, not bytes, so multi-byte text never splits mid-scalar.
fn truncate_chars(text: &str, max: usize) -> String {
    let mut result: String = text.chars().take(max).collect();
    if text.chars().count() > max {
        result.push_str("...");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let text = extract_document_text("notes.txt", "text/plain", b"hello career coach");
        assert_eq!(text, "hello career coach");
    }

    #[test]
    fn test_unknown_type_yields_placeholder() {
        let text = extract_document_text("photo.png", "image/png", &[0xFF, 0xD8]);
        assert_eq!(text, "File uploaded: photo.png (image/png)");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_rejected() {
        let text = extract_document_text("notes.txt", "text/plain", &[0x68, 0x69, 0xFF]);
        assert_eq!(text, "hi\u{FFFD}");
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("short", 6000), "short");
    }

    #[test]
    fn test_truncate_chars_appends_marker() {
        let long = "a".repeat(7000);
        let truncated = truncate_chars(&long, 6000);
        assert_eq!(truncated.len(), 6003);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_chars_counts_chars_not_bytes() {
        let text = "é".repeat(10);
        let truncated = truncate_chars(&text, 4);
        assert_eq!(truncated, "éééé...");
    }
}
