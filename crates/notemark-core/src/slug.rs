//! Filename sanitization
//!
//! Note titles are used verbatim inside exported documents but must be
//! made filesystem-safe before becoming output filenames: strip anything
//! outside ASCII letters/digits/whitespace/hyphen/underscore, collapse
//! whitespace runs into hyphens, lowercase, cap at 60 characters, and
//! fall back to "note" when nothing survives. The function is idempotent.

/// Maximum slug length
const MAX_LEN: usize = 60;

/// Fallback slug for titles that sanitize to nothing
const FALLBACK: &str = "note";

/// Sanitize a note title into a filesystem-safe slug
pub fn sanitize_title(title: &str) -> String {
    let filtered: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();

    let mut slug = filtered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    slug.truncate(MAX_LEN);
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK.to_string()
    } else {
        slug.to_string()
    }
}

/// Output filename for the markdown export
pub fn markdown_filename(title: &str) -> String {
    format!("{}.md", sanitize_title(title))
}

/// Output filename for the PDF export
pub fn pdf_filename(title: &str) -> String {
    format!("{}.pdf", sanitize_title(title))
}
