//! Free-text normalization.

use crate::context::TransformContext;
use crate::normalized::Normalized;

/// Trim, then truncate to `max_chars`. Empty input takes the field's
/// documented placeholder and is flagged defaulted.
pub fn normalize_text(raw: &str, max_chars: usize, placeholder: &str) -> Normalized<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Normalized::defaulted(placeholder.to_string());
    }
    Normalized::matched(truncate_chars(trimmed, max_chars))
}

/// Char-boundary-safe truncation.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Synthetic identifier for a row that arrived without a `desensitizedUid`.
///
/// Deterministic within a batch: derived from the batch time and the row's
/// line number, so re-running the same transform yields the same id.
pub fn generated_uid(ctx: &TransformContext) -> String {
    format!(
        "uid-{}-{:06}",
        ctx.batch_time.format("%Y%m%d%H%M%S"),
        ctx.line
    )
}
