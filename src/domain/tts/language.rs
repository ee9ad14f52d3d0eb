/// Language used when a caller does not name one
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Languages this integration declares to the host
pub const SUPPORTED_LANGUAGES: &[&str] = &["zh", "en", "ja"];

/// Map a requested language tag onto a supported one.
///
/// Matching ignores case and falls back to the primary subtag, so `zh-CN`
/// resolves to `zh`. Returns `None` for anything unsupported.
pub fn resolve_language(requested: Option<&str>) -> Option<&'static str> {
    let Some(requested) = requested.map(str::trim).filter(|l| !l.is_empty()) else {
        return Some(DEFAULT_LANGUAGE);
    };

    let normalized = requested.to_lowercase().replace('_', "-");
    let primary = normalized.split('-').next().unwrap_or_default();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == normalized)
        .or_else(|| SUPPORTED_LANGUAGES.iter().copied().find(|lang| *lang == primary))
}
