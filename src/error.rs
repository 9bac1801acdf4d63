use thiserror::Error;

/// Hard failures of a paste fetch. Per-block parse problems are not here;
/// they are reported in `PasteMetadata::errors`.
#[derive(Debug, Error)]
pub enum PasteError {
    #[error("Unsupported paste URL '{0}': expected a pokepast.es or pokebin.com link")]
    UnsupportedUrl(String),
    #[error("Failed to process paste: {0}")]
    Fetch(String),
    #[error("Failed to process paste: paste content is empty")]
    EmptyContent,
}

impl PasteError {
    pub(crate) fn fetch(err: anyhow::Error) -> Self {
        PasteError::Fetch(format!("{err:#}"))
    }
}
