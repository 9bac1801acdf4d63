use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static POKEPASTE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?pokepast\.es/([a-z0-9]+)").expect("static regex")
});
static POKEBIN_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://(?:www\.)?pokebin\.com/([a-z0-9]+)").expect("static regex")
});

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasteSource {
    Pokepaste,
    Pokebin,
}

impl PasteSource {
    /// Recognises a supported paste URL and extracts its id.
    pub fn detect(url: &str) -> Option<(PasteSource, String)> {
        let url = url.trim();
        [
            (PasteSource::Pokepaste, &*POKEPASTE_URL),
            (PasteSource::Pokebin, &*POKEBIN_URL),
        ]
        .into_iter()
        .find_map(|(source, pattern)| {
            pattern
                .captures(url)
                .map(|caps| (source, caps[1].to_string()))
        })
    }

    pub fn host(self) -> &'static str {
        match self {
            PasteSource::Pokepaste => "pokepast.es",
            PasteSource::Pokebin => "pokebin.com",
        }
    }

    pub fn raw_url(self, paste_id: &str) -> String {
        format!("https://{}/{paste_id}/raw", self.host())
    }

    /// Only pokepast.es exposes title metadata.
    pub fn metadata_url(self, paste_id: &str) -> Option<String> {
        match self {
            PasteSource::Pokepaste => Some(format!("https://{}/{paste_id}/json", self.host())),
            PasteSource::Pokebin => None,
        }
    }
}

impl fmt::Display for PasteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host())
    }
}

pub fn is_supported_url(url: &str) -> bool {
    PasteSource::detect(url).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_both_hosts() {
        assert_eq!(
            PasteSource::detect("https://pokepast.es/5c46f9ec443664cb"),
            Some((PasteSource::Pokepaste, "5c46f9ec443664cb".to_string()))
        );
        assert_eq!(
            PasteSource::detect("HTTP://WWW.POKEBIN.COM/AbC123/"),
            Some((PasteSource::Pokebin, "AbC123".to_string()))
        );
    }

    #[test]
    fn rejects_other_urls() {
        assert!(PasteSource::detect("https://pastebin.com/abc").is_none());
        assert!(PasteSource::detect("pokepast.es/abc").is_none());
        assert!(PasteSource::detect("https://pokepast.es/").is_none());
        assert!(!is_supported_url(""));
    }

    #[test]
    fn endpoint_urls() {
        let source = PasteSource::Pokepaste;
        assert_eq!(source.raw_url("abc"), "https://pokepast.es/abc/raw");
        assert_eq!(source.metadata_url("abc").as_deref(), Some("https://pokepast.es/abc/json"));
        assert!(PasteSource::Pokebin.metadata_url("abc").is_none());
    }
}
