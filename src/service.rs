//! Fetch, parse and cache pastes from the supported hosts.

use crate::cache::CacheStore;
use crate::error::PasteError;
use crate::fetch::PasteFetcher;
use crate::source::PasteSource;
use pokepaste_core::{is_valid_name, parse_block, split_text, ParsedPokemon};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_MAX_POKEMON: usize = 6;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum PasteFormat {
    #[serde(rename = "VGC")]
    Vgc,
    #[serde(rename = "OU")]
    Ou,
    #[serde(rename = "Ubers")]
    Ubers,
    #[default]
    #[serde(rename = "Unknown")]
    Unknown,
}

impl PasteFormat {
    /// Keyword scan over the paste text. Informational only.
    pub fn detect(raw_text: &str) -> Self {
        let lowered = raw_text.to_lowercase();
        if ["vgc", "2025", "battle stadium"]
            .iter()
            .any(|needle| lowered.contains(needle))
        {
            PasteFormat::Vgc
        } else if lowered.contains("uber") {
            PasteFormat::Ubers
        } else if lowered.contains("ou") {
            PasteFormat::Ou
        } else {
            PasteFormat::Unknown
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteMetadata {
    pub total_blocks: usize,
    pub parsed_count: usize,
    pub has_nicknames: bool,
    pub has_items: bool,
    pub has_moves: bool,
    pub has_abilities: bool,
    pub has_evs: bool,
    pub has_ivs: bool,
    pub has_natures: bool,
    pub format: PasteFormat,
    pub errors: Vec<String>,
}

impl PasteMetadata {
    fn record(&mut self, pokemon: &ParsedPokemon) {
        self.parsed_count += 1;
        self.has_nicknames |= pokemon.has_nickname();
        self.has_items |= pokemon.has_item();
        self.has_moves |= pokemon.has_moves();
        self.has_abilities |= pokemon.has_ability();
        self.has_evs |= pokemon.has_evs();
        self.has_ivs |= pokemon.has_ivs();
        self.has_natures |= pokemon.has_nature();
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPaste {
    pub url: String,
    pub paste_id: String,
    pub raw_text: String,
    /// Always serialized, even when `None`: cached entries without a
    /// `title` key predate it and are refetched.
    pub title: Option<String>,
    pub pokemon: Vec<ParsedPokemon>,
    pub metadata: PasteMetadata,
}

impl ParsedPaste {
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon.iter().map(|p| p.name.clone()).collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    /// Read from the cache. Successful fetches are written back either way.
    pub use_cache: bool,
    pub max_pokemon: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            max_pokemon: DEFAULT_MAX_POKEMON,
        }
    }
}

/// Milliseconds since the Unix epoch.
pub type Clock = Box<dyn Fn() -> u64>;

pub fn system_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct PasteService<F, C> {
    fetcher: F,
    cache: C,
    ttl: Duration,
    clock: Clock,
}

impl<F: PasteFetcher, C: CacheStore> PasteService<F, C> {
    pub fn new(fetcher: F, cache: C) -> Self {
        Self {
            fetcher,
            cache,
            ttl: CACHE_TTL,
            clock: Box::new(system_clock),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> u64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn fetch_and_parse(&self, url: &str, options: FetchOptions) -> Result<ParsedPaste, PasteError> {
        let (source, paste_id) =
            PasteSource::detect(url).ok_or_else(|| PasteError::UnsupportedUrl(url.to_string()))?;

        if options.use_cache {
            if let Some(cached) = self.cached(url, options.max_pokemon) {
                debug!(url, "paste cache hit");
                return Ok(cached);
            }
            debug!(url, "paste cache miss");
        }

        let raw_text = self
            .fetcher
            .fetch_text(&source.raw_url(&paste_id))
            .map_err(PasteError::fetch)?;
        if raw_text.trim().is_empty() {
            return Err(PasteError::EmptyContent);
        }
        let title = self.fetch_title(source, &paste_id);

        let (pokemon, metadata) = parse_paste_text(&raw_text, options.max_pokemon);

        let paste = ParsedPaste {
            url: url.to_string(),
            paste_id,
            raw_text,
            title,
            pokemon,
            metadata,
        };
        info!(url, source = %source, pokemon = paste.pokemon.len(), "parsed paste");
        self.store(url, &paste, options.max_pokemon);
        Ok(paste)
    }

    pub fn get_pokemon_names(&self, url: &str, max_pokemon: usize) -> Result<Vec<String>, PasteError> {
        let options = FetchOptions {
            max_pokemon,
            ..FetchOptions::default()
        };
        Ok(self.fetch_and_parse(url, options)?.pokemon_names())
    }

    pub fn clear_cache(&self) -> anyhow::Result<()> {
        self.cache.clear()
    }

    fn fetch_title(&self, source: PasteSource, paste_id: &str) -> Option<String> {
        let metadata_url = source.metadata_url(paste_id)?;
        match self.fetcher.fetch_json(&metadata_url) {
            Ok(value) => value
                .get("title")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|title| !title.is_empty())
                .map(str::to_string),
            Err(err) => {
                warn!(url = %metadata_url, "paste title unavailable: {err:#}");
                None
            }
        }
    }

    /// A hit must have parsed at least `max_pokemon` blocks, unless the paste
    /// had no more blocks than that; the result is cut to `max_pokemon`.
    fn cached(&self, url: &str, max_pokemon: usize) -> Option<ParsedPaste> {
        let entry = self.cache.get(url)?;
        let timestamp = entry.get("timestamp").and_then(Value::as_u64)?;
        let age = (self.clock)().saturating_sub(timestamp);
        if u128::from(age) >= self.ttl.as_millis() {
            debug!(url, age_ms = age, "paste cache entry expired");
            return None;
        }
        let data = entry.get("data")?;
        if data.get("title").is_none() {
            debug!(url, "paste cache entry predates titles");
            return None;
        }
        let parsed_limit = entry
            .get("maxPokemon")
            .and_then(Value::as_u64)
            .map_or(0, |limit| limit as usize);
        match serde_json::from_value::<ParsedPaste>(data.clone()) {
            Ok(paste) if max_pokemon > parsed_limit && paste.metadata.total_blocks > parsed_limit => {
                debug!(url, parsed_limit, max_pokemon, "paste cache entry parsed too few blocks");
                None
            }
            Ok(mut paste) => {
                paste.pokemon.truncate(max_pokemon);
                Some(paste)
            }
            Err(err) => {
                debug!(url, %err, "paste cache entry unreadable");
                None
            }
        }
    }

    fn store(&self, url: &str, paste: &ParsedPaste, max_pokemon: usize) {
        let entry = json!({
            "timestamp": (self.clock)(),
            "maxPokemon": max_pokemon,
            "data": paste,
        });
        if let Err(err) = self.cache.set(url, entry) {
            warn!(url, "failed to cache paste: {err:#}");
        }
    }
}

/// Tokenizes `raw_text`, parses at most `max_pokemon` blocks and keeps the
/// records with a valid species.
pub fn parse_paste_text(raw_text: &str, max_pokemon: usize) -> (Vec<ParsedPokemon>, PasteMetadata) {
    let blocks = split_text(raw_text);
    let mut metadata = PasteMetadata {
        total_blocks: blocks.len(),
        format: PasteFormat::detect(raw_text),
        ..PasteMetadata::default()
    };
    let mut pokemon = Vec::new();

    for (idx, block) in blocks.iter().take(max_pokemon).enumerate() {
        match parse_block(block) {
            Ok(Some(parsed)) if is_valid_name(&parsed.name) => {
                metadata.record(&parsed);
                pokemon.push(parsed);
            }
            Ok(Some(parsed)) => debug!(block = idx + 1, name = %parsed.name, "dropping invalid species"),
            Ok(None) => {}
            Err(err) => {
                warn!(block = idx + 1, "skipping unparseable block: {err}");
                metadata.errors.push(format!("block {}: {err}", idx + 1));
            }
        }
    }
    pokemon.truncate(max_pokemon);
    (pokemon, metadata)
}
