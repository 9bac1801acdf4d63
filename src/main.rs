use anyhow::Context;
use clap::{Parser, Subcommand};
use pokepaste_core::is_valid_name;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vgc_tracker::cache::JsonFileCache;
use vgc_tracker::config::Config;
use vgc_tracker::fetch::HttpFetcher;
use vgc_tracker::service::parse_paste_text;
use vgc_tracker::{load_battles, matchup_report, normalize, FetchOptions, PasteService};

#[derive(Parser)]
#[command(name = "vgc-tracker", version, about = "Pokepaste parsing and VGC matchup stats")]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and parse a pokepast.es / pokebin.com team
    Fetch {
        url: String,
        #[arg(long)]
        max_pokemon: Option<usize>,
        /// Skip cached results and refetch
        #[arg(long)]
        no_cache: bool,
    },
    /// Print the canonical species of a paste, one per line
    Names {
        url: String,
        #[arg(long)]
        max_pokemon: Option<usize>,
    },
    /// Normalize raw Pokemon names
    Normalize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Parse a local export file ("-" for stdin)
    Parse {
        path: PathBuf,
        #[arg(long)]
        max_pokemon: Option<usize>,
    },
    /// Matchup statistics from a battles JSON file
    Stats {
        battles: PathBuf,
        #[arg(long)]
        min_games: Option<u32>,
    },
    /// Drop all cached pastes
    ClearCache,
}

fn build_service(config: &Config) -> anyhow::Result<PasteService<HttpFetcher, JsonFileCache>> {
    let fetcher = HttpFetcher::new(&config.user_agent, config.request_timeout())?;
    let cache = JsonFileCache::open(config.cache_path()?);
    Ok(PasteService::new(fetcher, cache).with_ttl(config.cache_ttl()))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Fetch {
            url,
            max_pokemon,
            no_cache,
        } => {
            let service = build_service(&config)?;
            let options = FetchOptions {
                use_cache: !no_cache,
                max_pokemon: max_pokemon.unwrap_or(config.max_pokemon),
            };
            let paste = service.fetch_and_parse(&url, options)?;
            println!("{}", serde_json::to_string_pretty(&paste)?);
        }
        Command::Names { url, max_pokemon } => {
            let service = build_service(&config)?;
            let names = service.get_pokemon_names(&url, max_pokemon.unwrap_or(config.max_pokemon))?;
            for name in names {
                println!("{name}");
            }
        }
        Command::Normalize { names } => {
            for raw in names {
                println!("{raw}\t{}\t{}", normalize(&raw), is_valid_name(&raw));
            }
        }
        Command::Parse { path, max_pokemon } => {
            let text = read_input(&path)?;
            let (pokemon, metadata) =
                parse_paste_text(&text, max_pokemon.unwrap_or(config.max_pokemon));
            let out = serde_json::json!({ "pokemon": pokemon, "metadata": metadata });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Stats { battles, min_games } => {
            let battles = load_battles(&battles)?;
            let report = matchup_report(&battles, min_games.unwrap_or(config.min_matchup_games));
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::ClearCache => {
            let service = build_service(&config)?;
            service.clear_cache()?;
            println!("Cleared paste cache");
        }
    }
    Ok(())
}
