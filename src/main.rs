use clap::Parser;
use pokeview::core::config::{self, CliOverrides, LoadedConfig, PokeviewConfig};
use pokeview::core::state::Route;
use pokeview::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

fn parse_route(path: &str) -> Result<Route, String> {
    Route::parse(path).ok_or_else(|| format!("unknown route {path:?} (expected / or /pokemon/<id>)"))
}

#[derive(Parser)]
#[command(name = "pokeview", about = "Terminal browser for the PokeAPI catalog")]
struct Args {
    /// Route to open: `/` for the list or `/pokemon/<id>` for one entry
    #[arg(default_value = "/", value_parser = parse_route)]
    route: Route,

    /// API base URL (overrides config file and POKEVIEW_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config is read before the logger exists; its notes are written out below
    let (loaded, config_error) = match config::load_config() {
        Ok(loaded) => (loaded, None),
        Err(e) => (
            LoadedConfig {
                config: PokeviewConfig::default(),
                notes: Vec::new(),
            },
            Some(e),
        ),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        log_level: args.log_level,
    };
    let resolved = config::resolve(&loaded.config, &cli);

    // Initialize file logger - writes to pokeview.log unless configured otherwise
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Falling back to default config: {}", e);
    }
    for note in loaded.notes.iter().chain(&resolved.notes) {
        log::log!(note.level, "{}", note.message);
    }
    log::info!(
        "pokeview starting up at {} (base_url={}, timeout={:?})",
        args.route.path(),
        resolved.base_url,
        resolved.timeout
    );

    tui::run(resolved, args.route)
}
