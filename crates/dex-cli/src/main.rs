use clap::{Parser, Subcommand};
use dex_core::{DexConfig, SpeciesId};

mod commands;
mod logging;

use commands::Dex;
use logging::init_logging;

#[derive(Parser)]
#[command(name = "dex")]
#[command(about = "Browse species, evolution chains and favorites")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    /// API base url (overrides config files)
    #[arg(long)]
    api_base: Option<String>,

    /// Directory holding the favorites file
    #[arg(long)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List species, optionally filtered by name
    List {
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, default_value = "1500")]
        limit: u32,
    },
    /// Show one species and whether it is a favorite
    Show { id: SpeciesId },
    /// Show the evolution chain around a species
    Evolution { name: String, id: SpeciesId },
    /// Replace a favorite with one of its next evolutions
    Evolve {
        name: String,
        id: SpeciesId,
        /// Id of the evolution to become
        target: SpeciesId,
    },
    /// Mark or unmark a species as favorite
    Favorite {
        id: SpeciesId,
        #[arg(long)]
        remove: bool,
    },
    /// List favorites, optionally filtered by name
    Favorites {
        #[arg(long, short)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = DexConfig::load();
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    log::debug!("Using API {} and data dir {:?}", config.api_base(), config.data_dir());

    let dex = Dex::from_config(&config)?;

    match cli.command {
        Commands::List { search, limit } => dex.list(search.as_deref(), limit).await,
        Commands::Show { id } => dex.show(id).await,
        Commands::Evolution { name, id } => dex.evolution(&name, id).await,
        Commands::Evolve { name, id, target } => dex.evolve(&name, id, target).await,
        Commands::Favorite { id, remove } => dex.favorite(id, !remove).await,
        Commands::Favorites { search } => dex.favorites(search.as_deref()).await,
    }
}
