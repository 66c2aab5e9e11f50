use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use launchlens_cli::{commands, CliEnv};
use launchlens_config::{
    API_BASE_URL_ENV, DATA_DIR_ENV, DEFAULT_API_BASE_URL, DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = API_BASE_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    base_url: String,
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<Utf8PathBuf>,
    #[arg(long, global = true, help = "Client-side request budget per minute")]
    rate_limit: Option<u32>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming launches
    Upcoming {
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_OFFSET)]
        offset: u32,
    },
    /// Search upcoming launches by keyword
    Search {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Show one launch in detail
    Show {
        id: String,
        #[arg(long, help = "Add or remove the launch from favorites")]
        toggle_favorite: bool,
    },
    /// Interactive search over stdin
    Browse {
        #[arg(short, long, default_value_t = DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Manage favorited launches
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },
}

#[derive(Subcommand)]
enum FavoritesCommands {
    List,
    Add { id: String },
    Remove { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env = CliEnv {
        base_url: cli.base_url,
        data_dir: cli.data_dir,
        requests_per_minute: cli.rate_limit,
    };

    match cli.command {
        Commands::Upcoming { limit, offset } => {
            commands::cmd_upcoming(&env, limit, offset).await?;
        }
        Commands::Search { query, limit } => {
            commands::cmd_search(&env, &query, limit).await?;
        }
        Commands::Show {
            id,
            toggle_favorite,
        } => {
            commands::cmd_show(&env, &id, toggle_favorite).await?;
        }
        Commands::Browse { limit } => commands::cmd_browse(&env, limit).await?,
        Commands::Favorites { command } => match command {
            FavoritesCommands::List => {
                commands::cmd_favorites_list(&env).await?;
            }
            FavoritesCommands::Add { id } => {
                commands::cmd_favorites_add(&env, &id).await?;
            }
            FavoritesCommands::Remove { id } => {
                commands::cmd_favorites_remove(&env, &id).await?;
            }
        },
    }

    Ok(())
}
