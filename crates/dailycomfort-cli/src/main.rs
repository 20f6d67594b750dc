//! Daily Comfort CLI
//!
//! Thin wrapper around dailycomfort-core for command-line usage. Uses the
//! same store and catalog as the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Show login state and today's record
//! dailycomfort status
//!
//! # Log in with the PIN
//! dailycomfort login 010523
//!
//! # Print today's message
//! dailycomfort today
//!
//! # Roll an extra message / a comfort message
//! dailycomfort extra
//! dailycomfort comfort
//!
//! # Check the message catalog
//! dailycomfort catalog
//!
//! # Log out, or forget everything
//! dailycomfort logout
//! dailycomfort reset
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use dailycomfort_core::storage::{LAST_MESSAGE_DATE_KEY, TODAY_MESSAGE_INDEX_KEY};
use dailycomfort_core::{
    load_catalog, session, AccessDecision, CatalogSource, Config, Environment, KeyValueStore,
    Location, LoginOutcome, PageController, Storage, Viewport,
};

/// Database file inside the data directory.
const DB_FILE: &str = "comfort.redb";

/// Daily Comfort - a little message for every day
#[derive(Parser)]
#[command(name = "dailycomfort")]
#[command(version = "0.1.0")]
#[command(about = "Daily Comfort - a little message for every day")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir /dailycomfort)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Message catalog JSON (default: data/messages.json)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show login state and today's message record
    Status,

    /// Log in with the PIN
    Login {
        /// The PIN
        pin: String,
    },

    /// Log out
    Logout,

    /// Print today's message
    Today,

    /// Print an extra message
    Extra,

    /// Print a comfort message
    Comfort,

    /// Load the message catalog and report what was found
    Catalog,

    /// Remove every stored value
    Reset,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default data directory (<data dir>/dailycomfort)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dailycomfort")
}

/// Open the home page, failing when not logged in.
async fn open_home(page: &mut PageController) -> Result<()> {
    if page.load(Location::Home)? == AccessDecision::RedirectToLogin {
        bail!("Not logged in. Run `dailycomfort login <PIN>` first.");
    }
    let load = load_catalog(&page.config().catalog_path).await;
    page.install_catalog(load)?;
    Ok(())
}

/// Let every pending fade and loading state finish, stopping before the
/// session timer.
fn settle(page: &mut PageController) -> Result<()> {
    let config = page.config().clone();
    let budget = config.generate_delay() + config.message_swap() + config.modal_close();
    page.advance(budget)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let mut config = Config::load_or_default(&data_dir)?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }

    tracing::debug!("Using data directory {:?}", data_dir);
    let store = Arc::new(Storage::new(data_dir.join(DB_FILE))?);
    let mut page = PageController::new(Environment::system(store.clone()), config.clone());

    match cli.command {
        Commands::Status => {
            let authenticated = session::is_authenticated(store.as_ref())?;
            let last_date = store.get(LAST_MESSAGE_DATE_KEY)?;
            let index = store.get(TODAY_MESSAGE_INDEX_KEY)?;

            println!("Daily Comfort v0.1.0");
            println!();
            println!("Data directory: {}", data_dir.display());
            println!(
                "Logged in: {}",
                if authenticated { "yes" } else { "no" }
            );
            println!(
                "Last message date: {}",
                last_date.as_deref().unwrap_or("(none)")
            );
            println!("Message index: {}", index.as_deref().unwrap_or("(none)"));
        }

        Commands::Login { pin } => {
            if page.load(Location::Login)? == AccessDecision::RedirectToHome {
                println!("Already logged in.");
                return Ok(());
            }

            page.pin_input(&pin);
            match page.submit_pin()? {
                LoginOutcome::Accepted => println!("Welcome 💚"),
                LoginOutcome::Rejected => bail!("Wrong PIN. Try again."),
            }
        }

        Commands::Logout => {
            page.logout()?;
            println!("Logged out.");
        }

        Commands::Today => {
            open_home(&mut page).await?;
            settle(&mut page)?;
            println!("{}", page.message().text());
        }

        Commands::Extra => {
            open_home(&mut page).await?;
            page.generate_extra()?;
            settle(&mut page)?;
            println!("{}", page.message().text());
        }

        Commands::Comfort => {
            open_home(&mut page).await?;
            page.open_comfort(Viewport {
                inner_width: 0.0,
                client_width: 0.0,
            })?;
            println!("{}", page.comfort().message());
        }

        Commands::Catalog => {
            let load = load_catalog(&config.catalog_path).await;
            match &load.source {
                CatalogSource::Loaded => {
                    println!("Catalog: {}", config.catalog_path.display())
                }
                CatalogSource::Fallback(reason) => {
                    println!("Catalog: built-in fallback ({})", reason)
                }
            }
            println!("  daily:   {}", load.catalog.daily.len());
            println!("  extra:   {}", load.catalog.extra.len());
            println!("  comfort: {}", load.catalog.comfort.len());
        }

        Commands::Reset => {
            store.clear()?;
            println!("All stored data removed.");
        }
    }

    Ok(())
}
