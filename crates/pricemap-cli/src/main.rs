mod commands;
mod render;

use std::io::IsTerminal;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pricemap_core::{parse_price, Session, SortOrder, ViewMode};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::render::Palette;

#[derive(Debug, Parser)]
#[command(name = "pricemap")]
#[command(about = "Browse store milk prices: filter, sort and inspect the price feed")]
struct Cli {
    /// Feed URL to load instead of the configured one
    #[arg(long, global = true)]
    feed_url: Option<String>,
    /// Disable colored price swatches
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show stores matching the filters as a grid or list
    List(ListArgs),
    /// Show the detail panel for one store
    Show {
        /// Store ID as published in the feed
        store_id: String,
    },
    /// List the states available to the state filter
    States,
    /// Show the dataset price range and its color scale
    Legend,
}

#[derive(Debug, Default, Args)]
struct ListArgs {
    /// Case-insensitive text matched against store name and city
    #[arg(long)]
    search: Option<String>,
    /// Lowest price to include (e.g. 2.50 or $2.50)
    #[arg(long, value_parser = price_arg)]
    min_price: Option<Decimal>,
    /// Highest price to include
    #[arg(long, value_parser = price_arg)]
    max_price: Option<Decimal>,
    /// Exact state name (e.g. Minnesota)
    #[arg(long)]
    state: Option<String>,
    /// Sort by price
    #[arg(long, value_enum, default_value_t = SortArg::None)]
    sort: SortArg,
    /// Layout of the results
    #[arg(long, value_enum, default_value_t = ViewArg::Grid)]
    view: ViewArg,
    /// Store ID to highlight and show in the detail panel
    #[arg(long)]
    select: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum SortArg {
    #[default]
    None,
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortOrder::Unsorted,
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    #[default]
    Grid,
    List,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Grid => ViewMode::Grid,
            ViewArg::List => ViewMode::List,
        }
    }
}

fn price_arg(raw: &str) -> Result<Decimal, String> {
    parse_price(raw).ok_or_else(|| format!("\"{raw}\" is not a non-negative price"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = pricemap_core::load_app_config_with_feed_url(cli.feed_url.as_deref())?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let feed_url = config.feed_url.as_str();
    tracing::debug!(env = %config.env, %feed_url, "starting pricemap");

    let mut session = Session::new();
    if std::io::stderr().is_terminal() {
        eprintln!("Loading store data...");
    }
    session.apply_load(pricemap_feed::load_feed(feed_url, &config.user_agent).await);
    if let Some(message) = session.load_state().error_message() {
        anyhow::bail!("Error loading data: {message}");
    }

    let palette = Palette {
        enabled: !cli.no_color && std::io::stdout().is_terminal(),
    };
    let output = match cli.command {
        Some(Commands::List(args)) => {
            commands::list(&mut session, &args, &config.map_search_base, palette)?
        }
        None => commands::list(
            &mut session,
            &ListArgs::default(),
            &config.map_search_base,
            palette,
        )?,
        Some(Commands::Show { store_id }) => {
            commands::show(&mut session, &store_id, &config.map_search_base, palette)?
        }
        Some(Commands::States) => commands::states(&session),
        Some(Commands::Legend) => commands::legend(&session, palette),
    };
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests;
