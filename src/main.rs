use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use tmpl_kit::preview::{self, PreviewRequest};
use tmpl_kit::utils::{dump, format_smart, DateFormat, Pager};
use tmpl_kit::Config;

#[derive(Debug, Parser)]
#[command(name = "tmpl-kit", about = "Preview template pager and date helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the info line and navigation markup for a page
    Pager {
        #[arg(long)]
        total: i64,
        #[arg(long, default_value_t = 1)]
        page: i64,
        /// Overrides PAGER_LIMIT
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Print a date relative to now
    Since {
        date: String,
        /// Overrides DATE_FORMAT
        #[arg(long)]
        format: Option<String>,
    },
    /// Pretty-print a JSON document
    Dump { json: String },
    /// Print an HTML page combining the pager and dates
    Preview {
        #[arg(long)]
        total: i64,
        #[arg(long, default_value_t = 1)]
        page: i64,
        dates: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    log::info!("Configuration loaded successfully");
    log::debug!("{config:?}");

    match cli.command {
        Command::Pager { total, page, limit } => {
            if let Some(limit) = limit {
                anyhow::ensure!(limit > 0, "--limit must be positive, got {limit}");
                config.pager.limit = limit;
            }
            let mut pager = Pager::new(config.pager, total);
            pager.set_current_page(page);
            println!("{}", pager.render_info_string());
            println!("{}", pager.render_navigation_default().into_string());
        }
        Command::Since { date, format } => {
            let format = match format {
                Some(pattern) => DateFormat::new(&pattern)
                    .with_context(|| format!("Invalid date format {pattern:?}"))?,
                None => config.date_format,
            };
            println!("{}", format_smart(&date, Local::now().naive_local(), &format));
        }
        Command::Dump { json } => {
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse JSON input")?;
            println!("{}", dump(&value));
        }
        Command::Preview { total, page, dates } => {
            let request = PreviewRequest { total, page, dates };
            let page = preview::render_page(&config, &request, Local::now().naive_local());
            println!("{}", page.into_string());
        }
    }

    Ok(())
}
