use clap::{Parser, Subcommand, ValueEnum};
use shelf_core::config::{DEFAULT_API_URL, DEFAULT_MAX_RESULTS, DEFAULT_START_INDEX};
use shelf_core::{
    CatalogClient, CatalogConfig, PageDirection, SearchController, format_detail_card, format_row,
    pagination_for, result_count_label,
};

#[derive(Parser)]
#[command(name = "shelf-cli")]
#[command(about = "Search the book catalog and page through the results")]
struct Cli {
    /// Base URL of the catalog server
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Server-side start offset sent with the search
    #[arg(long, global = true, default_value_t = DEFAULT_START_INDEX)]
    start_index: u32,
    /// Maximum number of records requested
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for books and print the visible page
    Search {
        /// Text to search for
        text: String,
        /// Rows per page to switch to after the search (5, 10, 20 or 30)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<usize>,
        /// Page steps to apply in order, e.g. --step next --step previous
        #[arg(long = "step", value_enum)]
        steps: Vec<Step>,
        /// Print the detail card under each row
        #[arg(long)]
        details: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Step {
    Next,
    Previous,
}

impl From<Step> for PageDirection {
    fn from(step: Step) -> Self {
        match step {
            Step::Next => PageDirection::Next,
            Step::Previous => PageDirection::Previous,
        }
    }
}

fn parse_page_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if shelf_core::PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "page size must be one of {:?}",
            shelf_core::PAGE_SIZE_OPTIONS
        ))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CatalogConfig::new(cli.api_url)
        .with_start_index(cli.start_index)
        .with_max_results(cli.max_results);
    let mut controller = SearchController::with_pagination(pagination_for(&config));
    let client = CatalogClient::new(config)?;

    match cli.command {
        Commands::Search {
            text,
            page_size,
            steps,
            details,
        } => {
            println!("Searching for '{}'...", text);
            // Failures are only logged; the empty result set is printed as is
            controller.search(&client, &text).await;

            if let Some(size) = page_size {
                controller.page_size_change(size);
            }
            for step in steps {
                if !controller.step_page(step.into()) {
                    log::warn!("Skipping {:?} step: not available on this page", step);
                }
            }

            println!("{}", result_count_label(controller.result_count()));
            if controller.result_count() == 0 {
                return Ok(());
            }

            let window = controller.pagination().window();
            for (position, record) in (window.start..).zip(controller.visible()) {
                println!("{}", format_row(position, record));
                if details {
                    for line in format_detail_card(record).lines() {
                        println!("       {}", line);
                    }
                }
            }
            println!(
                "Rows per page: {}   {}",
                controller.pagination_state().page_size,
                controller.pagination().displayed_rows_label()
            );
        }
    }

    Ok(())
}
