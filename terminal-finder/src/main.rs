use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use terminal_finder::catalog::{CatalogError, SelectError, TerminalCatalog};
use terminal_finder::finder::{DEFAULT_RADIUS_KM, FindOutcome, Finder, SearchConfig};
use terminal_finder::geocode::{GeocodeClient, GeocodeConfig, GeocodeError, enrich_catalog};
use terminal_finder::listing::{
    DEFAULT_BASE_URL, ListingClient, ListingConfig, ListingError, attach_timetables,
};
use terminal_finder::report::{render_candidates, render_json, render_outcome};
use terminal_finder::routes::{
    CacheConfig, CachedConnectivity, ConnectivityProvider, RouteClient, RouteClientConfig,
    RouteError, StaticConnectivity,
};

#[derive(Parser, Debug)]
#[command(name = "terminal-finder")]
#[command(about = "Find nearby bus terminals reachable by a direct express route")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for connected terminals near an origin terminal
    Search {
        /// Geocoded terminal catalog (CSV)
        #[arg(long, default_value = "bus_terminals_geo.csv")]
        catalog: PathBuf,

        /// Search radius in kilometres
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius_km: f64,

        /// Terminal name (or part of it); prompts when omitted
        #[arg(short, long)]
        query: Option<String>,

        /// Index of the terminal to use when the query matches several
        #[arg(long, requires = "query")]
        pick: Option<usize>,

        /// Offline route file mapping timetable URLs to destination names
        #[arg(long)]
        routes_file: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long, requires = "query")]
        json: bool,
    },

    /// Geocode every terminal in a catalog and write the result
    Geocode {
        /// Input catalog (CSV)
        #[arg(long, default_value = "bus_terminals.csv")]
        input: PathBuf,

        /// Output catalog (CSV)
        #[arg(long, default_value = "bus_terminals_geo.csv")]
        output: PathBuf,

        /// Google Geocoding API key
        #[arg(long, env = "GEOCODING_API_KEY", hide_env_values = true)]
        api_key: String,
    },

    /// Crawl the terminal listing and attach timetable links to a catalog
    AttachRoutes {
        /// Catalog to update in place (CSV)
        #[arg(long, default_value = "bus_terminals_geo.csv")]
        catalog: PathBuf,

        /// Site hosting the listing and timetable pages
        #[arg(long, env = "ROUTE_BASE_URL", default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}

/// Errors that abort a command.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("terminal_finder=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Search {
            catalog,
            radius_km,
            query,
            pick,
            routes_file,
            json,
        } => {
            let catalog = TerminalCatalog::load(&catalog)?;
            let config = SearchConfig::new(radius_km);
            let opts = SearchOptions { query, pick, json };

            match routes_file {
                Some(path) => {
                    let provider = StaticConnectivity::from_json_file(&path)?;
                    info!(routes = provider.len(), "using offline route file");
                    search(&Finder::new(&catalog, &provider, &config), opts).await
                }
                None => {
                    let client = RouteClient::new(RouteClientConfig::default())?;
                    let provider = CachedConnectivity::new(client, &CacheConfig::default());
                    search(&Finder::new(&catalog, &provider, &config), opts).await
                }
            }
        }

        Command::Geocode {
            input,
            output,
            api_key,
        } => {
            let mut catalog = TerminalCatalog::load(&input)?;
            let config = GeocodeConfig::new(api_key);
            let interval = config.request_interval;
            let client = GeocodeClient::new(config)?;

            let summary = enrich_catalog(&client, &mut catalog, interval).await;
            catalog.save(&output)?;
            println!(
                "완료: {} 저장됨 ({}건, 좌표 {}건)",
                output.display(),
                catalog.len(),
                summary.resolved
            );
            Ok(())
        }

        Command::AttachRoutes { catalog, base_url } => {
            let path = catalog;
            let mut catalog = TerminalCatalog::load(&path)?;
            let client = ListingClient::new(ListingConfig::new(base_url))?;

            let listed = client.fetch().await?;
            let matched = attach_timetables(&mut catalog, &listed);
            catalog.save(&path)?;
            println!(
                "완료: {}/{}개 터미널에 시간표 링크 추가됨 → {}",
                matched,
                catalog.len(),
                path.display()
            );
            Ok(())
        }
    }
}

struct SearchOptions {
    query: Option<String>,
    pick: Option<usize>,
    json: bool,
}

async fn search<P: ConnectivityProvider>(
    finder: &Finder<'_, P>,
    opts: SearchOptions,
) -> Result<(), CliError> {
    let stdout = io::stdout();

    if let Some(query) = opts.query {
        let outcome = finder.find(&query, opts.pick).await?;
        let mut out = stdout.lock();
        if opts.json {
            render_json(&mut out, &outcome)?;
        } else {
            render_outcome(&mut out, &outcome)?;
        }
        return Ok(());
    }

    // Interactive session: one search per query until a blank line or EOF
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        let Some(query) = prompt(&mut input, "검색할 터미널 이름을 입력하세요: ")? else {
            return Ok(());
        };
        if query.is_empty() {
            return Ok(());
        }

        let candidates = finder.candidates(&query);
        let outcome = if candidates.is_empty() {
            FindOutcome::NoMatch { query }
        } else {
            let origin = match candidates.single() {
                Some(only) => only,
                None => {
                    render_candidates(&mut stdout.lock(), &query, candidates.iter())?;
                    match choose(&mut input, |index| candidates.select(index))? {
                        Some(chosen) => chosen,
                        None => return Ok(()),
                    }
                }
            };
            finder.find_from(origin).await
        };

        render_outcome(&mut stdout.lock(), &outcome)?;
        println!();
    }
}

/// Print `message` and read one trimmed line. `None` on end of input.
fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for an index until `select` accepts it. `None` on end of input.
fn choose<R, T, F>(input: &mut R, select: F) -> io::Result<Option<T>>
where
    R: BufRead,
    F: Fn(usize) -> Result<T, SelectError>,
{
    loop {
        let Some(answer) = prompt(input, "번호를 선택하세요: ")? else {
            return Ok(None);
        };

        match answer.parse::<usize>().ok().map(&select) {
            Some(Ok(chosen)) => return Ok(Some(chosen)),
            Some(Err(SelectError::OutOfRange { len, .. })) => {
                println!("올바른 번호를 입력하세요. (0-{})", len.saturating_sub(1));
            }
            None => println!("올바른 번호를 입력하세요."),
        }
    }
}
