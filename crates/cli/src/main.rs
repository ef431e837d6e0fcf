use clap::{Args, Parser, Subcommand};
use ferrous_doh_domain::{CliOverrides, Config, Question, RecordType};
use ferrous_doh_infrastructure::doh::{DohClient, DohServer};
use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

mod bootstrap;
mod di;
mod output;
mod server;

use bootstrap::LogFormat;

/// Exit status for bad configuration or usage.
const EXIT_CONFIG: u8 = 2;
/// Exit status for failures while talking to the network.
const EXIT_RUNTIME: u8 = 1;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - DNS-over-HTTPS JSON client and server")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a DoH JSON server a single question
    Query(QueryArgs),

    /// Run a DoH JSON endpoint
    Serve(ServeArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Record type, as mnemonic (AAAA) or number (28)
    record_type: String,

    /// Name to resolve
    name: String,

    /// URL of the DNS-over-HTTPS server
    #[arg(long)]
    server: Option<String>,

    /// Query timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Allow questions over plain HTTP
    #[arg(long)]
    allow_http: bool,

    /// Print the answer as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// HTTP path of the endpoint
    #[arg(long)]
    path: Option<String>,

    /// Upstream DoH JSON server for questions without a local record
    #[arg(long)]
    upstream: Option<String>,

    /// Answer requests that did not arrive over HTTPS
    #[arg(long)]
    allow_http: bool,

    /// Reach the upstream over plain HTTP
    #[arg(long)]
    upstream_allow_http: bool,
}

/// Failure of a command, split by exit status.
enum Failure {
    Config(String),
    Runtime(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    match &cli.command {
        Command::Query(args) => {
            overrides.client_server = args.server.clone();
            overrides.client_timeout = args.timeout;
            overrides.client_allow_http = args.allow_http;
        }
        Command::Serve(args) => {
            overrides.bind_address = args.bind.clone();
            overrides.port = args.port;
            overrides.path = args.path.clone();
            overrides.upstream = args.upstream.clone();
            overrides.server_allow_http = args.allow_http;
            overrides.upstream_allow_http = args.upstream_allow_http;
        }
    }

    let config = match bootstrap::load_config(cli.config.as_deref(), overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("config error: {}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    bootstrap::init_logging(&config.logging.level, cli.log_format);

    let result = match cli.command {
        Command::Query(args) => run_query(&config, args).await,
        Command::Serve(_) => run_serve(&config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Config(msg)) => {
            eprintln!("config error: {}", msg);
            ExitCode::from(EXIT_CONFIG)
        }
        Err(Failure::Runtime(msg)) => {
            eprintln!("runtime error: {}", msg);
            ExitCode::from(EXIT_RUNTIME)
        }
    }
}

async fn run_query(config: &Config, args: QueryArgs) -> Result<(), Failure> {
    let record_type = RecordType::parse_arg(&args.record_type)
        .ok_or_else(|| Failure::Config(format!("unknown record type: {}", args.record_type)))?;

    let addr = Url::parse(&config.client.server)
        .map_err(|e| Failure::Config(format!("invalid server: {}", e)))?;

    let http = DohClient::http_client(Duration::from_secs(config.client.timeout))
        .map_err(|e| Failure::Config(format!("could not build HTTP client: {}", e)))?;

    let client = DohClient::new(Some(addr), http).with_allow_http(config.client.allow_http);

    let exchange = client.query(&Question::new(args.name, record_type)).await;
    let answer = match exchange.result {
        Ok(answer) => answer,
        Err(e) if e.is_config() => return Err(Failure::Config(e.to_string())),
        Err(e) => return Err(Failure::Runtime(format!("could not query server: {}", e))),
    };

    if args.json {
        let json = serde_json::to_string(&answer)
            .map_err(|e| Failure::Runtime(format!("could not encode answer: {}", e)))?;
        println!("{}", json);
    } else {
        print!("{}", output::render_answer(&answer, exchange.rtt));
    }

    Ok(())
}

async fn run_serve(config: &Config) -> Result<(), Failure> {
    let handler = di::build_question_handler(config).map_err(|e| Failure::Config(e.to_string()))?;

    let ip: IpAddr = config.server.bind_address.parse().map_err(|e| {
        Failure::Config(format!(
            "invalid bind address {}: {}",
            config.server.bind_address, e
        ))
    })?;
    let bind_addr = SocketAddr::from((ip, config.server.port));

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let doh = DohServer::new(handler)
        .with_allow_http(config.server.allow_http)
        .with_trusted_forwarded_proto(config.server.trust_forwarded_proto);

    server::start_doh_server(bind_addr, &config.server.path, doh)
        .await
        .map_err(|e| {
            error!(error = %e, "DoH server error");
            Failure::Runtime(e.to_string())
        })?;

    info!("Server shutdown complete");
    Ok(())
}
