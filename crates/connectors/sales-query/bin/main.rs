use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use query_engine_translation::translation;
use sales_query::routes::create_router;
use sales_query::state::create_state;
use sales_query_configuration::environment::ProcessEnvironment;
use sales_query_configuration::{
    make_runtime_configuration, parse_configuration, write_parsed_configuration,
    ParsedConfiguration,
};

#[derive(Parser)]
#[command(version, about = "Translate English questions about orders into SQL.")]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API.
    Serve {
        /// Directory holding `configuration.json`. Without one, the defaults
        /// are used and secrets come from the environment.
        #[arg(long, env = "SALES_QUERY_CONFIGURATION_DIRECTORY", value_name = "DIRECTORY")]
        configuration: Option<PathBuf>,
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Write a default configuration file and its JSON schema.
    Initialize {
        #[arg(long, default_value = ".", value_name = "DIRECTORY")]
        configuration: PathBuf,
    },
    /// Print the SQL a phrase translates to.
    Translate {
        phrase: String,
        #[arg(long)]
        pretty: bool,
        #[arg(long, env = "SALES_QUERY_CONFIGURATION_DIRECTORY", value_name = "DIRECTORY")]
        configuration: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Options::parse().command {
        Command::Serve {
            configuration,
            host,
            port,
        } => serve(configuration, &host, port).await,
        Command::Initialize { configuration } => {
            write_parsed_configuration(&ParsedConfiguration::initial(), &configuration).await?;
            log::info!("wrote configuration to {}", configuration.display());
            Ok(())
        }
        Command::Translate {
            phrase,
            pretty,
            configuration,
        } => {
            let parsed = read_configuration(configuration).await?;
            let plan = translation::query::translate(&parsed.metadata, &phrase)?;
            let sql = plan.query_sql().sql;
            if pretty {
                println!(
                    "{}",
                    sqlformat::format(
                        &sql,
                        &sqlformat::QueryParams::None,
                        sqlformat::FormatOptions::default()
                    )
                );
            } else {
                println!("{sql}");
            }
            Ok(())
        }
    }
}

async fn serve(configuration: Option<PathBuf>, host: &str, port: u16) -> anyhow::Result<()> {
    let parsed = read_configuration(configuration).await?;
    let configuration = make_runtime_configuration(parsed, ProcessEnvironment)?;
    let state = create_state(configuration).await?;
    let router = create_router(state);

    let address: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    log::info!("Starting server on {}", address);

    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("shutting down");
            }
        })
        .await?;

    Ok(())
}

async fn read_configuration(directory: Option<PathBuf>) -> anyhow::Result<ParsedConfiguration> {
    match directory {
        Some(directory) => Ok(parse_configuration(&directory)
            .await
            .with_context(|| format!("reading configuration from {}", directory.display()))?),
        None => Ok(ParsedConfiguration::initial()),
    }
}
