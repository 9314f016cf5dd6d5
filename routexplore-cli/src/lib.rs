//! Command-line interface for resolving map links and generating routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use routexplore_core::Itinerary;
use routexplore_data::HttpProviderSettings;
use std::future::Future;
use std::io::Write;

mod error;
mod resolve;
mod route;

pub use error::CliError;

use resolve::ResolveLinkArgs;
use route::RouteArgs;

const ARG_LINK: &str = "link";
const ARG_NO_ROUTE: &str = "no-route";
const ARG_START: &str = "start";
const ARG_END: &str = "end";
const ARG_START_NAME: &str = "start-name";
const ARG_END_NAME: &str = "end-name";
const ARG_WAYPOINT: &str = "waypoint";
const ARG_TRAVEL_MODE: &str = "travel-mode";
const ARG_GEOMETRY: &str = "geometry";
const ARG_OSRM_BASE_URL: &str = "osrm-base-url";
const ARG_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
const ARG_USER_AGENT: &str = "user-agent";
const ENV_RESOLVE_LINK_LINK: &str = "ROUTEXPLORE_CMDS_RESOLVE_LINK_LINK";

/// Run the routexplore CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// providers cannot be built, the request fails, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::ResolveLink(args) => resolve::run_resolve_link(args, &mut stdout),
        Command::Route(args) => route::run_route(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "routexplore",
    about = "Resolve map links into itineraries and generate routes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a shared map link into endpoints, waypoints and a route.
    ResolveLink(ResolveLinkArgs),
    /// Generate a route from explicit coordinates or a map link.
    Route(RouteArgs),
}

/// Provider settings with defaults for anything left unset.
fn provider_settings(
    osrm_base_url: Option<String>,
    nominatim_base_url: Option<String>,
    user_agent: Option<String>,
) -> HttpProviderSettings {
    let defaults = HttpProviderSettings::default();
    HttpProviderSettings {
        osrm_base_url: osrm_base_url.unwrap_or(defaults.osrm_base_url),
        nominatim_base_url: nominatim_base_url.unwrap_or(defaults.nominatim_base_url),
        user_agent: user_agent.unwrap_or(defaults.user_agent),
    }
}

/// Drive an orchestrator future to completion on a current-thread runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    Ok(runtime.block_on(future))
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(itinerary).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
