//! `route` command implementation.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use routexplore_core::geocoding::Geocoder;
use routexplore_core::link::LinkCanonicalizer;
use routexplore_core::routing::RouteProvider;
use routexplore_core::{GenerateRouteRequest, Itinerary, ItineraryPipeline, Waypoint};
use routexplore_data::HttpProviderSettings;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_END, ARG_END_NAME, ARG_GEOMETRY, ARG_LINK, ARG_NOMINATIM_BASE_URL, ARG_OSRM_BASE_URL,
    ARG_START, ARG_START_NAME, ARG_TRAVEL_MODE, ARG_USER_AGENT, ARG_WAYPOINT, CliError,
    block_on, provider_settings, write_itinerary,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "route",
    long_about = "Generate a route. Explicit --start and --end coordinates \
                 take precedence; otherwise the endpoints come from --link. \
                 Unnamed explicit endpoints are labelled by reverse geocoding.",
    about = "Generate a route between two endpoints"
)]
#[ortho_config(prefix = "ROUTEXPLORE")]
pub(crate) struct RouteArgs {
    /// Start as "lat,lng".
    #[arg(long = ARG_START, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// End as "lat,lng".
    #[arg(long = ARG_END, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) end: Option<String>,
    /// Label for the start endpoint.
    #[arg(long = ARG_START_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) start_name: Option<String>,
    /// Label for the end endpoint.
    #[arg(long = ARG_END_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) end_name: Option<String>,
    /// Map link used when explicit coordinates are missing.
    #[arg(long = ARG_LINK, value_name = "url")]
    #[serde(default)]
    pub(crate) link: Option<String>,
    /// Intermediate stop; repeat for several. "lat,lng" values are routed.
    #[arg(long = ARG_WAYPOINT, value_name = "stop", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) waypoint: Vec<String>,
    /// Travel mode (driving, walking, bicycling); anything else drives.
    #[arg(long = ARG_TRAVEL_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) travel_mode: Option<String>,
    /// Geometry encoding (geojson, polyline, polyline6).
    #[arg(long = ARG_GEOMETRY, value_name = "encoding")]
    #[serde(default)]
    pub(crate) geometry: Option<String>,
    /// Base URL for the OSRM server (e.g. "http://localhost:5000").
    #[arg(long = ARG_OSRM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_base_url: Option<String>,
    /// Base URL for the Nominatim server.
    #[arg(long = ARG_NOMINATIM_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_base_url: Option<String>,
    /// User agent sent to every provider.
    #[arg(long = ARG_USER_AGENT, value_name = "agent")]
    #[serde(default)]
    pub(crate) user_agent: Option<String>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RouteConfig::from(merged))
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct RouteConfig {
    pub(crate) request: GenerateRouteRequest,
    pub(crate) providers: HttpProviderSettings,
}

impl From<RouteArgs> for RouteConfig {
    fn from(args: RouteArgs) -> Self {
        let request = GenerateRouteRequest {
            start: args.start,
            end: args.end,
            start_name: args.start_name,
            end_name: args.end_name,
            link: args.link,
            waypoints: args.waypoint.into_iter().map(Waypoint::from).collect(),
            travel_mode: args.travel_mode,
            geometry: args.geometry,
            ..GenerateRouteRequest::default()
        };
        Self {
            request,
            providers: provider_settings(
                args.osrm_base_url,
                args.nominatim_base_url,
                args.user_agent,
            ),
        }
    }
}

pub(crate) fn run_route(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let pipeline = config.providers.build_pipeline()?;
    let itinerary = execute_route(&config, &pipeline)?;
    write_itinerary(writer, &itinerary)
}

pub(crate) fn execute_route<L, G, R>(
    config: &RouteConfig,
    pipeline: &ItineraryPipeline<L, G, R>,
) -> Result<Itinerary, CliError>
where
    L: LinkCanonicalizer,
    G: Geocoder,
    R: RouteProvider,
{
    block_on(pipeline.generate_route(&config.request))?
        .map_err(|source| CliError::Itinerary { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(RouteConfig::from(merged))
}
