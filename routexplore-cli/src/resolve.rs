//! `resolve-link` command implementation.

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use routexplore_core::geocoding::Geocoder;
use routexplore_core::link::LinkCanonicalizer;
use routexplore_core::routing::{GeometryEncoding, RouteProvider, RoutingProfile};
use routexplore_core::{Itinerary, ItineraryPipeline, ResolveLinkOptions};
use routexplore_data::HttpProviderSettings;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_GEOMETRY, ARG_LINK, ARG_NO_ROUTE, ARG_NOMINATIM_BASE_URL, ARG_OSRM_BASE_URL,
    ARG_TRAVEL_MODE, ARG_USER_AGENT, CliError, ENV_RESOLVE_LINK_LINK, block_on,
    provider_settings, write_itinerary,
};

/// CLI arguments for the `resolve-link` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "resolve-link",
    long_about = "Follow a shared map link through any shortener, decode its \
                 start, end and waypoints, geocode the endpoints and, unless \
                 --no-route is given, route between them.",
    about = "Resolve a map link into an itinerary"
)]
#[ortho_config(prefix = "ROUTEXPLORE")]
pub(crate) struct ResolveLinkArgs {
    /// The map link to resolve.
    #[arg(value_name = "url")]
    #[serde(default)]
    pub(crate) link: Option<String>,
    /// Skip route synthesis and return endpoints only.
    #[arg(long = ARG_NO_ROUTE)]
    #[serde(default)]
    pub(crate) no_route: bool,
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

impl ResolveLinkArgs {
    pub(crate) fn into_config(self) -> Result<ResolveLinkConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ResolveLinkConfig::try_from(merged)
    }
}

/// Resolved `resolve-link` command configuration.
#[derive(Debug, Clone)]
pub(crate) struct ResolveLinkConfig {
    pub(crate) link: String,
    pub(crate) options: ResolveLinkOptions,
    pub(crate) providers: HttpProviderSettings,
}

impl TryFrom<ResolveLinkArgs> for ResolveLinkConfig {
    type Error = CliError;

    fn try_from(args: ResolveLinkArgs) -> Result<Self, Self::Error> {
        let link = args
            .link
            .map(|link| link.trim().to_owned())
            .filter(|link| !link.is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_LINK,
                env: ENV_RESOLVE_LINK_LINK,
            })?;
        let options = ResolveLinkOptions {
            route: !args.no_route,
            profile: RoutingProfile::from_travel_mode(args.travel_mode.as_deref()),
            encoding: GeometryEncoding::from_param(args.geometry.as_deref()),
        };
        Ok(Self {
            link,
            options,
            providers: provider_settings(
                args.osrm_base_url,
                args.nominatim_base_url,
                args.user_agent,
            ),
        })
    }
}

pub(crate) fn run_resolve_link(
    args: ResolveLinkArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let pipeline = config.providers.build_pipeline()?;
    let itinerary = execute_resolve_link(&config, &pipeline)?;
    write_itinerary(writer, &itinerary)
}

pub(crate) fn execute_resolve_link<L, G, R>(
    config: &ResolveLinkConfig,
    pipeline: &ItineraryPipeline<L, G, R>,
) -> Result<Itinerary, CliError>
where
    L: LinkCanonicalizer,
    G: Geocoder,
    R: RouteProvider,
{
    log::debug!("resolving {}", config.link);
    block_on(pipeline.resolve_link(&config.link, &config.options))?
        .map_err(|source| CliError::Itinerary { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ResolveLinkConfig, CliError> {
    let merged = ResolveLinkArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ResolveLinkConfig::try_from(merged)
}
