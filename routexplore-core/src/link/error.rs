use thiserror::Error;

/// Errors from [`crate::link::DecoderChain::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// No decoder in the chain recognised the link.
    #[error("unrecognized map link format: {final_url}")]
    UnrecognizedLinkFormat {
        /// Canonical URL the chain was given, for diagnostics.
        final_url: String,
    },
}
