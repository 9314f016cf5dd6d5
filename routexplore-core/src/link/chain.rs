//! Ordered, first-match-wins composition of [`LinkDecoder`]s.

use url::Url;

use super::decoder::{ApiParamsDecoder, DirPathDecoder, LinkDecoder, SaddrDaddrDecoder};
use super::{LinkError, ParsedLink};

/// Tries each decoder in priority order and stops at the first match.
///
/// Results from different decoders are never merged, so every
/// [`ParsedLink`] carries the tag of exactly one decoder.
///
/// # Examples
/// ```
/// use routexplore_core::link::{DecoderChain, LinkError, LinkFormat};
///
/// let chain = DecoderChain::standard();
/// let parsed = chain
///     .decode("https://www.google.com/maps/dir/A/B?api=1&origin=Paris&destination=Lyon")
///     .expect("api=1 wins over the directions path");
/// assert_eq!(parsed.format, LinkFormat::ApiParams);
///
/// let err = chain.decode("https://www.google.com/maps/place/Paris").unwrap_err();
/// assert!(matches!(err, LinkError::UnrecognizedLinkFormat { .. }));
/// ```
pub struct DecoderChain {
    decoders: Vec<Box<dyn LinkDecoder>>,
}

impl std::fmt::Debug for DecoderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.decoders.iter().map(|decoder| decoder.format()))
            .finish()
    }
}

impl Default for DecoderChain {
    fn default() -> Self {
        Self::standard()
    }
}

impl DecoderChain {
    /// The fixed order: `api=1`, then `/dir/` paths, then legacy `saddr`/`daddr`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(ApiParamsDecoder),
            Box::new(DirPathDecoder),
            Box::new(SaddrDaddrDecoder),
        ])
    }

    /// Build a chain from decoders in priority order.
    #[must_use]
    pub fn new(decoders: Vec<Box<dyn LinkDecoder>>) -> Self {
        Self { decoders }
    }

    /// Decode `canonical` with the first decoder that recognises it.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::UnrecognizedLinkFormat`] when the text is not a
    /// URL or no decoder matches.
    pub fn decode(&self, canonical: &str) -> Result<ParsedLink, LinkError> {
        let unrecognized = || LinkError::UnrecognizedLinkFormat {
            final_url: canonical.to_owned(),
        };
        let url = Url::parse(canonical).map_err(|_| unrecognized())?;
        let parsed = self
            .decoders
            .iter()
            .find_map(|decoder| decoder.attempt(&url))
            .ok_or_else(unrecognized)?;
        log::debug!("decoded {canonical} as {}", parsed.format);
        Ok(parsed)
    }
}
