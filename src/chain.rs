//! Multi-pipeline chaining
//!
//! Several builders are serialized independently and joined with a `-`
//! segment. When build options are given, the locator and signature are
//! applied once to the whole chain:
//!
//! ```text
//! /{signature | -}/{pipeline}/-/{pipeline}/.../{locator}
//! ```

use crate::builder::{assemble, BuildOptions, UrlBuilder};
use crate::constants::{PIPELINE_DELIMITER, SEGMENT_SEPARATOR};
use crate::error::UrlError;

/// Input accepted by [`chain`]
#[derive(Debug, Clone)]
pub enum ChainInput<'a> {
    /// Join pipelines only; no locator, no signature
    Pipelines(&'a [UrlBuilder]),
    /// Join pipelines, then locate and sign the combined path once
    WithOptions {
        build_options: BuildOptions,
        builders: &'a [UrlBuilder],
    },
}

impl<'a> From<&'a [UrlBuilder]> for ChainInput<'a> {
    fn from(builders: &'a [UrlBuilder]) -> Self {
        ChainInput::Pipelines(builders)
    }
}

impl<'a, const N: usize> From<&'a [UrlBuilder; N]> for ChainInput<'a> {
    fn from(builders: &'a [UrlBuilder; N]) -> Self {
        ChainInput::Pipelines(builders)
    }
}

impl<'a> From<&'a Vec<UrlBuilder>> for ChainInput<'a> {
    fn from(builders: &'a Vec<UrlBuilder>) -> Self {
        ChainInput::Pipelines(builders)
    }
}

/// Combine several pipelines into one path
///
/// Every builder contributes a pipeline, so an empty builder leaves an
/// empty segment between two delimiters.
///
/// # Errors
/// Propagates signing errors when `WithOptions` carries a signature.
pub fn chain<'a>(input: impl Into<ChainInput<'a>>) -> Result<String, UrlError> {
    let (builders, options) = match input.into() {
        ChainInput::Pipelines(builders) => (builders, None),
        ChainInput::WithOptions {
            build_options,
            builders,
        } => (builders, Some(build_options)),
    };

    let delimiter = format!(
        "{}{}{}",
        SEGMENT_SEPARATOR, PIPELINE_DELIMITER, SEGMENT_SEPARATOR
    );
    let joined = builders
        .iter()
        .map(UrlBuilder::pipeline)
        .collect::<Vec<_>>()
        .join(&delimiter);

    tracing::debug!(pipelines = builders.len(), "Chaining pipelines");

    match options {
        Some(options) => assemble(joined, &options),
        None => Ok(joined),
    }
}
