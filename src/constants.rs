// Constants module - protocol tokens and defaults for URL assembly
//
// These values are part of the wire format understood by the image
// processing service. Changing any of them changes every produced URL.

// =============================================================================
// Path layout
// =============================================================================

/// Separator between path segments (modifiers, locator, signature)
pub const SEGMENT_SEPARATOR: &str = "/";

/// Segment placed between two pipelines of a chain
pub const PIPELINE_DELIMITER: &str = "-";

/// Segment used in place of a signature when the URL is not signed
pub const UNSIGNED_PLACEHOLDER: &str = "-";

/// Segment announcing that the source path follows unencoded
pub const PLAIN_LOCATOR_PREFIX: &str = "plain";

/// Separator between a modifier name and its arguments
pub const ARGUMENT_SEPARATOR: &str = ":";

// =============================================================================
// Signature defaults
// =============================================================================

/// Default number of digest bytes kept in a signature
pub const DEFAULT_SIGNATURE_SIZE: usize = 32;

/// Output length of HMAC-SHA256 in bytes
pub const MAX_SIGNATURE_SIZE: usize = 32;
