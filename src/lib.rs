// imgproxy-url: modifier assembly and signing for image processing URLs

pub mod builder;
pub mod chain;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod modifier_set;
pub mod modifiers;
pub mod signer;

pub use builder::{BuildOptions, SignatureOptions, UrlBuilder};
pub use chain::{chain, ChainInput};
pub use config::{Config, SignatureConfig};
pub use error::UrlError;
pub use modifier_set::{ModifierSet, ModifierToken};
pub use signer::{sign, SigningKey};
