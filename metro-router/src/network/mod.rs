//! The rail network: stops, lines, and the links between them.
//!
//! A network is built once from a [`NetworkConfig`] (loaded from JSON or
//! the built-in [`delhi_metro`] data) and is read-only afterwards.

mod builder;
mod config;
mod delhi;
mod error;
mod model;

pub use builder::NetworkBuilder;
pub use config::{
    CONFIG_ENV, DEFAULT_INTERCHANGE_MINUTES, DEFAULT_RIDE_MINUTES, InterchangeConfig,
    LineConfig, NetworkConfig,
};
pub use delhi::delhi_metro;
pub use error::ConfigError;
pub use model::{Interchange, Line, Link, LinkKind, Network, Stop, StopListing};
