pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{generator::SiteGenerator, pipeline::PortfolioPipeline};
pub use domain::model::PortfolioDocument;
pub use render::{render_site, RenderOptions};
pub use utils::error::{PortfolioError, Result};
