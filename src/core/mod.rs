pub mod generator;
pub mod pipeline;

pub use crate::domain::model::{PortfolioDocument, RenderedPage, RenderedSite};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
