use crate::domain::model::{PortfolioDocument, RenderedSite};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_dir(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<PortfolioDocument>;
    fn transform(&self, document: PortfolioDocument) -> Result<RenderedSite>;
    fn load(&self, site: RenderedSite) -> Result<Vec<String>>;
}
