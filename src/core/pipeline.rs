use crate::core::{ConfigProvider, Pipeline, PortfolioDocument, RenderedSite, Storage};
use crate::render::{render_site, RenderOptions};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::lint_document;

pub struct PortfolioPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    options: RenderOptions,
}

impl<S: Storage, C: ConfigProvider> PortfolioPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_options(storage, config, RenderOptions::current())
    }

    pub fn with_options(storage: S, config: C, options: RenderOptions) -> Self {
        Self {
            storage,
            config,
            options,
        }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PortfolioPipeline<S, C> {
    fn extract(&self) -> Result<PortfolioDocument> {
        let path = self.config.input_path();
        tracing::debug!("Reading document from: {}", path);

        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        let document: PortfolioDocument =
            serde_json::from_slice(&bytes).map_err(|source| PortfolioError::DocumentParseError {
                path: path.to_string(),
                source,
            })?;

        for warning in lint_document(&document) {
            tracing::warn!("{}", warning);
        }

        Ok(document)
    }

    fn transform(&self, document: PortfolioDocument) -> Result<RenderedSite> {
        let site = render_site(&document, &self.options);
        for page in &site.pages {
            tracing::debug!("Rendered {} ({} bytes)", page.file_name, page.html.len());
        }
        Ok(site)
    }

    fn load(&self, site: RenderedSite) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(site.pages.len());

        // 寫入失敗時直接中止，不再寫後續頁面
        for page in &site.pages {
            self.storage.write_file(&page.file_name, page.html.as_bytes())?;
            written.push(format!("{}/{}", self.config.output_dir(), page.file_name));
        }

        Ok(written)
    }
}
