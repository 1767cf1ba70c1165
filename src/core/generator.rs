use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct SiteGenerator<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SiteGenerator<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 讀取、產生、寫出；任何一步失敗即中止
    pub fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting site generation");

        tracing::info!("Reading portfolio document...");
        let document = self.pipeline.extract()?;
        tracing::info!(
            "Loaded document: {} projects, {} timeline entries, {} references",
            document.projects.len(),
            document.timeline.len(),
            document.references.len()
        );

        tracing::info!("Rendering pages...");
        let site = self.pipeline.transform(document)?;
        tracing::info!("Rendered {} pages", site.pages.len());

        tracing::info!("Writing pages...");
        let written = self.pipeline.load(site)?;
        for path in &written {
            tracing::info!("Wrote {}", path);
        }

        Ok(written)
    }
}
