use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-gen")]
#[command(version)]
#[command(about = "Generate static portfolio pages from a JSON document")]
pub struct CliConfig {
    /// Path to the portfolio JSON document
    pub input: String,

    #[arg(skip = String::from("."))]
    pub output_dir: String,
}

impl CliConfig {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_dir: ".".to_string(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output_dir", &self.output_dir)
    }
}
