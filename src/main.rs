use clap::error::ErrorKind;
use clap::Parser;
use portfolio_gen::core::ConfigProvider;
use portfolio_gen::utils::{logger, validation::Validate};
use portfolio_gen::{CliConfig, LocalStorage, PortfolioPipeline, SiteGenerator};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // 缺少參數：用法寫到 stderr，結束碼 1
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let pipeline = PortfolioPipeline::new(storage, config);
    let generator = SiteGenerator::new(pipeline);

    match generator.run() {
        Ok(written) => {
            tracing::info!("✅ Generated {} page(s)", written.len());
            for path in &written {
                println!("{}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Site generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
