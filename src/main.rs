use anyhow::Context;
use clap::Parser;
use small_idioms::core::{render, snippets, Storage};
use small_idioms::utils::{logger, validation::Validate};
use small_idioms::{CliConfig, IdiomError, LocalStorage, SnippetInputs, SnippetRunner, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting small-idioms CLI");
    tracing::debug!("CLI config: {:?}", config);

    if config.list {
        for snippet in snippets::catalog() {
            println!("{:<16}{}", snippet.name(), snippet.description());
        }
        return;
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ {:#}", e);

        let exit_code = match e.downcast_ref::<IdiomError>() {
            Some(err) => {
                eprintln!("❌ {}", err.user_friendly_message());
                err.exit_code()
            }
            None => {
                eprintln!("❌ {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    // 驗證配置
    config.validate()?;
    let format = config.output_format()?;

    let inputs = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading inputs from: {}", path);
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
                .resolve()?
        }
        None => SnippetInputs::default(),
    };

    let runner = SnippetRunner::select(&config.snippets)?;
    let reports = runner.run(&inputs)?;
    let rendered = render::render(&reports, format)?;

    match &config.output {
        Some(path) => {
            LocalStorage.write_file(path, rendered.as_bytes())?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
