use clap::Parser;
use receipt_gen::config::Command;
use receipt_gen::core::{ConfigProvider, Storage};
use receipt_gen::utils::{logger, validation::Validate};
use receipt_gen::{CliConfig, GenerationEngine, LocalStorage, ReceiptError, SalesSummary, TomlConfig};

fn main() {
    let mut config = CliConfig::parse();

    // Runs before logging is set up, since the file may change log settings.
    if let Err(e) = config.validate() {
        fail(&e);
    }

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path).and_then(|file| file.validate().map(|_| file)) {
            Ok(file) => config.merge_file(&file),
            Err(e) => fail(&e),
        }
    }

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose());
    }

    tracing::info!("Starting receipt-gen");
    tracing::debug!("CLI config: {:?}", config);

    let result = match config.command() {
        Command::Generate => generate(config),
        Command::Summarize { input, .. } => summarize(&config, &input),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ receipt-gen failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        fail(&e);
    }
}

fn fail(e: &ReceiptError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn generate(config: CliConfig) -> Result<(), ReceiptError> {
    let engine = GenerationEngine::new(LocalStorage::current_dir(), config);
    let report = engine.run()?;

    tracing::info!("✅ Wrote {} receipts", report.receipts_written);
    println!("✅ {}", report);
    Ok(())
}

fn summarize(config: &CliConfig, input: &str) -> Result<(), ReceiptError> {
    let format = config.summary_format()?;
    tracing::info!("Summarizing {} as {:?}", input, format);

    let reader = LocalStorage::current_dir().open_reader(input)?;
    let summary = SalesSummary::from_reader(reader)?;
    tracing::info!(
        "Read {} receipts with {} line items",
        summary.receipt_count,
        summary.line_item_count
    );

    let rendered = summary.render(format)?;
    if rendered.ends_with('\n') {
        print!("{}", rendered);
    } else {
        println!("{}", rendered);
    }
    Ok(())
}
