pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, Command};

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use crate::core::engine::OUTPUT_FILE;
    use crate::core::summary::SummaryFormat;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_choice, validate_existing_file, validate_path, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "receipt-gen")]
    #[command(about = "Generates a synthetic dataset of retail receipts")]
    pub struct CliConfig {
        /// Path to an optional TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Fixed RNG seed for reproducible output
        #[arg(long)]
        pub seed: Option<u64>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,

        #[command(subcommand)]
        pub command: Option<Command>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
    pub enum Command {
        /// Write receiptsmini.txt (the default)
        Generate,
        /// Aggregate sales per product from a receipts file
        Summarize {
            #[arg(long, default_value = OUTPUT_FILE)]
            input: String,

            /// text, json or csv
            #[arg(long)]
            format: Option<String>,
        },
    }

    impl CliConfig {
        pub fn command(&self) -> Command {
            self.command.clone().unwrap_or(Command::Generate)
        }

        /// Fills settings not given on the command line from the config file.
        pub fn merge_file(&mut self, file: &TomlConfig) {
            if self.seed.is_none() {
                self.seed = file.seed();
            }
            self.verbose |= file.verbose();
            self.log_json |= file.logging.json.unwrap_or(false);

            if let Some(Command::Summarize { format, .. }) = &mut self.command {
                if format.is_none() {
                    format.clone_from(&file.summary.format);
                }
            }
        }

        pub fn summary_format(&self) -> Result<SummaryFormat> {
            match &self.command {
                Some(Command::Summarize {
                    format: Some(format),
                    ..
                }) => format.parse(),
                _ => Ok(SummaryFormat::default()),
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn seed(&self) -> Option<u64> {
            self.seed
        }

        fn verbose(&self) -> bool {
            self.verbose
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(config) = &self.config {
                validate_existing_file("config", config)?;
            }

            if let Some(Command::Summarize { input, format }) = &self.command {
                validate_path("input", input)?;
                if let Some(format) = format {
                    validate_choice("format", format, &SummaryFormat::NAMES)?;
                }
            }

            Ok(())
        }
    }

}
