use crate::{config::EmblemCliConfig, prelude::*};
use abscissa_core::{config, Command, FrameworkError, Runnable};
use clap::Parser;
use emblem::{company, pipeline};
use std::path::PathBuf;

/// `build` subcommand: fetch, convert and trace every logo in a company's
/// token list into the tokens directory
#[derive(Command, Debug, Parser)]
pub struct BuildCmd {
    /// Name of the company whose token list should be built
    #[clap(long)]
    pub company: String,

    /// Directory containing per-company token lists
    #[clap(long)]
    pub company_dir: Option<PathBuf>,

    /// Output directory for generated assets
    #[clap(long)]
    pub tokens_dir: Option<PathBuf>,
}

impl Runnable for BuildCmd {
    /// Build the asset directory for the configured company.
    fn run(&self) {
        let config = APP.config();
        let company_dir = config.build.company_dir.clone();
        let tokens_dir = config.build.tokens_dir.clone();

        status_ok!("Building", "{}", self.company);

        let token_list = company::get_tokens(&company_dir, &self.company).unwrap_or_else(|err| {
            status_err!("{}", err);
            std::process::exit(1);
        });

        status_ok!("Writing", "{}", tokens_dir.display());

        abscissa_tokio::run(&APP, async {
            let mut built = 0usize;
            let mut failed = 0usize;

            for token in &token_list.tokens {
                match pipeline::build_token_assets(token, &tokens_dir).await {
                    Ok(artifacts) => {
                        info!("built {}", artifacts.token_dir.display());
                        built += 1;
                    }
                    Err(err) => {
                        status_err!(
                            "failed to download or process logo from url {}: {}",
                            token.logo,
                            err
                        );
                        failed += 1;
                    }
                }
            }

            status_ok!("Finished", "{} built, {} failed", built, failed);
        })
        .unwrap_or_else(|e| {
            status_err!("executor exited with error: {}", e);
            std::process::exit(1);
        });
    }
}

impl config::Override<EmblemCliConfig> for BuildCmd {
    // Process the given command line options, overriding settings from
    // a configuration file using explicit flags taken from command-line
    // arguments.
    fn override_config(&self, mut config: EmblemCliConfig) -> Result<EmblemCliConfig, FrameworkError> {
        if let Some(company_dir) = &self.company_dir {
            config.build.company_dir = company_dir.clone();
        }

        if let Some(tokens_dir) = &self.tokens_dir {
            config.build.tokens_dir = tokens_dir.clone();
        }

        Ok(config)
    }
}
