use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use clap::Parser;
use emblem::company;

/// `companies` subcommand
#[derive(Command, Debug, Parser)]
pub struct CompaniesCmd {}

impl Runnable for CompaniesCmd {
    /// List all companies with a token list in the company directory
    fn run(&self) {
        let config = APP.config();

        match company::list_companies(&config.build.company_dir) {
            Ok(names) => {
                let names = serde_json::to_string_pretty(&names).unwrap_or_else(|err| {
                    status_err!("Can't convert company list to JSON: {}", err);
                    std::process::exit(1);
                });
                println!("{}", names)
            }
            Err(err) => error!("{}", err),
        }
    }
}
