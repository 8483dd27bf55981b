//! `ngtag` - render component tag markup from the command line.
//!
//! ```text
//! $ ngtag render --seed-id id -a selection-mode=multiple
//! <p-tree-table #id="" key="id" selectionMode="checkbox"></p-tree-table>
//! ```

mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::commands::{run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(out) => {
            print!("{}", out);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
