// Copyright (C) contract-extract contributors.
// This file is part of contract-extract.
//
// contract-extract is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// contract-extract is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with contract-extract.  If not, see <http://www.gnu.org/licenses/>.

#![deny(unused_crate_dependencies)]

use std::{
    fmt::Debug,
    path::PathBuf,
};

use anyhow::{
    anyhow,
    Error,
    Result,
};
use clap::Parser;
use colored::Colorize;
use contract_extract::{
    ExtractArgs,
    ExtractResult,
    OutputType,
    Verbosity,
    VerbosityFlags,
};

// These crates are only used by the library target and the CLI integration
// tests. We pretend to use them here in order to satisfy the
// `unused_crate_dependencies` lint.
use serde as _;
use serde_json as _;
use tracing as _;

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;
#[cfg(test)]
use pretty_assertions as _;
#[cfg(test)]
use tempfile as _;

/// Location of the artifact written by the contract compilation step.
const DEFAULT_ARTIFACT_PATH: &str =
    "blockchain-contracts/artifacts/contracts/RentalAgreement.sol/RentalAgreement.json";

/// Resource directory of the blockchain integration service, which loads the
/// extracted files at startup.
const DEFAULT_DEST_DIR: &str = "blockchain-integration-service/src/main/resources/contracts";

/// Extracts the ABI and bytecode from a compiled contract artifact.
#[derive(Debug, Parser)]
#[clap(name = "contract-extract", version)]
struct ExtractCommand {
    /// Path of the compiled contract artifact to read.
    #[clap(long, default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,
    /// Directory the `<name>.abi` and `<name>.bin` files are written to.
    ///
    /// Must already exist and be writable.
    #[clap(long, default_value = DEFAULT_DEST_DIR)]
    dest_dir: PathBuf,
    /// The contract name, used as the stem of both output file names.
    #[clap(long, default_value = "RentalAgreement")]
    name: String,
    #[clap(flatten)]
    verbosity: VerbosityFlags,
    /// Export the extraction result in JSON format.
    #[clap(long, conflicts_with = "verbose")]
    output_json: bool,
}

impl ExtractCommand {
    fn exec(&self) -> Result<ExtractResult> {
        let mut verbosity = TryFrom::<&VerbosityFlags>::try_from(&self.verbosity)?;

        let output_type = match self.output_json {
            true => OutputType::Json,
            false => OutputType::HumanReadable,
        };

        // We want to ensure that the only thing in `STDOUT` is our JSON
        // formatted string.
        if matches!(output_type, OutputType::Json) {
            verbosity = Verbosity::Quiet;
        }

        let args = ExtractArgs {
            artifact_path: self.artifact.clone(),
            dest_dir: self.dest_dir.clone(),
            contract_name: self.name.clone(),
            verbosity,
            output_type,
        };

        contract_extract::execute(args)
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let cmd = ExtractCommand::parse();

    match exec(&cmd) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err:?}");
            std::process::exit(1);
        }
    }
}

fn exec(cmd: &ExtractCommand) -> Result<()> {
    let result = cmd.exec().map_err(format_err)?;

    if matches!(result.output_type, OutputType::Json) {
        println!("{}", result.serialize_json()?)
    } else if result.verbosity.is_verbose() {
        println!("{}", result.display())
    }
    Ok(())
}

fn format_err<E: Debug>(err: E) -> Error {
    anyhow!(
        "{} {}",
        "ERROR:".bright_red().bold(),
        format!("{err:?}").bright_red()
    )
}
