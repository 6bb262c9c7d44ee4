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

use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use anyhow::{
    Context,
    Result,
};
use serde_json::Value;

use crate::{
    artifact::ContractArtifact,
    OutputType,
    Verbosity,
};

/// Arguments to use when executing the extraction.
#[derive(Clone, Debug)]
pub struct ExtractArgs {
    /// The location of the compiled contract artifact to read.
    pub artifact_path: PathBuf,
    /// The directory the ABI and bytecode files are written to.
    ///
    /// Must already exist; the extraction does not create it.
    pub dest_dir: PathBuf,
    /// The contract name, used as the stem of both output file names.
    pub contract_name: String,
    pub verbosity: Verbosity,
    pub output_type: OutputType,
}

/// Result of the extraction.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ExtractResult {
    /// Path to the resulting ABI file.
    pub dest_abi: PathBuf,
    /// Path to the resulting bytecode file.
    pub dest_bin: PathBuf,
    /// The verbosity flags.
    pub verbosity: Verbosity,
    /// The type of formatting to use for the output.
    #[serde(skip_serializing, skip_deserializing)]
    pub output_type: OutputType,
}

impl ExtractResult {
    pub fn display(&self) -> String {
        format!(
            "ABI and BIN extracted successfully:\n{}\n{}",
            self.dest_abi.display(),
            self.dest_bin.display()
        )
    }

    /// Display the extraction results in a pretty formatted JSON string.
    pub fn serialize_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Get the path of the contract ABI file.
pub fn abi_path(contract_name: &str, dest_dir: &Path) -> PathBuf {
    dest_dir.join(format!("{contract_name}.abi"))
}

/// Get the path of the contract bytecode file.
pub fn bin_path(contract_name: &str, dest_dir: &Path) -> PathBuf {
    dest_dir.join(format!("{contract_name}.bin"))
}

/// Reads the contract artifact and writes its `abi` and `bytecode` fields to
/// `<dest_dir>/<name>.abi` and `<dest_dir>/<name>.bin` respectively.
///
/// Both output files are overwritten unconditionally. Nothing is written if
/// the artifact cannot be read, so a missing artifact leaves pre-existing
/// output files untouched.
pub fn execute(args: ExtractArgs) -> Result<ExtractResult> {
    let artifact = ContractArtifact::load(&args.artifact_path)?;

    let dest_abi = abi_path(&args.contract_name, &args.dest_dir);
    let dest_bin = bin_path(&args.contract_name, &args.dest_dir);

    write_abi(&artifact.abi, &dest_abi)?;
    write_bytecode(&artifact.bytecode, &dest_bin)?;

    Ok(ExtractResult {
        dest_abi,
        dest_bin,
        verbosity: args.verbosity,
        output_type: args.output_type,
    })
}

/// Writes the ABI value in its compact JSON serialization.
fn write_abi<P>(abi: &Value, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!("Writing ABI file to {}", path.display());
    let json = serde_json::to_string(abi)?;
    fs::write(path, json)
        .context(format!("Failed to write ABI file {}", path.display()))?;

    Ok(())
}

/// Writes the bytecode string byte-for-byte, with no re-encoding.
fn write_bytecode<P>(bytecode: &str, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    tracing::debug!("Writing bytecode file to {}", path.display());
    fs::write(path, bytecode)
        .context(format!("Failed to write bytecode file {}", path.display()))?;

    Ok(())
}
