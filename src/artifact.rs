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
    fs::File,
    io,
    path::Path,
};

use anyhow::{
    Context,
    Result,
};
use serde::Deserialize;
use serde_json::Value;

/// A compiled contract artifact as produced by the contract compilation step.
///
/// Hardhat artifacts carry many more fields (source name, link references,
/// deployed bytecode); only the fields consumed by the extraction are
/// deserialized, everything else is ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name of the contract this artifact was compiled from.
    #[serde(default)]
    pub contract_name: Option<String>,
    /// ABI definition of the contract. Opaque to the extraction, copied as-is.
    ///
    /// Ref: <https://docs.soliditylang.org/en/latest/abi-spec.html#json>
    pub abi: Value,
    /// The compiled contract code, as an opaque (typically `0x`-prefixed hex)
    /// string.
    pub bytecode: String,
}

impl ContractArtifact {
    /// Reads the file and tries to parse it as a contract artifact.
    ///
    /// The file is opened directly rather than probed for existence first,
    /// so a concurrently removed artifact cannot slip between a check and
    /// the read. A missing file surfaces as [`MissingArtifact`].
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        tracing::debug!("Loading contract artifact from {}", path.display());
        let file = File::open(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                anyhow::Error::new(MissingArtifact {
                    path: path.display().to_string(),
                })
            } else {
                anyhow::Error::new(err)
                    .context(format!("Failed to open artifact file {}", path.display()))
            }
        })?;
        serde_json::from_reader(file).context(format!(
            "Failed to deserialize artifact file {}",
            path.display()
        ))
    }
}

/// The contract artifact does not exist at the expected path.
///
/// The only classified failure of the extraction. Everything else (malformed
/// JSON, missing fields, unwritable destination) propagates unclassified.
#[derive(Debug)]
pub struct MissingArtifact {
    path: String,
}

impl std::fmt::Display for MissingArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Artifact not found: {}", self.path)
    }
}

impl std::error::Error for MissingArtifact {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_parses_artifact_and_ignores_unknown_fields() {
        let tmp_dir = tempfile::Builder::new()
            .prefix("contract-extract.test.")
            .tempdir()
            .expect("temporary directory creation failed");
        let path = tmp_dir.path().join("RentalAgreement.json");
        std::fs::write(
            &path,
            r#"{
                "_format": "hh-sol-artifact-1",
                "contractName": "RentalAgreement",
                "sourceName": "contracts/RentalAgreement.sol",
                "abi": [{"type":"function","name":"pay"}],
                "bytecode": "0x6080",
                "deployedBytecode": "0x6080",
                "linkReferences": {}
            }"#,
        )
        .unwrap();

        let artifact = ContractArtifact::load(&path).unwrap();
        assert_eq!(artifact.contract_name.as_deref(), Some("RentalAgreement"));
        assert_eq!(
            artifact.abi,
            serde_json::json!([{"type": "function", "name": "pay"}])
        );
        assert_eq!(artifact.bytecode, "0x6080");
    }

    #[test]
    fn load_classifies_missing_artifact() {
        let tmp_dir = tempfile::Builder::new()
            .prefix("contract-extract.test.")
            .tempdir()
            .expect("temporary directory creation failed");
        let path = tmp_dir.path().join("nope.json");

        let err = ContractArtifact::load(&path).unwrap_err();
        let missing = err
            .downcast_ref::<MissingArtifact>()
            .expect("expected a MissingArtifact error");
        assert!(missing.to_string().contains("nope.json"));
    }

    #[test]
    fn load_propagates_malformed_artifact_unclassified() {
        let tmp_dir = tempfile::Builder::new()
            .prefix("contract-extract.test.")
            .tempdir()
            .expect("temporary directory creation failed");
        let path = tmp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ContractArtifact::load(&path).unwrap_err();
        assert!(err.downcast_ref::<MissingArtifact>().is_none());
        assert!(err.to_string().contains("Failed to deserialize"));
    }

    #[test]
    fn load_requires_abi_and_bytecode_fields() {
        let tmp_dir = tempfile::Builder::new()
            .prefix("contract-extract.test.")
            .tempdir()
            .expect("temporary directory creation failed");
        let path = tmp_dir.path().join("fields.json");
        std::fs::write(&path, r#"{"abi": []}"#).unwrap();

        let err = ContractArtifact::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to deserialize"));
    }
}
