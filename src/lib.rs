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

#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod args;
mod artifact;
mod extract;

pub use self::{
    args::{
        OutputType,
        Verbosity,
        VerbosityFlags,
    },
    artifact::{
        ContractArtifact,
        MissingArtifact,
    },
    extract::{
        abi_path,
        bin_path,
        execute,
        ExtractArgs,
        ExtractResult,
    },
};

// These crates are only used by the binary target and the CLI integration
// tests. We pretend to use them here in order to satisfy the
// `unused_crate_dependencies` lint.
use colored as _;
use tracing_subscriber as _;

#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;
