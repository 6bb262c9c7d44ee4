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

use anyhow::Result;
use clap::Args;

#[derive(Default, Clone, Debug, Args)]
pub struct VerbosityFlags {
    /// No output printed to stdout
    #[clap(long)]
    quiet: bool,
    /// Use verbose output
    #[clap(long)]
    verbose: bool,
}

impl TryFrom<&VerbosityFlags> for Verbosity {
    type Error = anyhow::Error;

    fn try_from(value: &VerbosityFlags) -> Result<Self, Self::Error> {
        match (value.quiet, value.verbose) {
            (false, false) => Ok(Verbosity::Default),
            (true, false) => Ok(Verbosity::Quiet),
            (false, true) => Ok(Verbosity::Verbose),
            (true, true) => anyhow::bail!("Cannot pass both --quiet and --verbose flags"),
        }
    }
}

/// Denotes if output should be printed to stdout.
#[derive(Clone, Copy, Default, Debug, serde::Serialize, serde::Deserialize, Eq, PartialEq)]
pub enum Verbosity {
    /// Use default output
    #[default]
    Default,
    /// No output printed to stdout
    Quiet,
    /// Use verbose output
    Verbose,
}

impl Verbosity {
    /// Returns `true` if output should be printed (i.e. verbose output is set).
    pub fn is_verbose(&self) -> bool {
        match self {
            Verbosity::Quiet => false,
            Verbosity::Default | Verbosity::Verbose => true,
        }
    }
}

/// The type of formatting to use for the extraction result.
#[derive(Clone, Copy, Default, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum OutputType {
    /// Output the result in a human readable format.
    #[default]
    HumanReadable,
    /// Output the result JSON formatted.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags_convert_to_verbosity() {
        let default = VerbosityFlags {
            quiet: false,
            verbose: false,
        };
        assert_eq!(
            Verbosity::try_from(&default).unwrap(),
            Verbosity::Default
        );

        let quiet = VerbosityFlags {
            quiet: true,
            verbose: false,
        };
        assert_eq!(Verbosity::try_from(&quiet).unwrap(), Verbosity::Quiet);

        let verbose = VerbosityFlags {
            quiet: false,
            verbose: true,
        };
        assert_eq!(Verbosity::try_from(&verbose).unwrap(), Verbosity::Verbose);
    }

    #[test]
    fn conflicting_verbosity_flags_are_rejected() {
        let both = VerbosityFlags {
            quiet: true,
            verbose: true,
        };
        assert!(Verbosity::try_from(&both).is_err());
    }
}
