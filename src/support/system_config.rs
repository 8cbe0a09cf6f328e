//-
// Copyright (c) 2025, the Smargs developers
//
// This file is part of Smargs.
//
// Smargs is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// Smargs is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Smargs. If not, see <http://www.gnu.org/licenses/>.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::error::Error;
use crate::convert::Registry;
use crate::sendmail::SendmailArgs;

/// The configuration file for Smargs, usually called `smargs.toml`.
///
/// Every value is raw parameter text, decoded exactly as it would be had it
/// been given on the command line. Defaults are applied before any command
/// line parameters, which may then override them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SystemConfig {
    /// Default values for command line fields, keyed by flag letter.
    ///
    /// E.g., `N = "failure,delay"`.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,

    /// Default `-O` options, keyed by option name.
    ///
    /// E.g., `MaxHopCount = "25"`.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl SystemConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        Ok(toml::from_slice(&bytes)?)
    }

    /// Apply the configured defaults to `args`.
    pub fn apply(
        &self,
        registry: &Registry,
        args: &mut SendmailArgs,
    ) -> Result<(), Error> {
        for (field, value) in &self.defaults {
            debug!("default {}={:?}", field, value);
            args.set(registry, field, value)?;
        }

        for (name, value) in &self.options {
            debug!("default option {}={:?}", name, value);
            args.set(registry, "O", &format!("{}={}", name, value))?;
        }

        Ok(())
    }
}
