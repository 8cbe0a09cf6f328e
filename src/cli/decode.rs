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

use log::{error, info};

use super::main::DecodeSubcommand;
use crate::convert::{options::OPTION_FIELD_PREFIX, Record, Registry, TypeKey};
use crate::sendmail::{SendmailArgs, SendmailOptions};
use crate::support::{
    error::Error, logging, sysexits::*, system_config::SystemConfig,
};

pub(super) fn decode(cmd: DecodeSubcommand) {
    let config_dir = cmd.config.as_ref().and_then(|c| c.parent());
    if let Err(exit) = logging::init(config_dir, cmd.verbose) {
        exit.exit();
    }

    let config = match cmd.config {
        None => SystemConfig::default(),
        Some(ref path) => match SystemConfig::load(path) {
            Ok(config) => config,
            Err(e) => die!(
                EX_CONFIG,
                "Error in config file at '{}': {}",
                path.display(),
                e
            ),
        },
    };

    let registry = Registry::standard();
    let mut args = SendmailArgs::default();
    if let Err(e) = config.apply(registry, &mut args) {
        die!(EX_CONFIG, "Bad default in config file: {}", e);
    }

    match apply_params(registry, &mut args, &cmd.params) {
        Ok(()) => {
            info!("decoded {} parameter(s)", cmd.params.len());
            println!("{:#?}", args);
        },
        Err(e) => {
            error!("{}", e);
            die!(e.sysexit(), "{}", e)
        },
    }
}

pub(super) fn fields() {
    for (name, key) in field_listing() {
        println!("{:<24} {}", name, key);
    }
}

/// Split `FIELD=VALUE` on the first `=`.
fn split_param(param: &str) -> Result<(&str, &str), Error> {
    param
        .split_once('=')
        .ok_or_else(|| Error::MalformedParameter(param.to_owned()))
}

fn apply_params(
    registry: &Registry,
    args: &mut SendmailArgs,
    params: &[String],
) -> Result<(), Error> {
    for param in params {
        let (field, value) = split_param(param)?;
        args.set(registry, field, value)?;
    }

    Ok(())
}

/// Every command line field and `-O` option, with its type key.
fn field_listing() -> Vec<(String, TypeKey)> {
    fn list(record: &mut dyn Record, into: &mut Vec<(String, TypeKey)>) {
        for &name in record.field_names() {
            if let Some(field) = record.field(name) {
                let display_name = match name.strip_prefix(OPTION_FIELD_PREFIX)
                {
                    Some(option) => format!("-O {}", option),
                    None => format!("-{}", name),
                };
                into.push((display_name, field.target.type_key()));
            }
        }
    }

    let mut listing = Vec::new();
    list(&mut SendmailArgs::default(), &mut listing);
    list(&mut SendmailOptions::default(), &mut listing);
    listing
}
