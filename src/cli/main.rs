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

use std::path::PathBuf;

use structopt::StructOpt;

use crate::support::sysexits::*;

#[derive(StructOpt)]
#[structopt(max_term_width = 80)]
enum Command {
    Decode(DecodeSubcommand),
    /// List every field and option which can be decoded.
    ///
    /// Each line gives the name and the representation it is decoded as. A
    /// leading `*` on the representation marks an optional field.
    Fields,
}

/// Decode sendmail parameters and print the resulting argument record.
///
/// Each parameter has the form FIELD=VALUE, where FIELD is the sendmail flag
/// letter. For example:
///
/// smargs decode B=8BITMIME N=failure,delay O=MaxHopCount=25 t=
///
/// Parameters are decoded in order, after any defaults from the
/// configuration file. Decoding stops at the first invalid parameter.
#[derive(StructOpt)]
pub(super) struct DecodeSubcommand {
    /// A `smargs.toml` file supplying default values. A `logging.toml` in
    /// the same directory configures logging.
    #[structopt(long, short, parse(from_os_str))]
    pub(super) config: Option<PathBuf>,

    /// Log more verbosely. Can be passed multiple times.
    #[structopt(short, long, parse(from_occurrences))]
    pub(super) verbose: u64,

    /// The parameters to decode.
    pub(super) params: Vec<String>,
}

pub fn main() {
    // Clap exits with status 1 instead of EX_USAGE if we use the more concise
    // API
    let cmd = Command::from_clap(&match Command::clap().get_matches_safe() {
        Ok(matches) => matches,
        Err(
            e @ clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            },
        )
        | Err(
            e @ clap::Error {
                kind: clap::ErrorKind::VersionDisplayed,
                ..
            },
        ) => {
            println!("{}", e.message);
            return;
        }
        Err(e) => {
            eprintln!("{}", e.message);
            EX_USAGE.exit()
        }
    });

    match cmd {
        Command::Decode(cmd) => super::decode::decode(cmd),
        Command::Fields => super::decode::fields(),
    }
}
