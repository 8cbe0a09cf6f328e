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

use std::io;

use thiserror::Error;

use super::sysexits::*;
use crate::convert;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No such field: {0}")]
    UnknownField(String),
    #[error("Expected FIELD=VALUE, got {0:?}")]
    MalformedParameter(String),
    #[error(transparent)]
    Convert(#[from] convert::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// The exit code to use when this error ends a command line operation.
    pub fn sysexit(&self) -> Sysexit {
        match *self {
            Error::UnknownField(_) | Error::MalformedParameter(_) => EX_USAGE,
            Error::Convert(convert::Error::UnsupportedType(_)) => EX_SOFTWARE,
            Error::Convert(_) => EX_DATAERR,
            Error::Io(_) => EX_IOERR,
            Error::Toml(_) => EX_CONFIG,
        }
    }
}
