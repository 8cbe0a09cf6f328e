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

//! Converters for the simple representations.
//!
//! Each function here is a `LeafConverter`: a pure function of its input.

use log::warn;

use super::{Invalid, Value};
use crate::sendmail::types::{
    BodyType, NotifyConditions, RelaySpec, ReturnContent,
};

pub fn text(s: &str) -> Result<Value, Invalid> {
    Ok(Value::Text(s.to_owned()))
}

/// Decode a boolean flag.
///
/// A flag given with no value is set. Tokens outside the known vocabulary are
/// not an error; they decode to `false`, as sendmail has always treated
/// them.
pub fn flag(s: &str) -> Result<Value, Invalid> {
    Ok(Value::Flag(match s {
        "true" | "yes" | "1" | "" => true,
        "false" | "no" | "0" => false,
        _ => {
            warn!("treating unrecognised flag value {:?} as false", s);
            false
        },
    }))
}

/// Decode the first character of the input.
///
/// U+FFFD is rejected, since that is what invalid bytes become by the time
/// they have been turned into a `str`.
pub fn codepoint(s: &str) -> Result<Value, Invalid> {
    match s.chars().next() {
        None => Err(Invalid::Empty),
        Some(char::REPLACEMENT_CHARACTER) => Err(Invalid::Encoding),
        Some(ch) => Ok(Value::Codepoint(ch)),
    }
}

pub fn short(s: &str) -> Result<Value, Invalid> {
    Ok(Value::Short(s.parse::<i16>()?))
}

pub fn body_type(s: &str) -> Result<Value, Invalid> {
    match s {
        "7BIT" => Ok(Value::BodyType(BodyType::SevenBit)),
        "8BITMIME" => Ok(Value::BodyType(BodyType::EightBitMime)),
        _ => Err(Invalid::Token(s.to_owned())),
    }
}

/// Decode a comma-separated list of DSN notify conditions.
///
/// `never` contributes no bits, but neither does it clear the others.
pub fn notify(s: &str) -> Result<Value, Invalid> {
    let mut conditions = NotifyConditions::empty();
    for token in s.split(',') {
        match token {
            "never" => {},
            "failure" => conditions |= NotifyConditions::FAILURE,
            "delay" => conditions |= NotifyConditions::DELAY,
            "success" => conditions |= NotifyConditions::SUCCESS,
            _ => return Err(Invalid::Token(token.to_owned())),
        }
    }

    Ok(Value::Notify(conditions))
}

/// Decode `protocol[:hostname]`.
///
/// Only the first colon separates; a trailing colon gives an empty (but
/// present) host name.
pub fn relay(s: &str) -> Result<Value, Invalid> {
    let spec = match s.split_once(':') {
        Some((protocol, hostname)) => RelaySpec {
            protocol: protocol.to_owned(),
            hostname: Some(hostname.to_owned()),
        },
        None => RelaySpec {
            protocol: s.to_owned(),
            hostname: None,
        },
    };

    Ok(Value::Relay(spec))
}

pub fn return_content(s: &str) -> Result<Value, Invalid> {
    match s {
        "full" => Ok(Value::Return(ReturnContent::Full)),
        "hdrs" => Ok(Value::Return(ReturnContent::Hdrs)),
        _ => Err(Invalid::Token(s.to_owned())),
    }
}
