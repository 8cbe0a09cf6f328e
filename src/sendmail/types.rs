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

//! Value types carried by sendmail parameters.

use std::fmt;

use bitflags::bitflags;

/// `-B`: the body type of the message (RFC 6152).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyType {
    SevenBit,
    EightBitMime,
}

bitflags! {
    /// `-N`: the conditions under which a delivery status notification is
    /// requested (RFC 3461).
    ///
    /// `never` is represented by the empty set.
    pub struct NotifyConditions: u8 {
        const FAILURE = 1 << 0;
        const DELAY = 1 << 1;
        const SUCCESS = 1 << 2;
    }
}

/// `-p`: the protocol the message was received with, and optionally the host
/// it was received from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelaySpec {
    pub protocol: String,
    pub hostname: Option<String>,
}

/// `-R`: how much of the message to return in a DSN.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnContent {
    Full,
    Hdrs,
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BodyType::SevenBit => write!(f, "7BIT"),
            BodyType::EightBitMime => write!(f, "8BITMIME"),
        }
    }
}

impl fmt::Display for NotifyConditions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "never");
        }

        let mut first = true;
        for &(flag, name) in &[
            (NotifyConditions::FAILURE, "failure"),
            (NotifyConditions::DELAY, "delay"),
            (NotifyConditions::SUCCESS, "success"),
        ] {
            if self.contains(flag) {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, "{}", name)?;
                first = false;
            }
        }

        Ok(())
    }
}

impl fmt::Display for RelaySpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.protocol)?;
        if let Some(ref hostname) = self.hostname {
            write!(f, ":{}", hostname)?;
        }
        Ok(())
    }
}

impl fmt::Display for ReturnContent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReturnContent::Full => write!(f, "full"),
            ReturnContent::Hdrs => write!(f, "hdrs"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_uses_parameter_syntax() {
        assert_eq!("8BITMIME", BodyType::EightBitMime.to_string());
        assert_eq!("never", NotifyConditions::empty().to_string());
        assert_eq!(
            "failure,success",
            (NotifyConditions::SUCCESS | NotifyConditions::FAILURE)
                .to_string(),
        );
        assert_eq!(
            "smtp:",
            RelaySpec {
                protocol: "smtp".to_owned(),
                hostname: Some(String::new()),
            }
            .to_string(),
        );
        assert_eq!("hdrs", ReturnContent::Hdrs.to_string());
    }
}
