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

//! The records populated from a sendmail command line.
//!
//! Fields are addressed by the flag letter which sets them. Fields of
//! `SendmailOptions` are addressed through `-O name=value` and so carry the
//! option field prefix.

use std::time::Duration;

use crate::convert::{Field, Record, Registry, Target};
use crate::support::error::Error;

pub mod types;

use self::types::*;

/// Everything that can be set on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendmailArgs {
    /// `-B type`
    pub body_type: Option<BodyType>,
    /// `-F fullname`
    pub full_name: Option<String>,
    /// `-f sender`
    pub sender: Option<String>,
    /// `-h hopcount`
    pub hop_count: Option<i16>,
    /// `-i`: a line with a single `.` does not end the message.
    pub ignore_dots: bool,
    /// `-N dsn`
    pub notify: Option<NotifyConditions>,
    /// `-O option=value`, repeatable.
    pub options: SendmailOptions,
    /// `-p protocol[:hostname]`
    pub protocol: Option<RelaySpec>,
    /// `-q[interval]`
    pub queue_interval: Option<Duration>,
    /// `-R return`
    pub return_content: Option<ReturnContent>,
    /// `-t`: take recipients from the message headers.
    pub read_recipients: bool,
    /// `-V envid`
    pub envelope_id: Option<String>,
    /// `-v`
    pub verbose: bool,
}

/// Options which can be given through `-O`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SendmailOptions {
    /// One of `i`, `b`, `q`, `d`; only the first letter is significant.
    pub delivery_mode: Option<char>,
    /// One of `p`, `q`, `m`, `w`, `e`.
    pub error_mode: Option<char>,
    pub max_hop_count: Option<i16>,
    pub queue_directory: Option<String>,
    pub default_charset: Option<String>,
    /// How long a message may sit in the queue before it is bounced.
    pub queue_timeout: Option<Duration>,
    pub min_queue_age: Option<Duration>,
    pub seven_bit_input: bool,
    pub ignore_dots: bool,
    pub send_mime_errors: bool,
}

impl SendmailArgs {
    /// Decode `raw` into the field set by flag `name`.
    pub fn set(
        &mut self,
        registry: &Registry,
        name: &str,
        raw: &str,
    ) -> Result<(), Error> {
        let field = self
            .field(name)
            .ok_or_else(|| Error::UnknownField(name.to_owned()))?;
        registry.dispatch(raw, field)?;
        Ok(())
    }
}

impl Record for SendmailArgs {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "B", "F", "f", "h", "i", "N", "O", "p", "q", "R", "t", "V", "v",
        ]
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        let (name, target) = match name {
            "B" => ("B", Target::BodyType(&mut self.body_type)),
            "F" => ("F", Target::Text(&mut self.full_name)),
            "f" => ("f", Target::Text(&mut self.sender)),
            "h" => ("h", Target::Short(&mut self.hop_count)),
            "i" => ("i", Target::Flag(&mut self.ignore_dots)),
            "N" => ("N", Target::Notify(&mut self.notify)),
            "O" => ("O", Target::Options(&mut self.options)),
            "p" => ("p", Target::Relay(&mut self.protocol)),
            "q" => ("q", Target::Duration(&mut self.queue_interval)),
            "R" => ("R", Target::Return(&mut self.return_content)),
            "t" => ("t", Target::Flag(&mut self.read_recipients)),
            "V" => ("V", Target::Text(&mut self.envelope_id)),
            "v" => ("v", Target::Flag(&mut self.verbose)),
            _ => return None,
        };

        Some(Field { name, target })
    }
}

impl Record for SendmailOptions {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "Opt_DeliveryMode",
            "Opt_ErrorMode",
            "Opt_MaxHopCount",
            "Opt_QueueDirectory",
            "Opt_DefaultCharSet",
            "Opt_QueueTimeout",
            "Opt_MinQueueAge",
            "Opt_SevenBitInput",
            "Opt_IgnoreDots",
            "Opt_SendMimeErrors",
        ]
    }

    fn field(&mut self, name: &str) -> Option<Field<'_>> {
        let (name, target) = match name {
            "Opt_DeliveryMode" => (
                "Opt_DeliveryMode",
                Target::Codepoint(&mut self.delivery_mode),
            ),
            "Opt_ErrorMode" => {
                ("Opt_ErrorMode", Target::Codepoint(&mut self.error_mode))
            },
            "Opt_MaxHopCount" => {
                ("Opt_MaxHopCount", Target::Short(&mut self.max_hop_count))
            },
            "Opt_QueueDirectory" => (
                "Opt_QueueDirectory",
                Target::Text(&mut self.queue_directory),
            ),
            "Opt_DefaultCharSet" => (
                "Opt_DefaultCharSet",
                Target::Text(&mut self.default_charset),
            ),
            "Opt_QueueTimeout" => (
                "Opt_QueueTimeout",
                Target::Duration(&mut self.queue_timeout),
            ),
            "Opt_MinQueueAge" => (
                "Opt_MinQueueAge",
                Target::Duration(&mut self.min_queue_age),
            ),
            "Opt_SevenBitInput" => (
                "Opt_SevenBitInput",
                Target::Flag(&mut self.seven_bit_input),
            ),
            "Opt_IgnoreDots" => {
                ("Opt_IgnoreDots", Target::Flag(&mut self.ignore_dots))
            },
            "Opt_SendMimeErrors" => (
                "Opt_SendMimeErrors",
                Target::Flag(&mut self.send_mime_errors),
            ),
            _ => return None,
        };

        Some(Field { name, target })
    }
}
