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

//! Type-directed decoding of raw parameter text into typed record fields.
//!
//! A record exposes its fields as `Field`s, each carrying a `Target` which
//! borrows the actual storage. The `Registry` maps the `TypeKey` of a target
//! to the converter which understands that representation, and
//! `Registry::dispatch` ties the two together.
//!
//! Decoding never partially writes a destination: either the converter
//! succeeds and the whole value is stored, or the field is left untouched and
//! an error is returned.

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

use thiserror::Error;

use crate::sendmail::types::{
    BodyType, NotifyConditions, RelaySpec, ReturnContent,
};

mod dispatch;
pub mod duration;
pub mod leaf;
pub mod options;
pub mod registry;

pub use self::registry::{Converter, Registry};

/// Every representation a record field may declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Repr {
    Text,
    Flag,
    Codepoint,
    Short,
    Duration,
    BodyType,
    Notify,
    Relay,
    Return,
    Options,
}

impl Repr {
    pub const ALL: &'static [Repr] = &[
        Repr::Text,
        Repr::Flag,
        Repr::Codepoint,
        Repr::Short,
        Repr::Duration,
        Repr::BodyType,
        Repr::Notify,
        Repr::Relay,
        Repr::Return,
        Repr::Options,
    ];

    fn name(self) -> &'static str {
        match self {
            Repr::Text => "String",
            Repr::Flag => "bool",
            Repr::Codepoint => "char",
            Repr::Short => "i16",
            Repr::Duration => "Duration",
            Repr::BodyType => "BodyType",
            Repr::Notify => "NotifyConditions",
            Repr::Relay => "RelaySpec",
            Repr::Return => "ReturnContent",
            Repr::Options => "Options",
        }
    }
}

/// Identifies the converter for a destination.
///
/// Optional destinations are distinct from mandatory ones with the same
/// representation, and display with a leading `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeKey {
    pub repr: Repr,
    pub optional: bool,
}

impl TypeKey {
    pub const fn required(repr: Repr) -> Self {
        TypeKey {
            repr,
            optional: false,
        }
    }

    pub const fn optional(repr: Repr) -> Self {
        TypeKey {
            repr,
            optional: true,
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.optional {
            write!(f, "*")?;
        }
        write!(f, "{}", self.repr.name())
    }
}

/// A value produced by a leaf converter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Flag(bool),
    Codepoint(char),
    Short(i16),
    Duration(Duration),
    BodyType(BodyType),
    Notify(NotifyConditions),
    Relay(RelaySpec),
    Return(ReturnContent),
}

/// Mutable access to the storage of one record field.
pub enum Target<'a> {
    Text(&'a mut Option<String>),
    Flag(&'a mut bool),
    Codepoint(&'a mut Option<char>),
    Short(&'a mut Option<i16>),
    Duration(&'a mut Option<Duration>),
    BodyType(&'a mut Option<BodyType>),
    Notify(&'a mut Option<NotifyConditions>),
    Relay(&'a mut Option<RelaySpec>),
    Return(&'a mut Option<ReturnContent>),
    /// A nested record whose fields are addressed by `name=value` input.
    Options(&'a mut dyn Record),
}

impl<'a> Target<'a> {
    pub fn type_key(&self) -> TypeKey {
        match *self {
            Target::Text(_) => TypeKey::optional(Repr::Text),
            Target::Flag(_) => TypeKey::required(Repr::Flag),
            Target::Codepoint(_) => TypeKey::optional(Repr::Codepoint),
            Target::Short(_) => TypeKey::optional(Repr::Short),
            Target::Duration(_) => TypeKey::optional(Repr::Duration),
            Target::BodyType(_) => TypeKey::optional(Repr::BodyType),
            Target::Notify(_) => TypeKey::optional(Repr::Notify),
            Target::Relay(_) => TypeKey::optional(Repr::Relay),
            Target::Return(_) => TypeKey::optional(Repr::Return),
            Target::Options(_) => TypeKey::required(Repr::Options),
        }
    }

    /// Write `value` into the target.
    ///
    /// If `value` is not of the target's representation, nothing is written
    /// and the value is handed back.
    pub fn store(self, value: Value) -> Result<(), Value> {
        match (self, value) {
            (Target::Text(t), Value::Text(v)) => *t = Some(v),
            (Target::Flag(t), Value::Flag(v)) => *t = v,
            (Target::Codepoint(t), Value::Codepoint(v)) => *t = Some(v),
            (Target::Short(t), Value::Short(v)) => *t = Some(v),
            (Target::Duration(t), Value::Duration(v)) => *t = Some(v),
            (Target::BodyType(t), Value::BodyType(v)) => *t = Some(v),
            (Target::Notify(t), Value::Notify(v)) => *t = Some(v),
            (Target::Relay(t), Value::Relay(v)) => *t = Some(v),
            (Target::Return(t), Value::Return(v)) => *t = Some(v),
            (_, v) => return Err(v),
        }

        Ok(())
    }
}

impl fmt::Debug for Target<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Target({})", self.type_key())
    }
}

/// A named field of some record, ready to receive a decoded value.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub target: Target<'a>,
}

/// A record whose fields can be populated from raw text.
///
/// The mapping from names to fields is explicit and closed; every name a
/// record understands is listed by `field_names`.
pub trait Record {
    fn field_names(&self) -> &'static [&'static str];
    fn field(&mut self, name: &str) -> Option<Field<'_>>;
}

/// Why a leaf converter rejected its input.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Invalid {
    #[error("unrecognised token {0:?}")]
    Token(String),
    #[error("bad number: {0}")]
    Number(#[from] ParseIntError),
    #[error("unknown duration unit {0:?}")]
    Unit(char),
    #[error("empty value")]
    Empty,
    #[error("invalid character encoding")]
    Encoding,
    #[error("interval too long")]
    Overflow,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no converter registered for {0}")]
    UnsupportedType(TypeKey),
    #[error("invalid value {raw:?} for {field}: {reason}")]
    InvalidValue {
        raw: String,
        field: &'static str,
        reason: Invalid,
    },
    #[error("unknown option {0:?}")]
    UnknownOption(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn type_key_display() {
        assert_eq!("*Duration", TypeKey::optional(Repr::Duration).to_string());
        assert_eq!("Duration", TypeKey::required(Repr::Duration).to_string());
        assert_eq!("bool", TypeKey::required(Repr::Flag).to_string());
        assert_eq!("Options", TypeKey::required(Repr::Options).to_string());
    }

    #[test]
    fn store_mismatch_leaves_target_untouched() {
        let mut hops = Some(3i16);
        assert_eq!(
            Err(Value::Flag(true)),
            Target::Short(&mut hops).store(Value::Flag(true)),
        );
        assert_eq!(Some(3), hops);

        assert_eq!(Ok(()), Target::Short(&mut hops).store(Value::Short(7)));
        assert_eq!(Some(7), hops);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "invalid value \"9BIT\" for B: unrecognised token \"9BIT\"",
            Error::InvalidValue {
                raw: "9BIT".to_owned(),
                field: "B",
                reason: Invalid::Token("9BIT".to_owned()),
            }
            .to_string(),
        );
        assert_eq!(
            "no converter registered for *RelaySpec",
            Error::UnsupportedType(TypeKey::optional(Repr::Relay)).to_string(),
        );
    }
}
