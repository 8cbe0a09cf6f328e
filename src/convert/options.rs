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

//! `name=value` options, as given to `sendmail -O`.
//!
//! The option name selects a field on the options record, and the value is
//! then decoded by whatever converter that field's representation calls for.

use log::debug;

use super::{Error, Record, Registry};

/// Prefix under which records expose the fields addressable as options.
pub const OPTION_FIELD_PREFIX: &str = "Opt_";

/// Split `name=value`. A missing `=` means an empty value.
pub fn split(s: &str) -> (&str, &str) {
    s.split_once('=').unwrap_or((s, ""))
}

pub fn convert(
    registry: &Registry,
    s: &str,
    record: &mut dyn Record,
) -> Result<(), Error> {
    let (name, value) = split(s);
    let field_name = format!("{}{}", OPTION_FIELD_PREFIX, name);
    let field = record
        .field(&field_name)
        .ok_or_else(|| Error::UnknownOption(name.to_owned()))?;

    debug!("option {} resolved to field {}", name, field.name);
    registry.dispatch(value, field)
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;
    use crate::convert::{Field, Invalid, Target};
    use crate::sendmail::SendmailOptions;

    fn set(options: &mut SendmailOptions, s: &str) -> Result<(), Error> {
        convert(Registry::standard(), s, options)
    }

    #[test]
    fn split_on_first_equals() {
        assert_eq!(("Foo", "bar"), split("Foo=bar"));
        assert_eq!(("Foo", "a=b"), split("Foo=a=b"));
        assert_eq!(("Foo", ""), split("Foo"));
        assert_eq!(("Foo", ""), split("Foo="));
        assert_eq!(("", "x"), split("=x"));
    }

    #[test]
    fn option_reenters_dispatch_for_field() {
        let mut options = SendmailOptions::default();
        set(&mut options, "MaxHopCount=25").unwrap();
        set(&mut options, "DeliveryMode=background").unwrap();
        set(&mut options, "QueueTimeout=5d").unwrap();
        set(&mut options, "QueueDirectory=/var/spool/mqueue").unwrap();
        set(&mut options, "SevenBitInput").unwrap();

        assert_eq!(Some(25), options.max_hop_count);
        assert_eq!(Some('b'), options.delivery_mode);
        assert_eq!(Some(Duration::from_secs(5 * 86400)), options.queue_timeout);
        assert_eq!(
            Some("/var/spool/mqueue".to_owned()),
            options.queue_directory,
        );
        assert!(options.seven_bit_input);
    }

    #[test]
    fn unknown_option() {
        let mut options = SendmailOptions::default();
        assert_eq!(
            Err(Error::UnknownOption("Foo".to_owned())),
            set(&mut options, "Foo=bar"),
        );
        // Names are matched exactly, without the prefix.
        assert_eq!(
            Err(Error::UnknownOption("Opt_MaxHopCount".to_owned())),
            set(&mut options, "Opt_MaxHopCount=3"),
        );
        assert_eq!(
            Err(Error::UnknownOption("maxhopcount".to_owned())),
            set(&mut options, "maxhopcount=3"),
        );
        assert_eq!(None, options.max_hop_count);
    }

    #[test]
    fn nested_errors_propagate() {
        let mut options = SendmailOptions::default();
        assert_eq!(
            Err(Error::InvalidValue {
                raw: "".to_owned(),
                field: "Opt_DeliveryMode",
                reason: Invalid::Empty,
            }),
            set(&mut options, "DeliveryMode"),
        );
        assert_eq!(
            Err(Error::InvalidValue {
                raw: "5y".to_owned(),
                field: "Opt_MinQueueAge",
                reason: Invalid::Unit('y'),
            }),
            set(&mut options, "MinQueueAge=5y"),
        );
    }

    struct Foo {
        bar: Option<String>,
    }

    impl Record for Foo {
        fn field_names(&self) -> &'static [&'static str] {
            &["Opt_Foo"]
        }

        fn field(&mut self, name: &str) -> Option<Field<'_>> {
            match name {
                "Opt_Foo" => Some(Field {
                    name: "Opt_Foo",
                    target: Target::Text(&mut self.bar),
                }),
                _ => None,
            }
        }
    }

    #[test]
    fn resolves_against_any_record() {
        let mut foo = Foo { bar: None };
        convert(Registry::standard(), "Foo=bar", &mut foo).unwrap();
        assert_eq!(Some("bar".to_owned()), foo.bar);
    }
}
