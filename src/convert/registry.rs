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

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::debug;

use super::{duration, leaf, options};
use super::{Error, Invalid, Record, Repr, TypeKey, Value};

pub type LeafConverter = fn(&str) -> Result<Value, Invalid>;

/// How the text for one `TypeKey` is decoded.
#[derive(Clone, Copy)]
pub enum Converter {
    /// A pure function from text to value.
    Leaf(LeafConverter),
    /// A converter which populates a nested record, re-entering the registry
    /// for the field it selects.
    Nested(fn(&Registry, &str, &mut dyn Record) -> Result<(), Error>),
}

/// Maps each `TypeKey` to its converter.
///
/// The registry is populated once and only read afterwards, so a shared
/// reference can be used from any number of threads.
#[derive(Clone, Default)]
pub struct Registry {
    converters: HashMap<TypeKey, Converter>,
}

lazy_static! {
    static ref STANDARD: Registry = Registry::with_standard_converters();
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry holding a converter for every
    /// representation the sendmail records use.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    fn with_standard_converters() -> Self {
        let mut this = Self::new();
        this.register(
            TypeKey::optional(Repr::Text),
            Converter::Leaf(leaf::text),
        );
        this.register(
            TypeKey::required(Repr::Flag),
            Converter::Leaf(leaf::flag),
        );
        this.register(
            TypeKey::optional(Repr::Codepoint),
            Converter::Leaf(leaf::codepoint),
        );
        this.register(
            TypeKey::optional(Repr::Short),
            Converter::Leaf(leaf::short),
        );
        this.register(
            TypeKey::optional(Repr::Duration),
            Converter::Leaf(duration::convert),
        );
        this.register(
            TypeKey::optional(Repr::BodyType),
            Converter::Leaf(leaf::body_type),
        );
        this.register(
            TypeKey::optional(Repr::Notify),
            Converter::Leaf(leaf::notify),
        );
        this.register(
            TypeKey::optional(Repr::Relay),
            Converter::Leaf(leaf::relay),
        );
        this.register(
            TypeKey::optional(Repr::Return),
            Converter::Leaf(leaf::return_content),
        );
        this.register(
            TypeKey::required(Repr::Options),
            Converter::Nested(options::convert),
        );

        debug!("registered {} standard converters", this.converters.len());
        this
    }

    /// Register `converter` for `key`, replacing any previous registration.
    pub fn register(&mut self, key: TypeKey, converter: Converter) {
        self.converters.insert(key, converter);
    }

    pub fn lookup(&self, key: TypeKey) -> Option<Converter> {
        self.converters.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn always_seven(_: &str) -> Result<Value, Invalid> {
        Ok(Value::Short(7))
    }

    fn always_eight(_: &str) -> Result<Value, Invalid> {
        Ok(Value::Short(8))
    }

    #[test]
    fn standard_registry_covers_record_representations() {
        let registry = Registry::standard();
        for &repr in Repr::ALL {
            let key = match repr {
                Repr::Flag | Repr::Options => TypeKey::required(repr),
                _ => TypeKey::optional(repr),
            };
            assert!(registry.lookup(key).is_some(), "missing {}", key);
        }
        assert_eq!(Repr::ALL.len(), registry.len());
    }

    #[test]
    fn optional_and_required_keys_are_distinct() {
        let registry = Registry::standard();
        assert!(registry
            .lookup(TypeKey::optional(Repr::Duration))
            .is_some());
        assert!(registry
            .lookup(TypeKey::required(Repr::Duration))
            .is_none());
    }

    #[test]
    fn last_registration_wins() {
        let key = TypeKey::optional(Repr::Short);
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.register(key, Converter::Leaf(always_seven));
        registry.register(key, Converter::Leaf(always_eight));
        assert_eq!(1, registry.len());

        match registry.lookup(key) {
            Some(Converter::Leaf(f)) => assert_eq!(Ok(Value::Short(8)), f("")),
            _ => panic!("expected a leaf converter"),
        }
    }
}
