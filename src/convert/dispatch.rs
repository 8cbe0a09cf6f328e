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

use log::trace;

use super::{Converter, Error, Field, Registry, Target};

impl Registry {
    /// Decode `raw` into `field` using the converter registered for the
    /// field's representation.
    ///
    /// On success, the decoded value has been written into the field. On
    /// failure, the field is unchanged.
    pub fn dispatch(&self, raw: &str, field: Field<'_>) -> Result<(), Error> {
        let Field { name, target } = field;
        let key = target.type_key();
        trace!("dispatch {:?} into {} ({})", raw, name, key);

        let converter =
            self.lookup(key).ok_or(Error::UnsupportedType(key))?;

        match (converter, target) {
            (Converter::Nested(convert), Target::Options(record)) => {
                convert(self, raw, record)
            },

            // A nested converter can only populate a nested record.
            (Converter::Nested(_), _) => Err(Error::UnsupportedType(key)),

            (Converter::Leaf(convert), target) => {
                let value =
                    convert(raw).map_err(|reason| Error::InvalidValue {
                        raw: raw.to_owned(),
                        field: name,
                        reason,
                    })?;

                // Mismatched only if someone registered a converter under
                // the wrong key.
                target.store(value).map_err(|_| Error::UnsupportedType(key))
            },
        }
    }
}
