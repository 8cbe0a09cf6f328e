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

//! The sendmail interval syntax, e.g. `1h30m` or `90` (seconds).
//!
//! An interval is a sequence of terms, each a decimal number followed by a
//! unit letter. The final term may omit its unit, in which case it is in
//! seconds. Terms are summed.

use std::time::Duration;

use super::{Invalid, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl Unit {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            's' => Some(Unit::Seconds),
            'm' => Some(Unit::Minutes),
            'h' => Some(Unit::Hours),
            'd' => Some(Unit::Days),
            'w' => Some(Unit::Weeks),
            _ => None,
        }
    }

    fn seconds(self) -> u64 {
        match self {
            Unit::Seconds => 1,
            Unit::Minutes => 60,
            Unit::Hours => 60 * 60,
            Unit::Days => 24 * 60 * 60,
            Unit::Weeks => 7 * 24 * 60 * 60,
        }
    }
}

/// Scale one numeric term. The number must fit in an `i16`.
fn term(digits: &str, unit: Unit) -> Result<Duration, Invalid> {
    let n = digits.parse::<i16>()?;
    // Only ASCII digits reach here, so `n` is never negative.
    Ok(Duration::from_secs(n as u64 * unit.seconds()))
}

fn add(total: Duration, term: Duration) -> Result<Duration, Invalid> {
    total.checked_add(term).ok_or(Invalid::Overflow)
}

/// Parse an interval.
///
/// An unknown unit letter is an error wherever it occurs. A unit letter with
/// no digits before it contributes nothing.
pub fn parse(s: &str) -> Result<Duration, Invalid> {
    let mut total = Duration::from_secs(0);
    // Byte offset of the first digit of the term being accumulated.
    let mut pending = None::<usize>;

    for (ix, ch) in s.char_indices() {
        if ch.is_ascii_digit() {
            pending.get_or_insert(ix);
            continue;
        }

        let unit = Unit::from_char(ch).ok_or(Invalid::Unit(ch))?;
        if let Some(start) = pending.take() {
            total = add(total, term(&s[start..ix], unit)?)?;
        }
    }

    if let Some(start) = pending {
        total = add(total, term(&s[start..], Unit::Seconds)?)?;
    }

    Ok(total)
}

pub fn convert(s: &str) -> Result<Value, Invalid> {
    parse(s).map(Value::Duration)
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    fn secs(n: u64) -> Result<Duration, Invalid> {
        Ok(Duration::from_secs(n))
    }

    #[test]
    fn simple_intervals() {
        assert_eq!(secs(0), parse(""));
        assert_eq!(secs(90), parse("90"));
        assert_eq!(secs(90), parse("90s"));
        assert_eq!(secs(5 * 60), parse("5m"));
        assert_eq!(secs(2 * 3600), parse("2h"));
        assert_eq!(secs(3 * 86400), parse("3d"));
        assert_eq!(secs(604800), parse("1w"));
    }

    #[test]
    fn terms_accumulate() {
        assert_eq!(secs(5400), parse("1h30m"));
        assert_eq!(secs(5400), parse("30m1h"));
        assert_eq!(secs(86400 + 3600 + 60 + 1), parse("1d1h1m1"));
        assert_eq!(secs(120), parse("1m1m"));
        assert_eq!(secs(604800 + 5), parse("1w5"));
    }

    #[test]
    fn units_without_digits_contribute_nothing() {
        assert_eq!(secs(0), parse("h"));
        assert_eq!(secs(3600), parse("1hm"));
        assert_eq!(secs(3600), parse("m1h"));
    }

    #[test]
    fn bad_units() {
        assert_eq!(Err(Invalid::Unit('x')), parse("5x"));
        assert_eq!(Err(Invalid::Unit('x')), parse("1hx"));
        assert_eq!(Err(Invalid::Unit('x')), parse("x5"));
        assert_eq!(Err(Invalid::Unit('H')), parse("1H"));
        assert_eq!(Err(Invalid::Unit(' ')), parse("1h 30m"));
        assert_eq!(Err(Invalid::Unit('-')), parse("-5m"));
        assert_eq!(Err(Invalid::Unit('٣')), parse("٣m"));
    }

    #[test]
    fn oversized_terms() {
        assert_eq!(secs(32767 * 604800), parse("32767w"));
        assert_matches!(Err(Invalid::Number(_)), parse("32768w"));
        assert_matches!(Err(Invalid::Number(_)), parse("1h99999"));
    }

    #[test]
    fn sum_overflow_is_an_error() {
        assert_eq!(
            Err(Invalid::Overflow),
            add(Duration::MAX, Duration::from_secs(1)),
        );
        assert_eq!(
            secs(3),
            add(Duration::from_secs(1), Duration::from_secs(2)),
        );
    }

    fn unit_char() -> impl Strategy<Value = (char, u64)> {
        prop_oneof![
            Just(('s', 1)),
            Just(('m', 60)),
            Just(('h', 3600)),
            Just(('d', 86400)),
            Just(('w', 604800)),
        ]
    }

    proptest! {
        #[test]
        fn total_is_sum_of_scaled_terms(
            terms in prop::collection::vec(
                (0i16..=i16::MAX, unit_char()), 0..8),
            trailing in prop::option::of(0i16..=i16::MAX),
        ) {
            let mut text = String::new();
            let mut expected = 0u64;
            for &(n, (unit, scale)) in &terms {
                text.push_str(&n.to_string());
                text.push(unit);
                expected += n as u64 * scale;
            }
            if let Some(n) = trailing {
                text.push_str(&n.to_string());
                expected += n as u64;
            }

            prop_assert_eq!(secs(expected), parse(&text));
        }
    }
}
