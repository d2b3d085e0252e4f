// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single editable quantity field.
///
/// The field keeps the text exactly as typed next to its numeric reading.
/// Free-form input never errors: text that does not parse to a finite number
/// leaves the field without a value, and everything derived from it becomes
/// unavailable until the text parses again.
///
/// ```
/// use qrh::fc::Field;
///
/// let mut weight = Field::new();
/// weight.edit(" 120.5 ");
///
/// assert_eq!(weight.text(), " 120.5 ");
/// assert_eq!(weight.value(), Some(120.5));
///
/// weight.edit("12o.5");
/// assert_eq!(weight.value(), None);
/// ```
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    text: String,
    value: Option<f64>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the field's text with free-form input.
    pub fn edit(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.value = Self::parse(text);
    }

    /// Overwrites the field with a computed value.
    ///
    /// The text is rendered with `precision` fraction digits and then read
    /// back, so text and value stay consistent with each other.
    pub fn set_value(&mut self, value: f64, precision: usize) {
        self.text = format!("{value:.precision$}");
        self.value = Self::parse(&self.text);
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.text.clear();
        self.value = None;
    }

    /// The text as typed or rendered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric reading, if the text holds a finite number.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn parse(text: &str) -> Option<f64> {
        // "inf" and "NaN" parse as floats but are no readings.
        text.trim().parse().ok().filter(|v: &f64| v.is_finite())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        let mut f = Field::new();

        f.edit("120");
        assert_eq!(f.value(), Some(120.0));

        f.edit("-5.5");
        assert_eq!(f.value(), Some(-5.5));

        f.edit("+.5");
        assert_eq!(f.value(), Some(0.5));

        f.edit("2e3");
        assert_eq!(f.value(), Some(2000.0));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let mut f = Field::new();
        f.edit("  29.92\t");

        assert_eq!(f.value(), Some(29.92));
        assert_eq!(f.text(), "  29.92\t");
    }

    #[test]
    fn junk_yields_no_value() {
        let mut f = Field::new();

        for junk in ["", "   ", "abc", "12o", "1.2.3", "--4"] {
            f.edit(junk);
            assert_eq!(f.value(), None, "{junk:?} should not parse");
        }
    }

    #[test]
    fn non_finite_floats_yield_no_value() {
        let mut f = Field::new();

        for junk in ["inf", "-inf", "infinity", "NaN", "nan"] {
            f.edit(junk);
            assert_eq!(f.value(), None, "{junk:?} should not parse");
        }
    }

    #[test]
    fn set_value_renders_and_rereads() {
        let mut f = Field::new();
        f.set_value(264.5544, 2);

        assert_eq!(f.text(), "264.55");
        assert_eq!(f.value(), Some(264.55));
    }

    #[test]
    fn clear_empties_text_and_value() {
        let mut f = Field::new();
        f.edit("42");
        f.clear();

        assert!(f.is_empty());
        assert_eq!(f.value(), None);
    }
}
