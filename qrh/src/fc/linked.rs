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

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Measurement, UnitOfMeasure};

use super::field::Field;

/// The side of a [`LinkedPair`] that was edited last.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    A,
    B,
}

/// Two fields of the same quantity in different units, linked so that
/// editing one derives the other.
///
/// The side edited last is authoritative: its text stays exactly as typed
/// while the peer is derived from it. Derivation only ever runs away from
/// the authoritative side, so the pair can not feed back into itself no
/// matter how often it is edited.
///
/// ```
/// use qrh::fc::LinkedPair;
/// use qrh::measurements::MassUnit;
///
/// let mut weight = LinkedPair::new(MassUnit::Kilograms, MassUnit::Pounds);
/// weight.edit_a("120");
///
/// assert_eq!(weight.a().text(), "120");
/// assert_eq!(weight.b().text(), "264.55");
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkedPair<U> {
    a: Field,
    b: Field,
    unit_a: U,
    unit_b: U,
    last_edited: Option<Side>,
}

impl<U> LinkedPair<U>
where
    U: UnitOfMeasure<f64>,
{
    pub fn new(unit_a: U, unit_b: U) -> Self {
        Self {
            a: Field::new(),
            b: Field::new(),
            unit_a,
            unit_b,
            last_edited: None,
        }
    }

    /// Edits side A and derives side B from it.
    pub fn edit_a(&mut self, text: &str) {
        trace!("edit {}: {text:?}", self.unit_a.symbol());
        self.a.edit(text);
        self.last_edited = Some(Side::A);
        self.recompute();
    }

    /// Edits side B and derives side A from it.
    pub fn edit_b(&mut self, text: &str) {
        trace!("edit {}: {text:?}", self.unit_b.symbol());
        self.b.edit(text);
        self.last_edited = Some(Side::B);
        self.recompute();
    }

    pub fn a(&self) -> &Field {
        &self.a
    }

    pub fn b(&self) -> &Field {
        &self.b
    }

    pub fn unit_a(&self) -> &U {
        &self.unit_a
    }

    pub fn unit_b(&self) -> &U {
        &self.unit_b
    }

    pub fn last_edited(&self) -> Option<Side> {
        self.last_edited
    }

    /// Clears both fields and the edit marker.
    pub fn reset(&mut self) {
        self.a.clear();
        self.b.clear();
        self.last_edited = None;
    }

    fn recompute(&mut self) {
        match self.last_edited {
            Some(Side::A) => match self.a.value() {
                Some(value) => {
                    let derived = Measurement::new(value, self.unit_a).convert_to(self.unit_b);
                    self.b
                        .set_value(*derived.value(), self.unit_b.display_precision());
                }
                None => self.b.clear(),
            },
            Some(Side::B) => match self.b.value() {
                Some(value) => {
                    let derived = Measurement::new(value, self.unit_b).convert_to(self.unit_a);
                    self.a
                        .set_value(*derived.value(), self.unit_a.display_precision());
                }
                None => self.a.clear(),
            },
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::{MassUnit, PressureUnit, SpeedUnit, TemperatureUnit};

    fn weight() -> LinkedPair<MassUnit> {
        LinkedPair::new(MassUnit::Kilograms, MassUnit::Pounds)
    }

    #[test]
    fn editing_a_derives_b() {
        let mut pair = weight();
        pair.edit_a("1000");

        assert_eq!(pair.b().text(), "2204.62");
        assert_eq!(pair.last_edited(), Some(Side::A));
    }

    #[test]
    fn editing_b_derives_a() {
        let mut pair = weight();
        pair.edit_b("2204.62");

        assert_eq!(pair.a().text(), "1000.00");
        assert_eq!(pair.last_edited(), Some(Side::B));
    }

    #[test]
    fn authoritative_text_is_never_reformatted() {
        let mut pair = weight();
        pair.edit_a("120.");

        assert_eq!(pair.a().text(), "120.");
        assert_eq!(pair.b().text(), "264.55");
    }

    #[test]
    fn invalid_input_clears_the_peer() {
        let mut pair = weight();
        pair.edit_a("120");
        pair.edit_a("12x");

        assert_eq!(pair.a().text(), "12x");
        assert!(pair.b().is_empty());
    }

    #[test]
    fn derivation_only_runs_from_the_authoritative_side() {
        let mut pair = weight();
        pair.edit_a("120");

        // Reading the derived side back must not disturb the typed text.
        let derived = pair.b().text().to_string();
        pair.edit_a("120");

        assert_eq!(pair.a().text(), "120");
        assert_eq!(pair.b().text(), derived);
    }

    #[test]
    fn temperature_pair_rounds_to_one_digit() {
        let mut pair = LinkedPair::new(TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
        pair.edit_a("-5");
        assert_eq!(pair.b().text(), "23.0");

        pair.edit_b("86");
        assert_eq!(pair.a().text(), "30.0");
    }

    #[test]
    fn pressure_pair_uses_mixed_precision() {
        let mut pair = LinkedPair::new(PressureUnit::Hectopascals, PressureUnit::InchesOfMercury);
        pair.edit_a("1013.25");
        assert_eq!(pair.b().text(), "29.92");

        pair.edit_b("29.92");
        assert_eq!(pair.a().text(), "1013.2");
    }

    #[test]
    fn speed_pair_round_trip_stays_within_a_cent() {
        let mut pair = LinkedPair::new(SpeedUnit::Knots, SpeedUnit::MetersPerSecond);
        pair.edit_a("15");
        assert_eq!(pair.b().text(), "7.72");

        pair.edit_b("7.72");
        let kt: f64 = pair.a().text().parse().unwrap();
        assert!((kt - 15.0).abs() <= 0.011);
    }

    #[test]
    fn reset_clears_fields_and_marker() {
        let mut pair = weight();
        pair.edit_a("500");
        pair.reset();

        assert!(pair.a().is_empty());
        assert!(pair.b().is_empty());
        assert_eq!(pair.last_edited(), None);
    }
}
