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
use std::str::FromStr;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::measurements::{Angle, Speed};

use super::field::Field;

/// Wind as reported in a METAR wind group.
///
/// ```
/// use qrh::fc::Wind;
///
/// let wind: Wind = "18009G25KT".parse().unwrap();
///
/// assert_eq!(*wind.direction.value(), 180.0);
/// assert_eq!(*wind.speed.value(), 9.0);
/// assert_eq!(*wind.gust.unwrap().value(), 25.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// The direction the wind is blowing from in °T.
    pub direction: Angle,
    pub speed: Speed,
    pub gust: Option<Speed>,
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind group e.g. `18009KT` or `18009G25KT`.
    ///
    /// Directions above 360° are implausible. Variable winds (`VRB...`)
    /// carry no direction to compute with and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_suffix("KT").ok_or(Error::UnexpectedString)?;

        if body.len() < 5 || !body.is_ascii() {
            return Err(Error::UnexpectedString);
        }

        let (direction, speeds) = body.split_at(3);
        let direction: u16 = direction.parse().map_err(|_| Error::UnexpectedString)?;

        if direction > 360 {
            return Err(Error::ImplausibleValue);
        }

        let (speed, gust) = match speeds.split_once('G') {
            Some((speed, gust)) => (speed, Some(gust)),
            None => (speeds, None),
        };

        let speed: u16 = speed.parse().map_err(|_| Error::UnexpectedString)?;
        let gust = match gust {
            Some(gust) => {
                let gust: u16 = gust.parse().map_err(|_| Error::UnexpectedString)?;
                Some(Speed::kt(gust.into()))
            }
            None => None,
        };

        Ok(Self {
            direction: Angle::deg(direction.into()),
            speed: Speed::kt(speed.into()),
            gust,
        })
    }
}

/// A variable wind sector e.g. `150V210`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableWind {
    pub from: Angle,
    pub to: Angle,
}

impl FromStr for VariableWind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s.split_once('V').ok_or(Error::UnexpectedString)?;

        if from.len() != 3 || to.len() != 3 {
            return Err(Error::UnexpectedString);
        }

        let from: u16 = from.parse().map_err(|_| Error::UnexpectedString)?;
        let to: u16 = to.parse().map_err(|_| Error::UnexpectedString)?;

        if from > 360 || to > 360 {
            return Err(Error::ImplausibleValue);
        }

        Ok(Self {
            from: Angle::deg(from.into()),
            to: Angle::deg(to.into()),
        })
    }
}

/// The along-track wind component.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeadTailwind {
    Headwind(f64),
    Tailwind(f64),
}

impl HeadTailwind {
    /// Splits a signed along-track component, positive into the nose.
    fn from_component(value: f64) -> Self {
        if value >= 0.0 {
            Self::Headwind(value)
        } else {
            Self::Tailwind(-value)
        }
    }
}

impl fmt::Display for HeadTailwind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Headwind(kt) => write!(f, "Headwind {kt:.1} kt"),
            Self::Tailwind(kt) => write!(f, "Tailwind {kt:.1} kt"),
        }
    }
}

/// The cross-track wind component.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crosswind {
    Right(f64),
    Left(f64),
}

impl Crosswind {
    /// Splits a signed cross component, positive from the right.
    fn from_component(value: f64) -> Self {
        if value >= 0.0 {
            Self::Right(value)
        } else {
            Self::Left(-value)
        }
    }
}

impl fmt::Display for Crosswind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right(kt) => write!(f, "Right {kt:.1} kt"),
            Self::Left(kt) => write!(f, "Left {kt:.1} kt"),
        }
    }
}

/// One row of the wind component table.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindScenario {
    label: String,
    direction: Angle,
    speed: Speed,
    head_tail: HeadTailwind,
    cross: Crosswind,
}

impl WindScenario {
    fn new(heading: &Angle, label: String, direction: f64, speed: Speed) -> Self {
        let direction = Angle::deg(direction);
        let relative = relative_angle(&direction, heading);
        let kt = *speed.value();

        Self {
            label,
            direction,
            speed,
            head_tail: HeadTailwind::from_component(kt * relative.to_si().cos()),
            cross: Crosswind::from_component(kt * relative.to_si().sin()),
        }
    }

    /// The row label showing the wind as typed e.g. `130° / 15kt`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The wind direction normalized into `[0, 360)`.
    pub fn direction(&self) -> &Angle {
        &self.direction
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    pub fn head_tail(&self) -> &HeadTailwind {
        &self.head_tail
    }

    pub fn cross(&self) -> &Crosswind {
        &self.cross
    }
}

/// The angle of `direction` relative to `heading`, folded into
/// `[-180, 180)`.
fn relative_angle(direction: &Angle, heading: &Angle) -> Angle {
    Angle::rad(
        (direction.value() - heading.value() + 540.0)
            .rem_euclid(360.0)
            .to_radians()
            - std::f64::consts::PI,
    )
}

/// The wind pane of the flight computer.
///
/// Heading, reported wind and its variations are free-form fields like
/// every other quantity. [`scenarios`](Self::scenarios) derives the
/// component table from whatever subset of them currently parses.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindInput {
    heading: Field,
    direction: Field,
    variable_from: Field,
    variable_to: Field,
    speed: Field,
    gust: Field,
}

impl WindInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edits the aircraft heading in °.
    pub fn edit_heading(&mut self, text: &str) {
        self.heading.edit(text);
    }

    /// Edits the reported wind direction in °.
    pub fn edit_direction(&mut self, text: &str) {
        self.direction.edit(text);
    }

    /// Edits the lower bound of a variable wind sector in °.
    pub fn edit_variable_from(&mut self, text: &str) {
        self.variable_from.edit(text);
    }

    /// Edits the upper bound of a variable wind sector in °.
    pub fn edit_variable_to(&mut self, text: &str) {
        self.variable_to.edit(text);
    }

    /// Edits the reported wind speed in kt.
    pub fn edit_speed(&mut self, text: &str) {
        self.speed.edit(text);
    }

    /// Edits the reported gust speed in kt.
    pub fn edit_gust(&mut self, text: &str) {
        self.gust.edit(text);
    }

    pub fn heading(&self) -> &Field {
        &self.heading
    }

    pub fn direction(&self) -> &Field {
        &self.direction
    }

    pub fn variable_from(&self) -> &Field {
        &self.variable_from
    }

    pub fn variable_to(&self) -> &Field {
        &self.variable_to
    }

    pub fn speed(&self) -> &Field {
        &self.speed
    }

    pub fn gust(&self) -> &Field {
        &self.gust
    }

    /// Clears all wind fields.
    pub fn reset(&mut self) {
        self.heading.clear();
        self.direction.clear();
        self.variable_from.clear();
        self.variable_to.clear();
        self.speed.clear();
        self.gust.clear();
    }

    /// Fills direction, speed, gust and the variable sector from the wind
    /// groups of a METAR fragment.
    ///
    /// The fragment must start with the wind group. A variable wind group
    /// directly after it is optional, anything beyond that is ignored.
    ///
    /// ```
    /// use qrh::fc::WindInput;
    ///
    /// let mut input = WindInput::new();
    /// input.apply_metar("18009G25KT 150V210 9999 FEW030").unwrap();
    ///
    /// assert_eq!(input.direction().text(), "180");
    /// assert_eq!(input.gust().text(), "25");
    /// assert_eq!(input.variable_to().text(), "210");
    /// ```
    pub fn apply_metar(&mut self, fragment: &str) -> Result<(), Error> {
        let mut tokens = fragment.split_whitespace();

        let wind: Wind = tokens.next().unwrap_or("").parse()?;
        let variable: Option<VariableWind> = tokens.next().and_then(|t| t.parse().ok());

        self.direction.edit(&wind.direction.value().to_string());
        self.speed.edit(&wind.speed.value().to_string());

        match wind.gust {
            Some(gust) => self.gust.edit(&gust.value().to_string()),
            None => self.gust.clear(),
        }

        match variable {
            Some(v) => {
                self.variable_from.edit(&v.from.value().to_string());
                self.variable_to.edit(&v.to.value().to_string());
            }
            None => {
                self.variable_from.clear();
                self.variable_to.clear();
            }
        }

        debug!(
            "applied wind group: {}° at {} kt",
            wind.direction.value(),
            wind.speed.value()
        );

        Ok(())
    }

    /// Builds the wind component table.
    ///
    /// Heading, direction and speed are required, without them the table is
    /// empty. Each optional field that parses adds its rows in a fixed
    /// order: the reported wind, gust and gust average, then one pair per
    /// variable sector bound, each with the gust where one is reported.
    pub fn scenarios(&self) -> Vec<WindScenario> {
        let (heading, direction, speed) = match (
            self.heading.value(),
            self.direction.value(),
            self.speed.value(),
        ) {
            (Some(h), Some(d), Some(s)) => (Angle::deg(h), d, s),
            _ => return Vec::new(),
        };

        let gust = self.gust.value();
        let mut rows = Vec::new();

        let mut push = |label: String, dir: f64, kt: f64| {
            rows.push(WindScenario::new(&heading, label, dir, Speed::kt(kt)));
        };

        push(format!("{direction}° / {speed}kt"), direction, speed);

        if let Some(gust) = gust {
            let average = (Speed::kt(speed) + Speed::kt(gust)) / 2.0;

            push(format!("{direction}° / {gust}kt"), direction, gust);
            push(
                format!("{direction}° / {:.1}kt", average.value()),
                direction,
                *average.value(),
            );
        }

        for bound in [self.variable_from.value(), self.variable_to.value()]
            .into_iter()
            .flatten()
        {
            push(format!("{bound}° / {speed}kt"), bound, speed);

            if let Some(gust) = gust {
                push(format!("{bound}° / {gust}kt"), bound, gust);
            }
        }

        debug!("built {} wind scenario(s)", rows.len());

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(heading: &str, direction: &str, speed: &str) -> WindInput {
        let mut input = WindInput::new();
        input.edit_heading(heading);
        input.edit_direction(direction);
        input.edit_speed(speed);
        input
    }

    fn head_kt(scenario: &WindScenario) -> f64 {
        match scenario.head_tail() {
            HeadTailwind::Headwind(kt) => *kt,
            HeadTailwind::Tailwind(kt) => -kt,
        }
    }

    fn cross_kt(scenario: &WindScenario) -> f64 {
        match scenario.cross() {
            Crosswind::Right(kt) => *kt,
            Crosswind::Left(kt) => -kt,
        }
    }

    #[test]
    fn wind_group_parses() {
        let wind: Wind = "18009KT".parse().unwrap();

        assert_eq!(*wind.direction.value(), 180.0);
        assert_eq!(*wind.speed.value(), 9.0);
        assert_eq!(wind.gust, None);
    }

    #[test]
    fn calm_wind_parses() {
        let wind: Wind = "00000KT".parse().unwrap();

        assert_eq!(*wind.direction.value(), 0.0);
        assert_eq!(*wind.speed.value(), 0.0);
    }

    #[test]
    fn due_north_wind_normalizes_to_zero() {
        let wind: Wind = "36010KT".parse().unwrap();
        assert_eq!(*wind.direction.value(), 0.0);
    }

    #[test]
    fn malformed_wind_groups_are_rejected() {
        assert_eq!("18009".parse::<Wind>(), Err(Error::UnexpectedString));
        assert_eq!("VRB05KT".parse::<Wind>(), Err(Error::UnexpectedString));
        assert_eq!("1809KT".parse::<Wind>(), Err(Error::UnexpectedString));
        assert_eq!("37010KT".parse::<Wind>(), Err(Error::ImplausibleValue));
    }

    #[test]
    fn variable_wind_parses() {
        let v: VariableWind = "150V210".parse().unwrap();

        assert_eq!(*v.from.value(), 150.0);
        assert_eq!(*v.to.value(), 210.0);
        assert_eq!("150210".parse::<VariableWind>(), Err(Error::UnexpectedString));
        assert_eq!("400V210".parse::<VariableWind>(), Err(Error::ImplausibleValue));
    }

    #[test]
    fn relative_angle_folds_across_north() {
        let rel = relative_angle(&Angle::deg(10.0), &Angle::deg(350.0));
        assert!((rel.to_si().to_degrees() - 20.0).abs() < 1e-9);

        let rel = relative_angle(&Angle::deg(350.0), &Angle::deg(10.0));
        assert!((rel.to_si().to_degrees() - -20.0).abs() < 1e-9);
    }

    #[test]
    fn direct_crosswind_from_the_right() {
        let rows = input("360", "90", "10").scenarios();

        assert_eq!(rows.len(), 1);
        assert!(head_kt(&rows[0]).abs() < 1e-9);
        assert!((cross_kt(&rows[0]) - 10.0).abs() < 1e-9);
        assert_eq!(format!("{}", rows[0].cross()), "Right 10.0 kt");
    }

    #[test]
    fn direct_tailwind_reads_as_tailwind() {
        let rows = input("0", "180", "10").scenarios();

        assert!((head_kt(&rows[0]) - -10.0).abs() < 1e-9);
        assert_eq!(format!("{}", rows[0].head_tail()), "Tailwind 10.0 kt");
        assert_eq!(format!("{}", rows[0].cross()), "Left 0.0 kt");
    }

    #[test]
    fn quartering_headwind_splits_evenly() {
        let rows = input("360", "45", "10").scenarios();
        let expected = 10.0 / std::f64::consts::SQRT_2;

        assert!((head_kt(&rows[0]) - expected).abs() < 1e-9);
        assert!((cross_kt(&rows[0]) - expected).abs() < 1e-9);
    }

    #[test]
    fn directions_beyond_360_normalize_for_math_but_not_labels() {
        let rows = input("360", "450", "10").scenarios();

        assert_eq!(rows[0].label(), "450° / 10kt");
        assert!((cross_kt(&rows[0]) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn table_is_empty_until_required_fields_parse() {
        assert!(input("", "130", "15").scenarios().is_empty());
        assert!(input("360", "abc", "15").scenarios().is_empty());
        assert!(input("360", "130", "").scenarios().is_empty());
    }

    #[test]
    fn gust_adds_two_rows() {
        let mut input = input("360", "130", "15");
        input.edit_gust("25");
        let rows = input.scenarios();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label(), "130° / 15kt");
        assert_eq!(rows[1].label(), "130° / 25kt");
        assert_eq!(rows[2].label(), "130° / 20.0kt");
    }

    #[test]
    fn variable_bound_without_gust_adds_one_row() {
        let mut input = input("360", "130", "15");
        input.edit_variable_from("100");
        let rows = input.scenarios();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].label(), "100° / 15kt");
    }

    #[test]
    fn full_input_builds_seven_rows_in_order() {
        let mut input = input("360", "130", "15");
        input.edit_gust("25");
        input.edit_variable_from("100");
        input.edit_variable_to("160");
        let rows = input.scenarios();

        let labels: Vec<&str> = rows.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![
                "130° / 15kt",
                "130° / 25kt",
                "130° / 20.0kt",
                "100° / 15kt",
                "100° / 25kt",
                "160° / 15kt",
                "160° / 25kt",
            ]
        );
    }

    #[test]
    fn gust_average_row_keeps_full_math_precision() {
        let mut input = input("90", "90", "10");
        input.edit_gust("15");
        let rows = input.scenarios();

        // 12.5 kt straight on the nose.
        assert_eq!(rows[2].label(), "90° / 12.5kt");
        assert_eq!(*rows[2].direction().value(), 90.0);
        assert_eq!(*rows[2].speed().value(), 12.5);
        assert!((head_kt(&rows[2]) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn metar_fragment_fills_the_fields() {
        let mut input = WindInput::new();
        input.apply_metar("14012G22KT 110V170 9999").unwrap();

        assert_eq!(input.direction().text(), "140");
        assert_eq!(input.speed().text(), "12");
        assert_eq!(input.gust().text(), "22");
        assert_eq!(input.variable_from().text(), "110");
        assert_eq!(input.variable_to().text(), "170");
    }

    #[test]
    fn metar_without_gust_or_sector_clears_them() {
        let mut input = WindInput::new();
        input.edit_gust("25");
        input.edit_variable_from("100");
        input.apply_metar("18009KT 9999").unwrap();

        assert!(input.gust().is_empty());
        assert!(input.variable_from().is_empty());
    }

    #[test]
    fn metar_junk_is_rejected() {
        let mut input = WindInput::new();
        assert_eq!(input.apply_metar("CAVOK"), Err(Error::UnexpectedString));
        assert_eq!(input.apply_metar(""), Err(Error::UnexpectedString));
    }
}
