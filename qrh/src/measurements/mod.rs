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

//! Measurements of physical quantities.
//!
//! Every value the calculator works with is a [`Measurement`]: a number
//! paired with its unit of measure. Conversion always runs through the SI
//! unit of the quantity, so each unit only needs to know how to get to and
//! from SI.
//!
//! ```
//! use qrh::measurements::{Mass, MassUnit};
//!
//! let m = Mass::kg(120.0);
//! let lbs = m.convert_to(MassUnit::Pounds);
//!
//! assert_eq!(format!("{lbs}"), "264.55 lbs");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod angle;
mod constants;
mod density;
mod length;
mod mass;
mod pressure;
mod speed;
mod temperature;
mod volume;

pub use angle::{Angle, AngleUnit};
pub use density::{Density, DensityUnit};
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use pressure::{Pressure, PressureUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use volume::{Volume, VolumeUnit};

/// The physical quantity a unit measures.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PhysicalQuantity {
    Angle,
    Density,
    Length,
    Mass,
    Pressure,
    Speed,
    Temperature,
    Volume,
}

/// A unit of measure for the physical quantity `V`.
pub trait UnitOfMeasure<V>: Copy {
    /// The quantity this unit measures.
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    /// The unit's symbol e.g. `kt` for knots.
    fn symbol(&self) -> &'static str;

    /// The number of fraction digits a value in this unit is displayed with.
    fn display_precision(&self) -> usize;

    /// Converts the value from SI into this unit.
    fn from_si(value: V, to: &Self) -> V;

    /// Converts the value from this unit into SI.
    fn to_si(&self, value: &V) -> V;
}

/// A value with its unit of measure.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<V, U> {
    pub(crate) value: V,
    pub(crate) unit: U,
}

impl<V, U> Measurement<V, U>
where
    V: Copy,
    U: UnitOfMeasure<V>,
{
    pub fn new(value: V, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a measurement in `unit` from a value in SI.
    pub fn from_si(value: V, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The value converted into the SI unit of the quantity.
    pub fn to_si(&self) -> V {
        self.unit.to_si(&self.value)
    }

    /// Converts the measurement into another unit of the same quantity.
    pub fn convert_to(self, unit: U) -> Self {
        Self {
            value: U::from_si(self.unit.to_si(&self.value), &unit),
            unit,
        }
    }
}

impl<V, U> fmt::Display for Measurement<V, U>
where
    V: Copy + fmt::Display,
    U: UnitOfMeasure<V>,
{
    /// Formats the value followed by the unit's symbol.
    ///
    /// The number of fraction digits defaults to the unit's display
    /// precision but honors an explicit precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or_else(|| self.unit.display_precision());
        let symbol = self.unit.symbol();

        // The degree sign attaches to the value, all other symbols are
        // separated by a space.
        if symbol == "°" {
            write!(f, "{:.*}{symbol}", precision, self.value)
        } else {
            write!(f, "{:.*} {symbol}", precision, self.value)
        }
    }
}

impl<V, U> Add for Measurement<V, U>
where
    V: Copy + Add<Output = V>,
    U: UnitOfMeasure<V>,
{
    type Output = Self;

    /// Adds the right-hand side converted into the unit of the left.
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<V, U> Sub for Measurement<V, U>
where
    V: Copy + Sub<Output = V>,
    U: UnitOfMeasure<V>,
{
    type Output = Self;

    /// Subtracts the right-hand side converted into the unit of the left.
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<V, U> Mul<V> for Measurement<V, U>
where
    V: Copy + Mul<Output = V>,
    U: UnitOfMeasure<V>,
{
    type Output = Self;

    fn mul(self, rhs: V) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<V, U> Div<V> for Measurement<V, U>
where
    V: Copy + Div<Output = V>,
    U: UnitOfMeasure<V>,
{
    type Output = Self;

    fn div(self, rhs: V) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_convert_through_si() {
        let kg = Mass::kg(1000.0);
        let lbs = kg.convert_to(MassUnit::Pounds);

        assert!((lbs.value() - 2204.62).abs() < 1e-9);
        assert_eq!(*lbs.unit(), MassUnit::Pounds);
    }

    #[test]
    fn units_within_a_module_share_the_quantity() {
        assert_eq!(MassUnit::quantity(), PhysicalQuantity::Mass);
        assert_eq!(SpeedUnit::quantity(), PhysicalQuantity::Speed);
        assert_eq!(TemperatureUnit::quantity(), PhysicalQuantity::Temperature);
    }

    #[test]
    fn arithmetic_converts_the_right_hand_side() {
        let sum = Length::m(1.0) + Length::ft(3.28084);
        assert!((sum.value() - 2.0).abs() < 1e-9);

        let diff = Speed::kt(10.0) - Speed::kt(4.0);
        assert!((diff.value() - 6.0).abs() < 1e-9);

        let scaled = Speed::kt(9.0) * 2.0;
        assert!((scaled.value() - 18.0).abs() < 1e-9);

        let halved = Speed::kt(25.0) / 2.0;
        assert!((halved.value() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn display_defaults_to_the_units_precision() {
        assert_eq!(format!("{}", Speed::kt(15.0)), "15.00 kt");
        assert_eq!(format!("{}", Temperature::c(-5.0)), "-5.0 °C");
        assert_eq!(format!("{:.0}", Speed::kt(15.4)), "15 kt");
    }
}
