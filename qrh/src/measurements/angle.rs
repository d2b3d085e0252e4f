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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl UnitOfMeasure<f64> for AngleUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Angle
    }

    fn si() -> Self {
        Self::Radians
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Degrees => "°",
            Self::Radians => "rad",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Degrees => 0,
            Self::Radians => 4,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Degrees => value.to_degrees(),
            Self::Radians => value,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => *value,
        }
    }
}

/// An angle on the compass rose with _rad_ as SI unit.
pub type Angle = Measurement<f64, AngleUnit>;

impl Angle {
    /// Creates an angle in degrees normalized into `[0, 360)`.
    ///
    /// ```
    /// use qrh::measurements::Angle;
    ///
    /// assert_eq!(*Angle::deg(370.0).value(), 10.0);
    /// assert_eq!(*Angle::deg(-20.0).value(), 340.0);
    /// assert_eq!(format!("{}", Angle::deg(130.0)), "130°");
    /// ```
    pub fn deg(value: f64) -> Self {
        Self {
            value: value.rem_euclid(360.0),
            unit: AngleUnit::Degrees,
        }
    }

    pub fn rad(value: f64) -> Self {
        Self {
            value,
            unit: AngleUnit::Radians,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_normalize_on_construction() {
        assert_eq!(*Angle::deg(360.0).value(), 0.0);
        assert_eq!(*Angle::deg(725.0).value(), 5.0);
        assert_eq!(*Angle::deg(-90.0).value(), 270.0);
        assert_eq!(*Angle::deg(180.0).value(), 180.0);
    }

    #[test]
    fn degrees_convert_to_radians() {
        let rad = Angle::deg(180.0).to_si();
        assert!((rad - std::f64::consts::PI).abs() < 1e-12);
    }
}
