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

use super::constants::KNOT_IN_METERS_PER_SECOND;
use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
}

impl UnitOfMeasure<f64> for SpeedUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Speed
    }

    fn si() -> Self {
        Self::MetersPerSecond
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::MetersPerSecond => "m/s",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Knots => 2,
            Self::MetersPerSecond => 2,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Knots => value / KNOT_IN_METERS_PER_SECOND,
            Self::MetersPerSecond => value,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Knots => value * KNOT_IN_METERS_PER_SECOND,
            Self::MetersPerSecond => *value,
        }
    }
}

/// Speed with _m/s_ as SI unit.
pub type Speed = Measurement<f64, SpeedUnit>;

impl Speed {
    pub fn kt(value: f64) -> Self {
        Self {
            value,
            unit: SpeedUnit::Knots,
        }
    }

    pub fn ms(value: f64) -> Self {
        Self {
            value,
            unit: SpeedUnit::MetersPerSecond,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knots_to_meters_per_second() {
        let ms = Speed::kt(15.0).convert_to(SpeedUnit::MetersPerSecond);
        assert!((ms.value() - 7.71666).abs() < 1e-5);
    }

    #[test]
    fn meters_per_second_to_knots() {
        let kt = Speed::ms(10.0).convert_to(SpeedUnit::Knots);
        assert!((kt.value() - 19.438466).abs() < 1e-5);
    }
}
