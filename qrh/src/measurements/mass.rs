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

use super::constants::KILOGRAM_IN_POUNDS;
use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MassUnit {
    Kilograms,
    Pounds,
}

impl UnitOfMeasure<f64> for MassUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Mass
    }

    fn si() -> Self {
        Self::Kilograms
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Kilograms => 2,
            Self::Pounds => 2,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Kilograms => value,
            Self::Pounds => value * KILOGRAM_IN_POUNDS,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Kilograms => *value,
            Self::Pounds => value / KILOGRAM_IN_POUNDS,
        }
    }
}

/// Mass with _kg_ as SI unit.
pub type Mass = Measurement<f64, MassUnit>;

impl Mass {
    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: MassUnit::Kilograms,
        }
    }

    pub fn lbs(value: f64) -> Self {
        Self {
            value,
            unit: MassUnit::Pounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilograms_to_pounds() {
        let lbs = Mass::kg(120.0).convert_to(MassUnit::Pounds);
        assert!((lbs.value() - 264.5544).abs() < 1e-9);
    }

    #[test]
    fn pounds_to_kilograms() {
        let kg = Mass::lbs(264.5544).convert_to(MassUnit::Kilograms);
        assert!((kg.value() - 120.0).abs() < 1e-9);
    }
}
