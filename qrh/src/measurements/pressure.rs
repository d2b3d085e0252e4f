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

use super::constants::HECTOPASCAL_IN_INCHES_HG;
use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    Hectopascals,
    InchesOfMercury,
}

impl UnitOfMeasure<f64> for PressureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Pressure
    }

    fn si() -> Self {
        Self::Hectopascals
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Hectopascals => "hPa",
            Self::InchesOfMercury => "inHg",
        }
    }

    /// Altimeter settings read to a tenth of a hectopascal but to a
    /// hundredth of an inch.
    fn display_precision(&self) -> usize {
        match self {
            Self::Hectopascals => 1,
            Self::InchesOfMercury => 2,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Hectopascals => value,
            Self::InchesOfMercury => value * HECTOPASCAL_IN_INCHES_HG,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Hectopascals => *value,
            Self::InchesOfMercury => value / HECTOPASCAL_IN_INCHES_HG,
        }
    }
}

/// Barometric pressure with _hPa_ as reference unit.
pub type Pressure = Measurement<f64, PressureUnit>;

impl Pressure {
    pub fn hpa(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::Hectopascals,
        }
    }

    pub fn inhg(value: f64) -> Self {
        Self {
            value,
            unit: PressureUnit::InchesOfMercury,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pressure_in_inches() {
        let inhg = Pressure::hpa(1013.25).convert_to(PressureUnit::InchesOfMercury);
        assert!((inhg.value() - 29.9213).abs() < 1e-3);
    }

    #[test]
    fn inches_back_to_hectopascals() {
        let hpa = Pressure::inhg(29.92).convert_to(PressureUnit::Hectopascals);
        assert!((hpa.value() - 1013.2).abs() < 0.1);
    }
}
