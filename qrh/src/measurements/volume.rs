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

use super::constants::US_GALLON_IN_LITERS;
use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VolumeUnit {
    Liters,
    USGallons,
}

impl UnitOfMeasure<f64> for VolumeUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Volume
    }

    fn si() -> Self {
        Self::Liters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Liters => "L",
            Self::USGallons => "gal",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Liters => 2,
            Self::USGallons => 2,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Liters => value,
            Self::USGallons => value / US_GALLON_IN_LITERS,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Liters => *value,
            Self::USGallons => value * US_GALLON_IN_LITERS,
        }
    }
}

/// Volume with _L_ as reference unit.
pub type Volume = Measurement<f64, VolumeUnit>;

impl Volume {
    pub fn l(value: f64) -> Self {
        Self {
            value,
            unit: VolumeUnit::Liters,
        }
    }

    pub fn gal(value: f64) -> Self {
        Self {
            value,
            unit: VolumeUnit::USGallons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallons_to_liters() {
        let l = Volume::gal(1.0).convert_to(VolumeUnit::Liters);
        assert!((l.value() - 3.785412).abs() < 1e-9);
    }
}
