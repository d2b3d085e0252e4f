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
pub enum DensityUnit {
    KilogramsPerLiter,
}

impl UnitOfMeasure<f64> for DensityUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Density
    }

    fn si() -> Self {
        Self::KilogramsPerLiter
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::KilogramsPerLiter => "kg/L",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::KilogramsPerLiter => 3,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::KilogramsPerLiter => value,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::KilogramsPerLiter => *value,
        }
    }
}

/// Density with _kg/L_ as reference unit, the handy one for fuel.
pub type Density = Measurement<f64, DensityUnit>;

impl Density {
    pub const fn kg_per_l(value: f64) -> Self {
        Self {
            value,
            unit: DensityUnit::KilogramsPerLiter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_displays_with_its_symbol() {
        assert_eq!(format!("{}", Density::kg_per_l(0.8)), "0.800 kg/L");
    }
}
