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

use super::constants::METER_IN_FEET;
use super::{Measurement, PhysicalQuantity, UnitOfMeasure};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    Meters,
    Feet,
}

impl UnitOfMeasure<f64> for LengthUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Feet => "ft",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Meters => 0,
            Self::Feet => 0,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Feet => value * METER_IN_FEET,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Feet => value / METER_IN_FEET,
        }
    }
}

/// Length with _m_ as SI unit.
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    pub fn m(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    pub fn ft(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Feet,
        }
    }
}
