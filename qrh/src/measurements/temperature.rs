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
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl UnitOfMeasure<f64> for TemperatureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Temperature
    }

    fn si() -> Self {
        Self::Celsius
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn display_precision(&self) -> usize {
        match self {
            Self::Celsius => 1,
            Self::Fahrenheit => 1,
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Celsius => value,
            Self::Fahrenheit => value * 9.0 / 5.0 + 32.0,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Celsius => *value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// Temperature with _°C_ as reference unit.
pub type Temperature = Measurement<f64, TemperatureUnit>;

impl Temperature {
    pub fn c(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }

    pub fn f(value: f64) -> Self {
        Self {
            value,
            unit: TemperatureUnit::Fahrenheit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        let f = Temperature::c(30.0).convert_to(TemperatureUnit::Fahrenheit);
        assert!((f.value() - 86.0).abs() < 1e-9);
    }

    #[test]
    fn fahrenheit_to_celsius() {
        let c = Temperature::f(23.0).convert_to(TemperatureUnit::Celsius);
        assert!((c.value() - -5.0).abs() < 1e-9);
    }

    #[test]
    fn freezing_point_round_trip() {
        let f = Temperature::c(0.0).convert_to(TemperatureUnit::Fahrenheit);
        assert!((f.value() - 32.0).abs() < 1e-9);
    }
}
