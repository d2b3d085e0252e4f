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

mod constants {
    /// Saturation vapor pressure at 0 °C in hPa.
    pub const SATURATION_PRESSURE_AT_FREEZING: f64 = 6.11;
    /// Magnus formula coefficients over water.
    pub const MAGNUS_A: f64 = 7.5;
    pub const MAGNUS_B: f64 = 237.3;
    /// A temperature/dew point spread below this hints at fog in °C.
    pub const LOW_SPREAD: f64 = 3.0;
}

/// Relative humidity derived from temperature and dew point.
///
/// Uses the Magnus approximation over water and clamps the result into
/// `0..=100` %, so a dew point reported above the temperature reads as
/// saturated air instead of an impossible percentage.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Humidity {
    percent: f64,
    spread: f64,
}

impl Humidity {
    /// Computes the relative humidity at `temperature` with `dew_point`,
    /// both in °C.
    pub fn new(temperature: f64, dew_point: f64) -> Self {
        let e = Self::saturation_vapor_pressure(dew_point);
        let es = Self::saturation_vapor_pressure(temperature);

        Self {
            percent: (e / es * 100.0).clamp(0.0, 100.0),
            spread: temperature - dew_point,
        }
    }

    /// The relative humidity in percent, within `0..=100`.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// The temperature/dew point spread in °C.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Whether the spread is narrow enough to expect fog or mist.
    pub fn low_spread(&self) -> bool {
        self.spread < constants::LOW_SPREAD
    }

    fn saturation_vapor_pressure(t: f64) -> f64 {
        constants::SATURATION_PRESSURE_AT_FREEZING
            * 10f64.powf(constants::MAGNUS_A * t / (constants::MAGNUS_B + t))
    }
}
