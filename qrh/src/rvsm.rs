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

//! Metric RVSM cruising levels.
//!
//! China assigns cruising levels in meters. Crews flying feet-calibrated
//! aircraft read the assigned metric level against the feet and flight
//! level actually flown, which rounds to the nearest hundred feet.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Angle, AngleUnit, Length, LengthUnit};

mod constants {
    /// Assigned metric levels for eastbound tracks in m.
    pub const EASTBOUND: [u32; 16] = [
        3000, 3900, 4500, 5100, 5700, 6300, 6900, 7500, 8100, 8700, 9300, 9900, 10500, 11100,
        11700, 12300,
    ];

    /// Assigned metric levels for westbound tracks in m.
    pub const WESTBOUND: [u32; 16] = [
        3400, 4000, 4600, 5200, 5800, 6400, 7000, 7600, 8200, 8800, 9400, 10000, 10600, 11200,
        11800, 12400,
    ];
}

/// The semicircular direction a cruising level is assigned for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CruiseDirection {
    Eastbound,
    Westbound,
}

impl CruiseDirection {
    /// The direction of a track, eastbound up to but excluding 180°.
    pub fn from_course(course: &Angle) -> Self {
        // convert_to does not renormalize, e.g. 7 rad converts to 401°.
        let degrees = course
            .convert_to(AngleUnit::Degrees)
            .value()
            .rem_euclid(360.0);

        if degrees < 180.0 {
            Self::Eastbound
        } else {
            Self::Westbound
        }
    }
}

/// A metric cruising level with the feet equivalent flown against it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RvsmLevel {
    meters: u32,
    feet: u32,
    fl: u16,
}

impl RvsmLevel {
    fn new(meters: u32) -> Self {
        let feet = Length::m(meters.into()).convert_to(LengthUnit::Feet);
        let feet = ((feet.value() / 100.0).round() * 100.0) as u32;

        Self {
            meters,
            feet,
            fl: (feet / 100) as u16,
        }
    }

    /// The assigned level in m.
    pub fn meters(&self) -> u32 {
        self.meters
    }

    /// The flown level in ft, rounded to the nearest hundred.
    pub fn feet(&self) -> u32 {
        self.feet
    }

    /// The flown flight level.
    pub fn fl(&self) -> u16 {
        self.fl
    }
}

impl fmt::Display for RvsmLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FL{}", self.fl)
    }
}

/// The eastbound levels from bottom to top.
pub fn eastbound() -> Vec<RvsmLevel> {
    constants::EASTBOUND.iter().map(|m| RvsmLevel::new(*m)).collect()
}

/// The westbound levels from bottom to top.
pub fn westbound() -> Vec<RvsmLevel> {
    constants::WESTBOUND.iter().map(|m| RvsmLevel::new(*m)).collect()
}

/// The levels assigned along `course`.
///
/// ```
/// use qrh::measurements::Angle;
/// use qrh::rvsm;
///
/// let levels = rvsm::levels_for(&Angle::deg(90.0));
///
/// assert_eq!(levels[0].meters(), 3000);
/// assert_eq!(format!("{}", levels[0]), "FL98");
/// ```
pub fn levels_for(course: &Angle) -> Vec<RvsmLevel> {
    match CruiseDirection::from_course(course) {
        CruiseDirection::Eastbound => eastbound(),
        CruiseDirection::Westbound => westbound(),
    }
}
