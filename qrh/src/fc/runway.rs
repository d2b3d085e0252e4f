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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::field::Field;

/// Which way a runway slopes seen from threshold A.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlopeDirection {
    Up,
    Down,
}

impl fmt::Display for SlopeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

/// A runway gradient in percent.
///
/// Positive means threshold B lies above threshold A, so the runway climbs
/// when departing from A.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slope {
    percent: f64,
}

impl Slope {
    /// Computes the slope from two threshold elevations in ft over a runway
    /// length in m.
    ///
    /// The units deliberately stay mixed as published on charts, so the
    /// magnitude is a quick-reference gradient, not a surveyed percentage.
    ///
    /// Returns `None` for a length of zero or less.
    pub fn new(threshold_a: f64, threshold_b: f64, length: f64) -> Option<Self> {
        if length <= 0.0 {
            return None;
        }

        Some(Self {
            percent: (threshold_b - threshold_a) / length * 100.0,
        })
    }

    /// The signed gradient in percent.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// The magnitude of the gradient in percent.
    pub fn gradient(&self) -> f64 {
        self.percent.abs()
    }

    pub fn direction(&self) -> SlopeDirection {
        if self.percent >= 0.0 {
            SlopeDirection::Up
        } else {
            SlopeDirection::Down
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} % {}", self.gradient(), self.direction())
    }
}

/// The runway pane of the flight computer.
#[derive(Clone, Default, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunwayInput {
    threshold_a: Field,
    threshold_b: Field,
    length: Field,
}

impl RunwayInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edits the elevation of threshold A in ft.
    pub fn edit_threshold_a(&mut self, text: &str) {
        self.threshold_a.edit(text);
    }

    /// Edits the elevation of threshold B in ft.
    pub fn edit_threshold_b(&mut self, text: &str) {
        self.threshold_b.edit(text);
    }

    /// Edits the runway length in m.
    pub fn edit_length(&mut self, text: &str) {
        self.length.edit(text);
    }

    pub fn threshold_a(&self) -> &Field {
        &self.threshold_a
    }

    pub fn threshold_b(&self) -> &Field {
        &self.threshold_b
    }

    pub fn length(&self) -> &Field {
        &self.length
    }

    /// Clears all runway fields.
    pub fn reset(&mut self) {
        self.threshold_a.clear();
        self.threshold_b.clear();
        self.length.clear();
    }

    /// The slope, once both elevations and a positive length parse.
    pub fn slope(&self) -> Option<Slope> {
        match (
            self.threshold_a.value(),
            self.threshold_b.value(),
            self.length.value(),
        ) {
            (Some(a), Some(b), Some(length)) => Slope::new(a, b, length),
            _ => None,
        }
    }
}
