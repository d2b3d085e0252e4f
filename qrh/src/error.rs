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

use std::error;
use std::fmt;

/// Errors returned when parsing strings at the crate boundary.
///
/// The calculator core itself never fails: a value that can not be computed
/// is simply unavailable and renders as an empty field. `Error` only shows up
/// where the crate parses structured text such as METAR wind groups or ICAO
/// identifiers.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A string does not match the expected format.
    UnexpectedString,
    /// A value parsed fine but is outside its physical domain.
    ImplausibleValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedString => write!(f, "string does not match the expected format"),
            Self::ImplausibleValue => write!(f, "value is outside its physical domain"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
