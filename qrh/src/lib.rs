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

//! A quick reference handbook for the flight deck.
//!
//! This library backs a cockpit quick reference pane: a flight computer for
//! the conversions and lookups crews otherwise punch into an E6B, next to
//! the metric RVSM level table and helpers around raw weather reports.
//!
//! The flight computer is session state, not a calculator function: fields
//! hold the text exactly as typed, derived fields follow the last edit, and
//! input that does not parse leaves the derived side empty instead of
//! erroring.
//!
//! ```
//! use qrh::prelude::*;
//!
//! let mut fc = FlightComputer::new();
//!
//! fc.weight_mut().edit_a("1000");
//! assert_eq!(fc.weight().b().text(), "2204.62");
//!
//! fc.wind_mut().edit_heading("130");
//! fc.wind_mut().apply_metar("18009G25KT")?;
//! assert_eq!(fc.wind_scenarios().len(), 3);
//! # Ok::<(), qrh::Error>(())
//! ```

mod error;

pub mod fc;
pub mod measurements;
pub mod rvsm;
pub mod wx;

pub use error::{Error, Result};
pub use fc::FlightComputer;

pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fc::{
        Crosswind, Field, FlightComputer, FuelConverter, FuelSide, FuelType, HeadTailwind,
        Humidity, LinkedPair, RunwayInput, Side, Slope, SlopeDirection, VariableWind, Wind,
        WindInput, WindScenario,
    };
    pub use crate::measurements::{
        Angle, AngleUnit, Density, DensityUnit, Length, LengthUnit, Mass, MassUnit, Measurement,
        Pressure, PressureUnit, Speed, SpeedUnit, Temperature, TemperatureUnit, UnitOfMeasure,
        Volume, VolumeUnit,
    };
    pub use crate::rvsm::{CruiseDirection, RvsmLevel};
    pub use crate::wx::{Icao, ReportAge, ReportTime};
}
