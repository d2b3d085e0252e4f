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

//! Flight Computer.
//!
//! The cockpit-style calculator behind the quick reference pane. Every
//! input is free-form text, every output is derived from whatever currently
//! parses, and nothing in here ever returns an error to the pilot: fields
//! that can not be computed simply read empty.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{MassUnit, PressureUnit, SpeedUnit, TemperatureUnit};

mod field;
mod fuel;
mod humidity;
mod linked;
mod runway;
mod wind;

pub use field::Field;
pub use fuel::{FuelConverter, FuelSide, FuelType};
pub use humidity::Humidity;
pub use linked::{LinkedPair, Side};
pub use runway::{RunwayInput, Slope, SlopeDirection};
pub use wind::{Crosswind, HeadTailwind, VariableWind, Wind, WindInput, WindScenario};

/// The E6B replacement: linked unit conversions, wind components and the
/// small derived readings a crew looks up in flight.
///
/// Each conversion pair puts the metric unit on side A: kg, °C, hPa and kt
/// are `a`, their counterparts `b`.
///
/// ```
/// use qrh::fc::FlightComputer;
///
/// let mut fc = FlightComputer::new();
/// fc.weight_mut().edit_a("120");
///
/// assert_eq!(fc.weight().b().text(), "264.55");
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightComputer {
    weight: LinkedPair<MassUnit>,
    fuel: FuelConverter,
    temperature: LinkedPair<TemperatureUnit>,
    dew_point: Field,
    pressure: LinkedPair<PressureUnit>,
    speed: LinkedPair<SpeedUnit>,
    wind: WindInput,
    runway: RunwayInput,
}

impl FlightComputer {
    pub fn new() -> Self {
        Self {
            weight: LinkedPair::new(MassUnit::Kilograms, MassUnit::Pounds),
            fuel: FuelConverter::new(),
            temperature: LinkedPair::new(TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            dew_point: Field::new(),
            pressure: LinkedPair::new(PressureUnit::Hectopascals, PressureUnit::InchesOfMercury),
            speed: LinkedPair::new(SpeedUnit::Knots, SpeedUnit::MetersPerSecond),
            wind: WindInput::new(),
            runway: RunwayInput::new(),
        }
    }

    /// The weight pair, kg on side A and lbs on side B.
    pub fn weight(&self) -> &LinkedPair<MassUnit> {
        &self.weight
    }

    pub fn weight_mut(&mut self) -> &mut LinkedPair<MassUnit> {
        &mut self.weight
    }

    /// The fuel mass/volume/density triple.
    pub fn fuel(&self) -> &FuelConverter {
        &self.fuel
    }

    pub fn fuel_mut(&mut self) -> &mut FuelConverter {
        &mut self.fuel
    }

    /// The temperature pair, °C on side A and °F on side B.
    pub fn temperature(&self) -> &LinkedPair<TemperatureUnit> {
        &self.temperature
    }

    pub fn temperature_mut(&mut self) -> &mut LinkedPair<TemperatureUnit> {
        &mut self.temperature
    }

    /// The dew point in °C.
    pub fn dew_point(&self) -> &Field {
        &self.dew_point
    }

    pub fn dew_point_mut(&mut self) -> &mut Field {
        &mut self.dew_point
    }

    /// The pressure pair, hPa on side A and inHg on side B.
    pub fn pressure(&self) -> &LinkedPair<PressureUnit> {
        &self.pressure
    }

    pub fn pressure_mut(&mut self) -> &mut LinkedPair<PressureUnit> {
        &mut self.pressure
    }

    /// The speed pair, kt on side A and m/s on side B.
    pub fn speed(&self) -> &LinkedPair<SpeedUnit> {
        &self.speed
    }

    pub fn speed_mut(&mut self) -> &mut LinkedPair<SpeedUnit> {
        &mut self.speed
    }

    pub fn wind(&self) -> &WindInput {
        &self.wind
    }

    pub fn wind_mut(&mut self) -> &mut WindInput {
        &mut self.wind
    }

    pub fn runway(&self) -> &RunwayInput {
        &self.runway
    }

    pub fn runway_mut(&mut self) -> &mut RunwayInput {
        &mut self.runway
    }

    /// The wind component table for the current wind pane.
    pub fn wind_scenarios(&self) -> Vec<WindScenario> {
        self.wind.scenarios()
    }

    /// Relative humidity from the °C side of the temperature pair and the
    /// dew point.
    ///
    /// A temperature typed in °F works just as well since the °C side is
    /// derived from it.
    pub fn humidity(&self) -> Option<Humidity> {
        match (self.temperature.a().value(), self.dew_point.value()) {
            (Some(t), Some(td)) => Some(Humidity::new(t, td)),
            _ => None,
        }
    }

    /// The runway slope for the current runway pane.
    pub fn runway_slope(&self) -> Option<Slope> {
        self.runway.slope()
    }

    pub fn reset_weight(&mut self) {
        self.weight.reset();
    }

    pub fn reset_fuel(&mut self) {
        self.fuel.reset();
    }

    /// Clears temperature, dew point and pressure together, they share a
    /// pane.
    pub fn reset_temperature_pressure(&mut self) {
        self.temperature.reset();
        self.dew_point.clear();
        self.pressure.reset();
    }

    pub fn reset_speed(&mut self) {
        self.speed.reset();
    }

    pub fn reset_wind(&mut self) {
        self.wind.reset();
    }

    pub fn reset_runway(&mut self) {
        self.runway.reset();
    }

    /// Resets every pane, including the fuel density back to its default.
    pub fn reset(&mut self) {
        debug!("flight computer reset");

        self.reset_weight();
        self.reset_fuel();
        self.reset_temperature_pressure();
        self.reset_speed();
        self.reset_wind();
        self.reset_runway();
    }
}

impl Default for FlightComputer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_uses_the_celsius_side() {
        let mut fc = FlightComputer::new();
        fc.temperature_mut().edit_a("20");
        fc.dew_point_mut().edit("18");

        let humidity = fc.humidity().unwrap();
        assert!(humidity.low_spread());
    }

    #[test]
    fn humidity_follows_a_fahrenheit_edit() {
        let mut fc = FlightComputer::new();
        fc.temperature_mut().edit_b("86");
        fc.dew_point_mut().edit("10");

        // 86 °F derives 30.0 °C, the humidity reads from there.
        let humidity = fc.humidity().unwrap();
        assert!((humidity.spread() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn humidity_is_unavailable_without_a_dew_point() {
        let mut fc = FlightComputer::new();
        fc.temperature_mut().edit_a("20");

        assert_eq!(fc.humidity(), None);
    }

    #[test]
    fn panes_are_independent() {
        let mut fc = FlightComputer::new();
        fc.weight_mut().edit_a("1000");
        fc.speed_mut().edit_a("15");
        fc.reset_speed();

        assert!(fc.speed().a().is_empty());
        assert_eq!(fc.weight().b().text(), "2204.62");
    }

    #[test]
    fn shared_pane_resets_together() {
        let mut fc = FlightComputer::new();
        fc.temperature_mut().edit_a("20");
        fc.dew_point_mut().edit("18");
        fc.pressure_mut().edit_a("1013");
        fc.reset_temperature_pressure();

        assert!(fc.temperature().a().is_empty());
        assert!(fc.dew_point().is_empty());
        assert!(fc.pressure().a().is_empty());
    }

    #[test]
    fn full_reset_clears_every_pane() {
        let mut fc = FlightComputer::new();
        fc.weight_mut().edit_a("1000");
        fc.fuel_mut().edit_mass("800");
        fc.fuel_mut().edit_density("0.75");
        fc.wind_mut().edit_heading("360");
        fc.runway_mut().edit_length("1000");
        fc.reset();

        assert!(fc.weight().a().is_empty());
        assert!(fc.fuel().mass().is_empty());
        assert_eq!(fc.fuel().density().text(), "0.8");
        assert!(fc.wind().heading().is_empty());
        assert!(fc.runway().length().is_empty());
    }
}
