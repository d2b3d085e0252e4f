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

use std::result::Result;

use qrh::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The weight pane as the UI renders it.
#[derive(Serialize)]
struct WeightPane {
    kg: String,
    lbs: String,
}

#[derive(Serialize)]
struct FuelPane {
    kg: String,
    liters: String,
    density: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemperaturePane {
    c: String,
    f: String,
    dew_point: String,
}

#[derive(Serialize)]
struct PressurePane {
    hpa: String,
    inhg: String,
}

#[derive(Serialize)]
struct SpeedPane {
    kt: String,
    ms: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WindPane {
    heading: String,
    direction: String,
    variable_from: String,
    variable_to: String,
    speed: String,
    gust: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunwayPane {
    threshold_a: String,
    threshold_b: String,
    length: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioRow {
    label: String,
    head_tail: String,
    cross: String,
}

#[wasm_bindgen(js_name = FuelType)]
#[derive(Debug, Clone, Copy)]
pub struct JsFuelType {
    inner: FuelType,
}

#[wasm_bindgen(js_class = FuelType)]
impl JsFuelType {
    #[wasm_bindgen(constructor)]
    pub fn new(fuel_type: String) -> Result<Self, JsError> {
        let inner = match fuel_type.as_ref() {
            "AvGas" => FuelType::AvGas,
            "Diesel" => FuelType::Diesel,
            "JetA" => FuelType::JetA,
            _ => return Err(JsError::new(&format!("invalid fuel type: {fuel_type}"))),
        };

        Ok(Self { inner })
    }

    #[wasm_bindgen(js_name = avGas)]
    pub fn av_gas() -> Self {
        Self {
            inner: FuelType::AvGas,
        }
    }

    pub fn diesel() -> Self {
        Self {
            inner: FuelType::Diesel,
        }
    }

    #[wasm_bindgen(js_name = jetA)]
    pub fn jet_a() -> Self {
        Self {
            inner: FuelType::JetA,
        }
    }

    /// The density in kg/L the type stands for.
    pub fn density(&self) -> f64 {
        *self.inner.density().value()
    }
}

impl From<JsFuelType> for FuelType {
    fn from(value: JsFuelType) -> Self {
        value.inner
    }
}

impl From<FuelType> for JsFuelType {
    fn from(value: FuelType) -> Self {
        Self { inner: value }
    }
}

/// The flight computer as a stateful class.
///
/// Edit methods take the raw text of the edited input and return a snapshot
/// of the pane the field belongs to, ready for a state update.
#[wasm_bindgen(js_name = FlightComputer)]
#[derive(Default)]
pub struct JsFlightComputer {
    inner: FlightComputer,
}

impl JsFlightComputer {
    fn weight_pane(&self) -> Result<JsValue, JsValue> {
        let pair = self.inner.weight();
        Ok(serde_wasm_bindgen::to_value(&WeightPane {
            kg: pair.a().text().into(),
            lbs: pair.b().text().into(),
        })?)
    }

    fn fuel_pane(&self) -> Result<JsValue, JsValue> {
        let fuel = self.inner.fuel();
        Ok(serde_wasm_bindgen::to_value(&FuelPane {
            kg: fuel.mass().text().into(),
            liters: fuel.volume().text().into(),
            density: fuel.density().text().into(),
        })?)
    }

    fn temperature_pane(&self) -> Result<JsValue, JsValue> {
        let pair = self.inner.temperature();
        Ok(serde_wasm_bindgen::to_value(&TemperaturePane {
            c: pair.a().text().into(),
            f: pair.b().text().into(),
            dew_point: self.inner.dew_point().text().into(),
        })?)
    }

    fn pressure_pane(&self) -> Result<JsValue, JsValue> {
        let pair = self.inner.pressure();
        Ok(serde_wasm_bindgen::to_value(&PressurePane {
            hpa: pair.a().text().into(),
            inhg: pair.b().text().into(),
        })?)
    }

    fn speed_pane(&self) -> Result<JsValue, JsValue> {
        let pair = self.inner.speed();
        Ok(serde_wasm_bindgen::to_value(&SpeedPane {
            kt: pair.a().text().into(),
            ms: pair.b().text().into(),
        })?)
    }

    fn wind_pane(&self) -> Result<JsValue, JsValue> {
        let wind = self.inner.wind();
        Ok(serde_wasm_bindgen::to_value(&WindPane {
            heading: wind.heading().text().into(),
            direction: wind.direction().text().into(),
            variable_from: wind.variable_from().text().into(),
            variable_to: wind.variable_to().text().into(),
            speed: wind.speed().text().into(),
            gust: wind.gust().text().into(),
        })?)
    }

    fn runway_pane(&self) -> Result<JsValue, JsValue> {
        let runway = self.inner.runway();
        Ok(serde_wasm_bindgen::to_value(&RunwayPane {
            threshold_a: runway.threshold_a().text().into(),
            threshold_b: runway.threshold_b().text().into(),
            length: runway.length().text().into(),
        })?)
    }
}

#[wasm_bindgen(js_class = FlightComputer)]
impl JsFlightComputer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: FlightComputer::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn weight(&self) -> Result<JsValue, JsValue> {
        self.weight_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn fuel(&self) -> Result<JsValue, JsValue> {
        self.fuel_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn temperature(&self) -> Result<JsValue, JsValue> {
        self.temperature_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn pressure(&self) -> Result<JsValue, JsValue> {
        self.pressure_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> Result<JsValue, JsValue> {
        self.speed_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn wind(&self) -> Result<JsValue, JsValue> {
        self.wind_pane()
    }

    #[wasm_bindgen(getter)]
    pub fn runway(&self) -> Result<JsValue, JsValue> {
        self.runway_pane()
    }

    #[wasm_bindgen(js_name = editWeightKg)]
    pub fn edit_weight_kg(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.weight_mut().edit_a(text);
        self.weight_pane()
    }

    #[wasm_bindgen(js_name = editWeightLbs)]
    pub fn edit_weight_lbs(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.weight_mut().edit_b(text);
        self.weight_pane()
    }

    #[wasm_bindgen(js_name = editFuelMass)]
    pub fn edit_fuel_mass(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.fuel_mut().edit_mass(text);
        self.fuel_pane()
    }

    #[wasm_bindgen(js_name = editFuelVolume)]
    pub fn edit_fuel_volume(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.fuel_mut().edit_volume(text);
        self.fuel_pane()
    }

    #[wasm_bindgen(js_name = editFuelDensity)]
    pub fn edit_fuel_density(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.fuel_mut().edit_density(text);
        self.fuel_pane()
    }

    #[wasm_bindgen(js_name = setFuelType)]
    pub fn set_fuel_type(&mut self, fuel_type: &JsFuelType) -> Result<JsValue, JsValue> {
        self.inner.fuel_mut().set_fuel_type((*fuel_type).into());
        self.fuel_pane()
    }

    #[wasm_bindgen(js_name = editTemperatureC)]
    pub fn edit_temperature_c(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.temperature_mut().edit_a(text);
        self.temperature_pane()
    }

    #[wasm_bindgen(js_name = editTemperatureF)]
    pub fn edit_temperature_f(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.temperature_mut().edit_b(text);
        self.temperature_pane()
    }

    #[wasm_bindgen(js_name = editDewPoint)]
    pub fn edit_dew_point(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.dew_point_mut().edit(text);
        self.temperature_pane()
    }

    #[wasm_bindgen(js_name = editPressureHpa)]
    pub fn edit_pressure_hpa(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.pressure_mut().edit_a(text);
        self.pressure_pane()
    }

    #[wasm_bindgen(js_name = editPressureInhg)]
    pub fn edit_pressure_inhg(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.pressure_mut().edit_b(text);
        self.pressure_pane()
    }

    #[wasm_bindgen(js_name = editSpeedKt)]
    pub fn edit_speed_kt(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.speed_mut().edit_a(text);
        self.speed_pane()
    }

    #[wasm_bindgen(js_name = editSpeedMs)]
    pub fn edit_speed_ms(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.speed_mut().edit_b(text);
        self.speed_pane()
    }

    #[wasm_bindgen(js_name = editHeading)]
    pub fn edit_heading(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_heading(text);
        self.wind_pane()
    }

    #[wasm_bindgen(js_name = editWindDirection)]
    pub fn edit_wind_direction(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_direction(text);
        self.wind_pane()
    }

    #[wasm_bindgen(js_name = editWindVariableFrom)]
    pub fn edit_wind_variable_from(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_variable_from(text);
        self.wind_pane()
    }

    #[wasm_bindgen(js_name = editWindVariableTo)]
    pub fn edit_wind_variable_to(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_variable_to(text);
        self.wind_pane()
    }

    #[wasm_bindgen(js_name = editWindSpeed)]
    pub fn edit_wind_speed(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_speed(text);
        self.wind_pane()
    }

    #[wasm_bindgen(js_name = editWindGust)]
    pub fn edit_wind_gust(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.wind_mut().edit_gust(text);
        self.wind_pane()
    }

    /// Fills the wind pane from the wind groups of a METAR fragment.
    #[wasm_bindgen(js_name = applyMetarWind)]
    pub fn apply_metar_wind(&mut self, fragment: &str) -> Result<(), JsError> {
        self.inner.wind_mut().apply_metar(fragment)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = editRunwayThresholdA)]
    pub fn edit_runway_threshold_a(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.runway_mut().edit_threshold_a(text);
        self.runway_pane()
    }

    #[wasm_bindgen(js_name = editRunwayThresholdB)]
    pub fn edit_runway_threshold_b(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.runway_mut().edit_threshold_b(text);
        self.runway_pane()
    }

    #[wasm_bindgen(js_name = editRunwayLength)]
    pub fn edit_runway_length(&mut self, text: &str) -> Result<JsValue, JsValue> {
        self.inner.runway_mut().edit_length(text);
        self.runway_pane()
    }

    /// The wind component table as rendered rows.
    #[wasm_bindgen(js_name = windScenarios)]
    pub fn wind_scenarios(&self) -> Result<JsValue, JsValue> {
        let rows: Vec<ScenarioRow> = self
            .inner
            .wind_scenarios()
            .iter()
            .map(|scenario| ScenarioRow {
                label: scenario.label().into(),
                head_tail: scenario.head_tail().to_string(),
                cross: scenario.cross().to_string(),
            })
            .collect();

        Ok(serde_wasm_bindgen::to_value(&rows)?)
    }

    /// The relative humidity with its spread, or undefined.
    pub fn humidity(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.humidity())?)
    }

    /// Whether the temperature/dew point spread flags fog risk.
    #[wasm_bindgen(js_name = humidityLowSpread)]
    pub fn humidity_low_spread(&self) -> Option<bool> {
        self.inner.humidity().map(|h| h.low_spread())
    }

    /// The signed runway slope in percent, or undefined.
    #[wasm_bindgen(js_name = runwaySlope)]
    pub fn runway_slope(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.runway_slope())?)
    }

    /// The runway slope as rendered e.g. `2.00 % DOWN`, or undefined.
    #[wasm_bindgen(js_name = runwaySlopeLabel)]
    pub fn runway_slope_label(&self) -> Option<String> {
        self.inner.runway_slope().map(|slope| slope.to_string())
    }

    #[wasm_bindgen(js_name = resetWeight)]
    pub fn reset_weight(&mut self) {
        self.inner.reset_weight();
    }

    #[wasm_bindgen(js_name = resetFuel)]
    pub fn reset_fuel(&mut self) {
        self.inner.reset_fuel();
    }

    #[wasm_bindgen(js_name = resetTemperaturePressure)]
    pub fn reset_temperature_pressure(&mut self) {
        self.inner.reset_temperature_pressure();
    }

    #[wasm_bindgen(js_name = resetSpeed)]
    pub fn reset_speed(&mut self) {
        self.inner.reset_speed();
    }

    #[wasm_bindgen(js_name = resetWind)]
    pub fn reset_wind(&mut self) {
        self.inner.reset_wind();
    }

    #[wasm_bindgen(js_name = resetRunway)]
    pub fn reset_runway(&mut self) {
        self.inner.reset_runway();
    }

    /// Resets every pane, read the getters for the cleared state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
