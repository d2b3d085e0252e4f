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

use qrh::measurements::Angle;
use qrh::wx::{self, Icao, ReportTime};
use qrh::{rvsm, Error};
use wasm_bindgen::prelude::*;

/// The metric RVSM levels for a course in degrees as `{meters, feet, fl}`
/// rows.
#[wasm_bindgen(js_name = rvsmLevels)]
pub fn rvsm_levels(course: f64) -> Result<JsValue, JsValue> {
    let levels = rvsm::levels_for(&Angle::deg(course));
    Ok(serde_wasm_bindgen::to_value(&levels)?)
}

#[wasm_bindgen(js_name = rvsmEastbound)]
pub fn rvsm_eastbound() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&rvsm::eastbound())?)
}

#[wasm_bindgen(js_name = rvsmWestbound)]
pub fn rvsm_westbound() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&rvsm::westbound())?)
}

fn station(icao: &str) -> Result<Icao, JsError> {
    icao.parse()
        .map_err(|e: Error| JsError::new(&format!("{icao:?}: {e}")))
}

/// The NOAA text server URL of the latest METAR for the station.
#[wasm_bindgen(js_name = metarUrl)]
pub fn metar_url(icao: &str) -> Result<String, JsError> {
    Ok(wx::metar_url(&station(icao)?))
}

/// The NOAA text server URL of the latest TAF for the station.
#[wasm_bindgen(js_name = tafUrl)]
pub fn taf_url(icao: &str) -> Result<String, JsError> {
    Ok(wx::taf_url(&station(icao)?))
}

/// How many minutes ago the report was issued, judged by its first `hhmmZ`
/// token against the system clock. Undefined without such a token.
#[wasm_bindgen(js_name = reportMinutesAgo)]
pub fn report_minutes_ago(report: &str) -> Option<i32> {
    ReportTime::find_in(report).map(|time| time.age_now().minutes())
}

/// The report age as rendered e.g. `2 h 5 min`.
#[wasm_bindgen(js_name = reportAgeLabel)]
pub fn report_age_label(report: &str) -> Option<String> {
    ReportTime::find_in(report).map(|time| time.age_now().to_string())
}

/// Whether the report is too old to rely on.
#[wasm_bindgen(js_name = reportIsStale)]
pub fn report_is_stale(report: &str) -> Option<bool> {
    ReportTime::find_in(report).map(|time| time.age_now().is_stale())
}
