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

pub const HECTOPASCAL_IN_INCHES_HG: f64 = 0.0295299830714;
pub const KILOGRAM_IN_POUNDS: f64 = 2.20462;
pub const KNOT_IN_METERS_PER_SECOND: f64 = 0.514444;
pub const METER_IN_FEET: f64 = 3.28084;
pub const US_GALLON_IN_LITERS: f64 = 3.785412;
