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

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Density;

use super::field::Field;

mod constants {
    use crate::measurements::Density;

    pub const AVGAS_AT_ISA: Density = Density::kg_per_l(0.75);
    pub const DIESEL_AT_ISA: Density = Density::kg_per_l(0.838);
    pub const JET_A_AT_ISA: Density = Density::kg_per_l(0.8);
}

/// Fuel types with their density at ISA conditions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelType {
    AvGas,
    Diesel,
    JetA,
}

impl FuelType {
    pub fn density(&self) -> Density {
        match self {
            Self::AvGas => constants::AVGAS_AT_ISA,
            Self::Diesel => constants::DIESEL_AT_ISA,
            Self::JetA => constants::JET_A_AT_ISA,
        }
    }
}

/// The fuel quantity that was typed last and is derived from.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelSide {
    Mass,
    Volume,
}

/// Converts between fuel mass and volume through its density.
///
/// Mass in kg and volume in liters are linked the same way a
/// [`LinkedPair`](super::LinkedPair) links two units, except the conversion
/// factor is itself an editable field. Density is only ever an input: it is
/// never derived from the other two, and editing it reruns the conversion
/// for whichever quantity was typed last.
///
/// The density field starts out at Jet A-1, the default fuel.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelConverter {
    mass: Field,
    volume: Field,
    density: Field,
    last_edited: Option<FuelSide>,
}

impl FuelConverter {
    pub fn new() -> Self {
        let mut density = Field::new();
        density.edit(&FuelType::JetA.density().value().to_string());

        Self {
            mass: Field::new(),
            volume: Field::new(),
            density,
            last_edited: None,
        }
    }

    /// Edits the fuel mass in kg and derives the volume.
    pub fn edit_mass(&mut self, text: &str) {
        trace!("edit fuel mass: {text:?}");
        self.mass.edit(text);
        self.last_edited = Some(FuelSide::Mass);
        self.recompute();
    }

    /// Edits the fuel volume in liters and derives the mass.
    pub fn edit_volume(&mut self, text: &str) {
        trace!("edit fuel volume: {text:?}");
        self.volume.edit(text);
        self.last_edited = Some(FuelSide::Volume);
        self.recompute();
    }

    /// Edits the density in kg/L.
    ///
    /// The conversion reruns for whichever quantity was typed last, a
    /// density edit alone never flips which side is derived.
    pub fn edit_density(&mut self, text: &str) {
        trace!("edit fuel density: {text:?}");
        self.density.edit(text);
        self.recompute();
    }

    /// Replaces the density with the ISA density of `fuel_type`.
    pub fn set_fuel_type(&mut self, fuel_type: FuelType) {
        self.edit_density(&fuel_type.density().value().to_string());
    }

    pub fn mass(&self) -> &Field {
        &self.mass
    }

    pub fn volume(&self) -> &Field {
        &self.volume
    }

    pub fn density(&self) -> &Field {
        &self.density
    }

    pub fn last_edited(&self) -> Option<FuelSide> {
        self.last_edited
    }

    /// Clears mass and volume and puts the density back to Jet A-1.
    pub fn reset(&mut self) {
        self.mass.clear();
        self.volume.clear();
        self.density
            .edit(&FuelType::JetA.density().value().to_string());
        self.last_edited = None;
    }

    fn recompute(&mut self) {
        // A density of zero or less can not derive anything.
        let density = self.density.value().filter(|d| *d > 0.0);

        match self.last_edited {
            Some(FuelSide::Mass) => match (self.mass.value(), density) {
                (Some(mass), Some(density)) => self.volume.set_value(mass / density, 2),
                _ => self.volume.clear(),
            },
            Some(FuelSide::Volume) => match (self.volume.value(), density) {
                (Some(volume), Some(density)) => self.mass.set_value(volume * density, 2),
                _ => self.mass.clear(),
            },
            None => {}
        }
    }
}

impl Default for FuelConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_derives_volume_through_density() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");

        assert_eq!(fuel.density().text(), "0.8");
        assert_eq!(fuel.volume().text(), "1000.00");
    }

    #[test]
    fn volume_derives_mass_through_density() {
        let mut fuel = FuelConverter::new();
        fuel.edit_volume("1000");

        assert_eq!(fuel.mass().text(), "800.00");
        assert_eq!(fuel.last_edited(), Some(FuelSide::Volume));
    }

    #[test]
    fn density_edit_keeps_the_last_typed_side() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");
        fuel.edit_density("0.75");

        // Mass stays authoritative, only the volume moves.
        assert_eq!(fuel.mass().text(), "800");
        assert_eq!(fuel.volume().text(), "1066.67");
        assert_eq!(fuel.last_edited(), Some(FuelSide::Mass));
    }

    #[test]
    fn density_is_never_derived() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");
        fuel.edit_volume("1000");

        assert_eq!(fuel.density().text(), "0.8");
    }

    #[test]
    fn non_positive_density_clears_the_derived_side() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");

        fuel.edit_density("0");
        assert!(fuel.volume().is_empty());

        fuel.edit_volume("1000");
        fuel.edit_density("-0.8");
        assert!(fuel.mass().is_empty());
    }

    #[test]
    fn unavailable_density_clears_the_derived_side() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");
        fuel.edit_density("");

        assert!(fuel.volume().is_empty());
    }

    #[test]
    fn density_edit_without_a_typed_side_derives_nothing() {
        let mut fuel = FuelConverter::new();
        fuel.edit_density("0.75");

        assert!(fuel.mass().is_empty());
        assert!(fuel.volume().is_empty());
    }

    #[test]
    fn fuel_type_presets_rerun_the_conversion() {
        let mut fuel = FuelConverter::new();
        fuel.edit_volume("100");
        fuel.set_fuel_type(FuelType::AvGas);

        assert_eq!(fuel.density().text(), "0.75");
        assert_eq!(fuel.mass().text(), "75.00");

        fuel.set_fuel_type(FuelType::Diesel);
        assert_eq!(fuel.density().text(), "0.838");
        assert_eq!(fuel.mass().text(), "83.80");
    }

    #[test]
    fn reset_restores_the_default_density() {
        let mut fuel = FuelConverter::new();
        fuel.edit_mass("800");
        fuel.edit_density("0.75");
        fuel.reset();

        assert!(fuel.mass().is_empty());
        assert!(fuel.volume().is_empty());
        assert_eq!(fuel.density().text(), "0.8");
        assert_eq!(fuel.last_edited(), None);
    }
}
