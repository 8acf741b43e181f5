// ABOUTME: Daily nutrition targets derived from a buyer's age and biological sex
// ABOUTME: Lookup table of dietary reference intakes keyed by sex and age bracket
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Nutrition profiler
//!
//! Targets come from a fixed table calibrated to national dietary reference
//! intakes for adults. Sodium is 2000 mg in every cell. The function is pure:
//! the same `(age, sex)` always yields the same targets.
//!
//! Ages below 19 have no dedicated row and use the `>70` row.

use foodbridge_core::models::{BiologicalSex, NutritionTargets};

/// Targets used when age or sex is unknown
pub const DEFAULT_TARGETS: NutritionTargets = targets(2000.0, 65.0, 55.0, 300.0);

/// Fiber target shared by every table cell (g)
const FIBER_G: f64 = 25.0;

/// Sodium target shared by every table cell (mg)
const SODIUM_MG: f64 = 2000.0;

const fn targets(calories: f64, protein: f64, fat: f64, carbs: f64) -> NutritionTargets {
    NutritionTargets {
        calories,
        protein,
        fat,
        carbs,
        fiber: FIBER_G,
        sodium: SODIUM_MG,
    }
}

/// Age brackets of the reference table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    /// 19 to 30
    YoungAdult,
    /// 31 to 50
    Adult,
    /// 51 to 70
    OlderAdult,
    /// Over 70, and every age the other brackets do not cover
    Senior,
}

impl AgeBracket {
    /// Bracket containing `age`
    #[must_use]
    pub const fn for_age(age: u32) -> Self {
        match age {
            19..=30 => Self::YoungAdult,
            31..=50 => Self::Adult,
            51..=70 => Self::OlderAdult,
            _ => Self::Senior,
        }
    }
}

const MALE_TARGETS: [(AgeBracket, NutritionTargets); 4] = [
    (AgeBracket::YoungAdult, targets(2700.0, 65.0, 60.0, 394.0)),
    (AgeBracket::Adult, targets(2500.0, 65.0, 56.0, 365.0)),
    (AgeBracket::OlderAdult, targets(2200.0, 65.0, 49.0, 321.0)),
    (AgeBracket::Senior, targets(2000.0, 65.0, 44.0, 292.0)),
];

const FEMALE_TARGETS: [(AgeBracket, NutritionTargets); 4] = [
    (AgeBracket::YoungAdult, targets(2100.0, 50.0, 47.0, 306.0)),
    (AgeBracket::Adult, targets(2000.0, 50.0, 44.0, 292.0)),
    (AgeBracket::OlderAdult, targets(1800.0, 50.0, 40.0, 263.0)),
    (AgeBracket::Senior, targets(1600.0, 50.0, 36.0, 233.0)),
];

/// Derive daily nutrition targets for a buyer
///
/// Returns [`DEFAULT_TARGETS`] when age or sex is unknown, and also for an age
/// of zero, which the account data uses interchangeably with "not recorded".
/// Any sex other than [`BiologicalSex::Male`] uses the female table.
#[must_use]
pub fn derive_targets(age: Option<u32>, sex: Option<BiologicalSex>) -> NutritionTargets {
    let (Some(age), Some(sex)) = (age.filter(|&age| age > 0), sex) else {
        return DEFAULT_TARGETS;
    };

    let table = match sex {
        BiologicalSex::Male => &MALE_TARGETS,
        BiologicalSex::Female | BiologicalSex::Unrecognized => &FEMALE_TARGETS,
    };

    let bracket = AgeBracket::for_age(age);
    table
        .iter()
        .find(|(row, _)| *row == bracket)
        .map_or(DEFAULT_TARGETS, |(_, targets)| *targets)
}
