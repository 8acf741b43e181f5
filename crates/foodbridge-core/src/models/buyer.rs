// ABOUTME: Buyer models used to personalise recommendations
// ABOUTME: BuyerProfile, BuyerContext, BiologicalSex codes, and age-by-birthdate arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::GeoPoint;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Biological sex as recorded on an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BiologicalSex {
    /// Recorded as `M`
    Male,
    /// Recorded as `F`
    Female,
    /// Any other non-empty code
    Unrecognized,
}

impl BiologicalSex {
    /// Parse a stored sex code; an empty code means "not recorded"
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "" => None,
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => Some(Self::Unrecognized),
        }
    }
}

/// Kind of account making a request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// A shopper buying listings
    Consumer,
    /// A store publishing listings
    Store,
}

/// Physiological and positional data of one consumer, fixed for one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    /// Age in whole years
    pub age: Option<u32>,
    /// Biological sex
    pub sex: Option<BiologicalSex>,
    /// Where the buyer is, when known
    pub position: Option<GeoPoint>,
}

impl BuyerProfile {
    /// Profile with the given position and the rest unchanged
    #[must_use]
    pub fn at(mut self, position: Option<GeoPoint>) -> Self {
        self.position = position;
        self
    }
}

/// Who is asking for recommendations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuyerContext {
    /// A consumer with a profile to score against
    Consumer(BuyerProfile),
    /// A store account; never eligible
    Store,
}

impl BuyerContext {
    /// The consumer profile, if this context carries one
    #[must_use]
    pub const fn consumer_profile(&self) -> Option<&BuyerProfile> {
        match self {
            Self::Consumer(profile) => Some(profile),
            Self::Store => None,
        }
    }
}

/// Whole years between `birthdate` and `today`
///
/// A birthday later in the calendar year than `today` has not happened yet.
/// Returns `None` for birthdates after `today`.
#[must_use]
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> Option<u32> {
    let birthday_pending = (today.month(), today.day()) < (birthdate.month(), birthdate.day());
    let years = today.year() - birthdate.year() - i32::from(birthday_pending);
    u32::try_from(years).ok()
}
