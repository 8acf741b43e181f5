// ABOUTME: Marketplace accounts as stored in the catalog
// ABOUTME: Converts stored gender and birthdate into a buyer profile for scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use chrono::NaiveDate;
use foodbridge_core::models::{
    age_on, AccountKind, BiologicalSex, BuyerContext, BuyerProfile, GeoPoint,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A buyer or store account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Whether this account publishes listings
    #[serde(default)]
    pub is_store: bool,
    /// Stored sex code (`M`, `F`, or anything else)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Date of birth
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
}

impl Account {
    /// Whether the account buys or sells
    #[must_use]
    pub const fn kind(&self) -> AccountKind {
        if self.is_store {
            AccountKind::Store
        } else {
            AccountKind::Consumer
        }
    }

    /// Physiological profile as of `today`, without a position
    #[must_use]
    pub fn profile_on(&self, today: NaiveDate) -> BuyerProfile {
        BuyerProfile {
            age: self.birthdate.and_then(|birthdate| age_on(birthdate, today)),
            sex: self.gender.as_deref().and_then(BiologicalSex::from_code),
            position: None,
        }
    }

    /// Request context for this account at `position`
    #[must_use]
    pub fn buyer_context(&self, today: NaiveDate, position: Option<GeoPoint>) -> BuyerContext {
        match self.kind() {
            AccountKind::Store => BuyerContext::Store,
            AccountKind::Consumer => BuyerContext::Consumer(self.profile_on(today).at(position)),
        }
    }
}
