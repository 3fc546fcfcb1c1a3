//! Wire types for the Reapp API.
//!
//! Field names follow the API's camelCase JSON; enum values are the API's
//! uppercase status strings. Fields the API sometimes omits default to
//! `None`/zero instead of failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of an account on the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    Admin,
    Institution,
    Donor,
}

impl AccountType {
    /// Value for the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Institution => "INSTITUTION",
            Self::Donor => "DONOR",
        }
    }
}

/// Moderation state of an account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountStatus {
    Active,
    Pending,
    Suspended,
    Banned,
    Inactive,
}

impl AccountStatus {
    /// Value for the `status` query parameter and PUT body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Pending => "PENDING",
            Self::Suspended => "SUSPENDED",
            Self::Banned => "BANNED",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Human label for badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
            Self::Banned => "Banned",
            Self::Inactive => "Inactive",
        }
    }
}

/// Uploaded media reference (avatar / institution logo).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub remote_url: String,
}

/// Authenticated staff profile, cached alongside the session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub account_type: AccountType,
    #[serde(default)]
    pub status: Option<AccountStatus>,
    #[serde(default)]
    pub media: Option<Media>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionCategory {
    pub name: String,
}

/// Institution-specific sub-record present when `account_type` is
/// INSTITUTION.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionProfile {
    pub cnpj: String,
    #[serde(default)]
    pub category: Option<InstitutionCategory>,
}

/// A platform account as listed in the moderation tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: AccountStatus,
    pub account_type: AccountType,
    #[serde(default)]
    pub institution: Option<InstitutionProfile>,
    #[serde(default)]
    pub followers_count: i64,
    #[serde(default)]
    pub following_count: i64,
    #[serde(default)]
    pub media: Option<Media>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Settlement state of a donation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DonationStatus {
    Pending,
    Approved,
    Canceled,
    Rejected,
}

impl DonationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Canceled => "Canceled",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountName {
    pub name: String,
}

/// Donor reference embedded in a donation row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorRef {
    pub account: AccountName,
}

/// Institution reference embedded in a donation row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstitutionRef {
    pub account: AccountName,
}

/// Project reference embedded in a donation row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
}

/// One entry of the donation ledger. Read-only on this side: the client
/// never mutates donations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: i64,
    pub amount: f64,
    pub status: DonationStatus,
    #[serde(default)]
    pub payment_checkout_url: Option<String>,
    #[serde(default)]
    pub payment_transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub donor_id: i64,
    #[serde(default)]
    pub institution_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub donor: Option<DonorRef>,
    #[serde(default)]
    pub institution: Option<InstitutionRef>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
}

impl Donation {
    /// Donor display name; the API omits the donor for anonymous gifts.
    pub fn donor_name(&self) -> &str {
        self.donor
            .as_ref()
            .map_or("Anonymous", |d| d.account.name.as_str())
    }

    /// Where the donation went: a project, an institution, or the general
    /// fund when it targets neither.
    pub fn destination(&self) -> String {
        if let Some(project) = &self.project {
            format!("Project: {}", project.name)
        } else if let Some(institution) = &self.institution {
            format!("Institution: {}", institution.account.name)
        } else {
            "General fund".to_owned()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub total: usize,
}

/// Paginated response envelope: an ordered block of rows plus the total
/// row count that drives the pager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: Meta,
}
