//! Domain model for the engineer registry
//!
//! Engineers, their certification tiers, the cloud platforms they can be
//! matched against, and the derived revenue report types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Billable hours assumed per engineer per month in revenue projections
pub const DEFAULT_HOURS_PER_MONTH: u32 = 160;

/// Certification tier, ordered junior < mid < senior < expert
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationLevel {
    Junior,
    Mid,
    Senior,
    Expert,
}

impl CertificationLevel {
    /// All tiers in ascending order
    pub const ALL: [CertificationLevel; 4] = [
        CertificationLevel::Junior,
        CertificationLevel::Mid,
        CertificationLevel::Senior,
        CertificationLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationLevel::Junior => "junior",
            CertificationLevel::Mid => "mid",
            CertificationLevel::Senior => "senior",
            CertificationLevel::Expert => "expert",
        }
    }
}

impl fmt::Display for CertificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CertificationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "junior" => Ok(CertificationLevel::Junior),
            "mid" => Ok(CertificationLevel::Mid),
            "senior" => Ok(CertificationLevel::Senior),
            "expert" => Ok(CertificationLevel::Expert),
            other => Err(format!("unknown certification level: {}", other)),
        }
    }
}

/// Cloud platforms engineers can be certified for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudPlatform {
    Azure,
    Aws,
    Gcp,
}

impl CloudPlatform {
    /// Certification code prefix designating this platform
    pub fn cert_prefix(&self) -> &'static str {
        match self {
            CloudPlatform::Azure => "AZ-",
            CloudPlatform::Aws => "AWS-",
            CloudPlatform::Gcp => "GCP-",
        }
    }
}

impl std::str::FromStr for CloudPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "azure" => Ok(CloudPlatform::Azure),
            "aws" => Ok(CloudPlatform::Aws),
            "gcp" => Ok(CloudPlatform::Gcp),
            other => Err(format!("unknown platform: {}", other)),
        }
    }
}

/// A cloud engineer record
///
/// The id is assigned by the store at creation time and never reused;
/// callers hand in records with id 0 and receive the stored value back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub hourly_rate: f64,
    pub certification_level: CertificationLevel,
    pub certifications: Vec<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Engineer {
    /// Add a certification code, ignoring duplicates
    ///
    /// Returns whether the code was actually inserted. Insertion order
    /// is preserved for display.
    pub fn add_certification(&mut self, cert_code: &str) -> bool {
        if self.certifications.iter().any(|c| c == cert_code) {
            return false;
        }
        self.certifications.push(cert_code.to_string());
        true
    }

    /// Projected monthly revenue at the given billable hours
    pub fn monthly_revenue(&self, hours_per_month: u32) -> f64 {
        self.hourly_rate * hours_per_month as f64
    }

    /// Whether any held certification carries the platform's prefix
    pub fn can_work_on(&self, platform: CloudPlatform) -> bool {
        let prefix = platform.cert_prefix();
        self.certifications.iter().any(|c| c.starts_with(prefix))
    }
}

/// Input for creating a new engineer
///
/// Carries no id and no certifications; both are owned by the store and
/// the certification endpoint respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineerDraft {
    pub name: String,
    pub email: String,
    pub specialty: String,
    pub hourly_rate: f64,
    pub certification_level: CertificationLevel,
}

impl EngineerDraft {
    /// Build an unstored engineer record (id 0 until the store assigns one)
    pub fn into_engineer(self) -> Engineer {
        Engineer {
            id: 0,
            name: self.name,
            email: self.email,
            specialty: self.specialty,
            hourly_rate: self.hourly_rate,
            certification_level: self.certification_level,
            certifications: Vec::new(),
            is_available: true,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an engineer
///
/// A `None` field means "leave untouched", never "clear". Field presence is
/// explicit so a legitimate value can never collide with a sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_level: Option<CertificationLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}

impl EngineerPatch {
    /// Merge the present fields onto an existing record
    pub fn apply(&self, engineer: &mut Engineer) {
        if let Some(name) = &self.name {
            engineer.name = name.clone();
        }
        if let Some(email) = &self.email {
            engineer.email = email.clone();
        }
        if let Some(specialty) = &self.specialty {
            engineer.specialty = specialty.clone();
        }
        if let Some(rate) = self.hourly_rate {
            engineer.hourly_rate = rate;
        }
        if let Some(level) = self.certification_level {
            engineer.certification_level = level;
        }
        if let Some(available) = self.is_available {
            engineer.is_available = available;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.specialty.is_none()
            && self.hourly_rate.is_none()
            && self.certification_level.is_none()
            && self.is_available.is_none()
    }
}

/// Per-tier slice of the revenue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBreakdown {
    pub count: u32,
    pub monthly_revenue: f64,
}

/// Projected revenue over all available engineers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueReport {
    pub total_available_engineers: u32,
    pub total_monthly_revenue: f64,
    /// Keyed by tier; every tier is present even with zero members
    pub by_level: BTreeMap<CertificationLevel, LevelBreakdown>,
}
