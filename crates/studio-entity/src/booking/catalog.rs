//! Service and package catalog enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Photography services offered by the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "service_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    FamilyPortraits,
    CouplesEngagement,
    KidsNewborns,
    SoloPortraits,
    ProductPhotography,
}

impl ServiceType {
    /// Return the service as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FamilyPortraits => "family_portraits",
            Self::CouplesEngagement => "couples_engagement",
            Self::KidsNewborns => "kids_newborns",
            Self::SoloPortraits => "solo_portraits",
            Self::ProductPhotography => "product_photography",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = studio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family_portraits" => Ok(Self::FamilyPortraits),
            "couples_engagement" => Ok(Self::CouplesEngagement),
            "kids_newborns" => Ok(Self::KidsNewborns),
            "solo_portraits" => Ok(Self::SoloPortraits),
            "product_photography" => Ok(Self::ProductPhotography),
            _ => Err(studio_core::AppError::validation(format!(
                "Invalid service type: '{s}'"
            ))),
        }
    }
}

/// Pricing tiers for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "package_tier", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PackageTier {
    Essential,
    Premium,
    Deluxe,
}

impl PackageTier {
    /// Return the tier as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Premium => "premium",
            Self::Deluxe => "deluxe",
        }
    }
}

impl fmt::Display for PackageTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
