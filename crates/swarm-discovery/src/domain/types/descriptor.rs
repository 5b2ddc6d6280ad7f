//! Peer announce payloads and their validation.
//!
//! The presence subsystem hands over loosely-shaped JSON. `RawPeerDescriptor`
//! accepts anything with the right field names; `PeerDescriptor` is what
//! survives validation and is the only form the routing table accepts.

use serde::{Deserialize, Serialize};

use super::DescriptorError;

/// Announce payload as received, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPeerDescriptor {
    /// Agent id. Presence payloads sometimes call it `id`.
    #[serde(default, alias = "id")]
    pub source_id: Option<String>,
    /// Human-readable name.
    #[serde(default, alias = "name")]
    pub display_name: Option<String>,
    /// Reachability hint.
    #[serde(default)]
    pub address: Option<String>,
    /// Contribution counter (JSON number).
    #[serde(default)]
    pub contributions: Option<f64>,
    /// Rank tier label.
    #[serde(default)]
    pub rank_tier: Option<String>,
}

/// A validated announce: `source_id` is present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerDescriptor {
    pub(crate) source_id: String,
    pub(crate) display_name: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) contributions: u64,
    pub(crate) rank_tier: Option<String>,
}

impl PeerDescriptor {
    /// Descriptor with only the required id.
    pub fn new(source_id: impl Into<String>) -> Result<Self, DescriptorError> {
        let source_id = non_blank(Some(source_id.into())).ok_or(DescriptorError::MissingSourceId)?;

        Ok(Self {
            source_id,
            display_name: None,
            address: None,
            contributions: 0,
            rank_tier: None,
        })
    }

    /// Parse and validate a JSON announce in one step.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        let raw: RawPeerDescriptor =
            serde_json::from_str(json).map_err(|e| DescriptorError::MalformedJson(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = non_blank(Some(name.into()));
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = non_blank(Some(address.into()));
        self
    }

    /// Set the contribution counter.
    #[must_use]
    pub fn with_contributions(mut self, contributions: u64) -> Self {
        self.contributions = contributions;
        self
    }

    /// Set the rank tier.
    #[must_use]
    pub fn with_rank_tier(mut self, tier: impl Into<String>) -> Self {
        self.rank_tier = non_blank(Some(tier.into()));
        self
    }

    /// The announcing agent's id.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// Display name, if any.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Address, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Contribution counter.
    pub fn contributions(&self) -> u64 {
        self.contributions
    }

    /// Rank tier, if any.
    pub fn rank_tier(&self) -> Option<&str> {
        self.rank_tier.as_deref()
    }
}

impl TryFrom<RawPeerDescriptor> for PeerDescriptor {
    type Error = DescriptorError;

    fn try_from(raw: RawPeerDescriptor) -> Result<Self, Self::Error> {
        let source_id = non_blank(raw.source_id).ok_or(DescriptorError::MissingSourceId)?;

        let contributions = match raw.contributions {
            None => 0,
            Some(value) if value.is_finite() && value >= 0.0 => value.trunc() as u64,
            Some(value) => return Err(DescriptorError::InvalidContributions(value)),
        };

        Ok(Self {
            source_id,
            display_name: non_blank(raw.display_name),
            address: non_blank(raw.address),
            contributions,
            rank_tier: non_blank(raw.rank_tier),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
