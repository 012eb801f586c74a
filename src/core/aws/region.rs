//! AWS regions the service wrappers can be pinned to.

use aws_config::Region;
use serde::{Deserialize, Serialize};

// =============================================================================
// AWS Regions
// =============================================================================

/// AWS regions offering Polly, Translate, Comprehend, Textract and Rekognition.
///
/// Not every service is available in every region; pick the language and
/// vision regions accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AwsRegion {
    /// US East (N. Virginia)
    #[default]
    #[serde(rename = "us-east-1")]
    UsEast1,
    /// US East (Ohio)
    #[serde(rename = "us-east-2")]
    UsEast2,
    /// US West (N. California)
    #[serde(rename = "us-west-1")]
    UsWest1,
    /// US West (Oregon)
    #[serde(rename = "us-west-2")]
    UsWest2,
    /// Asia Pacific (Mumbai)
    #[serde(rename = "ap-south-1")]
    ApSouth1,
    /// Asia Pacific (Singapore)
    #[serde(rename = "ap-southeast-1")]
    ApSoutheast1,
    /// Asia Pacific (Sydney)
    #[serde(rename = "ap-southeast-2")]
    ApSoutheast2,
    /// Asia Pacific (Tokyo)
    #[serde(rename = "ap-northeast-1")]
    ApNortheast1,
    /// Asia Pacific (Seoul)
    #[serde(rename = "ap-northeast-2")]
    ApNortheast2,
    /// Canada (Central)
    #[serde(rename = "ca-central-1")]
    CaCentral1,
    /// Europe (Frankfurt)
    #[serde(rename = "eu-central-1")]
    EuCentral1,
    /// Europe (Ireland)
    #[serde(rename = "eu-west-1")]
    EuWest1,
    /// Europe (London)
    #[serde(rename = "eu-west-2")]
    EuWest2,
    /// Europe (Paris)
    #[serde(rename = "eu-west-3")]
    EuWest3,
}

impl AwsRegion {
    /// Convert to AWS region string.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UsEast1 => "us-east-1",
            Self::UsEast2 => "us-east-2",
            Self::UsWest1 => "us-west-1",
            Self::UsWest2 => "us-west-2",
            Self::ApSouth1 => "ap-south-1",
            Self::ApSoutheast1 => "ap-southeast-1",
            Self::ApSoutheast2 => "ap-southeast-2",
            Self::ApNortheast1 => "ap-northeast-1",
            Self::ApNortheast2 => "ap-northeast-2",
            Self::CaCentral1 => "ca-central-1",
            Self::EuCentral1 => "eu-central-1",
            Self::EuWest1 => "eu-west-1",
            Self::EuWest2 => "eu-west-2",
            Self::EuWest3 => "eu-west-3",
        }
    }

    /// Parse a region name, returning `None` for unknown regions.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|region| region.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Get all available regions.
    pub fn all() -> &'static [AwsRegion] {
        &[
            Self::UsEast1,
            Self::UsEast2,
            Self::UsWest1,
            Self::UsWest2,
            Self::ApSouth1,
            Self::ApSoutheast1,
            Self::ApSoutheast2,
            Self::ApNortheast1,
            Self::ApNortheast2,
            Self::CaCentral1,
            Self::EuCentral1,
            Self::EuWest1,
            Self::EuWest2,
            Self::EuWest3,
        ]
    }

    /// Convert to the SDK region type.
    pub fn to_sdk(self) -> Region {
        Region::new(self.as_str())
    }
}

impl std::fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_round_trips_through_str() {
        for region in AwsRegion::all() {
            assert_eq!(AwsRegion::parse(region.as_str()), Some(*region));
        }
    }

    #[test]
    fn test_region_parse_is_case_insensitive() {
        assert_eq!(AwsRegion::parse("US-WEST-2"), Some(AwsRegion::UsWest2));
        assert_eq!(AwsRegion::parse(" eu-west-1 "), Some(AwsRegion::EuWest1));
        assert_eq!(AwsRegion::parse("mars-north-1"), None);
    }

    #[test]
    fn test_region_conversion() {
        assert_eq!(AwsRegion::UsEast1.to_sdk().to_string(), "us-east-1");
        assert_eq!(AwsRegion::UsWest2.to_sdk().to_string(), "us-west-2");
    }
}
