//! Shared types for the dashboard UI
//!
//! Prediction results are display data produced by the hosting shell.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Risk band shown on the results panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum RiskLevel {
    Low,
    #[serde(alias = "Medium")]
    Moderate,
    High,
}

impl RiskLevel {
    /// Band for a 0-100 risk score
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => RiskLevel::Low,
            30..=69 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Text color for the level headline
    pub fn text_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "text-green-600",
            RiskLevel::Moderate => "text-yellow-600",
            RiskLevel::High => "text-red-600",
        }
    }

    /// Background, text and border classes for the level badge
    pub fn badge_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "bg-green-50 text-green-700 border-green-200",
            RiskLevel::Moderate => "bg-yellow-50 text-yellow-700 border-yellow-200",
            RiskLevel::High => "bg-red-50 text-red-700 border-red-200",
        }
    }

    /// Canned follow-up advice for the band
    pub fn recommendations(self) -> Vec<String> {
        let items: &[&str] = match self {
            RiskLevel::Low => &[
                "Continue routine liver function monitoring annually",
                "Maintain a balanced diet and healthy weight",
                "Limit alcohol consumption",
            ],
            RiskLevel::Moderate => &[
                "Schedule follow-up liver function tests within 3 months",
                "Consider abdominal ultrasound or elastography",
                "Review medications for hepatotoxicity",
                "Abstain from alcohol",
            ],
            RiskLevel::High => &[
                "Refer to a hepatologist promptly",
                "Order imaging and evaluate for portal hypertension",
                "Screen for varices and hepatocellular carcinoma",
                "Strict alcohol abstinence and nutritional support",
            ],
        };
        items.iter().map(|s| s.to_string()).collect()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Moderate" | "Medium" => Ok(RiskLevel::Moderate),
            "High" => Ok(RiskLevel::High),
            other => Err(format!("Unknown risk level: {}", other)),
        }
    }
}

/// Result shown after a successful assessment
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    /// RFC 3339 timestamp of generation
    pub timestamp: String,
}

impl PredictionResult {
    pub fn from_score(score: u8, timestamp: impl Into<String>) -> Self {
        let score = score.min(100);
        let risk_level = RiskLevel::from_score(score);
        Self {
            risk_score: score,
            risk_level,
            recommendations: risk_level.recommendations(),
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(29), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(255), RiskLevel::High);
    }

    #[test]
    fn test_medium_is_an_alias_for_moderate() {
        assert_eq!("Medium".parse::<RiskLevel>().unwrap(), RiskLevel::Moderate);
        let parsed: RiskLevel = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, RiskLevel::Moderate);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Moderate\"");
        assert!("Severe".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_level_classes() {
        assert_eq!(RiskLevel::High.text_class(), "text-red-600");
        assert_eq!(RiskLevel::Moderate.text_class(), "text-yellow-600");
        assert!(RiskLevel::Low.badge_class().contains("bg-green-50"));
    }

    #[test]
    fn test_result_from_score_clamps() {
        let result = PredictionResult::from_score(140, "2026-01-01T00:00:00Z");
        assert_eq!(result.risk_score, 100);
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(!result.recommendations.is_empty());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["riskLevel"], "High");
        assert_eq!(json["riskScore"], 100);
    }
}
