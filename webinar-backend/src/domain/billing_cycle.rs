// webinar-backend/src/domain/billing_cycle.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// サブスクリプションの請求サイクル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingCycle {
    Year,
    Month,
}

impl BillingCycle {
    /// 文字列からBillingCycleに変換
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "year" => Some(Self::Year),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    /// BillingCycleを文字列として取得
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
        }
    }

    /// 全ての有効なサイクルを取得
    pub fn all() -> Vec<Self> {
        vec![Self::Year, Self::Month]
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            _ => Err(format!("Invalid billing cycle: {}", s)),
        }
    }
}

impl Default for BillingCycle {
    fn default() -> Self {
        Self::Month
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(BillingCycle::from_str("year"), Some(BillingCycle::Year));
        assert_eq!(BillingCycle::from_str("Year"), Some(BillingCycle::Year));
        assert_eq!(BillingCycle::from_str("month"), Some(BillingCycle::Month));
        assert_eq!(BillingCycle::from_str("MONTH"), Some(BillingCycle::Month));
        assert_eq!(BillingCycle::from_str("weekly"), None);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(BillingCycle::Year.to_string(), "Year");
        assert_eq!(BillingCycle::Month.to_string(), "Month");
    }

    #[test]
    fn test_default() {
        assert_eq!(BillingCycle::default(), BillingCycle::Month);
    }

    #[test]
    fn test_serde_literals() {
        // The API exposes exactly "Year" and "Month"
        assert_eq!(
            serde_json::to_string(&BillingCycle::Year).unwrap(),
            "\"Year\""
        );
        assert_eq!(
            serde_json::to_string(&BillingCycle::Month).unwrap(),
            "\"Month\""
        );
        assert_eq!(
            serde_json::from_str::<BillingCycle>("\"Month\"").unwrap(),
            BillingCycle::Month
        );
        assert!(serde_json::from_str::<BillingCycle>("\"Weekly\"").is_err());
    }
}
