// webinar-backend/src/service/payment_setup_service.rs

use crate::domain::team_model::Model as Team;
use crate::error::{AppError, AppResult};
use tracing::info;

/// 決済セットアップの結果として得られるカードサマリー
///
/// payment_method_id 自体は永続化されず、このサマリーだけがチームに適用される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub stripe_customer_id: String,
    pub last4: Option<String>,
    pub cc_type: Option<String>,
}

/// 決済セットアップコラボレーター
///
/// ゲートウェイ連携自体は別サブシステムの管轄。開発モードでは
/// モックのカードサマリーを返す。
pub struct PaymentSetupService {
    development_mode: bool,
}

impl PaymentSetupService {
    pub fn new(development_mode: bool) -> Self {
        Self { development_mode }
    }

    /// 決済メソッドを顧客に紐付け、カードサマリーを返す
    pub async fn register_payment_method(
        &self,
        team: &Team,
        payment_method_id: &str,
    ) -> AppResult<CardSummary> {
        if self.development_mode {
            info!(
                team_id = %team.id,
                payment_method_id = %payment_method_id,
                "Development mode: returning mock card summary"
            );

            // 既存の顧客IDがあれば維持する
            let stripe_customer_id = team
                .stripe_customer_id
                .clone()
                .unwrap_or_else(|| format!("cus_dev_{}", team.id.simple()));

            return Ok(CardSummary {
                stripe_customer_id,
                last4: Some("4242".to_string()),
                cc_type: Some("visa".to_string()),
            });
        }

        Err(AppError::ExternalServiceError(
            "Payment gateway is not configured; set PAYMENT_DEVELOPMENT_MODE=true to use mock card setup"
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::Address;

    fn sample_team() -> Team {
        Team::new_team(
            Some("Acme Inc".to_string()),
            Some("acme".to_string()),
            None,
            Address {
                address1: "548 Market St".to_string(),
                address2: None,
                city: "San Francisco".to_string(),
                state: Some("CA".to_string()),
                zip: Some("94104".to_string()),
                country: "US".to_string(),
            },
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_development_mode_returns_mock_summary() {
        let service = PaymentSetupService::new(true);
        let team = sample_team();

        let summary = service
            .register_payment_method(&team, "pm_123456")
            .await
            .unwrap();

        assert!(summary.stripe_customer_id.starts_with("cus_dev_"));
        assert_eq!(summary.last4, Some("4242".to_string()));
        assert_eq!(summary.cc_type, Some("visa".to_string()));
    }

    #[tokio::test]
    async fn test_development_mode_keeps_existing_customer_id() {
        let service = PaymentSetupService::new(true);
        let mut team = sample_team();
        team.stripe_customer_id = Some("cus_existing".to_string());

        let summary = service
            .register_payment_method(&team, "pm_123456")
            .await
            .unwrap();

        assert_eq!(summary.stripe_customer_id, "cus_existing");
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_is_an_external_service_error() {
        let service = PaymentSetupService::new(false);
        let team = sample_team();

        let err = service
            .register_payment_method(&team, "pm_123456")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalServiceError(_)));
    }
}
