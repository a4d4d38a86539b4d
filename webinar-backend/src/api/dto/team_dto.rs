// webinar-backend/src/api/dto/team_dto.rs

use crate::domain::address::Address;
use crate::domain::billing_cycle::BillingCycle;
use crate::domain::team_model::Model as Team;
use crate::utils::validation::validate_subdomain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// チーム作成リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(max = 100, message = "Team name cannot exceed 100 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 2, max = 63, message = "Subdomain must be 2-63 characters"),
        custom(function = validate_subdomain)
    )]
    pub subdomain: Option<String>,

    #[validate(url(message = "Logo media URL must be a valid URL"))]
    pub logo_media_url: Option<String>,

    #[validate(nested)]
    pub address: Address,

    pub billing_cycle: Option<BillingCycle>,

    #[validate(range(min = 0, message = "Minimum public webinars cannot be negative"))]
    pub minimum_public_webinars: Option<i32>,
}

/// チーム更新入力
///
/// 部分更新のペイロード。Someのフィールドだけがマージされ、
/// payment_method_id は決済セットアップにのみ渡されチームへは永続化されない。
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TeamInput {
    pub id: Option<Uuid>,

    #[validate(length(max = 100, message = "Team name cannot exceed 100 characters"))]
    pub name: Option<String>,

    #[validate(
        length(min = 2, max = 63, message = "Subdomain must be 2-63 characters"),
        custom(function = validate_subdomain)
    )]
    pub subdomain: Option<String>,

    #[validate(url(message = "Logo media URL must be a valid URL"))]
    pub logo_media_url: Option<String>,

    #[validate(nested)]
    pub address: Option<Address>,

    pub billing_cycle: Option<BillingCycle>,

    pub stripe_customer_id: Option<String>,

    #[validate(length(equal = 4, message = "Last4 must be exactly 4 characters"))]
    pub last4: Option<String>,

    #[validate(length(max = 50, message = "Card type cannot exceed 50 characters"))]
    pub cc_type: Option<String>,

    /// Payment Method ID generated by the Stripe JS library
    pub payment_method_id: Option<String>,
}

impl TeamInput {
    /// 入力で指定されたフィールドだけをチームにマージする
    ///
    /// id は決して変更しない。payment_method_id はここでは消費されない。
    pub fn apply_to(&self, team: &mut Team) {
        if let Some(name) = &self.name {
            team.name = Some(name.clone());
        }
        if let Some(subdomain) = &self.subdomain {
            team.subdomain = Some(subdomain.clone());
        }
        if let Some(logo_media_url) = &self.logo_media_url {
            team.logo_media_url = Some(logo_media_url.clone());
        }
        if let Some(address) = &self.address {
            team.address = address.clone();
        }
        if let Some(billing_cycle) = self.billing_cycle {
            team.billing_cycle = billing_cycle.to_string();
        }
        if let Some(stripe_customer_id) = &self.stripe_customer_id {
            team.stripe_customer_id = Some(stripe_customer_id.clone());
        }
        if let Some(last4) = &self.last4 {
            team.last4 = Some(last4.clone());
        }
        if let Some(cc_type) = &self.cc_type {
            team.cc_type = Some(cc_type.clone());
        }
    }
}

/// チーム詳細レスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub subdomain: Option<String>,
    pub logo_media_url: Option<String>,
    pub stripe_customer_id: Option<String>,
    pub stripe_subscription_id: Option<String>,
    pub minimum_public_webinars: i32,
    pub address: Address,
    pub billing_cycle: BillingCycle,
    pub last4: Option<String>,
    pub cc_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        let billing_cycle = team.get_billing_cycle();
        Self {
            id: team.id,
            name: team.name,
            subdomain: team.subdomain,
            logo_media_url: team.logo_media_url,
            stripe_customer_id: team.stripe_customer_id,
            stripe_subscription_id: team.stripe_subscription_id,
            minimum_public_webinars: team.minimum_public_webinars,
            address: team.address,
            billing_cycle,
            last4: team.last4,
            cc_type: team.cc_type,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// チーム一覧レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub subdomain: Option<String>,
    pub logo_media_url: Option<String>,
    pub billing_cycle: BillingCycle,
    pub minimum_public_webinars: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamListResponse {
    fn from(team: Team) -> Self {
        let billing_cycle = team.get_billing_cycle();
        Self {
            id: team.id,
            name: team.name,
            subdomain: team.subdomain,
            logo_media_url: team.logo_media_url,
            billing_cycle,
            minimum_public_webinars: team.minimum_public_webinars,
            created_at: team.created_at,
        }
    }
}

/// チーム一覧ページング取得レスポンス
pub type TeamPaginationResponse = super::common::PaginatedResponse<TeamListResponse>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address {
            address1: "548 Market St".to_string(),
            address2: None,
            city: "San Francisco".to_string(),
            state: Some("CA".to_string()),
            zip: Some("94104".to_string()),
            country: "US".to_string(),
        }
    }

    fn sample_team() -> Team {
        Team::new_team(
            Some("Acme Inc".to_string()),
            Some("acme".to_string()),
            None,
            sample_address(),
            None,
            None,
        )
    }

    #[test]
    fn test_create_team_request_validation() {
        // Valid request
        let valid_request = CreateTeamRequest {
            name: Some("Acme Inc".to_string()),
            subdomain: Some("acme".to_string()),
            logo_media_url: None,
            address: sample_address(),
            billing_cycle: Some(BillingCycle::Year),
            minimum_public_webinars: None,
        };
        assert!(valid_request.validate().is_ok());

        // Malformed subdomain
        let invalid_request = CreateTeamRequest {
            name: None,
            subdomain: Some("Acme Inc".to_string()),
            logo_media_url: None,
            address: sample_address(),
            billing_cycle: None,
            minimum_public_webinars: None,
        };
        assert!(invalid_request.validate().is_err());

        // Subdomain too short
        let short_request = CreateTeamRequest {
            name: None,
            subdomain: Some("a".to_string()),
            logo_media_url: None,
            address: sample_address(),
            billing_cycle: None,
            minimum_public_webinars: None,
        };
        assert!(short_request.validate().is_err());

        // Negative billing floor
        let negative_request = CreateTeamRequest {
            name: None,
            subdomain: None,
            logo_media_url: None,
            address: sample_address(),
            billing_cycle: None,
            minimum_public_webinars: Some(-1),
        };
        assert!(negative_request.validate().is_err());

        // Explicit zero is allowed
        let zero_request = CreateTeamRequest {
            name: None,
            subdomain: None,
            logo_media_url: None,
            address: sample_address(),
            billing_cycle: None,
            minimum_public_webinars: Some(0),
        };
        assert!(zero_request.validate().is_ok());

        // Invalid nested address
        let mut bad_address = sample_address();
        bad_address.city = "".to_string();
        let bad_address_request = CreateTeamRequest {
            name: None,
            subdomain: None,
            logo_media_url: None,
            address: bad_address,
            billing_cycle: None,
            minimum_public_webinars: None,
        };
        assert!(bad_address_request.validate().is_err());
    }

    #[test]
    fn test_team_input_validation() {
        let valid_input = TeamInput {
            subdomain: Some("acme-inc".to_string()),
            last4: Some("4242".to_string()),
            ..Default::default()
        };
        assert!(valid_input.validate().is_ok());

        let bad_url_input = TeamInput {
            logo_media_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(bad_url_input.validate().is_err());

        let bad_last4_input = TeamInput {
            last4: Some("42".to_string()),
            ..Default::default()
        };
        assert!(bad_last4_input.validate().is_err());
    }

    #[test]
    fn test_apply_to_merges_only_specified_fields() {
        let mut team = sample_team();
        let original_id = team.id;
        let original_name = team.name.clone();
        let original_subdomain = team.subdomain.clone();
        let original_address = team.address.clone();

        let input = TeamInput {
            last4: Some("4242".to_string()),
            ..Default::default()
        };
        input.apply_to(&mut team);

        assert_eq!(team.last4, Some("4242".to_string()));
        assert_eq!(team.id, original_id);
        assert_eq!(team.name, original_name);
        assert_eq!(team.subdomain, original_subdomain);
        assert_eq!(team.address, original_address);
        assert_eq!(team.billing_cycle, "Month");
    }

    #[test]
    fn test_apply_to_is_idempotent() {
        let mut team_once = sample_team();
        let mut team_twice = team_once.clone();

        let input = TeamInput {
            name: Some("Acme International".to_string()),
            billing_cycle: Some(BillingCycle::Year),
            cc_type: Some("visa".to_string()),
            ..Default::default()
        };

        input.apply_to(&mut team_once);
        input.apply_to(&mut team_twice);
        input.apply_to(&mut team_twice);

        assert_eq!(team_once, team_twice);
    }

    #[test]
    fn test_apply_to_never_touches_id_or_payment_method() {
        let mut team = sample_team();
        let original_id = team.id;

        let input = TeamInput {
            id: Some(Uuid::new_v4()),
            payment_method_id: Some("pm_123456".to_string()),
            ..Default::default()
        };
        input.apply_to(&mut team);

        assert_eq!(team.id, original_id);
        // No field of the team carries the payment method id
        let serialized = serde_json::to_string(&team).unwrap();
        assert!(!serialized.contains("pm_123456"));
    }

    #[test]
    fn test_team_response_round_trip() {
        let response = TeamResponse::from(sample_team());
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: TeamResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_team_response_conversion() {
        let team = Team::new_team(
            Some("Acme Inc".to_string()),
            Some("acme".to_string()),
            None,
            sample_address(),
            Some(BillingCycle::Year),
            None,
        );
        let response = TeamResponse::from(team.clone());

        assert_eq!(response.id, team.id);
        assert_eq!(response.minimum_public_webinars, 1);
        assert_eq!(response.billing_cycle, BillingCycle::Year);
        assert_eq!(response.last4, None);
        assert_eq!(response.cc_type, None);
    }

    #[test]
    fn test_team_pagination_response_creation() {
        let teams: Vec<TeamListResponse> = vec![
            sample_team().into(),
            Team::new_team(
                Some("Globex".to_string()),
                Some("globex".to_string()),
                None,
                sample_address(),
                Some(BillingCycle::Year),
                Some(3),
            )
            .into(),
        ];

        let response = TeamPaginationResponse::new(teams, 1, 20, 2);

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.pagination.total_count, 2);
        assert_eq!(response.pagination.total_pages, 1);
    }
}
