// webinar-backend/src/domain/address.rs

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// チームの住所
///
/// teams.address のJSONカラムとして永続化される値オブジェクト。
/// 書き込み時にエンコード、読み込み・入力時にデコードとバリデーションを行う。
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, Validate,
)]
pub struct Address {
    #[validate(length(min = 1, max = 200, message = "Address line 1 must be 1-200 characters"))]
    pub address1: String,

    #[validate(length(max = 200, message = "Address line 2 cannot exceed 200 characters"))]
    pub address2: Option<String>,

    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,

    #[validate(length(max = 100, message = "State cannot exceed 100 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 20, message = "Zip cannot exceed 20 characters"))]
    pub zip: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Country must be 1-100 characters"))]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_address() -> Address {
        Address {
            address1: "548 Market St".to_string(),
            address2: Some("Suite 200".to_string()),
            city: "San Francisco".to_string(),
            state: Some("CA".to_string()),
            zip: Some("94104".to_string()),
            country: "US".to_string(),
        }
    }

    #[test]
    fn test_valid_address() {
        assert!(sample_address().validate().is_ok());
    }

    #[test]
    fn test_required_fields() {
        let mut address = sample_address();
        address.address1 = "".to_string();
        assert!(address.validate().is_err());

        let mut address = sample_address();
        address.city = "".to_string();
        assert!(address.validate().is_err());

        let mut address = sample_address();
        address.country = "".to_string();
        assert!(address.validate().is_err());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let address = Address {
            address1: "1 Rue de Rivoli".to_string(),
            address2: None,
            city: "Paris".to_string(),
            state: None,
            zip: None,
            country: "FR".to_string(),
        };
        assert!(address.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let address = sample_address();
        let encoded = serde_json::to_value(&address).unwrap();
        let decoded: Address = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, address);
    }
}
