// webinar-backend/src/domain/team_model.rs

use super::address::Address;
use super::billing_cycle::BillingCycle;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DbErr, Set};
use serde::{Deserialize, Serialize};

/// チームエンティティ
///
/// マルチテナントにおけるテナント組織の集約ルート。従属エンティティ
/// (ewebinars, team_user_relations, ewebinar_sets, presenters) は
/// team_id の外部キーでこのテーブルを参照する。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Team or company name
    #[sea_orm(nullable)]
    pub name: Option<String>,

    /// テナントルーティング用のサブドメイン。存在する場合は全チームで一意
    #[sea_orm(unique, nullable)]
    pub subdomain: Option<String>,

    #[sea_orm(nullable)]
    pub logo_media_url: Option<String>,

    #[sea_orm(unique, nullable)]
    pub stripe_customer_id: Option<String>,

    #[sea_orm(nullable)]
    pub stripe_subscription_id: Option<String>,

    /// 課金対象となる公開ウェビナーの最低数 (エンタープライズプラン向け)
    pub minimum_public_webinars: i32,

    #[sea_orm(column_type = "Json")]
    pub address: Address,

    pub billing_cycle: String,

    /// 契約に使用されたカードの下4桁 (表示用)
    #[sea_orm(nullable)]
    pub last4: Option<String>,

    /// カードブランド (表示用)
    #[sea_orm(nullable)]
    pub cc_type: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ewebinar_model::Entity")]
    EWebinars,
    #[sea_orm(has_many = "super::team_user_relation_model::Entity")]
    TeamUserRelations,
    #[sea_orm(has_many = "super::ewebinar_set_model::Entity")]
    EWebinarSets,
    #[sea_orm(has_many = "super::presenter_model::Entity")]
    Presenters,
}

impl Related<super::ewebinar_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EWebinars.def()
    }
}

impl Related<super::team_user_relation_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamUserRelations.def()
    }
}

impl Related<super::ewebinar_set_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EWebinarSets.def()
    }
}

impl Related<super::presenter_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Presenters.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }

    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl Model {
    /// 新しいチームを作成
    ///
    /// billing_cycle と minimum_public_webinars は未指定の場合、
    /// 永続化前にそれぞれ Month / 1 に確定される。
    pub fn new_team(
        name: Option<String>,
        subdomain: Option<String>,
        logo_media_url: Option<String>,
        address: Address,
        billing_cycle: Option<BillingCycle>,
        minimum_public_webinars: Option<i32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            subdomain,
            logo_media_url,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            minimum_public_webinars: minimum_public_webinars.unwrap_or(1),
            address,
            billing_cycle: billing_cycle.unwrap_or_default().to_string(),
            last4: None,
            cc_type: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// 請求サイクルを取得
    pub fn get_billing_cycle(&self) -> BillingCycle {
        self.billing_cycle.parse().unwrap_or(BillingCycle::Month)
    }
}

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

    #[test]
    fn test_team_creation_defaults() {
        let team = Model::new_team(
            Some("Acme Inc".to_string()),
            Some("acme".to_string()),
            None,
            sample_address(),
            None,
            None,
        );

        assert_eq!(team.name, Some("Acme Inc".to_string()));
        assert_eq!(team.subdomain, Some("acme".to_string()));
        assert_eq!(team.billing_cycle, "Month");
        assert_eq!(team.minimum_public_webinars, 1);
        assert_eq!(team.last4, None);
        assert_eq!(team.cc_type, None);
        assert_eq!(team.stripe_customer_id, None);
    }

    #[test]
    fn test_team_creation_explicit_values() {
        let team = Model::new_team(
            Some("Acme Inc".to_string()),
            Some("acme".to_string()),
            Some("https://cdn.example.com/logo.png".to_string()),
            sample_address(),
            Some(BillingCycle::Year),
            Some(0),
        );

        assert_eq!(team.billing_cycle, "Year");
        assert_eq!(team.get_billing_cycle(), BillingCycle::Year);
        // Fully comped accounts are allowed an explicit floor of zero
        assert_eq!(team.minimum_public_webinars, 0);
    }

    #[test]
    fn test_get_billing_cycle_falls_back_to_month() {
        let mut team = Model::new_team(None, None, None, sample_address(), None, None);
        team.billing_cycle = "garbage".to_string();
        assert_eq!(team.get_billing_cycle(), BillingCycle::Month);
    }
}
