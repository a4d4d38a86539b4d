// webinar-backend/src/domain/ewebinar_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// ウェビナーエンティティ
///
/// ライフサイクルはウェビナーサブシステムが管理する。ここでは
/// チームへの後方参照を持つ関連ターゲットとしてのみ扱う。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ewebinars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    #[sea_orm(nullable)]
    pub set_id: Option<Uuid>,
    pub title: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team_model::Entity",
        from = "Column::TeamId",
        to = "super::team_model::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::ewebinar_set_model::Entity",
        from = "Column::SetId",
        to = "super::ewebinar_set_model::Column::Id"
    )]
    Set,
}

impl Related<super::team_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::ewebinar_set_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Set.def()
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
}

impl Model {
    /// 新しいウェビナーを作成
    pub fn new_ewebinar(team_id: Uuid, set_id: Option<Uuid>, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            set_id,
            title,
            is_public: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ewebinar_creation() {
        let team_id = Uuid::new_v4();
        let webinar = Model::new_ewebinar(team_id, None, "Product onboarding".to_string());

        assert_eq!(webinar.team_id, team_id);
        assert_eq!(webinar.set_id, None);
        assert_eq!(webinar.title, "Product onboarding");
        assert!(!webinar.is_public);
    }
}
