// webinar-backend/src/domain/ewebinar_set_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// ウェビナーセットエンティティ
///
/// チームに属するウェビナーの名前付きグループ。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ewebinar_sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
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
    #[sea_orm(has_many = "super::ewebinar_model::Entity")]
    EWebinars,
}

impl Related<super::team_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::ewebinar_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EWebinars.def()
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
    /// 新しいウェビナーセットを作成
    pub fn new_set(team_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            name,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_creation() {
        let team_id = Uuid::new_v4();
        let set = Model::new_set(team_id, "Quarterly demos".to_string());

        assert_eq!(set.team_id, team_id);
        assert_eq!(set.name, "Quarterly demos");
    }
}
