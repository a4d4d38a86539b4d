// webinar-backend/src/domain/presenter_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// プレゼンタープロフィールエンティティ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "presenters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    #[sea_orm(nullable)]
    pub profile_media_url: Option<String>,
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
}

impl Related<super::team_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
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
    /// 新しいプレゼンターを作成
    pub fn new_presenter(team_id: Uuid, name: String, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            name,
            email,
            profile_media_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presenter_creation() {
        let team_id = Uuid::new_v4();
        let presenter = Model::new_presenter(
            team_id,
            "Dana Lee".to_string(),
            Some("dana@example.com".to_string()),
        );

        assert_eq!(presenter.team_id, team_id);
        assert_eq!(presenter.name, "Dana Lee");
        assert_eq!(presenter.email, Some("dana@example.com".to_string()));
        assert_eq!(presenter.profile_media_url, None);
    }
}
