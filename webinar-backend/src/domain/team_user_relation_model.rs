// webinar-backend/src/domain/team_user_relation_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// チームとユーザーのメンバーシップリンク
///
/// APIでは "users" として公開される。ユーザー自体は外部サブシステムの
/// 管轄なので user_id は外部キー制約を持たない。
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_user_relations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub created_at: DateTime<Utc>,
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
            ..ActiveModelTrait::default()
        }
    }
}

/// チーム内の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    Admin,
    Creator,
    Moderator,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamRole::Admin => write!(f, "admin"),
            TeamRole::Creator => write!(f, "creator"),
            TeamRole::Moderator => write!(f, "moderator"),
        }
    }
}

impl std::str::FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(TeamRole::Admin),
            "creator" => Ok(TeamRole::Creator),
            "moderator" => Ok(TeamRole::Moderator),
            _ => Err(format!("Invalid team role: {}", s)),
        }
    }
}

impl TeamRole {
    /// Check if role can manage team settings
    pub fn can_manage(&self) -> bool {
        matches!(self, TeamRole::Admin)
    }
}

impl Model {
    /// 新しいメンバーシップリンクを作成
    pub fn new_relation(team_id: Uuid, user_id: Uuid, role: TeamRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id,
            user_id,
            role: role.to_string(),
            created_at: Utc::now(),
        }
    }

    /// 役割を取得
    pub fn get_role(&self) -> TeamRole {
        self.role.parse().unwrap_or(TeamRole::Moderator)
    }
}
