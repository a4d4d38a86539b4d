// webinar-backend/src/repository/team_repository.rs

use crate::domain::ewebinar_model::{
    Column as EWebinarColumn, Entity as EWebinarEntity, Model as EWebinar,
};
use crate::domain::ewebinar_set_model::{
    Column as EWebinarSetColumn, Entity as EWebinarSetEntity, Model as EWebinarSet,
};
use crate::domain::presenter_model::{
    Column as PresenterColumn, Entity as PresenterEntity, Model as Presenter,
};
use crate::domain::team_model::{
    ActiveModel as TeamActiveModel, Column as TeamColumn, Entity as TeamEntity, Model as Team,
};
use crate::domain::team_user_relation_model::{
    Column as TeamUserRelationColumn, Entity as TeamUserRelationEntity,
    Model as TeamUserRelation,
};
use crate::error::AppResult;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct TeamRepository {
    db: DatabaseConnection,
}

impl TeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// チームを作成
    pub async fn create_team(&self, team: &Team) -> AppResult<Team> {
        let active_model = TeamActiveModel {
            id: Set(team.id),
            name: Set(team.name.clone()),
            subdomain: Set(team.subdomain.clone()),
            logo_media_url: Set(team.logo_media_url.clone()),
            stripe_customer_id: Set(team.stripe_customer_id.clone()),
            stripe_subscription_id: Set(team.stripe_subscription_id.clone()),
            minimum_public_webinars: Set(team.minimum_public_webinars),
            address: Set(team.address.clone()),
            billing_cycle: Set(team.billing_cycle.clone()),
            last4: Set(team.last4.clone()),
            cc_type: Set(team.cc_type.clone()),
            created_at: Set(team.created_at),
            updated_at: Set(team.updated_at),
        };

        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    /// チームをIDで取得
    pub async fn find_by_id(&self, team_id: Uuid) -> AppResult<Option<Team>> {
        let model = TeamEntity::find_by_id(team_id).one(&self.db).await?;
        Ok(model)
    }

    /// チームをサブドメインで検索
    pub async fn find_by_subdomain(&self, subdomain: &str) -> AppResult<Option<Team>> {
        let model = TeamEntity::find()
            .filter(TeamColumn::Subdomain.eq(subdomain))
            .one(&self.db)
            .await?;
        Ok(model)
    }

    /// チーム一覧をページングで取得
    pub async fn find_with_pagination(
        &self,
        page: i32,
        per_page: i32,
    ) -> AppResult<(Vec<Team>, u64)> {
        let paginator = TeamEntity::find()
            .order_by_asc(TeamColumn::CreatedAt)
            .paginate(&self.db, per_page as u64);

        let total_items = paginator.num_items().await?;
        let models = paginator.fetch_page((page - 1) as u64).await?;

        Ok((models, total_items))
    }

    /// チームを更新
    pub async fn update_team(&self, team: &Team) -> AppResult<Team> {
        let active_model = TeamActiveModel {
            id: Set(team.id),
            name: Set(team.name.clone()),
            subdomain: Set(team.subdomain.clone()),
            logo_media_url: Set(team.logo_media_url.clone()),
            stripe_customer_id: Set(team.stripe_customer_id.clone()),
            stripe_subscription_id: Set(team.stripe_subscription_id.clone()),
            minimum_public_webinars: Set(team.minimum_public_webinars),
            address: Set(team.address.clone()),
            billing_cycle: Set(team.billing_cycle.clone()),
            last4: Set(team.last4.clone()),
            cc_type: Set(team.cc_type.clone()),
            created_at: Set(team.created_at),
            updated_at: Set(team.updated_at),
        };

        let model = active_model.update(&self.db).await?;
        Ok(model)
    }

    /// チームを削除
    ///
    /// 従属行は外部キーの ON DELETE CASCADE で削除される。
    pub async fn delete_team(&self, team_id: Uuid) -> AppResult<bool> {
        let result = TeamEntity::delete_by_id(team_id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    // --- 遅延リレーションローダー ---
    // 各コレクションは他のコレクションを読み込まずに個別に取得できる。

    /// チームのウェビナー一覧を取得
    pub async fn find_ewebinars_by_team_id(&self, team_id: Uuid) -> AppResult<Vec<EWebinar>> {
        let models = EWebinarEntity::find()
            .filter(EWebinarColumn::TeamId.eq(team_id))
            .order_by_asc(EWebinarColumn::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    /// チームのメンバーシップリンク一覧を取得
    pub async fn find_user_relations_by_team_id(
        &self,
        team_id: Uuid,
    ) -> AppResult<Vec<TeamUserRelation>> {
        let models = TeamUserRelationEntity::find()
            .filter(TeamUserRelationColumn::TeamId.eq(team_id))
            .order_by_asc(TeamUserRelationColumn::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    /// チームのウェビナーセット一覧を取得
    pub async fn find_sets_by_team_id(&self, team_id: Uuid) -> AppResult<Vec<EWebinarSet>> {
        let models = EWebinarSetEntity::find()
            .filter(EWebinarSetColumn::TeamId.eq(team_id))
            .order_by_asc(EWebinarSetColumn::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    /// チームのプレゼンター一覧を取得
    pub async fn find_presenters_by_team_id(&self, team_id: Uuid) -> AppResult<Vec<Presenter>> {
        let models = PresenterEntity::find()
            .filter(PresenterColumn::TeamId.eq(team_id))
            .order_by_asc(PresenterColumn::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }
}
