// webinar-backend/src/service/team_service.rs

use crate::api::dto::common::PaginationQuery;
use crate::api::dto::team_dto::*;
use crate::domain::ewebinar_model::Model as EWebinarModel;
use crate::domain::ewebinar_set_model::Model as EWebinarSetModel;
use crate::domain::presenter_model::Model as PresenterModel;
use crate::domain::team_model::Model as TeamModel;
use crate::domain::team_user_relation_model::Model as TeamUserRelationModel;
use crate::error::{AppError, AppResult};
use crate::repository::team_repository::TeamRepository;
use crate::service::payment_setup_service::PaymentSetupService;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// Type aliases for domain models
pub type Team = TeamModel;
pub type EWebinar = EWebinarModel;
pub type EWebinarSet = EWebinarSetModel;
pub type Presenter = PresenterModel;
pub type TeamUserRelation = TeamUserRelationModel;

pub struct TeamService {
    team_repository: TeamRepository,
    payment_setup_service: Arc<PaymentSetupService>,
}

impl TeamService {
    pub fn new(
        team_repository: TeamRepository,
        payment_setup_service: Arc<PaymentSetupService>,
    ) -> Self {
        Self {
            team_repository,
            payment_setup_service,
        }
    }

    /// チームを作成
    pub async fn create_team(&self, request: CreateTeamRequest) -> AppResult<TeamResponse> {
        // サブドメインの重複チェック
        if let Some(subdomain) = &request.subdomain {
            if self
                .team_repository
                .find_by_subdomain(subdomain)
                .await?
                .is_some()
            {
                return Err(AppError::Conflict(format!(
                    "Subdomain '{}' is already taken",
                    subdomain
                )));
            }
        }

        let team = Team::new_team(
            request.name.clone(),
            request.subdomain.clone(),
            request.logo_media_url.clone(),
            request.address.clone(),
            request.billing_cycle,
            request.minimum_public_webinars,
        );

        let created_team = self.team_repository.create_team(&team).await?;

        info!(
            team_id = %created_team.id,
            subdomain = ?created_team.subdomain,
            billing_cycle = %created_team.billing_cycle,
            "Team created successfully"
        );

        Ok(TeamResponse::from(created_team))
    }

    /// チーム詳細を取得
    pub async fn get_team_by_id(&self, team_id: Uuid) -> AppResult<TeamResponse> {
        let team = self
            .team_repository
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        Ok(TeamResponse::from(team))
    }

    /// チーム一覧をページングで取得
    pub async fn get_teams(&self, query: PaginationQuery) -> AppResult<TeamPaginationResponse> {
        let (page, per_page) = query.get_pagination();
        let (teams, total_count) = self
            .team_repository
            .find_with_pagination(page, per_page)
            .await?;

        let items = teams.into_iter().map(TeamListResponse::from).collect();
        Ok(TeamPaginationResponse::new(
            items,
            page,
            per_page,
            total_count as i64,
        ))
    }

    /// チームを部分更新
    ///
    /// 入力で指定されたフィールドだけをマージする。payment_method_id は
    /// 決済セットアップコラボレーターに渡し、返されたカードサマリーを
    /// マージの後に適用する。
    pub async fn update_team(&self, team_id: Uuid, input: TeamInput) -> AppResult<TeamResponse> {
        let mut team = self
            .team_repository
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        // ペイロードのidがパスと矛盾する場合は拒否
        if let Some(input_id) = input.id {
            if input_id != team_id {
                return Err(AppError::BadRequest(
                    "Team id in payload does not match the request path".to_string(),
                ));
            }
        }

        // サブドメインの重複チェック（異なるチームで）
        if let Some(subdomain) = &input.subdomain {
            if let Some(existing) = self.team_repository.find_by_subdomain(subdomain).await? {
                if existing.id != team_id {
                    return Err(AppError::Conflict(format!(
                        "Subdomain '{}' is already taken",
                        subdomain
                    )));
                }
            }
        }

        input.apply_to(&mut team);

        if let Some(payment_method_id) = &input.payment_method_id {
            let summary = self
                .payment_setup_service
                .register_payment_method(&team, payment_method_id)
                .await?;
            team.stripe_customer_id = Some(summary.stripe_customer_id);
            team.last4 = summary.last4;
            team.cc_type = summary.cc_type;
        }

        let updated_team = self.team_repository.update_team(&team).await?;

        info!(
            team_id = %updated_team.id,
            subdomain = ?updated_team.subdomain,
            "Team updated successfully"
        );

        Ok(TeamResponse::from(updated_team))
    }

    /// チームを削除
    pub async fn delete_team(&self, team_id: Uuid) -> AppResult<()> {
        let deleted = self.team_repository.delete_team(team_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Team not found".to_string()));
        }

        info!(team_id = %team_id, "Team deleted successfully");
        Ok(())
    }

    // --- 遅延リレーション取得 ---
    // 各リレーションは他を読み込まずに個別に取得できる。

    /// チームのウェビナー一覧を取得
    pub async fn get_ewebinars(&self, team_id: Uuid) -> AppResult<Vec<EWebinar>> {
        self.ensure_team_exists(team_id).await?;
        self.team_repository.find_ewebinars_by_team_id(team_id).await
    }

    /// チームのメンバーシップリンク一覧を取得
    pub async fn get_user_relations(&self, team_id: Uuid) -> AppResult<Vec<TeamUserRelation>> {
        self.ensure_team_exists(team_id).await?;
        self.team_repository
            .find_user_relations_by_team_id(team_id)
            .await
    }

    /// チームのウェビナーセット一覧を取得
    pub async fn get_sets(&self, team_id: Uuid) -> AppResult<Vec<EWebinarSet>> {
        self.ensure_team_exists(team_id).await?;
        self.team_repository.find_sets_by_team_id(team_id).await
    }

    /// チームのプレゼンター一覧を取得
    pub async fn get_presenters(&self, team_id: Uuid) -> AppResult<Vec<Presenter>> {
        self.ensure_team_exists(team_id).await?;
        self.team_repository.find_presenters_by_team_id(team_id).await
    }

    async fn ensure_team_exists(&self, team_id: Uuid) -> AppResult<()> {
        self.team_repository
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;
        Ok(())
    }
}
