use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::teams::{CreateTeamRequest, UpdateTeamRequest};
use crate::models::users::entities::UserRole;
use crate::services::TeamService;
use crate::utils::SafeIDI64;

static TEAM_SERVICE: Lazy<TeamService> = Lazy::new(TeamService::new_lazy);

pub async fn list_teams(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEAM_SERVICE.list_teams(&req).await
}

pub async fn get_team(req: HttpRequest, team_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEAM_SERVICE.get_team(team_id.0, &req).await
}

pub async fn create_team(
    req: HttpRequest,
    team_data: web::Json<CreateTeamRequest>,
) -> ActixResult<HttpResponse> {
    TEAM_SERVICE.create_team(team_data.into_inner(), &req).await
}

pub async fn update_team(
    req: HttpRequest,
    team_id: SafeIDI64,
    update_data: web::Json<UpdateTeamRequest>,
) -> ActixResult<HttpResponse> {
    TEAM_SERVICE
        .update_team(team_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_team(req: HttpRequest, team_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEAM_SERVICE.delete_team(team_id.0, &req).await
}

// 配置路由
pub fn configure_team_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 所有登录用户可查看
                    .route(web::get().to(list_teams))
                    // 教师只能为自己创建，管理员可指定负责人
                    .route(
                        web::post()
                            .to(create_team)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_team))
                    // 负责教师或管理员，业务层再次校验
                    .route(
                        web::put()
                            .to(update_team)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_team)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
