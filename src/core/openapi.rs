use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth;
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::investments::{
    dtos as investments_dtos, handlers as investments_handlers, models as investments_models,
};
use crate::features::projects::{
    dtos as projects_dtos, handlers as projects_handlers, models as projects_models,
};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::users::{dtos as users_dtos, handlers::profile_handler, models as users_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::refresh_token,
        auth::handlers::get_me,
        // Users
        profile_handler::update_profile,
        profile_handler::change_password,
        // Projects (public)
        projects_handlers::list_projects,
        projects_handlers::list_featured_projects,
        projects_handlers::get_filter_options,
        projects_handlers::get_project,
        projects_handlers::get_project_aggregate,
        projects_handlers::list_project_aggregates,
        // Projects (entrepreneur)
        projects_handlers::list_my_projects,
        projects_handlers::create_project,
        // Investments
        investments_handlers::create_investment,
        investments_handlers::list_my_investments,
        // Reports
        reports_handlers::create_report,
        reports_handlers::list_reports,
        reports_handlers::update_report_status,
        // Admin
        admin_handlers::list_projects_for_review,
        admin_handlers::approve_project,
        admin_handlers::reject_project,
        admin_handlers::toggle_featured,
        admin_handlers::list_users,
        admin_handlers::get_stats,
        admin_handlers::get_activity,
        // Dashboard (public)
        dashboard_handlers::get_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::RefreshTokenRequestDto,
            auth::dtos::RefreshTokenResponseDto,
            auth::dtos::AuthResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::RefreshTokenResponseDto>,
            // Users
            users_models::UserRole,
            users_dtos::UserResponseDto,
            users_dtos::UpdateProfileDto,
            users_dtos::ChangePasswordDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Projects
            projects_models::ProjectStatus,
            projects_models::MediaType,
            projects_models::ProjectAggregate,
            projects_dtos::CreateProjectDto,
            projects_dtos::CreateProjectMediaDto,
            projects_dtos::ProjectMediaDto,
            projects_dtos::ProjectDto,
            projects_dtos::ProjectDetailDto,
            projects_dtos::FilterOptionsDto,
            projects_dtos::ProjectAggregateEntryDto,
            ApiResponse<projects_dtos::ProjectDto>,
            ApiResponse<projects_dtos::ProjectDetailDto>,
            ApiResponse<Vec<projects_dtos::ProjectDetailDto>>,
            ApiResponse<projects_dtos::FilterOptionsDto>,
            ApiResponse<projects_models::ProjectAggregate>,
            ApiResponse<Vec<projects_dtos::ProjectAggregateEntryDto>>,
            // Investments
            investments_models::InvestmentStatus,
            investments_dtos::CreateInvestmentDto,
            investments_dtos::InvestmentResponseDto,
            investments_dtos::PortfolioInvestmentDto,
            ApiResponse<investments_dtos::InvestmentResponseDto>,
            ApiResponse<Vec<investments_dtos::PortfolioInvestmentDto>>,
            // Reports
            reports_models::ReportStatus,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportStatusDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::AdminReportDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::AdminReportDto>>,
            // Admin
            admin_dtos::AdminStatsDto,
            admin_dtos::ActivityKind,
            admin_dtos::ActivityEventDto,
            ApiResponse<admin_dtos::AdminStatsDto>,
            ApiResponse<Vec<admin_dtos::ActivityEventDto>>,
            // Dashboard (public)
            dashboard_dtos::PlatformStatsDto,
            ApiResponse<dashboard_dtos::PlatformStatsDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "users", description = "User profile management"),
        (name = "projects", description = "Project submission, browsing and funding totals"),
        (name = "investments", description = "Investment commitments (investors only)"),
        (name = "reports", description = "Flags raised against projects"),
        (name = "dashboard", description = "Public platform statistics"),
        (name = "admin", description = "Admin console (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Launch Tribe API",
        version = "0.1.0",
        description = "API documentation for Launch Tribe",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_core_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/investments",
            "/api/projects/{id}/aggregate",
            "/api/projects/aggregates",
            "/api/admin/projects/{id}/approve",
            "/api/admin/projects/{id}/reject",
            "/api/admin/projects/{id}/feature",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
