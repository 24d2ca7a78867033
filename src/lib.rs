pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;
pub mod views;

use std::sync::Arc;

use crate::config::Config;
use crate::middleware::auth::TokenVerifier;
use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    favorite_service::FavoriteService, internship_service::InternshipService,
    recruitment_service::RecruitmentService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub verifier: TokenVerifier,
    pub company_service: CompanyService,
    pub recruitment_service: RecruitmentService,
    pub internship_service: InternshipService,
    pub user_service: UserService,
    pub favorite_service: FavoriteService,
    pub application_service: ApplicationService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let verifier = TokenVerifier::from_config(&config.auth);

        let company_service = CompanyService::new(pool.clone());
        let recruitment_service = RecruitmentService::new(pool.clone());
        let internship_service = InternshipService::new(pool.clone());
        let user_service = UserService::postgres(pool.clone());
        let favorite_service = FavoriteService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());

        Self {
            pool,
            config: Arc::new(config),
            verifier,
            company_service,
            recruitment_service,
            internship_service,
            user_service,
            favorite_service,
            application_service,
        }
    }
}
