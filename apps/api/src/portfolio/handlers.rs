use axum::{extract::State, Json};

use crate::portfolio::models::{Project, Skill};
use crate::state::AppState;

/// GET /api/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.portfolio.list_projects().await)
}

/// GET /api/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(state.portfolio.list_skills().await)
}
