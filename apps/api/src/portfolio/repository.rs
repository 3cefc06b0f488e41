use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::portfolio::models::{NewProject, NewSkill, Project, Skill};

/// Read side of the portfolio catalog. Implement this to move the catalog to a
/// real store without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn PortfolioRepository>`.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn list_projects(&self) -> Vec<Project>;
    async fn list_skills(&self) -> Vec<Skill>;
}

/// Process-lifetime catalog. Written once by `seed`, read-only afterwards.
#[derive(Default)]
pub struct InMemoryPortfolio {
    projects: RwLock<Vec<Project>>,
    skills: RwLock<Vec<Skill>>,
}

impl InMemoryPortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills each empty collection, assigning ids from 1. Collections that
    /// already hold data are left alone, so seeding twice is a no-op.
    pub async fn seed(&self, projects: Vec<NewProject>, skills: Vec<NewSkill>) {
        {
            let mut guard = self.skills.write().await;
            if guard.is_empty() {
                *guard = skills
                    .into_iter()
                    .zip(1..)
                    .map(|(skill, id)| Skill::from_new(id, skill))
                    .collect();
                info!("Seeded {} skills", guard.len());
            }
        }

        let mut guard = self.projects.write().await;
        if guard.is_empty() {
            *guard = projects
                .into_iter()
                .zip(1..)
                .map(|(project, id)| Project::from_new(id, project))
                .collect();
            info!("Seeded {} projects", guard.len());
        }
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolio {
    async fn list_projects(&self) -> Vec<Project> {
        self.projects.read().await.clone()
    }

    async fn list_skills(&self) -> Vec<Skill> {
        self.skills.read().await.clone()
    }
}
