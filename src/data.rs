use chrono::NaiveDate;
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::radar::SkillPoint;
use crate::ui::classes::BadgeVariant;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<u32, ProjectDetail>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "data"]
pub struct MockData;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Mock data file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
    #[error("No project with id {0}")]
    UnknownProject(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub experience: u32,
    pub projects: u32,
    pub contributions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
}

impl From<&Skill> for SkillPoint {
    fn from(skill: &Skill) -> Self {
        SkillPoint::new(format!("{} {}", skill.icon, skill.name), f64::from(skill.level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    Award,
    Milestone,
    Presentation,
    Contribution,
}

impl AchievementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Milestone => "milestone",
            Self::Presentation => "presentation",
            Self::Contribution => "contribution",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Active => BadgeVariant::Success,
            Self::Completed => BadgeVariant::Info,
            Self::InProgress => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u32,
    pub name: String,
    pub tech: String,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    pub progress: u8,
    pub team: Vec<String>,
    pub timeline: Timeline,
    pub features: Vec<String>,
    pub screenshots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub projects: u32,
    pub tasks: u32,
    pub achievements: u32,
}

fn load<T: DeserializeOwned>(file: &str) -> Result<T, DataError> {
    let content = MockData::get(file).ok_or_else(|| DataError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|e| DataError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

pub fn profile() -> Result<Profile, DataError> {
    load("profile.json")
}

pub fn skills() -> Result<Vec<Skill>, DataError> {
    load("skills.json")
}

pub fn achievements() -> Result<Vec<Achievement>, DataError> {
    load("achievements.json")
}

pub fn features() -> Result<Vec<Feature>, DataError> {
    load("features.json")
}

pub fn stats() -> Result<Stats, DataError> {
    load("stats.json")
}

pub fn projects() -> Result<Vec<ProjectSummary>, DataError> {
    let details: Vec<ProjectDetail> = load("projects.json")?;
    Ok(details
        .into_iter()
        .map(|p| ProjectSummary {
            id: p.id,
            name: p.name,
            tech: p.tech.join(" + "),
            status: p.status,
        })
        .collect())
}

pub fn project_detail(id: u32) -> Result<ProjectDetail, DataError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(p) = cache.get(&id) {
        return Ok(p.value().clone());
    }
    let details: Vec<ProjectDetail> = load("projects.json")?;
    for p in details {
        cache.insert(p.id, p);
    }
    cache
        .get(&id)
        .map(|p| p.value().clone())
        .ok_or(DataError::UnknownProject(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_files_parse() {
        let profile = profile().expect("profile should parse");
        assert!(!profile.name.is_empty());
        assert!(profile.contributions > 0);

        let skills = skills().expect("skills should parse");
        assert_eq!(skills.len(), 8);
        assert!(skills.iter().all(|s| s.level <= 100));

        let achievements = achievements().expect("achievements should parse");
        assert_eq!(achievements.len(), 4);
        assert_eq!(achievements[0].kind, AchievementKind::Award);

        assert_eq!(features().expect("features should parse").len(), 4);
        let stats = stats().expect("stats should parse");
        assert_eq!(
            stats,
            Stats {
                projects: 42,
                tasks: 128,
                achievements: 15
            }
        );
    }

    #[test]
    fn test_projects_summarize_details() {
        let projects = projects().expect("projects should parse");
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().any(|p| p.status == ProjectStatus::InProgress));

        for summary in &projects {
            let detail = project_detail(summary.id).expect("every summary should have a detail");
            assert_eq!(detail.name, summary.name);
            assert!(detail.progress <= 100);
            assert!(detail.timeline.start <= detail.timeline.end);
        }
    }

    #[test]
    fn test_unknown_project() {
        assert_eq!(project_detail(9999), Err(DataError::UnknownProject(9999)));
    }

    #[test]
    fn test_missing_file() {
        let res: Result<Profile, DataError> = load("nope.json");
        assert_eq!(res, Err(DataError::NotFound("nope.json".to_string())));
    }

    #[test]
    fn test_status_serde() {
        let status: ProjectStatus =
            serde_json::from_str("\"In Progress\"").expect("status should parse");
        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(status.label(), "In Progress");
        assert_eq!(ProjectStatus::Active.badge(), BadgeVariant::Success);
    }

    #[test]
    fn test_skill_point() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: 90,
            icon: "🦀".to_string(),
        };
        let point = SkillPoint::from(&skill);
        assert_eq!(point.label, "🦀 Rust");
        assert_eq!(point.percentage, 90.0);
    }
}
