use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Content the bundled binary ships with. Overridable via `--profile`.
const BUNDLED_PROFILE: &str = include_str!("../profile.json");

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    pub name: String,
    pub short_name: String,
    pub role: String,
    pub headline: String,
    pub location: String,
    pub availability: String,
    pub experience_badge: String,
    pub email: String,
    pub whatsapp: String,
    pub cv_url: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub kind: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub period: String,
    pub cgpa: String,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Certification {
    pub title: String,
    pub provider: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github: String,
    pub category: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("profile owner name is empty")]
    EmptyOwner,
    #[error("duplicate project title: {0}")]
    DuplicateProject(String),
    #[error("duplicate skill in {0}: {1}")]
    DuplicateSkill(String, String),
    #[error("skill level out of range for {0}: {1}")]
    LevelOutOfRange(String, u8),
}

pub fn load(source: Option<&str>) -> anyhow::Result<Profile> {
    let raw = match source {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUNDLED_PROFILE.to_string(),
    };
    Ok(serde_json::from_str(&raw)?)
}

pub fn validate(profile: &Profile) -> anyhow::Result<()> {
    if profile.name.trim().is_empty() {
        return Err(ProfileError::EmptyOwner.into());
    }
    let mut titles = HashSet::new();
    for p in &profile.projects {
        if !titles.insert(&p.title) {
            return Err(ProfileError::DuplicateProject(p.title.clone()).into());
        }
    }
    for group in &profile.skills {
        let mut names = HashSet::new();
        for s in &group.skills {
            if !names.insert(&s.name) {
                return Err(
                    ProfileError::DuplicateSkill(group.category.clone(), s.name.clone()).into(),
                );
            }
            if s.level > 100 {
                return Err(ProfileError::LevelOutOfRange(s.name.clone(), s.level).into());
            }
        }
    }
    Ok(())
}
