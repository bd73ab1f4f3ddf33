use crate::model::{MetricsError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Team {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Deserialize)]
struct RosterDocument {
    teams: Vec<TeamNode>,
}

#[derive(Deserialize)]
struct TeamNode {
    name: String,
    #[serde(default)]
    members: Vec<MemberNode>,
}

#[derive(Deserialize)]
struct MemberNode {
    name: String,
}

// Create
impl Team {
    pub fn from_config(path: &Path) -> Result<Vec<Self>> {
        let json_str = fs::read_to_string(path).map_err(|source| MetricsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json_str).map_err(|source| MetricsError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn new(name: impl ToString, members: Vec<impl ToString>) -> Self {
        Self {
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

// Parser
impl Team {
    pub fn parse(json_str: &str) -> serde_json::Result<Vec<Self>> {
        let document: RosterDocument = serde_json::from_str(json_str)?;
        let teams = document
            .teams
            .into_iter()
            .map(|team| {
                let members = team.members.into_iter().map(|m| m.name).collect::<Vec<_>>();
                Self::new(team.name, members)
            })
            .collect();
        Ok(teams)
    }
}
