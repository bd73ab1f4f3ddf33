use crate::model::{parse_timestamp, MetricsError, RecordError, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One merge request as exported, with timestamps already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeRequestRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub discussions_count: usize,
    pub notes_count: usize,
    pub state: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: DateTime<Utc>,
    pub commit_dates: Vec<DateTime<Utc>>,
    pub url: String,
}

/// A parsed export file: the project name and its merge request nodes in
/// document order. Nodes become records through [`MergeRequestExport::records`].
#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequestExport {
    data: ExportData,
}

#[derive(Debug, Clone, Deserialize)]
struct ExportData {
    project: ProjectNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectNode {
    #[serde(default)]
    name: String,
    merge_requests: Connection<MergeRequestNode>,
}

#[derive(Debug, Clone, Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequestNode {
    id: String,
    #[serde(default)]
    title: String,
    author: AuthorNode,
    #[serde(default)]
    user_discussions_count: usize,
    #[serde(default)]
    user_notes_count: usize,
    #[serde(default)]
    state: String,
    created_at: Option<String>,
    merged_at: Option<String>,
    #[serde(default = "Connection::empty")]
    commits: Connection<CommitNode>,
    #[serde(default)]
    web_url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AuthorNode {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitNode {
    authored_date: Option<String>,
}

impl<T> Connection<T> {
    fn empty() -> Self {
        Self { nodes: Vec::new() }
    }
}

// Create
impl MergeRequestExport {
    pub fn from_config(path: &Path) -> Result<Self> {
        let json_str = fs::read_to_string(path).map_err(|source| MetricsError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json_str).map_err(|source| MetricsError::Export {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(json_str: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json_str)
    }

    pub fn project_name(&self) -> &str {
        &self.data.project.name
    }

    pub fn len(&self) -> usize {
        self.data.project.merge_requests.nodes.len()
    }

    /// Converts every node, keeping document order. A node with a bad
    /// timestamp yields a [`RecordError`] in its slot.
    pub fn records(&self) -> Vec<std::result::Result<MergeRequestRecord, RecordError>> {
        self.data
            .project
            .merge_requests
            .nodes
            .iter()
            .map(MergeRequestRecord::try_from)
            .collect()
    }
}

// Parser
impl TryFrom<&MergeRequestNode> for MergeRequestRecord {
    type Error = RecordError;

    fn try_from(node: &MergeRequestNode) -> std::result::Result<Self, Self::Error> {
        let timestamp = |field: &'static str, value: &Option<String>| {
            let Some(value) = value else {
                return Err(RecordError::MissingTimestamp {
                    author: node.author.name.clone(),
                    url: node.web_url.clone(),
                    field,
                });
            };
            parse_timestamp(value).ok_or_else(|| RecordError::InvalidTimestamp {
                author: node.author.name.clone(),
                url: node.web_url.clone(),
                field,
                value: value.clone(),
            })
        };

        let created_at = timestamp("createdAt", &node.created_at)?;
        let merged_at = timestamp("mergedAt", &node.merged_at)?;
        let commit_dates = node
            .commits
            .nodes
            .iter()
            .map(|commit| timestamp("authoredDate", &commit.authored_date))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            id: node.id.clone(),
            title: node.title.clone(),
            author: node.author.name.clone(),
            discussions_count: node.user_discussions_count,
            notes_count: node.user_notes_count,
            state: node.state.clone(),
            created_at,
            merged_at,
            commit_dates,
            url: node.web_url.clone(),
        })
    }
}
