use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier passed to `mvn -pl`: `artifactId` or `parentGroupId:artifactId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModuleId(String);

impl ModuleId {
    /// Returns `None` for a blank `artifactId`. A blank group is ignored.
    pub fn new(artifact_id: &str, parent_group_id: Option<&str>) -> Option<Self> {
        let artifact_id = artifact_id.trim();
        if artifact_id.is_empty() {
            return None;
        }

        let id = match parent_group_id.map(str::trim).filter(|g| !g.is_empty()) {
            Some(group_id) => format!("{}:{}", group_id, artifact_id),
            None => artifact_id.to_string(),
        };
        Some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct modules touched by a change list, iterated in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSet {
    modules: BTreeSet<ModuleId>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the module was already present.
    pub fn insert(&mut self, module: ModuleId) -> bool {
        self.modules.insert(module)
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m.as_str() == module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.modules
            .iter()
            .map(ModuleId::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Value for the `-pl` argument of Maven.
    pub fn to_param(&self) -> String {
        self.join(",")
    }
}

/// Where the pull request lives on the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PR #{} in {}/{}", self.number, self.owner, self.repo)
    }
}

/// One entry of `GET /repos/{owner}/{repo}/pulls/{number}/files`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestFile {
    pub filename: String,
    #[serde(default)]
    pub status: Option<String>,
}
