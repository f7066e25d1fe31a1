//! Immutable tech-node catalog.
//!
//! The catalog is built once at startup and shared (`Arc<Catalog>`) with
//! every component that needs node data. Node names are the only
//! cross-reference handle used by selection and camera targeting, so the
//! catalog keeps a precomputed name → [`NodeId`] map for O(1) lookups.

pub mod fallback;
mod reference;

use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SkillscapeError;

/// Dense index of a node inside its [`Catalog`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct NodeId(pub usize);

/// A project sub-record shown as a satellite of a focused node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title.
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// One entry in the tech catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechNode {
    /// Unique identifier, also the selection key.
    pub name: String,
    /// World-space position.
    pub position: Vec3,
    /// Display color (CSS hex string).
    pub color: String,
    /// Short descriptive text.
    pub description: String,
    /// Proficiency score in `[0, 100]`.
    pub proficiency: u8,
    /// Ordered project sub-records (at least one).
    pub projects: Vec<Project>,
}

impl TechNode {
    /// Proficiency tier used for glow and the detail-panel accent.
    #[must_use]
    pub fn tier(&self) -> ProficiencyTier {
        ProficiencyTier::from_proficiency(self.proficiency)
    }

    fn validate(&self) -> Result<(), SkillscapeError> {
        let invalid = |reason: &str| SkillscapeError::InvalidNode {
            name: self.name.clone(),
            reason: reason.to_owned(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.proficiency > 100 {
            return Err(invalid("proficiency exceeds 100"));
        }
        if self.projects.is_empty() {
            return Err(invalid("node has no projects"));
        }
        if !self.position.is_finite() {
            return Err(invalid("position is not finite"));
        }
        Ok(())
    }
}

/// Discretized proficiency classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyTier {
    /// Proficiency of 90 or more.
    Expert,
    /// Proficiency in `[80, 90)`.
    Proficient,
    /// Proficiency in `[70, 80)`.
    Intermediate,
    /// Anything below 70.
    Beginner,
}

impl ProficiencyTier {
    /// Classify a proficiency score.
    #[must_use]
    pub fn from_proficiency(proficiency: u8) -> Self {
        match proficiency {
            90.. => Self::Expert,
            80..=89 => Self::Proficient,
            70..=79 => Self::Intermediate,
            _ => Self::Beginner,
        }
    }

    /// Lowercase label (`"expert"`, `"proficient"`, ...).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Proficient => "proficient",
            Self::Intermediate => "intermediate",
            Self::Beginner => "beginner",
        }
    }

    /// Fixed glow/accent color for the tier.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Expert => "#00ff88",
            Self::Proficient => "#4a90e2",
            Self::Intermediate => "#ffa500",
            Self::Beginner => "#ff6b6b",
        }
    }
}

/// A titled group of node names, e.g. "State Management".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub title: String,
    /// Heading color (CSS hex string).
    pub color: String,
    /// Names of catalog nodes in the group.
    pub members: Vec<String>,
}

/// Optional stack overview shown above the flat list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// One-line description of the whole stack.
    pub headline: String,
    /// Groups in display order.
    #[serde(default)]
    pub groups: Vec<SkillGroup>,
}

/// On-disk catalog layout: an optional `[summary]` table and a list of
/// `[[nodes]]` tables.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    summary: Option<CatalogSummary>,
    nodes: Vec<TechNode>,
}

/// Immutable node catalog with O(1) name lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<TechNode>,
    by_name: FxHashMap<String, NodeId>,
    summary: Option<CatalogSummary>,
}

impl Catalog {
    /// Build a catalog, validating every node and name uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::DuplicateNode`] when two nodes share a
    /// name and [`SkillscapeError::InvalidNode`] when a node breaks a
    /// data-model invariant.
    pub fn new(nodes: Vec<TechNode>) -> Result<Self, SkillscapeError> {
        let mut by_name = FxHashMap::default();
        by_name.reserve(nodes.len());
        for (idx, node) in nodes.iter().enumerate() {
            node.validate()?;
            if by_name.insert(node.name.clone(), NodeId(idx)).is_some() {
                return Err(SkillscapeError::DuplicateNode(node.name.clone()));
            }
        }
        log::debug!("catalog built with {} nodes", nodes.len());
        Ok(Self {
            nodes,
            by_name,
            summary: None,
        })
    }

    /// Attach a stack overview.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::InvalidNode`] when a group lists a name
    /// that is not in the catalog.
    pub fn with_summary(
        mut self,
        summary: CatalogSummary,
    ) -> Result<Self, SkillscapeError> {
        for group in &summary.groups {
            if let Some(missing) =
                group.members.iter().find(|m| self.lookup(m).is_none())
            {
                return Err(SkillscapeError::InvalidNode {
                    name: missing.clone(),
                    reason: format!(
                        "listed in group '{}' but not in the catalog",
                        group.title
                    ),
                });
            }
        }
        self.summary = Some(summary);
        Ok(self)
    }

    /// The built-in eleven-node reference catalog.
    ///
    /// # Errors
    ///
    /// Fails only if the built-in table is edited into an invalid state.
    pub fn reference() -> Result<Self, SkillscapeError> {
        Self::new(reference::nodes())?.with_summary(reference::summary())
    }

    /// Parse a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::CatalogParse`] on malformed TOML and any
    /// validation error from [`Catalog::new`].
    pub fn from_toml_str(text: &str) -> Result<Self, SkillscapeError> {
        let file: CatalogFile = toml::from_str(text)
            .map_err(|e| SkillscapeError::CatalogParse(e.to_string()))?;
        let catalog = Self::new(file.nodes)?;
        match file.summary {
            Some(summary) => catalog.with_summary(summary),
            None => Ok(catalog),
        }
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::Io`] when the file cannot be read, plus
    /// everything [`Catalog::from_toml_str`] can return.
    pub fn load(path: &Path) -> Result<Self, SkillscapeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Resolve a node name. Unknown names yield `None`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Stack overview, if the catalog carries one.
    #[must_use]
    pub fn summary(&self) -> Option<&CatalogSummary> {
        self.summary.as_ref()
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&TechNode> {
        self.nodes.get(id.0)
    }

    /// Node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TechNode> {
        self.lookup(name).and_then(|id| self.node(id))
    }

    /// Project `index` of node `id`.
    #[must_use]
    pub fn project(&self, id: NodeId, index: usize) -> Option<&Project> {
        self.node(id).and_then(|n| n.projects.get(index))
    }

    /// All nodes in catalog order.
    #[must_use]
    pub fn nodes(&self) -> &[TechNode] {
        &self.nodes
    }

    /// Iterate `(id, node)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TechNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the catalog holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn node(name: &str, position: Vec3, projects: usize) -> TechNode {
        TechNode {
            name: name.to_owned(),
            position,
            color: "#ffffff".to_owned(),
            description: format!("{name} description"),
            proficiency: 80,
            projects: (0..projects)
                .map(|i| Project {
                    name: format!("{name} project {i}"),
                    description: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn reference_catalog_has_unique_names() {
        let catalog = Catalog::reference().unwrap();
        assert_eq!(catalog.len(), 11);
        for (id, node) in catalog.iter() {
            assert_eq!(catalog.lookup(&node.name), Some(id));
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Catalog::new(vec![
            node("Alpha", Vec3::ZERO, 1),
            node("Alpha", Vec3::X, 1),
        ])
        .unwrap_err();
        assert!(matches!(err, SkillscapeError::DuplicateNode(n) if n == "Alpha"));
    }

    #[test]
    fn nodes_without_projects_are_rejected() {
        let err = Catalog::new(vec![node("Alpha", Vec3::ZERO, 0)]).unwrap_err();
        assert!(matches!(err, SkillscapeError::InvalidNode { .. }));
    }

    #[test]
    fn proficiency_above_hundred_is_rejected() {
        let mut bad = node("Alpha", Vec3::ZERO, 1);
        bad.proficiency = 101;
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn unknown_name_lookup_is_none() {
        let catalog = Catalog::reference().unwrap();
        assert_eq!(catalog.lookup("COBOL"), None);
        assert!(catalog.get("COBOL").is_none());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ProficiencyTier::from_proficiency(90), ProficiencyTier::Expert);
        assert_eq!(
            ProficiencyTier::from_proficiency(89),
            ProficiencyTier::Proficient
        );
        assert_eq!(
            ProficiencyTier::from_proficiency(80),
            ProficiencyTier::Proficient
        );
        assert_eq!(
            ProficiencyTier::from_proficiency(70),
            ProficiencyTier::Intermediate
        );
        assert_eq!(
            ProficiencyTier::from_proficiency(69),
            ProficiencyTier::Beginner
        );
        assert_eq!(ProficiencyTier::Expert.color(), "#00ff88");
    }

    #[test]
    fn parses_toml_catalog() {
        let text = r##"
[[nodes]]
name = "Alpha"
position = [1.0, 0.0, 0.0]
color = "#61DAFB"
description = "First"
proficiency = 95

[[nodes.projects]]
name = "One"
description = "first project"

[[nodes.projects]]
name = "Two"
description = "second project"
"##;
        let catalog = Catalog::from_toml_str(text).unwrap();
        let alpha = catalog.get("Alpha").unwrap();
        assert_eq!(alpha.position, Vec3::X);
        assert_eq!(alpha.projects.len(), 2);
        assert_eq!(alpha.tier(), ProficiencyTier::Expert);
    }

    #[test]
    fn summary_groups_must_name_catalog_nodes() {
        let text = r##"
[summary]
headline = "Alpha only"

[[summary.groups]]
title = "Core"
color = "#60a5fa"
members = ["Alpha", "Omega"]

[[nodes]]
name = "Alpha"
position = [0.0, 0.0, 0.0]
color = "#ffffff"
description = "First"
proficiency = 50

[[nodes.projects]]
name = "One"
description = ""
"##;
        let err = Catalog::from_toml_str(text).unwrap_err();
        assert!(matches!(err, SkillscapeError::InvalidNode { name, .. } if name == "Omega"));

        let ok = Catalog::from_toml_str(&text.replace(", \"Omega\"", "")).unwrap();
        assert_eq!(ok.summary().unwrap().groups[0].members, ["Alpha"]);
    }

    #[test]
    fn reference_catalog_has_a_summary() {
        let catalog = Catalog::reference().unwrap();
        let summary = catalog.summary().unwrap();
        let titles: Vec<_> = summary.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Frontend", "State Management", "Backend Services", "Learning"]
        );
        assert!(Catalog::new(catalog.nodes().to_vec()).unwrap().summary().is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Catalog::from_toml_str("nodes = 3").unwrap_err();
        assert!(matches!(err, SkillscapeError::CatalogParse(_)));
    }
}
