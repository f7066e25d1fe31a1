//! Flat, non-3D enumeration of the catalog.
//!
//! The fallback view reads the catalog directly. It has no dependency on
//! selection or camera state, so it can be produced while the 3D scene is
//! suspended (or was never mounted at all).

use std::fmt;

use serde::Serialize;

use super::{Catalog, CatalogSummary, TechNode};

/// Heading shown above the card grid.
pub const FALLBACK_TITLE: &str = "Full-Stack Developer Skills & Projects";

/// Coarse skill badge used by the flat view.
///
/// Thresholds differ from [`super::ProficiencyTier`]: the flat view only
/// distinguishes three bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillBadge {
    /// Proficiency of 85 or more.
    Expert,
    /// Proficiency in `[70, 85)`.
    Proficient,
    /// Anything below 70.
    Learning,
}

impl SkillBadge {
    /// Classify a proficiency score.
    #[must_use]
    pub fn from_proficiency(proficiency: u8) -> Self {
        if proficiency >= 85 {
            Self::Expert
        } else if proficiency >= 70 {
            Self::Proficient
        } else {
            Self::Learning
        }
    }
}

impl fmt::Display for SkillBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Expert => "Expert",
            Self::Proficient => "Proficient",
            Self::Learning => "Learning",
        })
    }
}

/// One card of the flat view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackCard {
    /// Node name.
    pub name: String,
    /// Node description.
    pub description: String,
    /// Proficiency score.
    pub proficiency: u8,
    /// Badge derived from the proficiency.
    pub badge: SkillBadge,
    /// Project names in catalog order.
    pub projects: Vec<String>,
}

impl From<&TechNode> for FallbackCard {
    fn from(node: &TechNode) -> Self {
        Self {
            name: node.name.clone(),
            description: node.description.clone(),
            proficiency: node.proficiency,
            badge: SkillBadge::from_proficiency(node.proficiency),
            projects: node.projects.iter().map(|p| p.name.clone()).collect(),
        }
    }
}

/// Cards for every catalog node, in catalog order, under the catalog's
/// stack overview when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackView {
    /// Heading text.
    pub title: &'static str,
    /// Stack overview copied from the catalog.
    pub summary: Option<CatalogSummary>,
    /// One card per node.
    pub cards: Vec<FallbackCard>,
}

impl FallbackView {
    /// Build the flat view from the catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            title: FALLBACK_TITLE,
            summary: catalog.summary().cloned(),
            cards: catalog.nodes().iter().map(FallbackCard::from).collect(),
        }
    }
}

impl fmt::Display for FallbackView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(summary) = &self.summary {
            writeln!(f)?;
            writeln!(f, "Tech Stack Overview")?;
            writeln!(f, "{}", summary.headline)?;
            for group in &summary.groups {
                writeln!(f, "  {}: {}", group.title, group.members.join(", "))?;
            }
        }
        for card in &self.cards {
            writeln!(f)?;
            writeln!(f, "{} - {}", card.name, card.description)?;
            writeln!(f, "  [{}] {}%", card.badge, card.proficiency)?;
            for project in &card.projects {
                writeln!(f, "  • {project}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_thresholds() {
        assert_eq!(SkillBadge::from_proficiency(85), SkillBadge::Expert);
        assert_eq!(SkillBadge::from_proficiency(84), SkillBadge::Proficient);
        assert_eq!(SkillBadge::from_proficiency(70), SkillBadge::Proficient);
        assert_eq!(SkillBadge::from_proficiency(69), SkillBadge::Learning);
    }

    #[test]
    fn view_covers_every_node_in_order() {
        let catalog = Catalog::reference().unwrap();
        let view = FallbackView::from_catalog(&catalog);
        assert_eq!(view.cards.len(), catalog.len());
        assert_eq!(view.cards[0].name, "React");
        assert_eq!(view.cards[0].badge, SkillBadge::Expert);
        assert_eq!(view.cards[0].projects.len(), 3);

        let mongo = view.cards.iter().find(|c| c.name == "MongoDB").unwrap();
        assert_eq!(mongo.badge, SkillBadge::Learning);
    }

    #[test]
    fn display_lists_projects() {
        let catalog = Catalog::reference().unwrap();
        let text = FallbackView::from_catalog(&catalog).to_string();
        assert!(text.starts_with(FALLBACK_TITLE));
        assert!(text.contains("[Expert] 95%"));
        assert!(text.contains("• WebGL Visualizer"));
    }

    #[test]
    fn overview_groups_precede_cards() {
        let catalog = Catalog::reference().unwrap();
        let text = FallbackView::from_catalog(&catalog).to_string();
        let overview = text.find("Tech Stack Overview").unwrap();
        assert!(text.contains("  State Management: Redux, Zustand"));
        assert!(text.contains("  Learning: Node.js, Express, MongoDB"));
        assert!(overview < text.find("React - Frontend Library").unwrap());

        let bare = Catalog::new(catalog.nodes().to_vec()).unwrap();
        let text = FallbackView::from_catalog(&bare).to_string();
        assert!(!text.contains("Tech Stack Overview"));
    }
}
