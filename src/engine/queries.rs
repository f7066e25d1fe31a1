//! Display queries for the presentation layer.

use serde::Serialize;

use super::SceneEngine;
use crate::catalog::{NodeId, Project, ProficiencyTier};
use crate::selection::ProjectRef;
use crate::util::frame_timing::PerformanceTier;

/// Contents of the detail panel for the focused node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    /// Focused node.
    pub node: NodeId,
    /// Node name.
    pub name: String,
    /// Node description.
    pub description: String,
    /// Proficiency in `[0, 100]`.
    pub proficiency: u8,
    /// Proficiency tier.
    pub tier: ProficiencyTier,
    /// Tier accent color.
    pub accent: &'static str,
    /// Projects in catalog order.
    pub projects: Vec<Project>,
    /// Project shown in the popup, if open.
    pub selected_project: Option<Project>,
}

/// Everything a status widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct StatusReport {
    /// Last published frame rate.
    pub fps: u32,
    /// Last published performance tier.
    pub tier: PerformanceTier,
    /// Name of the focused node.
    pub selected: Option<String>,
    /// Name of the project in the popup.
    pub selected_project: Option<String>,
    /// Dark palette active.
    pub dark_mode: bool,
    /// Gyroscope flag.
    pub gyroscope: bool,
    /// Audio cues enabled.
    pub audio: bool,
    /// Flat list shown instead of the 3D scene.
    pub fallback: bool,
}

impl SceneEngine {
    /// Name of the focused node, if any.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selection
            .selection()
            .focused()
            .and_then(|id| self.catalog.node(id))
            .map(|n| n.name.as_str())
    }

    /// Project shown in the popup, if open.
    #[must_use]
    pub fn selected_project(&self) -> Option<(ProjectRef, &Project)> {
        let r = self.selection.project()?;
        self.catalog.project(r.node, r.index).map(|p| (r, p))
    }

    /// Detail panel for the focused node; `None` in overview.
    #[must_use]
    pub fn detail_panel(&self) -> Option<DetailPanel> {
        let id = self.selection.selection().focused()?;
        let node = self.catalog.node(id)?;
        let tier = node.tier();
        Some(DetailPanel {
            node: id,
            name: node.name.clone(),
            description: node.description.clone(),
            proficiency: node.proficiency,
            tier,
            accent: tier.color(),
            projects: node.projects.clone(),
            selected_project: self.selected_project().map(|(_, p)| p.clone()),
        })
    }

    /// Current display state.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            fps: self.performance.fps(),
            tier: self.performance.tier(),
            selected: self.selected_name().map(str::to_owned),
            selected_project: self
                .selected_project()
                .map(|(_, p)| p.name.clone()),
            dark_mode: self.toggles.dark_mode,
            gyroscope: self.toggles.gyroscope,
            audio: self.audio.enabled(),
            fallback: self.toggles.fallback,
        }
    }

    /// Loading indicator text while assets are pending.
    #[must_use]
    pub fn loading_message(&self) -> Option<String> {
        self.assets.message()
    }
}
