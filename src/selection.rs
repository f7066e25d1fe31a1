//! Selection state machine and the project-focus side channel.
//!
//! ```text
//! Overview   --click(N)--------> Focused(N)
//! Focused(N) --click(N)--------> Overview
//! Focused(N) --click(M != N)---> Focused(M)
//! Focused(N) --close-panel-----> Overview
//! ```
//!
//! [`SelectionState`] is the single writer of both the selected node and
//! the selected project. Every other component reads it by reference.

use serde::Serialize;

use crate::catalog::{Catalog, NodeId};

/// Which node, if any, the scene is focused on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    /// Nothing selected; the camera frames the whole scene.
    #[default]
    Overview,
    /// One node is selected and framed.
    Focused(NodeId),
}

impl Selection {
    /// The focused node, if any.
    #[must_use]
    pub fn focused(self) -> Option<NodeId> {
        match self {
            Self::Overview => None,
            Self::Focused(id) => Some(id),
        }
    }

    /// Whether `id` is the focused node.
    #[must_use]
    pub fn is_focused(self, id: NodeId) -> bool {
        self == Self::Focused(id)
    }
}

impl From<Option<NodeId>> for Selection {
    fn from(node: Option<NodeId>) -> Self {
        node.map_or(Self::Overview, Self::Focused)
    }
}

/// Reference to one project of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectRef {
    /// Owning node.
    pub node: NodeId,
    /// Index into the node's project list.
    pub index: usize,
}

/// Selected node plus the optional project detail popup.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selection: Selection,
    project: Option<ProjectRef>,
}

impl SelectionState {
    /// Start in [`Selection::Overview`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected project, if the popup is open.
    #[must_use]
    pub fn project(&self) -> Option<ProjectRef> {
        self.project
    }

    /// Click toggle: re-clicking the focused node returns to overview,
    /// clicking any other node retargets directly.
    ///
    /// Returns `true` if the selection changed. Unknown ids are ignored.
    pub fn click(&mut self, catalog: &Catalog, id: NodeId) -> bool {
        if catalog.node(id).is_none() {
            log::warn!("click on unknown node id {}", id.0);
            return false;
        }
        let next = if self.selection.is_focused(id) {
            Selection::Overview
        } else {
            Selection::Focused(id)
        };
        self.transition(catalog, next)
    }

    /// Direct select (`None` means overview). Unknown ids are ignored.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, catalog: &Catalog, node: Option<NodeId>) -> bool {
        if let Some(id) = node {
            if catalog.node(id).is_none() {
                log::warn!("select of unknown node id {}", id.0);
                return false;
            }
        }
        self.transition(catalog, Selection::from(node))
    }

    /// Dismiss the detail panel: back to overview, project popup closed.
    ///
    /// Returns `true` if the selection changed.
    pub fn close_panel(&mut self, catalog: &Catalog) -> bool {
        self.project = None;
        self.transition(catalog, Selection::Overview)
    }

    /// Open or close the project popup.
    ///
    /// A reference to a missing project, or to a project of a node that is
    /// not focused, is ignored. Returns `true` if the popup state changed.
    pub fn select_project(
        &mut self,
        catalog: &Catalog,
        project: Option<ProjectRef>,
    ) -> bool {
        if let Some(p) = project {
            if catalog.project(p.node, p.index).is_none() {
                log::warn!(
                    "select of unknown project {} on node id {}",
                    p.index,
                    p.node.0
                );
                return false;
            }
            if !self.selection.is_focused(p.node) {
                log::warn!(
                    "project {} on node id {} selected while that node is not focused",
                    p.index,
                    p.node.0
                );
                return false;
            }
        }
        let changed = self.project != project;
        self.project = project;
        changed
    }

    fn transition(&mut self, catalog: &Catalog, next: Selection) -> bool {
        if next == self.selection {
            return false;
        }
        let name = |s: Selection| {
            s.focused()
                .and_then(|id| catalog.node(id))
                .map_or("overview", |n| n.name.as_str())
        };
        log::info!("selection {} -> {}", name(self.selection), name(next));
        self.selection = next;
        // The popup belongs to the node that was focused when it opened.
        if self.project.is_some_and(|p| Some(p.node) != next.focused()) {
            self.project = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::catalog::tests::node;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            node("Alpha", Vec3::X, 2),
            node("Beta", Vec3::Y, 1),
        ])
        .unwrap()
    }

    #[test]
    fn starts_in_overview() {
        assert_eq!(SelectionState::new().selection(), Selection::Overview);
    }

    #[test]
    fn reclick_toggles_back_to_overview() {
        let cat = catalog();
        let alpha = cat.lookup("Alpha").unwrap();
        let mut state = SelectionState::new();
        assert!(state.click(&cat, alpha));
        assert_eq!(state.selection(), Selection::Focused(alpha));
        assert!(state.click(&cat, alpha));
        assert_eq!(state.selection(), Selection::Overview);
    }

    #[test]
    fn clicking_another_node_retargets_directly() {
        let cat = catalog();
        let alpha = cat.lookup("Alpha").unwrap();
        let beta = cat.lookup("Beta").unwrap();
        let mut state = SelectionState::new();
        let _ = state.click(&cat, alpha);
        assert!(state.click(&cat, beta));
        assert_eq!(state.selection(), Selection::Focused(beta));
    }

    #[test]
    fn close_panel_returns_to_overview() {
        let cat = catalog();
        let mut state = SelectionState::new();
        let _ = state.click(&cat, NodeId(0));
        assert!(state.close_panel(&cat));
        assert_eq!(state.selection(), Selection::Overview);
        assert!(!state.close_panel(&cat));
    }

    #[test]
    fn unknown_node_is_a_no_op() {
        let cat = catalog();
        let mut state = SelectionState::new();
        assert!(!state.click(&cat, NodeId(99)));
        assert!(!state.select(&cat, Some(NodeId(99))));
        assert_eq!(state.selection(), Selection::Overview);
    }

    #[test]
    fn project_cleared_on_dismiss_and_retarget() {
        let cat = catalog();
        let alpha = NodeId(0);
        let mut state = SelectionState::new();
        let _ = state.click(&cat, alpha);
        let p = ProjectRef {
            node: alpha,
            index: 1,
        };
        assert!(state.select_project(&cat, Some(p)));
        assert_eq!(state.project(), Some(p));

        let _ = state.click(&cat, NodeId(1));
        assert_eq!(state.project(), None);

        let _ = state.select(&cat, Some(alpha));
        let _ = state.select_project(&cat, Some(p));
        let _ = state.close_panel(&cat);
        assert_eq!(state.project(), None);
    }

    #[test]
    fn missing_project_is_ignored() {
        let cat = catalog();
        let mut state = SelectionState::new();
        let bad = ProjectRef {
            node: NodeId(1),
            index: 5,
        };
        assert!(!state.select_project(&cat, Some(bad)));
        assert_eq!(state.project(), None);
    }

    #[test]
    fn project_requires_its_node_focused() {
        let cat = catalog();
        let mut state = SelectionState::new();
        let p = ProjectRef {
            node: NodeId(0),
            index: 0,
        };
        assert!(!state.select_project(&cat, Some(p)));
        assert_eq!(state.project(), None);

        let _ = state.click(&cat, NodeId(1));
        assert!(!state.select_project(&cat, Some(p)));
        assert_eq!(state.project(), None);
    }
}
