//! Panel configuration as the host's loader hands it over.

use slidekit_core::{Edge, MenuStyle};

/// One configured edge menu.
#[derive(Clone, Debug)]
pub struct MenuSlot {
    /// Index of the menu surface in the host's ordered child list. A menu
    /// listed after the content draws above it, which flips the placement
    /// and dim formulas.
    pub child: i32,
    pub style: MenuStyle,
}

impl MenuSlot {
    pub fn new(child: i32, style: MenuStyle) -> Self {
        Self { child, style }
    }
}

/// Container configuration; absent edges simply have no slot.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    pub drag_enabled: bool,
    /// Index of the content surface in the host's ordered child list.
    pub content_child: i32,
    pub left: Option<MenuSlot>,
    pub right: Option<MenuSlot>,
    pub top: Option<MenuSlot>,
    pub bottom: Option<MenuSlot>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            drag_enabled: true,
            content_child: 0,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag_enabled(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    pub fn with_content_child(mut self, child: i32) -> Self {
        self.content_child = child;
        self
    }

    pub fn with_menu(mut self, edge: Edge, slot: MenuSlot) -> Self {
        match edge {
            Edge::Left => self.left = Some(slot),
            Edge::Right => self.right = Some(slot),
            Edge::Top => self.top = Some(slot),
            Edge::Bottom => self.bottom = Some(slot),
        }
        self
    }

    pub fn slot(&self, edge: Edge) -> Option<&MenuSlot> {
        match edge {
            Edge::Left => self.left.as_ref(),
            Edge::Right => self.right.as_ref(),
            Edge::Top => self.top.as_ref(),
            Edge::Bottom => self.bottom.as_ref(),
        }
    }
}
