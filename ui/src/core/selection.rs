//! Hover and click state for the map hotspots.
//!
//! Hover and selection are tracked independently: hovering never changes
//! the selection and clicking never changes the hover.

use crate::content::{building_by_id, Building, MapPoint};

/// Percentage points the tooltip sits above its hotspot.
pub const TOOLTIP_LIFT: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapSelection {
    hovered: Option<&'static str>,
    selected: Option<&'static str>,
}

impl MapSelection {
    pub fn hover(&mut self, building_id: &'static str) {
        self.hovered = Some(building_id);
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn select(&mut self, building_id: &'static str) {
        self.selected = Some(building_id);
    }

    pub fn selected_id(&self) -> Option<&'static str> {
        self.selected
    }

    /// Hovered building; ids missing from the content resolve to `None`.
    pub fn hovered(&self) -> Option<&'static Building> {
        self.hovered.and_then(building_by_id)
    }

    pub fn selected(&self) -> Option<&'static Building> {
        self.selected.and_then(building_by_id)
    }
}

/// Where the hover tooltip for a hotspot at `point` is drawn.
pub fn tooltip_anchor(point: MapPoint) -> MapPoint {
    MapPoint {
        x: point.x,
        y: point.y - TOOLTIP_LIFT,
    }
}
