//! Canvas and layout components
//!
//! A canvas roots a tree of UI widgets; layout groups arrange their
//! children, and layout elements let individual widgets override the
//! sizes a group would assign them.

use serde::{Deserialize, Serialize};

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// How a canvas is positioned relative to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Drawn in screen space on top of everything
    ScreenSpaceOverlay,
    /// Drawn in screen space through a specific camera
    ScreenSpaceCamera,
    /// Placed in the world like any other object
    WorldSpace,
}

/// Root component for a UI widget tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Positioning mode for the whole tree
    pub render_mode: RenderMode,

    /// Uniform scale applied to all child widgets
    pub scale_factor: f32,

    /// Draw order among canvases (higher draws on top)
    pub sorting_order: i32,

    /// Snap widget geometry to whole pixels
    pub pixel_perfect: bool,
}

impl Component for Canvas {}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::ScreenSpaceOverlay,
            scale_factor: 1.0,
            sorting_order: 0,
            pixel_perfect: false,
        }
    }
}

/// Edge insets for layout groups, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Inset from the left edge
    pub left: f32,
    /// Inset from the right edge
    pub right: f32,
    /// Inset from the top edge
    pub top: f32,
    /// Inset from the bottom edge
    pub bottom: f32,
}

impl Padding {
    /// Uniform padding on all four edges
    pub fn uniform(amount: f32) -> Self {
        Self {
            left: amount,
            right: amount,
            top: amount,
            bottom: amount,
        }
    }

    /// Total horizontal inset
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Per-widget layout size overrides
///
/// `None` means the layout group decides. Minimum sizes win over
/// preferred sizes, which win over flexible weights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutElement {
    /// Hard lower bound on width
    pub min_width: Option<f32>,

    /// Hard lower bound on height
    pub min_height: Option<f32>,

    /// Width the widget would like when space allows
    pub preferred_width: Option<f32>,

    /// Height the widget would like when space allows
    pub preferred_height: Option<f32>,

    /// Relative share of leftover width
    pub flexible_width: Option<f32>,

    /// Relative share of leftover height
    pub flexible_height: Option<f32>,

    /// Exclude this widget from layout entirely
    pub ignore_layout: bool,
}

impl Component for LayoutElement {}

impl LayoutElement {
    /// Width this element insists on, if any
    ///
    /// The preferred width, raised to the minimum when both are set.
    pub fn resolved_width(&self) -> Option<f32> {
        match (self.min_width, self.preferred_width) {
            (Some(min), Some(preferred)) => Some(preferred.max(min)),
            (minimum, preferred) => preferred.or(minimum),
        }
    }

    /// Height this element insists on, if any
    pub fn resolved_height(&self) -> Option<f32> {
        match (self.min_height, self.preferred_height) {
            (Some(min), Some(preferred)) => Some(preferred.max(min)),
            (minimum, preferred) => preferred.or(minimum),
        }
    }
}

/// Constraint on how a grid wraps its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridConstraint {
    /// Wrap whenever a row or column fills the available space
    Flexible,
    /// Fix the number of columns
    FixedColumnCount(u32),
    /// Fix the number of rows
    FixedRowCount(u32),
}

/// Arranges children in a uniform grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayoutGroup {
    /// Size of every cell, in pixels
    pub cell_size: Vec2,

    /// Gap between adjacent cells
    pub spacing: Vec2,

    /// Insets around the whole grid
    pub padding: Padding,

    /// Wrapping behavior
    pub constraint: GridConstraint,
}

impl Component for GridLayoutGroup {}

impl Default for GridLayoutGroup {
    fn default() -> Self {
        Self {
            cell_size: Vec2::new(100.0, 100.0),
            spacing: Vec2::zeros(),
            padding: Padding::default(),
            constraint: GridConstraint::Flexible,
        }
    }
}

impl GridLayoutGroup {
    /// Footprint of a grid holding `count` cells under a fixed-column
    /// constraint, including padding and spacing
    ///
    /// Returns `None` for the other constraints, where the footprint
    /// depends on the available space.
    pub fn fixed_footprint(&self, count: u32) -> Option<Vec2> {
        let GridConstraint::FixedColumnCount(columns) = self.constraint else {
            return None;
        };
        if columns == 0 || count == 0 {
            return Some(Vec2::new(self.padding.horizontal(), self.padding.vertical()));
        }
        let rows = count.div_ceil(columns);
        let used_columns = count.min(columns);
        Some(Vec2::new(
            self.padding.horizontal()
                + used_columns as f32 * self.cell_size.x
                + (used_columns - 1) as f32 * self.spacing.x,
            self.padding.vertical()
                + rows as f32 * self.cell_size.y
                + (rows - 1) as f32 * self.spacing.y,
        ))
    }
}

/// Arranges children in a single row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLayoutGroup {
    /// Gap between adjacent children
    pub spacing: f32,

    /// Insets around the whole group
    pub padding: Padding,

    /// Stretch children to fill leftover width
    pub force_expand_width: bool,

    /// Stretch children to fill the group's height
    pub force_expand_height: bool,
}

impl Component for HorizontalLayoutGroup {}

impl Default for HorizontalLayoutGroup {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            padding: Padding::default(),
            force_expand_width: true,
            force_expand_height: true,
        }
    }
}

/// Arranges children in a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalLayoutGroup {
    /// Gap between adjacent children
    pub spacing: f32,

    /// Insets around the whole group
    pub padding: Padding,

    /// Stretch children to fill the group's width
    pub force_expand_width: bool,

    /// Stretch children to fill leftover height
    pub force_expand_height: bool,
}

impl Component for VerticalLayoutGroup {}

impl Default for VerticalLayoutGroup {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            padding: Padding::default(),
            force_expand_width: true,
            force_expand_height: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_layout_element_resolution() {
        let element = LayoutElement {
            min_width: Some(50.0),
            preferred_width: Some(30.0),
            preferred_height: Some(40.0),
            ..Default::default()
        };
        // Minimum wins over a smaller preferred width.
        assert_eq!(element.resolved_width(), Some(50.0));
        assert_eq!(element.resolved_height(), Some(40.0));
        assert_eq!(LayoutElement::default().resolved_width(), None);
    }

    #[test]
    fn test_grid_footprint_fixed_columns() {
        let grid = GridLayoutGroup {
            cell_size: Vec2::new(10.0, 10.0),
            spacing: Vec2::new(2.0, 2.0),
            padding: Padding::uniform(5.0),
            constraint: GridConstraint::FixedColumnCount(3),
        };

        // 7 cells in 3 columns: 3 rows, last row partial.
        let footprint = grid.fixed_footprint(7).unwrap();
        assert_relative_eq!(footprint.x, 10.0 + 3.0 * 10.0 + 2.0 * 2.0);
        assert_relative_eq!(footprint.y, 10.0 + 3.0 * 10.0 + 2.0 * 2.0);

        let flexible = GridLayoutGroup::default();
        assert!(flexible.fixed_footprint(7).is_none());
    }
}
