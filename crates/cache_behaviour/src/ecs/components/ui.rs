//! UI widget components
//!
//! Interactive widgets rendered through a canvas. Pure data; input and
//! layout systems drive the state transitions.

use serde::{Deserialize, Serialize};

use crate::ecs::{Component, Entity};
use crate::foundation::math::{Rect, Vec2, Vec4};

/// Interaction state shared by selectable widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Normal resting state
    Normal,
    /// Pointer is hovering over the widget
    Hovered,
    /// Widget is being pressed
    Pressed,
    /// Widget is disabled (non-interactive)
    Disabled,
}

/// Clickable button widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Whether the button responds to input
    pub interactable: bool,

    /// Current interaction state
    pub state: SelectionState,

    /// Color in the normal state
    pub normal_color: Vec4,
    /// Hover state color
    pub hover_color: Vec4,
    /// Pressed state color
    pub pressed_color: Vec4,
    /// Disabled state color
    pub disabled_color: Vec4,
}

impl Component for Button {}

impl Default for Button {
    fn default() -> Self {
        Self {
            interactable: true,
            state: SelectionState::Normal,
            normal_color: Vec4::new(0.3, 0.3, 0.3, 0.9),
            hover_color: Vec4::new(0.4, 0.4, 0.5, 1.0),
            pressed_color: Vec4::new(0.5, 0.5, 0.6, 1.0),
            disabled_color: Vec4::new(0.2, 0.2, 0.2, 0.5),
        }
    }
}

impl Button {
    /// Get the color for the current interaction state
    pub fn current_color(&self) -> Vec4 {
        if !self.interactable {
            return self.disabled_color;
        }
        match self.state {
            SelectionState::Normal => self.normal_color,
            SelectionState::Hovered => self.hover_color,
            SelectionState::Pressed => self.pressed_color,
            SelectionState::Disabled => self.disabled_color,
        }
    }
}

/// Sprite-backed image widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Asset path of the sprite to display
    pub sprite: Option<String>,

    /// Tint color (RGBA)
    pub color: Vec4,

    /// Portion of the image shown, for progress-bar style fills
    pub fill_amount: f32,
}

impl Component for Image {}

impl Default for Image {
    fn default() -> Self {
        Self {
            sprite: None,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            fill_amount: 1.0,
        }
    }
}

/// Texture-backed image widget
///
/// Unlike [`Image`], draws a raw texture region without sprite metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    /// Asset path of the texture to display
    pub texture: Option<String>,

    /// Tint color (RGBA)
    pub color: Vec4,

    /// Normalized UV region of the texture to draw
    pub uv_rect: Rect,
}

impl Component for RawImage {}

impl Default for RawImage {
    fn default() -> Self {
        Self {
            texture: None,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            uv_rect: Rect::unit(),
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalAlign {
    /// Align to the left edge
    Left,
    /// Center horizontally
    Center,
    /// Align to the right edge
    Right,
}

/// Vertical text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAlign {
    /// Align to the top edge
    Top,
    /// Center vertically
    Middle,
    /// Align to the bottom edge
    Bottom,
}

/// Text label widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Text content to display
    pub text: String,

    /// Font size in pixels
    pub font_size: f32,

    /// Text color (RGBA)
    pub color: Vec4,

    /// Horizontal alignment within the element bounds
    pub h_align: HorizontalAlign,

    /// Vertical alignment within the element bounds
    pub v_align: VerticalAlign,
}

impl Component for Text {}

impl Default for Text {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 24.0,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            h_align: HorizontalAlign::Left,
            v_align: VerticalAlign::Top,
        }
    }
}

impl Text {
    /// Create a label with the given content
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Editable text entry widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Current contents
    pub text: String,

    /// Hint shown while the field is empty
    pub placeholder: String,

    /// Maximum number of characters accepted (0 = unlimited)
    pub character_limit: usize,

    /// Whether edits are rejected
    pub read_only: bool,

    /// Caret position as a character index into `text`
    pub caret: usize,
}

impl Component for InputField {}

impl Default for InputField {
    fn default() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            character_limit: 0,
            read_only: false,
            caret: 0,
        }
    }
}

impl InputField {
    /// Insert a character at the caret, honoring the character limit
    ///
    /// Returns `true` if the character was accepted.
    pub fn insert(&mut self, ch: char) -> bool {
        if self.read_only {
            return false;
        }
        let count = self.text.chars().count();
        if self.character_limit != 0 && count >= self.character_limit {
            return false;
        }
        let byte_index = self
            .text
            .char_indices()
            .nth(self.caret)
            .map_or(self.text.len(), |(i, _)| i);
        self.text.insert(byte_index, ch);
        self.caret += 1;
        true
    }
}

/// Axis a scrollbar moves along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollAxis {
    /// Left-to-right
    Horizontal,
    /// Bottom-to-top
    Vertical,
}

/// Scrollbar widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scrollbar {
    /// Normalized scroll position in [0, 1]
    pub value: f32,

    /// Normalized handle size in [0, 1]
    pub handle_size: f32,

    /// Axis the bar moves along
    pub axis: ScrollAxis,

    /// Snap positions along the bar (0 = continuous)
    pub steps: u32,
}

impl Component for Scrollbar {}

impl Default for Scrollbar {
    fn default() -> Self {
        Self {
            value: 0.0,
            handle_size: 0.2,
            axis: ScrollAxis::Vertical,
            steps: 0,
        }
    }
}

impl Scrollbar {
    /// Set the scroll position, clamping and snapping to steps
    pub fn set_value(&mut self, value: f32) {
        let clamped = value.clamp(0.0, 1.0);
        self.value = if self.steps > 1 {
            let step = (self.steps - 1) as f32;
            (clamped * step).round() / step
        } else {
            clamped
        };
    }
}

/// Scrollable view over content larger than its viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollRect {
    /// Allow horizontal scrolling
    pub horizontal: bool,

    /// Allow vertical scrolling
    pub vertical: bool,

    /// Normalized scroll position on both axes
    pub position: Vec2,

    /// Keep scrolling briefly after release
    pub inertia: bool,

    /// Resistance when dragging past the content edge
    pub elasticity: f32,
}

impl Component for ScrollRect {}

impl Default for ScrollRect {
    fn default() -> Self {
        Self {
            horizontal: false,
            vertical: true,
            position: Vec2::zeros(),
            inertia: true,
            elasticity: 0.1,
        }
    }
}

/// Draggable value slider widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    /// Lower bound of the range
    pub min_value: f32,

    /// Upper bound of the range
    pub max_value: f32,

    /// Current value, always within the range
    pub value: f32,

    /// Round values to integers
    pub whole_numbers: bool,
}

impl Component for Slider {}

impl Default for Slider {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            value: 0.0,
            whole_numbers: false,
        }
    }
}

impl Slider {
    /// Set the value, clamping to the range and rounding if configured
    pub fn set_value(&mut self, value: f32) {
        let clamped = value.clamp(self.min_value, self.max_value);
        self.value = if self.whole_numbers {
            clamped.round()
        } else {
            clamped
        };
    }

    /// Current value mapped to [0, 1]
    pub fn normalized_value(&self) -> f32 {
        let span = self.max_value - self.min_value;
        if span <= f32::EPSILON {
            return 0.0;
        }
        (self.value - self.min_value) / span
    }
}

/// Two-state toggle widget
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toggle {
    /// Whether the toggle is on
    pub is_on: bool,

    /// Group enforcing mutual exclusivity, if any
    pub group: Option<Entity>,
}

impl Component for Toggle {}

/// Mutual-exclusion group for toggles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToggleGroup {
    /// Permit all member toggles to be off simultaneously
    pub allow_switch_off: bool,
}

impl Component for ToggleGroup {}

/// Clips child widgets to this widget's rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mask {
    /// Draw the masking graphic itself as well as using it for clipping
    pub show_mask_graphic: bool,
}

impl Component for Mask {}

impl Default for Mask {
    fn default() -> Self {
        Self {
            show_mask_graphic: true,
        }
    }
}
