//! Built-in component types
//!
//! Every type here is a pure data component with a matching cached
//! accessor on `CacheBehaviour`.

pub mod animation;
pub mod audio;
pub mod camera;
pub mod collision;
pub mod layout;
pub mod lighting;
pub mod physics;
pub mod renderable;
pub mod transform;
pub mod ui;

pub use animation::{Animation, Animator, WrapMode};
pub use audio::AudioSource;
pub use camera::{Camera, ClearFlags, Projection};
pub use collision::{should_collide, Collider, Collider2D, ColliderShape, ColliderShape2D, Layers};
pub use layout::{
    Canvas, GridConstraint, GridLayoutGroup, HorizontalLayoutGroup, LayoutElement, Padding,
    RenderMode, VerticalLayoutGroup,
};
pub use lighting::{Light, LightType};
pub use physics::{ConstantForce, HingeJoint, Rigidbody, Rigidbody2D};
pub use renderable::{CanvasRenderer, MeshRenderer, ParticleSystem, SpriteRenderer};
pub use transform::{RectTransform, Transform};
pub use ui::{
    Button, HorizontalAlign, Image, InputField, Mask, RawImage, ScrollAxis, ScrollRect, Scrollbar,
    SelectionState, Slider, Text, Toggle, ToggleGroup, VerticalAlign,
};
