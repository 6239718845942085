// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core drawing types for the surface port contract.
//!
//! These types are pure domain objects with no serialization logic.
//! SVG encoding is handled by story-scene-codec.

/// RGBA color with 8-bit components.
pub type ColorRgba8 = [u8; 4];

/// A 2D point in surface pixels.
pub type Point = [f32; 2];

/// Key for a drawn element, unique within one batch.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementKey(pub u32);

/// Key for an annotation label, unique within one batch.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelKey(pub u32);

/// Horizontal text alignment relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position.
    Start,
    /// Text is centred on the position.
    Middle,
    /// Text ends at the position.
    End,
}

/// Fill of a closed shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Flat color.
    Solid(ColorRgba8),
    /// Left-to-right two-stop gradient (legend bars).
    Gradient {
        /// Color at the left edge.
        from: ColorRgba8,
        /// Color at the right edge.
        to: ColorRgba8,
    },
}

/// Paint applied to a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Interior fill; `None` leaves the shape hollow.
    pub fill: Option<Fill>,
    /// Outline color.
    pub stroke: Option<ColorRgba8>,
    /// Outline width in pixels.
    pub stroke_width: f32,
    /// Whole-element opacity in `[0, 1]`.
    pub opacity: f32,
}

impl Paint {
    /// Solid fill, no outline.
    pub const fn fill(color: ColorRgba8) -> Self {
        Self {
            fill: Some(Fill::Solid(color)),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    /// Outline only.
    pub const fn stroke(color: ColorRgba8, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
            opacity: 1.0,
        }
    }

    /// Same paint with a different outline.
    pub const fn with_stroke(mut self, color: ColorRgba8, width: f32) -> Self {
        self.stroke = Some(color);
        self.stroke_width = width;
        self
    }

    /// Same paint with a different opacity.
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Geometry of an element.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Closed polygon rings (even-odd fill).
    Polygon {
        /// Rings in surface pixels.
        rings: Vec<Vec<Point>>,
    },
    /// Open polyline.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// Circle.
    Circle {
        /// Centre.
        center: Point,
        /// Radius in pixels.
        radius: f32,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Top-left corner.
        origin: Point,
        /// Width and height.
        size: [f32; 2],
    },
    /// Single line of text.
    Text {
        /// Baseline anchor position.
        position: Point,
        /// Content.
        text: String,
        /// Font size in pixels.
        size: f32,
        /// Alignment.
        anchor: TextAnchor,
    },
}

/// A drawn element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementDef {
    /// Key unique within the batch.
    pub key: ElementKey,
    /// Geometry.
    pub shape: Shape,
    /// Paint.
    pub paint: Paint,
    /// Canonical entity the element stands for, if any.
    pub entity: Option<String>,
    /// Whether the element is drawn with the selection emphasis.
    pub selected: bool,
}

/// Fixed reference annotation: a connector from `anchor` to the note.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelDef {
    /// Key unique within the batch.
    pub key: LabelKey,
    /// Bold first line.
    pub title: Option<String>,
    /// Note text.
    pub text: String,
    /// Annotated point in surface pixels.
    pub anchor: Point,
    /// Offset of the note from the anchor.
    pub offset: Point,
    /// Text and connector color.
    pub color: ColorRgba8,
}

/// Drawing operation.
///
/// Operations are applied in order within a [`DrawBatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Discard every element and label on the surface.
    Clear,
    /// Insert or replace an element.
    UpsertElement(ElementDef),
    /// Insert or replace an annotation label.
    UpsertLabel(LabelDef),
}

/// Maximum number of operations allowed in a single [`DrawBatch`].
pub const MAX_OPS: usize = 20_000;

/// One render cycle's worth of operations.
///
/// Batches are idempotent per epoch: a surface that already applied an epoch
/// ignores any batch with an epoch at or below it.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawBatch {
    /// Render cycle counter (monotonically increasing).
    pub epoch: u64,
    /// Operations to apply.
    pub ops: Vec<SceneOp>,
}

impl DrawBatch {
    /// True when the batch tears down everything before drawing.
    pub fn starts_with_clear(&self) -> bool {
        matches!(self.ops.first(), Some(SceneOp::Clear))
    }
}
