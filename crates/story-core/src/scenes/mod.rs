// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene renderers: pure functions of a state snapshot plus a dataset view.
//!
//! Renderers never mutate the state or the datasets. They return draw ops
//! and the hotspots that later report pointer interactions.

use story_data::{Datasets, JoinKey, ReconciliationTable};
use story_scene_port::{
    ColorRgba8, ElementDef, ElementKey, HitShape, Hotspot, LabelDef, LabelKey, Paint, Point,
    SceneOp, Shape, TextAnchor,
};

use crate::state::StateSnapshot;

pub mod color;
pub mod format;
pub mod projection;
pub mod scale;

mod intro;
mod map;
mod scatter;
mod timeseries;

pub use intro::IntroScene;
pub use map::MapScene;
pub use scatter::ScatterScene;
pub use timeseries::TimeSeriesScene;

/// Read-only inputs of one draw call.
#[derive(Clone, Copy, Debug)]
pub struct SceneView<'a> {
    /// Narrative state being drawn.
    pub state: &'a StateSnapshot,
    /// Loaded datasets.
    pub data: &'a Datasets,
    /// Boundary name reconciliation.
    pub names: &'a ReconciliationTable,
    /// Boundary-to-entity join key.
    pub join_key: JoinKey,
    /// Surface width and height in pixels.
    pub size: [f32; 2],
}

impl SceneView<'_> {
    /// Surface width.
    pub fn width(&self) -> f64 {
        f64::from(self.size[0])
    }

    /// Surface height.
    pub fn height(&self) -> f64 {
        f64::from(self.size[1])
    }
}

/// Everything one scene produces for one render cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneOutput {
    /// Draw ops (without the leading clear).
    pub ops: Vec<SceneOp>,
    /// Interactive regions, topmost last.
    pub hotspots: Vec<Hotspot>,
}

/// Common interface of the scene renderers.
pub trait SceneRenderer {
    /// Draw the scene for `view`.
    fn draw(&self, view: &SceneView<'_>) -> SceneOutput;
}

/// Pixel margins around a chart plot area.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Accumulates ops with sequential keys.
#[derive(Default)]
pub(crate) struct OpsBuilder {
    out: SceneOutput,
    next_element: u32,
    next_label: u32,
}

pub(crate) fn pt(x: f64, y: f64) -> Point {
    [x as f32, y as f32]
}

impl OpsBuilder {
    pub fn element(&mut self, shape: Shape, paint: Paint) -> ElementKey {
        self.mark(shape, paint, None, false)
    }

    pub fn mark(
        &mut self,
        shape: Shape,
        paint: Paint,
        entity: Option<String>,
        selected: bool,
    ) -> ElementKey {
        let key = ElementKey(self.next_element);
        self.next_element += 1;
        self.out.ops.push(SceneOp::UpsertElement(ElementDef {
            key,
            shape,
            paint,
            entity,
            selected,
        }));
        key
    }

    pub fn text(
        &mut self,
        position: Point,
        text: impl Into<String>,
        size: f32,
        anchor: TextAnchor,
        color: ColorRgba8,
    ) {
        self.element(
            Shape::Text {
                position,
                text: text.into(),
                size,
                anchor,
            },
            Paint::fill(color),
        );
    }

    pub fn label(
        &mut self,
        title: Option<String>,
        text: impl Into<String>,
        anchor: Point,
        offset: Point,
        color: ColorRgba8,
    ) {
        let key = LabelKey(self.next_label);
        self.next_label += 1;
        self.out.ops.push(SceneOp::UpsertLabel(LabelDef {
            key,
            title,
            text: text.into(),
            anchor,
            offset,
            color,
        }));
    }

    pub fn hotspot(&mut self, shape: HitShape, label: String, metrics: Vec<String>, select: Option<String>) {
        self.out.hotspots.push(Hotspot {
            shape,
            label,
            metrics,
            select,
        });
    }

    /// Horizontal axis at `y` with ticks at `(x, label)`.
    pub fn bottom_axis(&mut self, y: f64, span: [f64; 2], ticks: &[(f64, String)], color: ColorRgba8) {
        let line = Paint::stroke(color, 1.0);
        self.element(
            Shape::Line {
                from: pt(span[0], y),
                to: pt(span[1], y),
            },
            line,
        );
        for (x, text) in ticks {
            self.element(
                Shape::Line {
                    from: pt(*x, y),
                    to: pt(*x, y + 6.0),
                },
                line,
            );
            self.text(pt(*x, y + 18.0), text.clone(), 10.0, TextAnchor::Middle, color);
        }
    }

    /// Vertical axis at `x` with ticks at `(y, label)`.
    pub fn left_axis(&mut self, x: f64, span: [f64; 2], ticks: &[(f64, String)], color: ColorRgba8) {
        let line = Paint::stroke(color, 1.0);
        self.element(
            Shape::Line {
                from: pt(x, span[0]),
                to: pt(x, span[1]),
            },
            line,
        );
        for (y, text) in ticks {
            self.element(
                Shape::Line {
                    from: pt(x - 6.0, *y),
                    to: pt(x, *y),
                },
                line,
            );
            self.text(pt(x - 9.0, *y + 3.0), text.clone(), 10.0, TextAnchor::End, color);
        }
    }

    pub fn finish(self) -> SceneOutput {
        self.out
    }
}
