// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interaction reporting: hotspots registered by renderers and the sink
//! capability they report into.

use crate::types::Point;

/// Offset of the tooltip from the pointer.
pub const TOOLTIP_OFFSET: Point = [10.0, -10.0];

/// Hover report: who is under the pointer and what to show.
#[derive(Clone, Debug, PartialEq)]
pub struct Hover {
    /// Display name of the hovered entity.
    pub entity: String,
    /// Tooltip lines (name first, then metrics).
    pub lines: Vec<String>,
    /// Pointer position.
    pub pointer: Point,
}

/// Capability handed to renderers' hotspots for reporting interactions.
///
/// Implementors queue or apply the reports; hotspots never touch narrative
/// state directly.
pub trait InteractionSink {
    /// The pointer is over an entity that wants a tooltip.
    fn on_hover(&mut self, hover: Hover);
    /// An entity was clicked and resolved to a canonical identifier.
    fn on_click(&mut self, entity: &str);
    /// The pointer left every tooltip-bearing hotspot.
    fn on_leave(&mut self);
}

/// Hit region of a hotspot.
#[derive(Clone, Debug, PartialEq)]
pub enum HitShape {
    /// Polygon rings, even-odd rule.
    Polygon(Vec<Vec<Point>>),
    /// Disc.
    Circle {
        /// Centre.
        center: Point,
        /// Radius.
        radius: f32,
    },
}

impl HitShape {
    /// Whether `p` falls inside the shape.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Polygon(rings) => rings.iter().filter(|r| ring_contains(r, p)).count() % 2 == 1,
            Self::Circle { center, radius } => {
                let dx = p[0] - center[0];
                let dy = p[1] - center[1];
                dx * dx + dy * dy <= radius * radius
            }
        }
    }
}

fn ring_contains(ring: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > p[1]) != (yj > p[1]) && p[0] < (xj - xi) * (p[1] - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Interaction hook registered by a renderer for one mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Hotspot {
    /// Hit region.
    pub shape: HitShape,
    /// Display name used as the tooltip's first line.
    pub label: String,
    /// Metric lines; empty means no tooltip on hover.
    pub metrics: Vec<String>,
    /// Canonical entity selected on click, if the mark is clickable.
    pub select: Option<String>,
}

/// Hotspots of the current render cycle, topmost last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotspotSet {
    spots: Vec<Hotspot>,
}

impl HotspotSet {
    /// Wrap hotspots in drawing order.
    pub fn new(spots: Vec<Hotspot>) -> Self {
        Self { spots }
    }

    /// Number of registered hotspots.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// True when nothing is interactive.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Topmost hotspot under `p`.
    pub fn hit(&self, p: Point) -> Option<&Hotspot> {
        self.spots.iter().rev().find(|s| s.shape.contains(p))
    }

    /// Report hover or leave for a pointer at `p`.
    pub fn pointer_moved(&self, p: Point, sink: &mut dyn InteractionSink) {
        match self.hit(p).filter(|s| !s.metrics.is_empty()) {
            Some(spot) => {
                let mut lines = Vec::with_capacity(spot.metrics.len() + 1);
                lines.push(spot.label.clone());
                lines.extend(spot.metrics.iter().cloned());
                sink.on_hover(Hover {
                    entity: spot.label.clone(),
                    lines,
                    pointer: p,
                });
            }
            None => sink.on_leave(),
        }
    }

    /// Report a click at `p`; only clickable hotspots report.
    pub fn clicked(&self, p: Point, sink: &mut dyn InteractionSink) {
        if let Some(entity) = self.hit(p).and_then(|s| s.select.as_deref()) {
            sink.on_click(entity);
        }
    }
}
