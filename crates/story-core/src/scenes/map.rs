// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Choropleth of the snapshot emissions.

use story_scene_port::{Fill, HitShape, Paint, Point, Shape, TextAnchor};
use tracing::debug;

use super::color::{SequentialLog, BORDER, HIGHLIGHT, INK, NEUTRAL};
use super::format::si;
use super::projection::Mercator;
use super::scale::LogScale;
use super::{pt, OpsBuilder, SceneOutput, SceneRenderer, SceneView};

const SCALE: f64 = 150.0;
const LEGEND_SIZE: [f64; 2] = [200.0, 10.0];

/// Fixed callouts: entity, note, `[lon, lat]`, offset.
const CALLOUTS: [(&str, &str, [f64; 2], Point); 2] = [
    ("China", "China: Highest Emitter", [105.0, 35.0], [30.0, -30.0]),
    ("United States", "USA: Second Highest", [-100.0, 40.0], [-30.0, -30.0]),
];

/// Map scene renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapScene;

impl MapScene {
    /// Projection for a surface of `width` x `height`.
    pub fn projection(width: f64, height: f64) -> Mercator {
        Mercator::new(SCALE, [width / 2.0, height / 1.5])
    }
}

impl SceneRenderer for MapScene {
    fn draw(&self, view: &SceneView<'_>) -> SceneOutput {
        let (w, h) = (view.width(), view.height());
        let projection = Self::projection(w, h);
        let max = view.data.max_emissions().unwrap_or(1.0);
        let colors = SequentialLog::new(max);
        let mut b = OpsBuilder::default();

        let mut unresolved = 0_usize;
        for region in view.data.regions() {
            let rings: Vec<Vec<Point>> = region
                .rings
                .iter()
                .map(|ring| ring.iter().map(|&ll| projection.point(ll)).collect())
                .collect();
            let record = view.names.resolve(region, view.data, view.join_key);
            if record.is_none() {
                unresolved += 1;
                debug!(region = %region.name, "boundary region has no matching entity");
            }
            let value = record.and_then(|r| r.emissions());
            let entity = record.map(|r| r.country.clone());
            let selected = entity.as_deref().is_some_and(|e| view.state.is_selected(e));

            let fill = value.map_or(NEUTRAL, |v| colors.color(v));
            let paint = if selected {
                Paint::fill(fill).with_stroke(HIGHLIGHT, 2.0)
            } else {
                Paint::fill(fill).with_stroke(BORDER, 0.5)
            };
            b.mark(
                Shape::Polygon {
                    rings: rings.clone(),
                },
                paint,
                entity.clone(),
                selected,
            );

            let metrics = value
                .map(|v| vec![format!("CO2: {} Mt", v.round() as i64)])
                .unwrap_or_default();
            let label = record.map_or_else(|| region.name.clone(), |r| r.country.clone());
            b.hotspot(HitShape::Polygon(rings), label, metrics, entity);
        }
        if unresolved > 0 {
            debug!(unresolved, "regions drawn with neutral fill");
        }

        draw_legend(&mut b, &colors, max, w, h);

        for (entity, note, lon_lat, offset) in CALLOUTS {
            let value = view
                .data
                .entity(entity)
                .and_then(|r| r.co2)
                .unwrap_or(0.0);
            b.label(
                Some(format!("{} Mt", value.round() as i64)),
                note,
                projection.point(lon_lat),
                offset,
                INK,
            );
        }

        b.finish()
    }
}

fn draw_legend(b: &mut OpsBuilder, colors: &SequentialLog, max: f64, w: f64, h: f64) {
    let [lw, lh] = LEGEND_SIZE;
    let (x, y) = (w - lw - 40.0, h - 40.0);
    b.element(
        Shape::Rect {
            origin: pt(x, y),
            size: pt(lw, lh),
        },
        Paint {
            fill: Some(Fill::Gradient {
                from: colors.color(1.0),
                to: colors.color(max),
            }),
            stroke: None,
            stroke_width: 0.0,
            opacity: 1.0,
        },
    );
    let axis = LogScale::new([1.0, max.max(1.0)], [0.0, lw]);
    let ticks: Vec<(f64, String)> = axis
        .ticks()
        .into_iter()
        .map(|t| (x + axis.map(t), si(t)))
        .collect();
    b.bottom_axis(y + lh, [x, x + lw], &ticks, INK);
    b.text(pt(x, y - 5.0), "CO2 Emissions (Mt)", 11.0, TextAnchor::Start, INK);
}
