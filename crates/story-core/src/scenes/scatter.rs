// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Emissions per capita against GDP per capita, sized by population.

use story_scene_port::{HitShape, Paint, Shape};
use tracing::debug;

use super::color::{BLUE, INK, RED};
use super::format::{grouped, si, tick};
use super::scale::{LinearScale, LogScale, SqrtScale};
use super::{pt, Margin, OpsBuilder, SceneOutput, SceneRenderer, SceneView};

const MARGIN: Margin = Margin {
    top: 40.0,
    right: 20.0,
    bottom: 50.0,
    left: 60.0,
};

const GDP_FLOOR: f64 = 1_000.0;
const OUTLIER: &str = "Qatar";

/// Scatter scene renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScatterScene;

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| v.is_finite()).fold(0.0, f64::max)
}

impl SceneRenderer for ScatterScene {
    fn draw(&self, view: &SceneView<'_>) -> SceneOutput {
        let (w, h) = (view.width(), view.height());
        let rows = view.data.scatter();
        let x = LogScale::new(
            [GDP_FLOOR, max_of(rows.iter().map(|r| r.gdp)).max(GDP_FLOOR)],
            [MARGIN.left, w - MARGIN.right],
        );
        let y = LinearScale::new(
            [0.0, max_of(rows.iter().map(|r| r.co2_per_capita))],
            [h - MARGIN.bottom, MARGIN.top],
        );
        let r = SqrtScale::new([0.0, max_of(rows.iter().map(|r| r.population))], [2.0, 20.0]);

        let mut b = OpsBuilder::default();
        let x_ticks: Vec<(f64, String)> = x.ticks().into_iter().map(|t| (x.map(t), si(t))).collect();
        b.bottom_axis(h - MARGIN.bottom, [MARGIN.left, w - MARGIN.right], &x_ticks, INK);
        let y_ticks: Vec<(f64, String)> = y
            .ticks(10)
            .into_iter()
            .map(|t| (y.map(t), tick(t)))
            .collect();
        b.left_axis(MARGIN.left, [h - MARGIN.bottom, MARGIN.top], &y_ticks, INK);

        for row in rows {
            let (cx, cy, radius) = (x.map(row.gdp), y.map(row.co2_per_capita), r.map(row.population));
            if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
                debug!(entity = %row.country, "scatter record has no drawable position");
                continue;
            }
            let selected = view.state.is_selected(&row.country);
            let center = pt(cx, cy);
            b.mark(
                Shape::Circle {
                    center,
                    radius: radius as f32,
                },
                Paint::fill(if selected { BLUE } else { RED }).with_opacity(0.5),
                Some(row.country.clone()),
                selected,
            );
            b.hotspot(
                HitShape::Circle {
                    center,
                    radius: radius as f32,
                },
                row.country.clone(),
                vec![
                    format!("CO2/capita: {} t", row.co2_per_capita),
                    format!("GDP: ${}", grouped(row.gdp)),
                ],
                None,
            );
        }

        if let Some(q) = view.data.scatter_entity(OUTLIER) {
            let anchor = [x.map(q.gdp), y.map(q.co2_per_capita)];
            if anchor.iter().all(|v| v.is_finite()) {
                b.label(
                    Some(OUTLIER.to_owned()),
                    "High GDP, High Emissions",
                    pt(anchor[0], anchor[1]),
                    [40.0, -40.0],
                    INK,
                );
            }
        }

        b.finish()
    }
}
