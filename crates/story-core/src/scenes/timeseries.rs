// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Aggregate emissions over the selected year range, with the selected
//! entity's trajectory overlaid.

use story_data::SeriesPoint;
use story_scene_port::{ColorRgba8, HitShape, Paint, Shape};

use super::color::{HIGHLIGHT, INK, RED};
use super::format::grouped;
use super::scale::LinearScale;
use super::{pt, Margin, OpsBuilder, SceneOutput, SceneRenderer, SceneView};

const MARGIN: Margin = Margin {
    top: 20.0,
    right: 20.0,
    bottom: 50.0,
    left: 60.0,
};

/// Lower bound of the value axis.
const Y_FLOOR: f64 = 20_000.0;

/// Upper bound on requested year ticks; one per year up to this many.
const MAX_YEAR_TICKS: i64 = 64;

/// Dated markers: year and note.
const MARKERS: [(i32, &str); 2] = [
    (1997, "Kyoto Protocol (1997)"),
    (2015, "Paris Agreement (2015)"),
];

/// Time-series scene renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeSeriesScene;

impl SceneRenderer for TimeSeriesScene {
    fn draw(&self, view: &SceneView<'_>) -> SceneOutput {
        let (w, h) = (view.width(), view.height());
        let state = view.state;
        let years = state.range_start..=state.range_end;
        let aggregate_name = view.data.aggregate_name();
        let aggregate = view.data.aggregate_series(years.clone());
        let overlay = state
            .selected_entity
            .as_deref()
            .filter(|e| *e != aggregate_name)
            .map(|e| (e, view.data.series_for(e, years.clone())))
            .filter(|(_, pts)| !pts.is_empty());

        let values = aggregate
            .iter()
            .chain(overlay.iter().flat_map(|(_, pts)| pts.iter()))
            .map(|p| p.value);
        let (lo, hi) = values.fold((Y_FLOOR, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        let hi = if hi.is_finite() { hi } else { Y_FLOOR };

        let x = LinearScale::new(
            [f64::from(state.range_start), f64::from(state.range_end)],
            [MARGIN.left, w - MARGIN.right],
        )
        .nice(10);
        let y = LinearScale::new([lo, hi], [h - MARGIN.bottom, MARGIN.top]).nice(10);

        let mut b = OpsBuilder::default();
        let span = i64::from(state.range_end) - i64::from(state.range_start) + 1;
        let year_ticks = usize::try_from(span.clamp(2, MAX_YEAR_TICKS)).unwrap_or(2);
        let x_ticks: Vec<(f64, String)> = x
            .ticks(year_ticks)
            .into_iter()
            .filter(|t| t.fract() == 0.0)
            .map(|t| (x.map(t), format!("{}", t as i64)))
            .collect();
        b.bottom_axis(h - MARGIN.bottom, [MARGIN.left, w - MARGIN.right], &x_ticks, INK);
        let y_ticks: Vec<(f64, String)> = y
            .ticks(10)
            .into_iter()
            .map(|t| (y.map(t), grouped(t)))
            .collect();
        b.left_axis(MARGIN.left, [h - MARGIN.bottom, MARGIN.top], &y_ticks, INK);

        trajectory(&mut b, &x, &y, aggregate_name, &aggregate, RED, false);
        if let Some((entity, points)) = &overlay {
            trajectory(&mut b, &x, &y, entity, points, HIGHLIGHT, true);
        }

        for (year, note) in MARKERS {
            if !years.contains(&year) {
                continue;
            }
            if let Some(p) = aggregate.iter().find(|p| p.year == year) {
                b.label(
                    None,
                    note,
                    pt(x.map(f64::from(year)), y.map(p.value)),
                    [0.0, -30.0],
                    INK,
                );
            }
        }

        b.finish()
    }
}

fn trajectory(
    b: &mut OpsBuilder,
    x: &LinearScale,
    y: &LinearScale,
    entity: &str,
    points: &[SeriesPoint],
    color: ColorRgba8,
    selected: bool,
) {
    let at = |p: &SeriesPoint| pt(x.map(f64::from(p.year)), y.map(p.value));
    b.mark(
        Shape::Polyline {
            points: points.iter().map(at).collect(),
        },
        Paint::stroke(color, 2.0),
        Some(entity.to_owned()),
        selected,
    );
    for p in points {
        b.hotspot(
            HitShape::Circle {
                center: at(p),
                radius: 4.0,
            },
            entity.to_owned(),
            vec![format!("{}: {} Mt", p.year, grouped(p.value))],
            None,
        );
    }
}
