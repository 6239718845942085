// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `play` subcommand: load, replay a script, write one frame per render cycle.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use story_app_core::notice::{NoticeKind, NoticeService};
use story_core::{NarrativeEngine, Outcome};
use story_data::load_datasets;
use story_scene_codec::SvgSurface;
use tracing::{debug, info, instrument};

use crate::script;
use crate::session::Session;

/// File name of the frame for `epoch`.
pub fn frame_name(epoch: u64) -> String {
    format!("frame-{epoch:04}.svg")
}

fn write_frame(out: &Path, epoch: u64, surface: &SvgSurface) -> Result<()> {
    let path = out.join(frame_name(epoch));
    std::fs::write(&path, surface.to_svg())
        .with_context(|| format!("write frame {}", path.display()))?;
    let hash = surface.fingerprint().to_hex();
    let short = hash.as_str().get(..12).unwrap_or_default();
    debug!(path = %path.display(), fingerprint = short, "frame written");
    Ok(())
}

fn describe(outcomes: &[Outcome]) -> String {
    let parts: Vec<String> = outcomes
        .iter()
        .map(|o| match o {
            Outcome::Rendered { epoch } => format!("rendered #{epoch}"),
            Outcome::Deferred => "deferred".to_owned(),
            Outcome::HitTested { reported } => format!("hit {reported}"),
            Outcome::TooltipShown => "tooltip".to_owned(),
            Outcome::TooltipHidden => "tooltip hidden".to_owned(),
            Outcome::LoadFailed => "load failed".to_owned(),
            Outcome::Ignored => "ignored".to_owned(),
        })
        .collect();
    parts.join(", ")
}

/// Run the `play` subcommand.
#[instrument(skip_all, fields(data = %data.display(), out = %out.display()))]
pub async fn run(
    session: &Session,
    notices: &mut NoticeService,
    data: &Path,
    out: &Path,
    script_path: Option<&Path>,
) -> Result<()> {
    let steps = script::read(script_path)?;
    std::fs::create_dir_all(out).with_context(|| format!("create {}", out.display()))?;

    let config = session.engine_config();
    let surface = SvgSurface::new(config.size[0], config.size[1]);
    let mut engine = NarrativeEngine::new(config, surface);

    let settings = &session.settings.data;
    let loaded = load_datasets(&settings.sources(data), &settings.aggregate).await;
    let mut stdout = io::stdout().lock();
    match engine.datasets_loaded(loaded)? {
        Outcome::Rendered { epoch } => {
            write_frame(out, epoch, engine.surface())?;
            writeln!(stdout, "load: rendered #{epoch}")?;
        }
        _ => {
            write_frame(out, 0, engine.surface())?;
            let message = engine
                .failure()
                .unwrap_or("Data failed to load")
                .to_owned();
            notices.post(
                NoticeKind::Fatal,
                "Data failed to load",
                Some(message.clone()),
            );
            bail!(message);
        }
    }

    let mut frames = 1usize;
    for step in &steps {
        let before = engine.controller().epoch();
        let outcomes = engine
            .dispatch(step.event.clone())
            .with_context(|| format!("line {}: `{}`", step.line, step.text))?;
        let after = engine.controller().epoch();
        let tooltip_changed = outcomes
            .iter()
            .any(|o| matches!(o, Outcome::TooltipShown | Outcome::TooltipHidden));
        if after != before {
            write_frame(out, after, engine.surface())?;
            frames += 1;
        } else if tooltip_changed {
            // Overlay-only change: refresh the current frame in place.
            write_frame(out, after, engine.surface())?;
        }
        let mut status = describe(&outcomes);
        if let Some(tip) = engine.surface().tooltip() {
            status = format!("{status} [{}]", tip.lines.join(" | "));
        }
        writeln!(stdout, "{}: {} -> {status}", step.line, step.text)?;
    }

    let surface = engine.into_surface();
    info!(frames, epoch = surface.last_epoch(), "playback finished");
    writeln!(stdout, "wrote {frames} frame(s) to {}", out.display())?;
    Ok(())
}
