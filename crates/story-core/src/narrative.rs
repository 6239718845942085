// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrative engine: load gate, serialized event queue and interaction routing.
//!
//! Events are processed one at a time in arrival order. Interactions that
//! hotspots report while an event is processed are queued behind it, so a
//! click never re-enters a render cycle that is still running.

use std::collections::VecDeque;
use std::sync::Arc;

use story_data::{Datasets, JoinKey, LoadError, ReconciliationTable};
use story_scene_port::{Hover, InteractionSink, SurfacePort};
use tracing::{debug, error, info, warn};

use crate::controller::{NarrativeError, TransitionController};
use crate::input::{Command, InputAdapter, InputEvent, Intent, PointerIntent};
use crate::state::{NarrativeBounds, NarrativeState, StateSnapshot};

/// Engine construction parameters.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Scene range and year bounds.
    pub bounds: NarrativeBounds,
    /// Surface width and height in pixels.
    pub size: [u32; 2],
    /// Fade duration hint in milliseconds.
    pub fade_ms: u32,
    /// Boundary name reconciliation.
    pub names: ReconciliationTable,
    /// Boundary-to-entity join key.
    pub join_key: JoinKey,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bounds: NarrativeBounds::default(),
            size: [960, 500],
            fade_ms: 200,
            names: ReconciliationTable::default(),
            join_key: JoinKey::Name,
        }
    }
}

/// Load gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePhase {
    /// Waiting for all four datasets; mutations apply but nothing renders.
    Loading,
    /// Datasets present; every mutation renders.
    Ready,
    /// Loading failed; terminal.
    Failed,
}

/// Interaction reported by a hotspot.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    /// Pointer over an entity with a tooltip.
    Hover(Hover),
    /// Entity clicked.
    Click(String),
    /// Pointer over nothing tooltip-bearing.
    Leave,
}

/// Result of processing one queued item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A render cycle ran.
    Rendered {
        /// Epoch of the applied batch.
        epoch: u64,
    },
    /// State changed while loading; the first render will reflect it.
    Deferred,
    /// Hit test ran and queued this many interactions.
    HitTested {
        /// Number of interactions queued.
        reported: usize,
    },
    /// Tooltip shown (no render cycle).
    TooltipShown,
    /// Tooltip hidden (no render cycle).
    TooltipHidden,
    /// Dataset loading failed; the surface shows the error.
    LoadFailed,
    /// Nothing happened.
    Ignored,
}

#[derive(Clone, Debug)]
enum Queued {
    Input(InputEvent),
    Interaction(Interaction),
}

/// Sink that collects interactions for later processing.
#[derive(Default)]
struct PendingInteractions(Vec<Interaction>);

impl InteractionSink for PendingInteractions {
    fn on_hover(&mut self, hover: Hover) {
        self.0.push(Interaction::Hover(hover));
    }

    fn on_click(&mut self, entity: &str) {
        self.0.push(Interaction::Click(entity.to_owned()));
    }

    fn on_leave(&mut self) {
        self.0.push(Interaction::Leave);
    }
}

/// Owns the narrative state, the transition controller and the event queue.
pub struct NarrativeEngine<S> {
    state: NarrativeState,
    controller: TransitionController<S>,
    input: InputAdapter,
    phase: EnginePhase,
    data: Option<Arc<Datasets>>,
    failure: Option<String>,
    queue: VecDeque<Queued>,
}

impl<S: SurfacePort> NarrativeEngine<S> {
    /// Engine in the `Loading` phase drawing onto `surface`.
    pub fn new(config: EngineConfig, surface: S) -> Self {
        let EngineConfig {
            bounds,
            size,
            fade_ms,
            names,
            join_key,
        } = config;
        Self {
            state: NarrativeState::new(bounds),
            controller: TransitionController::new(surface, bounds, names, join_key, size, fade_ms),
            input: InputAdapter::new(bounds),
            phase: EnginePhase::Loading,
            data: None,
            failure: None,
            queue: VecDeque::new(),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Current narrative state.
    pub fn state(&self) -> &StateSnapshot {
        self.state.snapshot()
    }

    /// Load error message once `Failed`.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Loaded datasets once `Ready`.
    pub fn datasets(&self) -> Option<&Arc<Datasets>> {
        self.data.as_ref()
    }

    /// Transition controller.
    pub fn controller(&self) -> &TransitionController<S> {
        &self.controller
    }

    /// Underlying surface.
    pub fn surface(&self) -> &S {
        self.controller.surface()
    }

    /// Dispose the surface and hand it back.
    pub fn into_surface(self) -> S {
        self.controller.into_surface()
    }

    /// Resolve the load gate. Success triggers the first render cycle.
    pub fn datasets_loaded(
        &mut self,
        result: Result<Datasets, LoadError>,
    ) -> Result<Outcome, NarrativeError> {
        if self.phase != EnginePhase::Loading {
            warn!(phase = ?self.phase, "datasets delivered after the load gate closed; ignored");
            return Ok(Outcome::Ignored);
        }
        match result {
            Ok(data) => {
                let data = Arc::new(data);
                info!(
                    entities = data.snapshot().len(),
                    series = data.series().len(),
                    scatter = data.scatter().len(),
                    regions = data.regions().len(),
                    "datasets loaded"
                );
                self.data = Some(Arc::clone(&data));
                self.phase = EnginePhase::Ready;
                let epoch = self.controller.render(None, self.state.snapshot(), &data)?;
                Ok(Outcome::Rendered { epoch })
            }
            Err(err) => {
                error!(source = %err.kind(), %err, "dataset load failed");
                let message = format!("Data failed to load: {err}");
                self.controller.show_fatal(&message);
                self.failure = Some(message);
                self.phase = EnginePhase::Failed;
                Ok(Outcome::LoadFailed)
            }
        }
    }

    /// Queue `event` and drain the queue, including any interactions it reports.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Vec<Outcome>, NarrativeError> {
        self.queue.push_back(Queued::Input(event));
        let mut outcomes = Vec::new();
        while let Some(item) = self.queue.pop_front() {
            outcomes.push(self.process(item)?);
        }
        Ok(outcomes)
    }

    fn process(&mut self, item: Queued) -> Result<Outcome, NarrativeError> {
        if self.phase == EnginePhase::Failed {
            warn!(?item, "input ignored: datasets failed to load");
            return Ok(Outcome::Ignored);
        }
        match item {
            Queued::Input(event) => match self.input.translate(&event) {
                Intent::Mutate(command) => self.mutate(command),
                Intent::Pointer(pointer) => Ok(self.hit_test(pointer)),
                Intent::Ignore => Ok(Outcome::Ignored),
            },
            Queued::Interaction(interaction) => self.interact(interaction),
        }
    }

    fn mutate(&mut self, command: Command) -> Result<Outcome, NarrativeError> {
        let previous = self.state.snapshot().clone();
        let next = match command {
            Command::Step(direction) => self.state.step_scene(direction),
            Command::SetScene(target) => self.state.set_scene(target),
            Command::SetRangeStart(year) => self.state.set_range_start(year),
            Command::SetRangeEnd(year) => self.state.set_range_end(year),
            Command::SelectEntity(entity) => self.state.select_entity(entity),
            Command::ResetSelection => self.state.reset_selection(),
        };
        let Some(data) = self.data.clone() else {
            debug!("state updated while loading; render deferred");
            return Ok(Outcome::Deferred);
        };
        let epoch = self.controller.render(Some(&previous), &next, &data)?;
        Ok(Outcome::Rendered { epoch })
    }

    fn hit_test(&mut self, pointer: PointerIntent) -> Outcome {
        if self.phase != EnginePhase::Ready {
            return Outcome::Ignored;
        }
        let mut pending = PendingInteractions::default();
        match pointer {
            PointerIntent::Move(p) => self.controller.pointer_moved(p, &mut pending),
            PointerIntent::Click(p) => self.controller.clicked(p, &mut pending),
            PointerIntent::Leave => pending.on_leave(),
        }
        let reported = pending.0.len();
        self.queue
            .extend(pending.0.into_iter().map(Queued::Interaction));
        Outcome::HitTested { reported }
    }

    fn interact(&mut self, interaction: Interaction) -> Result<Outcome, NarrativeError> {
        match interaction {
            Interaction::Hover(hover) => {
                self.controller.show_tooltip(&hover);
                Ok(Outcome::TooltipShown)
            }
            Interaction::Leave => {
                self.controller.hide_tooltip();
                Ok(Outcome::TooltipHidden)
            }
            Interaction::Click(entity) => self.mutate(Command::SelectEntity(entity)),
        }
    }
}
