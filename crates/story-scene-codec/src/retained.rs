// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Retained element store shared by the surfaces in this crate.

use std::collections::BTreeMap;

use story_scene_port::{
    ApplyError, DrawBatch, ElementDef, ElementKey, LabelDef, LabelKey, SceneOp, MAX_OPS,
};

/// Elements and labels currently on a surface, keyed in drawing order.
#[derive(Debug, Default)]
pub struct Retained {
    /// Current elements.
    pub elements: BTreeMap<ElementKey, ElementDef>,
    /// Current annotation labels.
    pub labels: BTreeMap<LabelKey, LabelDef>,
    last_epoch: Option<u64>,
}

impl Retained {
    /// Apply `batch`; returns `Ok(false)` when the epoch was already applied.
    pub fn apply(&mut self, batch: &DrawBatch) -> Result<bool, ApplyError> {
        if batch.ops.len() > MAX_OPS {
            return Err(ApplyError::Invariant(format!(
                "batch has {} ops, limit is {MAX_OPS}",
                batch.ops.len()
            )));
        }

        // Idempotency check: skip if epoch already processed
        if self.last_epoch.is_some_and(|last| batch.epoch <= last) {
            return Ok(false);
        }

        for op in &batch.ops {
            match op {
                SceneOp::Clear => {
                    self.elements.clear();
                    self.labels.clear();
                }
                SceneOp::UpsertElement(el) => {
                    self.elements.insert(el.key, el.clone());
                }
                SceneOp::UpsertLabel(label) => {
                    self.labels.insert(label.key, label.clone());
                }
            }
        }

        self.last_epoch = Some(batch.epoch);
        Ok(true)
    }

    /// Last applied epoch.
    pub fn last_epoch(&self) -> Option<u64> {
        self.last_epoch
    }

    /// Drop everything including epoch tracking.
    pub fn reset(&mut self) {
        self.elements.clear();
        self.labels.clear();
        self.last_epoch = None;
    }
}
