use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Coarse checkpoints of one planning call
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanningStage {
    #[default]
    Pending,
    Filtered,
    Selected,
    PathBuilt,
    Assembled,
}

impl PlanningStage {
    /// Fraction of the work done once this stage is reached
    pub fn fraction(&self) -> f64 {
        match self {
            PlanningStage::Pending => 0.0,
            PlanningStage::Filtered => PROGRESS_FILTERED,
            PlanningStage::Selected => PROGRESS_SELECTED,
            PlanningStage::PathBuilt => PROGRESS_PATH_BUILT,
            PlanningStage::Assembled => PROGRESS_ASSEMBLED,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PlanningProgress {
    pub stage: PlanningStage,
    pub fraction: f64,
}

impl PlanningProgress {
    pub fn at(stage: PlanningStage) -> Self {
        PlanningProgress {
            stage,
            fraction: stage.fraction(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage == PlanningStage::Assembled
    }
}

/// Receives progress updates from a planning call. Called on the planning thread.
pub trait ProgressObserver: Send + Sync {
    fn report(&self, progress: PlanningProgress);
}

/// Observer that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn report(&self, _progress: PlanningProgress) {}
}

impl<F> ProgressObserver for F
where
    F: Fn(PlanningProgress) + Send + Sync,
{
    fn report(&self, progress: PlanningProgress) {
        self(progress)
    }
}

impl ProgressObserver for tokio::sync::watch::Sender<PlanningProgress> {
    fn report(&self, progress: PlanningProgress) {
        // No receivers left is fine; the value is still stored
        self.send_replace(progress);
    }
}
