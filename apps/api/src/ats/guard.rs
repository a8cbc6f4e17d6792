use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

/// Tracks which resumes have an analysis in flight so the same resume is
/// never analyzed twice concurrently. Different resumes never contend.
#[derive(Clone, Default)]
pub struct AnalysisGuard {
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

/// Held for the duration of one analysis; releases the resume on drop.
#[must_use]
pub struct AnalysisPermit {
    resume_id: Uuid,
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl AnalysisGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` while another analysis of `resume_id` is running.
    pub fn try_acquire(&self, resume_id: Uuid) -> Option<AnalysisPermit> {
        if !lock(&self.in_flight).insert(resume_id) {
            return None;
        }
        Some(AnalysisPermit {
            resume_id,
            in_flight: Arc::clone(&self.in_flight),
        })
    }
}

impl Drop for AnalysisPermit {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.resume_id);
    }
}

// The set holds plain ids, so a poisoned lock still has consistent contents.
fn lock(set: &Mutex<HashSet<Uuid>>) -> MutexGuard<'_, HashSet<Uuid>> {
    set.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
