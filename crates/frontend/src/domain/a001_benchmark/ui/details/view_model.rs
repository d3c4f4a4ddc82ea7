use crate::domain::a001_benchmark::api;
use crate::layout::notifications::NotificationService;
use contracts::domain::a001_benchmark::aggregate::{AssignRequest, Benchmark, BenchmarkAssignments};
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Whether the edited selection differs from what the server has
pub fn has_changes(saved: &BenchmarkAssignments, selected: &BTreeSet<String>, auto_assign: bool) -> bool {
    saved.auto_assign != auto_assign || (!auto_assign && saved.assigned_ids() != *selected)
}

#[derive(Clone, Copy)]
pub struct BenchmarkDetailsViewModel {
    /// Id the latest load was issued for; older responses are dropped
    current_id: StoredValue<String>,
    pub benchmark: RwSignal<Option<Benchmark>>,
    pub assignments: RwSignal<BenchmarkAssignments>,
    pub selected: RwSignal<BTreeSet<String>>,
    pub auto_assign: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl BenchmarkDetailsViewModel {
    pub fn new() -> Self {
        Self {
            current_id: StoredValue::new(String::new()),
            benchmark: RwSignal::new(None),
            assignments: RwSignal::new(BenchmarkAssignments::default()),
            selected: RwSignal::new(BTreeSet::new()),
            auto_assign: RwSignal::new(false),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    fn is_current(&self, id: &str) -> bool {
        self.current_id
            .try_with_value(|current| current == id)
            .unwrap_or(false)
    }

    /// Load the benchmark and its assignments
    pub fn load(&self, id: String) {
        if id.is_empty() {
            return;
        }
        self.current_id.set_value(id.clone());
        self.loading.set(true);
        self.error.set(None);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let benchmark = api::fetch_benchmark(&id).await;
            let assignments = api::fetch_assignments(&id).await;
            if !vm.is_current(&id) {
                log::debug!("dropping stale benchmark response for {}", id);
                return;
            }
            match benchmark {
                Ok(b) => vm.benchmark.set(Some(b)),
                Err(e) => {
                    log::warn!("failed to load benchmark {}: {}", id, e);
                    vm.error.set(Some(e));
                }
            }
            match assignments {
                Ok(a) => vm.apply_assignments(a),
                Err(e) => {
                    log::warn!("failed to load assignments of {}: {}", id, e);
                    vm.error.update(|err| {
                        err.get_or_insert(e);
                    });
                }
            }
            vm.loading.set(false);
        });
    }

    fn apply_assignments(&self, assignments: BenchmarkAssignments) {
        self.selected.set(assignments.assigned_ids());
        self.auto_assign.set(assignments.auto_assign);
        self.assignments.set(assignments);
    }

    pub fn toggle(&self, integration_id: String, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(integration_id);
            } else {
                s.remove(&integration_id);
            }
        });
    }

    pub fn is_dirty(&self) -> bool {
        self.assignments
            .with(|saved| self.selected.with(|sel| has_changes(saved, sel, self.auto_assign.get())))
    }

    /// Send the edited assignment, then reload it from the server
    pub fn save_command(&self, notifications: NotificationService) {
        let id = self.current_id.get_value();
        let request = self
            .selected
            .with_untracked(|sel| AssignRequest::from_selection(sel, self.auto_assign.get_untracked()));
        self.saving.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::assign(&id, &request).await;
            vm.saving.try_set(false);
            match result {
                Ok(()) => {
                    notifications.success("Assignments saved");
                    if vm.is_current(&id) {
                        match api::fetch_assignments(&id).await {
                            Ok(a) if vm.is_current(&id) => vm.apply_assignments(a),
                            Ok(_) => {}
                            Err(e) => notifications.error("reload assignments", &e),
                        }
                    }
                }
                Err(e) => notifications.error("save assignments", &e),
            }
        });
    }
}

impl Default for BenchmarkDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_benchmark::aggregate::BenchmarkAssignment;

    fn saved(assigned: &[&str], auto_assign: bool) -> BenchmarkAssignments {
        BenchmarkAssignments {
            items: ["a", "b", "c"]
                .iter()
                .map(|id| BenchmarkAssignment {
                    integration_id: id.to_string(),
                    name: id.to_string(),
                    integration_type: "aws_cloud_account".into(),
                    assigned: assigned.contains(id),
                })
                .collect(),
            auto_assign,
        }
    }

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unchanged_selection_is_clean() {
        assert!(!has_changes(&saved(&["a"], false), &set(&["a"]), false));
    }

    #[test]
    fn test_selection_and_auto_assign_changes() {
        assert!(has_changes(&saved(&["a"], false), &set(&["a", "b"]), false));
        assert!(has_changes(&saved(&["a"], false), &set(&["a"]), true));
        // the explicit selection is ignored while auto-assign stays on
        assert!(!has_changes(&saved(&["a"], true), &set(&["b"]), true));
    }
}
