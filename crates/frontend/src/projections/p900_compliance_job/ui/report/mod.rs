//! Job report of a compliance run: polls the summary until the job settles,
//! then lists the per-control runners.

use crate::projections::p900_compliance_job::api;
use crate::routes::app_route::AppRoute;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::progress_panel::PollProgressPanel;
use crate::shared::components::status_badge::JobStatusBadge;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::ListLoader;
use crate::shared::polling::PollController;
use contracts::projections::p900_compliance_job::dto::{JobReportSummary, JobRunner};
use contracts::shared::list::{ListPage, ListStatus};
use contracts::shared::polling::{JobProgress, PollPolicy, PollState};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

fn normalize_job_id(input: &str) -> Option<String> {
    let id = input.trim();
    (!id.is_empty()).then(|| id.to_string())
}

fn load_runners(loader: ListLoader<JobRunner>, job_id: String) {
    loader.load(async move {
        let items = api::fetch_runners(&job_id).await?;
        Ok(ListPage {
            total_count: items.len() as u64,
            items,
        })
    });
}

#[component]
fn SummaryCard(summary: JobReportSummary) -> impl IntoView {
    let compliance = summary
        .compliance_percentage()
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| "\u{2014}".to_string());
    let failed = summary.failed_controls.clone();

    view! {
        <div class="job-report__summary">
            <div class="job-report__metric">
                <span class="job-report__label">"Compliance"</span>
                <span class="job-report__value">{compliance}</span>
            </div>
            <div class="job-report__metric">
                <span class="job-report__label">"Non-compliant resources"</span>
                <span class="job-report__value">{summary.non_compliant_resources}</span>
            </div>
            <div class="job-report__metric">
                <span class="job-report__label">"Failed controls"</span>
                <span class="job-report__value">{failed.total()}</span>
                <span class="job-report__breakdown">
                    {format!(
                        "critical {} / high {} / medium {} / low {}",
                        failed.critical, failed.high, failed.medium, failed.low
                    )}
                </span>
            </div>
            <div class="job-report__metric">
                <span class="job-report__label">"Last evaluated"</span>
                <span class="job-report__value">{format_optional(summary.last_evaluated_at.as_ref())}</span>
            </div>
        </div>
    }
}

#[component]
pub fn JobReportPanel(
    /// Benchmark the job belongs to; runner rows link to its controls
    #[prop(into)]
    benchmark_id: String,
    /// Job to track right away, e.g. from the `?job=` query parameter
    #[prop(default = None)]
    initial_job_id: Option<String>,
) -> impl IntoView {
    let poll = PollController::new(PollPolicy::short_running());
    let job_input = RwSignal::new(initial_job_id.clone().unwrap_or_default());
    let tracked_job = RwSignal::new(Option::<String>::None);
    let summary = RwSignal::new(Option::<JobReportSummary>::None);
    let runners = ListLoader::<JobRunner>::new();
    let benchmark_id = StoredValue::new(benchmark_id);

    let track = move |job_id: String| {
        log::info!("tracking compliance job {}", job_id);
        summary.set(None);
        tracked_job.set(Some(job_id.clone()));
        poll.start(move || {
            let job_id = job_id.clone();
            async move {
                let s = api::fetch_summary(&job_id).await?;
                summary.try_set(Some(s.clone()));
                Ok(JobProgress::from(s))
            }
        });
    };

    // Runners are only meaningful once the job has settled
    Effect::new(move |was_settled: Option<bool>| {
        let settled = poll.state.with(|s| {
            matches!(s, Some(PollState::Succeeded(_)) | Some(PollState::Failed(_)))
        });
        if settled && was_settled != Some(true) {
            if let Some(job_id) = tracked_job.get_untracked() {
                load_runners(runners, job_id);
            }
        }
        settled
    });

    if let Some(job_id) = initial_job_id.as_deref().and_then(normalize_job_id) {
        track(job_id);
    }

    let on_track = move |_| {
        if let Some(job_id) = normalize_job_id(&job_input.get_untracked()) {
            track(job_id);
        }
    };

    view! {
        <section class="job-report">
            <div class="job-report__header">
                <h3 class="section-title">"Job report"</h3>
                <input
                    class="form__input"
                    placeholder="Job id"
                    prop:value=move || job_input.get()
                    on:input=move |ev| job_input.set(event_target_value(&ev))
                />
                <button
                    class="button button--secondary"
                    disabled=move || job_input.with(|v| v.trim().is_empty())
                    on:click=on_track
                >
                    {icon("eye")}
                    "Track"
                </button>
                <Show when=move || poll.is_active()>
                    <button class="button button--ghost" on:click=move |_| poll.cancel()>
                        {icon("x")}
                        "Stop"
                    </button>
                </Show>
            </div>

            <PollProgressPanel state=poll.state />

            {move || summary.get().map(|s| view! { <SummaryCard summary=s /> })}

            <Show when=move || tracked_job.with(|j| j.is_some())>
                <ErrorBanner
                    error=Signal::derive(move || runners.error())
                    on_retry=Callback::new(move |_| {
                        if let Some(job_id) = tracked_job.get_untracked() {
                            load_runners(runners, job_id);
                        }
                    })
                />
                <LoadingIndicator when=Signal::derive(move || runners.is_loading()) />
                <Show when=move || runners.status() == ListStatus::Empty>
                    <EmptyState message="This job has no runners." />
                </Show>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell min_width=220.0>"Control"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Integration"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Status"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=220.0>"Reason"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Updated"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || runners.rows() key=|r| r.runner_id.clone() let:runner>
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <A href=AppRoute::BenchmarkControl {
                                            benchmark_id: benchmark_id.get_value(),
                                            control_id: runner.control_id.clone(),
                                        }
                                        .to_path()>{runner.control_id.clone()}</A>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{runner.integration_id.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <JobStatusBadge status=runner.status.clone() />
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        {runner.reason.clone().unwrap_or_default()}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_optional(runner.updated_at.as_ref())}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </For>
                    </TableBody>
                </Table>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_is_trimmed() {
        assert_eq!(normalize_job_id("  42 "), Some("42".to_string()));
        assert_eq!(normalize_job_id("   "), None);
    }
}
