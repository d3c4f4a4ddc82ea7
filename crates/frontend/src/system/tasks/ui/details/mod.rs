//! Task details with a manual run. A started run is polled until it
//! settles; leaving the page stops the poll.

use crate::layout::notifications::use_notifications;
use crate::routes::app_route::AppRoute;
use crate::routes::routes::route_param;
use crate::shared::components::list_feedback::{ErrorBanner, LoadingIndicator};
use crate::shared::components::progress_panel::PollProgressPanel;
use crate::shared::components::status_badge::JobStatusBadge;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::polling::PollController;
use crate::system::tasks::api;
use contracts::shared::api_error::ApiError;
use contracts::shared::polling::{JobProgress, PollPolicy};
use contracts::system::tasks::{RunTaskRequest, Task};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::collections::BTreeMap;
use thaw::{Button, ButtonAppearance, Input};

/// Drop params the user cleared so the task falls back to its defaults
fn run_params(edited: &[(String, RwSignal<String>)]) -> BTreeMap<String, String> {
    edited
        .iter()
        .map(|(k, v)| (k.clone(), v.get_untracked().trim().to_string()))
        .filter(|(_, v)| !v.is_empty())
        .collect()
}

#[component]
fn TaskSummary(task: Task) -> impl IntoView {
    view! {
        <div class="details-header">
            <h2 class="details-title">{task.name.clone()}</h2>
        </div>
        <p class="details-description">{task.description.clone()}</p>
        <dl class="details-grid">
            <dt>"Id"</dt>
            <dd><code>{task.id.clone()}</code></dd>
            <dt>"Image"</dt>
            <dd>{task.image_url.clone().unwrap_or_else(|| "\u{2014}".to_string())}</dd>
            <dt>"Last run"</dt>
            <dd>
                {match task.last_run.clone() {
                    Some(run) => view! {
                        <JobStatusBadge status=run.status.clone() />
                        " "
                        {format_optional(run.updated_at.as_ref())}
                        {run.failure_message.map(|m| view! { <p class="details-error">{m}</p> })}
                    }.into_any(),
                    None => view! { <span>"never"</span> }.into_any(),
                }}
            </dd>
        </dl>
    }
}

#[component]
pub fn TaskDetails() -> impl IntoView {
    let notifications = use_notifications();
    let task_id = route_param("id");
    let task = RwSignal::new(Option::<Task>::None);
    let params = RwSignal::new(Vec::<(String, RwSignal<String>)>::new());
    let error = RwSignal::new(Option::<ApiError>::None);
    let loading = RwSignal::new(false);
    let starting = RwSignal::new(false);
    let poll = PollController::new(PollPolicy::short_running());

    let load = move |id: String| {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::fetch_task(&id).await;
            if task_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(t) => {
                    params.set(
                        t.params
                            .iter()
                            .map(|(k, v)| (k.clone(), RwSignal::new(v.clone())))
                            .collect(),
                    );
                    task.set(Some(t));
                }
                Err(e) => {
                    log::warn!("failed to load task {}: {}", id, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        let id = task_id.get();
        poll.reset();
        if !id.is_empty() {
            load(id);
        }
    });

    let run = move |_| {
        let request = RunTaskRequest {
            task_id: task_id.get_untracked(),
            params: params.with_untracked(|p| run_params(p)),
        };
        starting.set(true);
        spawn_local(async move {
            let result = api::run_task(&request).await;
            starting.try_set(false);
            match result {
                Ok(started) if task_id.try_get_untracked().as_deref() == Some(request.task_id.as_str()) => {
                    log!("task {} started run {}", request.task_id, started.id);
                    notifications.success("Task started");
                    let run_id = started.id;
                    poll.start(move || {
                        let run_id = run_id.clone();
                        async move { api::fetch_run(&run_id).await.map(JobProgress::from) }
                    });
                }
                Ok(started) => {
                    log!("task {} started run {} after leaving its page", request.task_id, started.id);
                    notifications.success("Task started");
                }
                Err(e) => notifications.error("start task", &e),
            }
        });
    };

    view! {
        <PageFrame page_id="sys_task--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=AppRoute::Tasks.to_path()>
                        {icon("chevron-left")}
                        "All tasks"
                    </A>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            task.with(|t| t.is_none()) || starting.get() || poll.is_active()
                        })
                        on_click=run
                    >
                        {icon("play")}
                        "Run now"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    error=error
                    on_retry=Callback::new(move |_| load(task_id.get_untracked()))
                />
                <LoadingIndicator when=loading />
                {move || task.get().map(|t| view! { <TaskSummary task=t /> })}

                <Show when=move || params.with(|p| !p.is_empty())>
                    <section class="details-section">
                        <h3 class="section-title">"Run parameters"</h3>
                        <div class="details-form">
                            {move || {
                                params
                                    .get()
                                    .into_iter()
                                    .map(|(key, value)| view! {
                                        <div class="form-group">
                                            <label>{key}</label>
                                            <Input value=value />
                                        </div>
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </section>
                </Show>

                <PollProgressPanel state=poll.state title="Current run" />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleared_params_are_dropped() {
        let edited = vec![
            ("region".to_string(), RwSignal::new(" eu-west-1 ".to_string())),
            ("account".to_string(), RwSignal::new("  ".to_string())),
        ];
        let params = run_params(&edited);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("region").map(String::as_str), Some("eu-west-1"));
    }
}
