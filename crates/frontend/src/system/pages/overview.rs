//! Landing page: headline counts of each area, loaded independently so one
//! failing service does not blank the others.

use crate::domain::a001_benchmark::api as benchmark_api;
use crate::domain::a003_plugin::api as plugin_api;
use crate::routes::app_route::AppRoute;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::list_loader::ListQuery;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::tasks::api as task_api;
use contracts::domain::a003_plugin::aggregate::Plugin;
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{ListPage, PageRequest};
use contracts::shared::polling::JobStatus;
use contracts::system::tasks::Task;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::future::Future;

/// Single-row page; only `total_count` is used
const PROBE: PageRequest = PageRequest {
    cursor: 1,
    per_page: 1,
};

/// First page of plugins and tasks; both lists are short
const SCAN: PageRequest = PageRequest {
    cursor: 1,
    per_page: 100,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginStats {
    pub installed: u64,
    pub active_integrations: u64,
}

impl PluginStats {
    pub fn from_page(page: &ListPage<Plugin>) -> Self {
        Self {
            installed: page.items.iter().filter(|p| p.is_installed()).count() as u64,
            active_integrations: page.items.iter().map(|p| p.count.active).sum(),
        }
    }
}

/// Tasks whose most recent run failed
pub fn failed_task_count(page: &ListPage<Task>) -> u64 {
    page.items
        .iter()
        .filter(|t| t.last_run.as_ref().is_some_and(|r| r.status == JobStatus::Failed))
        .count() as u64
}

fn load_into<T, Fut>(label: &'static str, target: RwSignal<Option<T>>, fut: Fut)
where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    spawn_local(async move {
        match fut.await {
            Ok(v) => {
                target.try_set(Some(v));
            }
            Err(e) => log::warn!("overview: failed to load {}: {}", label, e),
        }
    });
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let frameworks = RwSignal::new(Option::<u64>::None);
    let plugins = RwSignal::new(Option::<PluginStats>::None);
    let tasks = RwSignal::new(Option::<ListPage<Task>>::None);

    let benchmark_probe = ListQuery {
        page: PROBE,
        ..Default::default()
    };
    load_into("frameworks", frameworks, async move {
        benchmark_api::fetch_benchmarks(&benchmark_probe)
            .await
            .map(|p| p.total_count)
    });
    load_into("plugins", plugins, async move {
        plugin_api::fetch_plugins(SCAN)
            .await
            .map(|p| PluginStats::from_page(&p))
    });
    load_into("tasks", tasks, task_api::fetch_tasks(SCAN));

    let failed_tasks = Signal::derive(move || tasks.with(|t| t.as_ref().map(failed_task_count)));

    view! {
        <PageFrame page_id="overview--system" category=PageCategory::System>
            <div class="page__header">
                <h1 class="page__title">"Overview"</h1>
            </div>
            <div class="stat-grid">
                <A href=AppRoute::Compliance.to_path()>
                    <StatCard
                        label="Compliance frameworks"
                        icon_name="shield-check"
                        value=frameworks
                    />
                </A>
                <A href=AppRoute::Integrations.to_path()>
                    <StatCard
                        label="Installed plugins"
                        icon_name="plug"
                        value=Signal::derive(move || plugins.with(|p| p.as_ref().map(|p| p.installed)))
                        subtitle=Signal::derive(move || {
                            plugins.with(|p| {
                                p.as_ref().map(|p| format!("{} active integrations", p.active_integrations))
                            })
                        })
                    />
                </A>
                <A href=AppRoute::Tasks.to_path()>
                    <StatCard
                        label="Tasks"
                        icon_name="clock"
                        value=Signal::derive(move || tasks.with(|t| t.as_ref().map(|t| t.total_count)))
                        tone=Signal::derive(move || {
                            failed_tasks.get().map(|n| if n > 0 { StatTone::Bad } else { StatTone::Good })
                        })
                        subtitle=Signal::derive(move || {
                            failed_tasks.get().filter(|n| *n > 0).map(|n| format!("{} failed last run", n))
                        })
                    />
                </A>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plugin_stats() {
        let page: ListPage<Plugin> = serde_json::from_value(json!({
            "items": [
                { "id": "1", "name": "AWS", "plugin_type": "aws", "install_state": "installed",
                  "count": { "total": 4, "active": 3 } },
                { "id": "2", "name": "Azure", "plugin_type": "azure", "install_state": "not_installed" }
            ],
            "total_count": 2
        }))
        .unwrap();
        assert_eq!(
            PluginStats::from_page(&page),
            PluginStats { installed: 1, active_integrations: 3 }
        );
    }

    #[test]
    fn test_failed_task_count_uses_last_run() {
        let page: ListPage<Task> = serde_json::from_value(json!({
            "items": [
                { "id": "a", "name": "scan", "last_run": { "id": "r1", "status": "FAILED" } },
                { "id": "b", "name": "sync", "last_run": { "id": "r2", "status": "SUCCEEDED" } },
                { "id": "c", "name": "idle" }
            ],
            "total_count": 3
        }))
        .unwrap();
        assert_eq!(failed_task_count(&page), 1);
    }
}
