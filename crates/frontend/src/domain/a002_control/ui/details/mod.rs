use crate::domain::a002_control::api;
use crate::routes::app_route::AppRoute;
use crate::routes::routes::route_param;
use crate::shared::components::list_feedback::{ErrorBanner, LoadingIndicator};
use crate::shared::components::status_badge::SeverityBadge;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a002_control::aggregate::Control;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::collections::BTreeMap;

fn tag_pairs(tags: &BTreeMap<String, Vec<String>>) -> Vec<String> {
    tags.iter()
        .flat_map(|(k, values)| values.iter().map(move |v| format!("{}={}", k, v)))
        .collect()
}

#[component]
fn ControlBody(control: Control) -> impl IntoView {
    let query = control.query.clone().unwrap_or_default();
    let tags = tag_pairs(&control.tags);

    view! {
        <div class="details-header">
            <h2 class="details-title">{control.title.clone()}</h2>
            <SeverityBadge severity=control.severity />
        </div>
        <p class="details-description">{control.description.clone()}</p>

        <dl class="details-grid">
            <dt>"Id"</dt>
            <dd><code>{control.id.clone()}</code></dd>
            <dt>"Connector"</dt>
            <dd>{control.connector.join(", ")}</dd>
            <dt>"Primary table"</dt>
            <dd>{query.primary_table.clone().unwrap_or_else(|| "\u{2014}".to_string())}</dd>
            <dt>"Tables"</dt>
            <dd>{query.list_of_tables.join(", ")}</dd>
            <dt>"Benchmarks"</dt>
            <dd>
                {control
                    .parent_benchmarks
                    .clone()
                    .into_iter()
                    .map(|b| {
                        let href = AppRoute::Benchmark { benchmark_id: b.clone() }.to_path();
                        view! { <A href=href>{b}</A>" " }
                    })
                    .collect_view()}
            </dd>
        </dl>

        {(!tags.is_empty()).then(|| view! {
            <div class="filter-panel__tags">
                {tags.into_iter().map(|t| view! { <span class="filter-tag">{t}</span> }).collect_view()}
            </div>
        })}

        <h3 class="section-title">"Query"</h3>
        <pre class="code-block">{query.query_to_execute}</pre>
    }
}

#[component]
pub fn ControlDetails() -> impl IntoView {
    let benchmark_id = route_param("benchmark_id");
    let control_id = route_param("control_id");
    let control = RwSignal::new(Option::<Control>::None);
    let error = RwSignal::new(Option::<ApiError>::None);
    let loading = RwSignal::new(false);

    let load = move |id: String| {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::fetch_control(&id).await;
            // navigated to another control meanwhile
            if control_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(c) => control.set(Some(c)),
                Err(e) => {
                    log::warn!("failed to load control {}: {}", id, e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        let id = control_id.get();
        if !id.is_empty() {
            load(id);
        }
    });

    view! {
        <PageFrame page_id="a002_control--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=move || AppRoute::Benchmark { benchmark_id: benchmark_id.get() }.to_path()>
                        {icon("chevron-left")}
                        "Back to framework"
                    </A>
                </div>
            </div>
            <div class="page__content">
                <ErrorBanner
                    error=error
                    on_retry=Callback::new(move |_| load(control_id.get_untracked()))
                />
                <LoadingIndicator when=loading />
                {move || control.get().map(|c| view! { <ControlBody control=c /> })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_pairs_flatten_in_key_order() {
        let mut tags = BTreeMap::new();
        tags.insert("team".to_string(), vec!["sec".to_string(), "ops".to_string()]);
        tags.insert("env".to_string(), vec!["prod".to_string()]);
        assert_eq!(tag_pairs(&tags), vec!["env=prod", "team=sec", "team=ops"]);
    }
}
