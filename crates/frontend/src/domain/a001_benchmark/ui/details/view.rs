use super::view_model::BenchmarkDetailsViewModel;
use crate::domain::a002_control::api as control_api;
use crate::domain::a002_control::ui::list::{state as control_state, ControlTable};
use crate::layout::global_context::use_global_context;
use crate::layout::notifications::use_notifications;
use crate::projections::p900_compliance_job::ui::report::JobReportPanel;
use crate::routes::app_route::AppRoute;
use crate::routes::routes::route_param;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::{page_change_callback, ListLoader, ListQuery};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a001_benchmark::aggregate::Benchmark;
use contracts::domain::a002_control::aggregate::Control;
use contracts::shared::list::ListStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Switch, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

#[component]
fn BenchmarkSummary(benchmark: Benchmark) -> impl IntoView {
    let children = benchmark.children.clone();
    view! {
        <div class="details-header">
            <h2 class="details-title">{benchmark.title.clone()}</h2>
            {if benchmark.enabled {
                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Enabled"</Badge> }.into_any()
            } else {
                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Disabled"</Badge> }.into_any()
            }}
        </div>
        <p class="details-description">{benchmark.description.clone()}</p>
        <dl class="details-grid">
            <dt>"Id"</dt>
            <dd><code>{benchmark.id.clone()}</code></dd>
            <dt>"Connectors"</dt>
            <dd>{benchmark.connectors.join(", ")}</dd>
            <dt>"Controls"</dt>
            <dd>{benchmark.number_of_controls}</dd>
            <dt>"Updated"</dt>
            <dd>{format_optional(benchmark.updated_at.as_ref())}</dd>
        </dl>
        {(!children.is_empty()).then(move || view! {
            <h3 class="section-title">"Sub-frameworks"</h3>
            <ul class="details-links">
                {children
                    .into_iter()
                    .map(|child| {
                        let href = AppRoute::Benchmark { benchmark_id: child.clone() }.to_path();
                        view! { <li><A href=href>{child.clone()}</A></li> }
                    })
                    .collect_view()}
            </ul>
        })}
    }
}

#[component]
fn AssignmentSection(vm: BenchmarkDetailsViewModel) -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <section class="details-section">
            <div class="details-section__header">
                <h3 class="section-title">"Assigned integrations"</h3>
                <Switch checked=vm.auto_assign label="Assign automatically" />
                <button
                    class="button button--primary"
                    disabled=move || !vm.is_dirty() || vm.saving.get()
                    on:click=move |_| vm.save_command(notifications)
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
            <Show when=move || vm.assignments.with(|a| a.items.is_empty()) && !vm.loading.get()>
                <EmptyState message="No integrations can run this framework yet." />
            </Show>
            <table class="table">
                <thead>
                    <tr>
                        <th class="table__cell table__cell--checkbox"></th>
                        <th class="table__cell">"Integration"</th>
                        <th class="table__cell">"Type"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || vm.assignments.get().items
                        key=|a| a.integration_id.clone()
                        let:assignment
                    >
                        {
                            let id = assignment.integration_id.clone();
                            let checked_id = id.clone();
                            view! {
                                <tr class="table__row">
                                    <TableCheckbox
                                        checked=Signal::derive(move || {
                                            vm.auto_assign.get() || vm.selected.with(|s| s.contains(&checked_id))
                                        })
                                        disabled=Signal::derive(move || vm.auto_assign.get())
                                        on_change=Callback::new(move |checked| vm.toggle(id.clone(), checked))
                                    />
                                    <td class="table__cell">{assignment.name.clone()}</td>
                                    <td class="table__cell">{assignment.integration_type.clone()}</td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </section>
    }
}

#[component]
pub fn BenchmarkDetails() -> impl IntoView {
    let ctx = use_global_context();
    let benchmark_id = route_param("benchmark_id");
    let job_param = use_query_map().with_untracked(|q| q.get("job"));
    let vm = BenchmarkDetailsViewModel::new();

    let controls_query = RwSignal::new(ListQuery::with_filter(
        control_state::benchmark_filter(&benchmark_id.get_untracked()),
        ctx.page_size.get_untracked(),
    ));
    let controls = ListLoader::<Control>::new();
    controls.load_on_change(controls_query, |q| async move { control_api::fetch_controls(&q).await });
    let on_page_change = page_change_callback(controls_query);

    Effect::new(move |_| {
        let id = benchmark_id.get();
        vm.load(id.clone());
        let filter = control_state::benchmark_filter(&id);
        if controls_query.with_untracked(|q| q.filter != filter) {
            controls_query.update(|q| q.set_filter(filter));
        }
    });

    view! {
        <PageFrame page_id="a001_benchmark--detail" category=PageCategory::Detail>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=AppRoute::Compliance.to_path()>
                        {icon("chevron-left")}
                        "All frameworks"
                    </A>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm.load(benchmark_id.get_untracked())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner
                    error=vm.error
                    on_retry=Callback::new(move |_| vm.load(benchmark_id.get_untracked()))
                />
                <LoadingIndicator when=vm.loading />
                {move || vm.benchmark.get().map(|b| view! { <BenchmarkSummary benchmark=b /> })}

                <AssignmentSection vm=vm />

                <section class="details-section">
                    <div class="details-section__header">
                        <h3 class="section-title">"Controls"</h3>
                        <PaginationControls
                            page=Signal::derive(move || controls_query.get().page)
                            total_count=Signal::derive(move || controls.total_count())
                            on_change=on_page_change
                        />
                    </div>
                    <ErrorBanner
                        error=Signal::derive(move || controls.error())
                        on_retry=Callback::new(move |_| {
                            let q = controls_query.get_untracked();
                            controls.load(async move { control_api::fetch_controls(&q).await });
                        })
                    />
                    <LoadingIndicator when=Signal::derive(move || controls.is_loading()) />
                    <Show when=move || controls.status() == ListStatus::Empty>
                        <EmptyState message="This framework has no controls." />
                    </Show>
                    {move || {
                        let id = benchmark_id.get();
                        view! {
                            <ControlTable rows=Signal::derive(move || controls.rows()) benchmark_id=id />
                        }
                    }}
                </section>

                {move || {
                    let id = benchmark_id.get();
                    let job = job_param.clone();
                    view! { <JobReportPanel benchmark_id=id initial_job_id=job /> }
                }}
            </div>
        </PageFrame>
    }
}
