pub mod state;

use crate::domain::a001_benchmark::api;
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::{filter_signal, page_change_callback, ListLoader};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a001_benchmark::aggregate::{Benchmark, BENCHMARK_FILTER_DIMENSIONS};
use contracts::shared::list::ListStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

#[derive(Clone, Debug)]
pub struct BenchmarkRow {
    pub id: String,
    pub title: String,
    pub connectors: String,
    pub controls: u64,
    pub enabled: bool,
    pub auto_assign: bool,
    pub updated_at: String,
}

impl From<Benchmark> for BenchmarkRow {
    fn from(b: Benchmark) -> Self {
        Self {
            updated_at: format_optional(b.updated_at.as_ref()),
            connectors: b.connectors.join(", "),
            id: b.id,
            title: b.title,
            controls: b.number_of_controls,
            enabled: b.enabled,
            auto_assign: b.auto_assign,
        }
    }
}

#[component]
pub fn BenchmarkList() -> impl IntoView {
    let ctx = use_global_context();
    let query = state::create_state(ctx.page_size.get_untracked());
    let filter = filter_signal(query);
    let loader = ListLoader::<Benchmark>::new();

    loader.load_on_change(query, |q| async move { api::fetch_benchmarks(&q).await });

    let retry = Callback::new(move |_| {
        let q = query.get_untracked();
        loader.load(async move { api::fetch_benchmarks(&q).await });
    });
    let on_page_change = page_change_callback(query);

    let rows = move || {
        loader
            .rows()
            .into_iter()
            .map(BenchmarkRow::from)
            .collect::<Vec<_>>()
    };

    view! {
        <PageFrame page_id="a001_benchmark--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Compliance frameworks"</h1>
                </div>
                <div class="page__header-right">
                    <button class="button button--secondary" on:click=move |_| retry.run(())>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <FilterPanel
                query=filter
                known=BENCHMARK_FILTER_DIMENSIONS
                pagination_controls=move || view! {
                    <PaginationControls
                        page=Signal::derive(move || query.get().page)
                        total_count=Signal::derive(move || loader.total_count())
                        on_change=on_page_change
                    />
                }
            />

            <div class="page__content">
                <ErrorBanner error=Signal::derive(move || loader.error()) on_retry=retry />
                <LoadingIndicator when=Signal::derive(move || loader.is_loading()) />
                <Show when=move || loader.status() == ListStatus::Empty>
                    <EmptyState message="No frameworks match the current filter." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                            <TableHeaderCell min_width=160.0>"Connectors"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Controls"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Status"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Updated"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=rows key=|row| row.id.clone() let:row>
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <A href=AppRoute::Benchmark { benchmark_id: row.id.clone() }.to_path()>
                                            {row.title.clone()}
                                        </A>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{row.connectors.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.controls}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {if row.enabled {
                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Enabled"</Badge> }.into_any()
                                        } else {
                                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Disabled"</Badge> }.into_any()
                                        }}
                                        {row.auto_assign.then(|| view! {
                                            <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>"Auto-assign"</Badge>
                                        })}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{row.updated_at.clone()}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </For>
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
