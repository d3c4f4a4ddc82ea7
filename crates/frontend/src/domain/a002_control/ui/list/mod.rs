pub mod state;

use crate::domain::a002_control::api;
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::SeverityBadge;
use crate::shared::icons::icon;
use crate::shared::list_loader::{filter_signal, page_change_callback, ListLoader};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a002_control::aggregate::{Control, CONTROL_FILTER_DIMENSIONS};
use contracts::shared::list::ListStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Link target of a control row. Controls are opened in the context of a
/// benchmark; `benchmark_id` wins over the control's own first parent.
fn control_href(control: &Control, benchmark_id: Option<&str>) -> Option<String> {
    let benchmark_id = benchmark_id
        .map(str::to_string)
        .or_else(|| control.parent_benchmarks.first().cloned())?;
    Some(
        AppRoute::BenchmarkControl {
            benchmark_id,
            control_id: control.id.clone(),
        }
        .to_path(),
    )
}

/// Controls table shared by the controls page and benchmark details
#[component]
pub fn ControlTable(
    #[prop(into)] rows: Signal<Vec<Control>>,
    #[prop(optional, into)] benchmark_id: Option<String>,
) -> impl IntoView {
    let benchmark_id = StoredValue::new(benchmark_id);

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=300.0>"Title"</TableHeaderCell>
                    <TableHeaderCell min_width=110.0>"Severity"</TableHeaderCell>
                    <TableHeaderCell min_width=160.0>"Connector"</TableHeaderCell>
                    <TableHeaderCell min_width=180.0>"Primary table"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For each=move || rows.get() key=|c| c.id.clone() let:control>
                    {
                        let href = benchmark_id.with_value(|b| control_href(&control, b.as_deref()));
                        let title = control.title.clone();
                        let primary_table = control
                            .query
                            .as_ref()
                            .and_then(|q| q.primary_table.clone())
                            .unwrap_or_default();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        {match href {
                                            Some(href) => view! { <A href=href>{title}</A> }.into_any(),
                                            None => view! { <span>{title}</span> }.into_any(),
                                        }}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <SeverityBadge severity=control.severity />
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{control.connector.join(", ")}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{primary_table}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }
                </For>
            </TableBody>
        </Table>
    }
}

#[component]
pub fn ControlList() -> impl IntoView {
    let ctx = use_global_context();
    let query = state::create_state(ctx.page_size.get_untracked());
    let filter = filter_signal(query);
    let loader = ListLoader::<Control>::new();

    loader.load_on_change(query, |q| async move { api::fetch_controls(&q).await });

    let retry = Callback::new(move |_| {
        let q = query.get_untracked();
        loader.load(async move { api::fetch_controls(&q).await });
    });
    let on_page_change = page_change_callback(query);

    view! {
        <PageFrame page_id="a002_control--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Controls"</h1>
                    <span class="page__subtitle">
                        {move || format!("{} total", loader.total_count())}
                    </span>
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
                known=CONTROL_FILTER_DIMENSIONS
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
                    <EmptyState message="No controls match the current filter." />
                </Show>
                <ControlTable rows=Signal::derive(move || loader.rows()) />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::severity::Severity;

    fn control(parents: &[&str]) -> Control {
        Control {
            id: "c1".into(),
            title: "Root MFA".into(),
            description: String::new(),
            severity: Severity::High,
            connector: vec!["aws_cloud_account".into()],
            parent_benchmarks: parents.iter().map(|p| p.to_string()).collect(),
            tags: Default::default(),
            query: None,
        }
    }

    #[test]
    fn test_control_href_prefers_explicit_benchmark() {
        let c = control(&["cis"]);
        assert_eq!(control_href(&c, Some("soc2")).as_deref(), Some("/compliance/soc2/c1"));
        assert_eq!(control_href(&c, None).as_deref(), Some("/compliance/cis/c1"));
        assert_eq!(control_href(&control(&[]), None), None);
    }
}
