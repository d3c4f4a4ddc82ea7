use crate::domain::a006_named_query::api;
use crate::layout::global_context::use_global_context;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_loader::{filter_signal, page_change_callback, ListLoader, ListQuery};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a006_named_query::aggregate::{NamedQuery, NamedQueryKind};
use contracts::shared::filter_query::FilterQuery;
use contracts::shared::list::ListStatus;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

fn page_id(kind: NamedQueryKind) -> &'static str {
    match kind {
        NamedQueryKind::Query => "a006_named_query--list",
        NamedQueryKind::View => "a006_named_view--list",
    }
}

/// Saved queries or views, depending on `kind`
#[component]
pub fn NamedQueryList(kind: NamedQueryKind) -> impl IntoView {
    let ctx = use_global_context();
    let query = RwSignal::new(ListQuery::with_filter(
        FilterQuery::new(),
        ctx.page_size.get_untracked(),
    ));
    let filter = filter_signal(query);
    let loader = ListLoader::<NamedQuery>::new();
    let expanded = RwSignal::new(Option::<String>::None);

    loader.load_on_change(query, move |q| async move { api::fetch_named_queries(kind, &q).await });

    let retry = Callback::new(move |_| {
        let q = query.get_untracked();
        loader.load(async move { api::fetch_named_queries(kind, &q).await });
    });
    let on_page_change = page_change_callback(query);

    view! {
        <PageFrame page_id=page_id(kind) category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{kind.display_name()}</h1>
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
                known=kind.dimensions()
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
                    <EmptyState message="Nothing matches the current filter." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=260.0>"Title"</TableHeaderCell>
                            <TableHeaderCell min_width=180.0>"Primary table"</TableHeaderCell>
                            <TableHeaderCell min_width=220.0>"Tables"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || loader.rows() key=|q| q.id.clone() let:item>
                            {
                                let id = item.id.clone();
                                let toggle_id = id.clone();
                                let sql = item.query.query_to_execute.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span
                                                    class="link"
                                                    title=item.description.clone()
                                                    on:click=move |_| expanded.update(|e| {
                                                        *e = if e.as_deref() == Some(toggle_id.as_str()) {
                                                            None
                                                        } else {
                                                            Some(toggle_id.clone())
                                                        };
                                                    })
                                                >
                                                    {item.title.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {item.query.primary_table.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {item.query.list_of_tables.join(", ")}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || expanded.with(|e| e.as_deref() == Some(id.as_str()))>
                                        {
                                            let sql = sql.clone();
                                            view! {
                                            <TableRow>
                                                <TableCell>
                                                    <pre class="code-block">{sql.clone()}</pre>
                                                </TableCell>
                                            </TableRow>
                                            }
                                        }
                                    </Show>
                                }
                            }
                        </For>
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_and_views_have_distinct_page_ids() {
        assert_ne!(page_id(NamedQueryKind::Query), page_id(NamedQueryKind::View));
    }
}
