pub mod state;

use self::state::create_state;
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_badge::JobStatusBadge;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::{page_change_callback, ListLoader};
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::tasks::api;
use contracts::shared::list::ListStatus;
use contracts::system::tasks::Task;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Human readable run interval, given in seconds
fn format_interval(interval: Option<u64>) -> String {
    match interval {
        None | Some(0) => "manual".to_string(),
        Some(s) if s % 3600 == 0 => format!("every {} h", s / 3600),
        Some(s) if s % 60 == 0 => format!("every {} min", s / 60),
        Some(s) => format!("every {} s", s),
    }
}

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_global_context();
    let query = create_state(ctx.page_size.get_untracked());
    let loader = ListLoader::<Task>::new();

    loader.load_on_change(query, |q| async move { api::fetch_tasks(q.page).await });

    let retry = Callback::new(move |_| {
        let page = query.get_untracked().page;
        loader.load(async move { api::fetch_tasks(page).await });
    });
    let on_page_change = page_change_callback(query);

    view! {
        <PageFrame page_id="sys_task--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Tasks"</h1>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        page=Signal::derive(move || query.get().page)
                        total_count=Signal::derive(move || loader.total_count())
                        on_change=on_page_change
                    />
                    <button class="button button--secondary" on:click=move |_| retry.run(())>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=Signal::derive(move || loader.error()) on_retry=retry />
                <LoadingIndicator when=Signal::derive(move || loader.is_loading()) />
                <Show when=move || loader.status() == ListStatus::Empty>
                    <EmptyState message="No tasks are registered." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>"Task"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=260.0>"Description"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Schedule"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Last run"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Finished"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || loader.rows() key=|t| t.id.clone() let:task>
                            {
                                let last_run = task.last_run.clone();
                                let finished = format_optional(last_run.as_ref().and_then(|r| r.updated_at.as_ref()));
                                view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <A href=AppRoute::Task { id: task.id.clone() }.to_path()>
                                                {task.name.clone()}
                                            </A>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{task.description.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_interval(task.interval)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        {match last_run {
                                            Some(run) => view! { <JobStatusBadge status=run.status /> }.into_any(),
                                            None => view! { <span class="text-muted">"never"</span> }.into_any(),
                                        }}
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {finished}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
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
    fn test_format_interval() {
        assert_eq!(format_interval(None), "manual");
        assert_eq!(format_interval(Some(0)), "manual");
        assert_eq!(format_interval(Some(7200)), "every 2 h");
        assert_eq!(format_interval(Some(300)), "every 5 min");
        assert_eq!(format_interval(Some(45)), "every 45 s");
    }
}
