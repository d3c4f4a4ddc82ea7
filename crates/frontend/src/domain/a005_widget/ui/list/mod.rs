use crate::domain::a005_widget::api;
use crate::layout::global_context::use_global_context;
use crate::layout::notifications::use_notifications;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::{page_change_callback, ListLoader, ListQuery};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a005_widget::aggregate::Widget;
use contracts::shared::api_error::ApiError;
use contracts::shared::list::{ListPage, ListStatus, PageRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Cut one page out of an unpaged response
fn paginate<T>(items: Vec<T>, page: PageRequest) -> ListPage<T> {
    let total_count = items.len() as u64;
    let skip = page.cursor.saturating_sub(1).saturating_mul(page.per_page);
    let skip = usize::try_from(skip).unwrap_or(usize::MAX);
    let take = usize::try_from(page.per_page).unwrap_or(usize::MAX);
    ListPage {
        items: items.into_iter().skip(skip).take(take).collect(),
        total_count,
    }
}

async fn fetch_page(page: PageRequest) -> Result<ListPage<Widget>, ApiError> {
    api::fetch_widgets().await.map(|items| paginate(items, page))
}

fn confirm_delete(title: &str) -> bool {
    window()
        .confirm_with_message(&format!("Delete widget \"{}\"?", title))
        .unwrap_or(false)
}

#[component]
pub fn WidgetList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let query = RwSignal::new(ListQuery {
        page: PageRequest::new(1, ctx.page_size.get_untracked()),
        ..Default::default()
    });
    let loader = ListLoader::<Widget>::new();
    let deleting = RwSignal::new(Option::<String>::None);

    loader.load_on_change(query, |q| fetch_page(q.page));

    let reload = Callback::new(move |_| {
        let page = query.get_untracked().page;
        loader.load(fetch_page(page));
    });
    let on_page_change = page_change_callback(query);

    let delete = move |widget: Widget| {
        if !confirm_delete(&widget.title) {
            return;
        }
        deleting.set(Some(widget.id.clone()));
        spawn_local(async move {
            let result = api::delete_widget(&widget.id).await;
            deleting.try_set(None);
            match result {
                Ok(()) => {
                    notifications.success(format!("Widget \"{}\" deleted", widget.title));
                    reload.run(());
                }
                Err(e) => notifications.error("delete widget", &e),
            }
        });
    };

    view! {
        <PageFrame page_id="a005_widget--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Widgets"</h1>
                </div>
                <div class="page__header-right">
                    <PaginationControls
                        page=Signal::derive(move || query.get().page)
                        total_count=Signal::derive(move || loader.total_count())
                        on_change=on_page_change
                    />
                    <button class="button button--secondary" on:click=move |_| reload.run(())>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=Signal::derive(move || loader.error()) on_retry=reload />
                <LoadingIndicator when=Signal::derive(move || loader.is_loading()) />
                <Show when=move || loader.status() == ListStatus::Empty>
                    <EmptyState message="No widgets yet." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=240.0>"Title"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Type"</TableHeaderCell>
                            <TableHeaderCell min_width=90.0>"Visibility"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Updated"</TableHeaderCell>
                            <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || loader.rows() key=|w| w.id.clone() let:widget>
                            {
                                let id = widget.id.clone();
                                let to_delete = widget.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span title=widget.description.clone()>{widget.title.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{widget.widget_type.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            {if widget.is_public {
                                                view! { <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>"Public"</Badge> }.into_any()
                                            } else {
                                                view! { <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Subtle>"Private"</Badge> }.into_any()
                                            }}
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_optional(widget.updated_at.as_ref())}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                disabled=move || deleting.with(|d| d.as_deref() == Some(id.as_str()))
                                                on:click=move |_| delete(to_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
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
    fn test_paginate_slices_and_keeps_total() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(items.clone(), PageRequest::new(3, 20));
        assert_eq!(page.items, (41..=45).collect::<Vec<_>>());
        assert_eq!(page.total_count, 45);

        let page = paginate(items, PageRequest::new(4, 20));
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_paginate_far_page_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        let page = paginate(items, PageRequest::new(u64::MAX, u64::MAX));
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }
}
