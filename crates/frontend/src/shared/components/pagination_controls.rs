use crate::shared::icons::icon;
use crate::shared::preferences::PAGE_SIZE_OPTIONS;
use contracts::shared::list::PageRequest;
use leptos::prelude::*;

/// Cursor pagination for list pages (1-based cursor)
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<PageRequest>,
    #[prop(into)] total_count: Signal<u64>,
    on_change: Callback<PageRequest>,
) -> impl IntoView {
    let total_pages = move || page.get().total_pages(total_count.get()).max(1);
    let go_to = move |cursor: u64| {
        let current = page.get_untracked();
        on_change.run(PageRequest::new(cursor, current.per_page));
    };
    let at_first = move || page.get().cursor <= 1;
    let at_last = move || page.get().cursor >= total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(page.get_untracked().cursor.saturating_sub(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", page.get().cursor, total_pages(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(page.get_untracked().cursor + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(total_pages())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let per_page = event_target_value(&ev).parse().unwrap_or(20);
                    on_change.run(PageRequest::new(1, per_page));
                }
                prop:value=move || page.get().per_page.to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page.get().per_page == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
