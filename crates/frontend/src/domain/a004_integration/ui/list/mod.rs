use crate::domain::a004_integration::api;
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::routes::routes::route_param;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::list_loader::{page_change_callback, ListLoader, ListQuery};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a004_integration::aggregate::{Integration, IntegrationState};
use contracts::shared::list::{ListStatus, PageRequest};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

fn state_color(state: &IntegrationState) -> BadgeColor {
    match state {
        IntegrationState::Active => BadgeColor::Success,
        IntegrationState::Inactive => BadgeColor::Warning,
        IntegrationState::Sample => BadgeColor::Informative,
        IntegrationState::Archived | IntegrationState::Unknown => BadgeColor::Subtle,
    }
}

#[component]
pub fn IntegrationList() -> impl IntoView {
    let ctx = use_global_context();
    let integration_type = route_param("integration_type");
    let query = RwSignal::new(ListQuery {
        page: PageRequest::new(1, ctx.page_size.get_untracked()),
        ..Default::default()
    });
    let loader = ListLoader::<Integration>::new();
    let on_page_change = page_change_callback(query);

    let load = move |integration_type: String, page: PageRequest| {
        loader.load(async move { api::fetch_integrations(&integration_type, page).await });
    };

    // another plugin type starts from the first page
    Effect::new(move |prev: Option<String>| {
        let current = integration_type.get();
        if prev.is_some_and(|p| p != current) {
            query.update(|q| q.page.cursor = 1);
        }
        current
    });

    Effect::new(move |_| {
        let page = query.with(|q| q.page);
        load(integration_type.get(), page);
    });

    let retry = Callback::new(move |_| {
        load(integration_type.get_untracked(), query.get_untracked().page)
    });

    view! {
        <PageFrame page_id="a004_integration--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=AppRoute::Integrations.to_path()>
                        {icon("chevron-left")}
                    </A>
                    <h1 class="page__title">{move || integration_type.get()}</h1>
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
                    <EmptyState message="No integrations of this type are connected." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>"Name"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Provider id"</TableHeaderCell>
                            <TableHeaderCell min_width=110.0>"State"</TableHeaderCell>
                            <TableHeaderCell min_width=140.0>"Last check"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || loader.rows() key=|i| i.integration_id.clone() let:integration>
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout truncate=true>{integration.name.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>
                                        <code>{integration.provider_id.clone()}</code>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <Badge appearance=BadgeAppearance::Tint color=state_color(&integration.state)>
                                        {integration.state.display_name()}
                                    </Badge>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_optional(integration.last_check.as_ref())}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </For>
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
