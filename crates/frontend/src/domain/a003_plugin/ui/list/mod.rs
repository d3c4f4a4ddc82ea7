use crate::domain::a003_plugin::api;
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::components::list_feedback::{EmptyState, ErrorBanner, LoadingIndicator};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_loader::{page_change_callback, ListLoader, ListQuery};
use crate::shared::page_frame::{PageCategory, PageFrame};
use contracts::domain::a003_plugin::aggregate::Plugin;
use contracts::shared::filter_query::FilterQuery;
use contracts::shared::list::ListStatus;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Badge, BadgeAppearance, BadgeColor, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

fn capability_names(plugin: &Plugin) -> String {
    let caps = &plugin.capabilities;
    [
        (caps.integration, "integration"),
        (caps.discovery, "discovery"),
        (caps.schema, "schema"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| *name)
    .collect::<Vec<_>>()
    .join(", ")
}

#[component]
pub fn PluginList() -> impl IntoView {
    let ctx = use_global_context();
    let query = RwSignal::new(ListQuery::with_filter(
        FilterQuery::new(),
        ctx.page_size.get_untracked(),
    ));
    let loader = ListLoader::<Plugin>::new();

    loader.load_on_change(query, |q| async move { api::fetch_plugins(q.page).await });

    let retry = Callback::new(move |_| {
        let page = query.get_untracked().page;
        loader.load(async move { api::fetch_plugins(page).await });
    });
    let on_page_change = page_change_callback(query);

    view! {
        <PageFrame page_id="a003_plugin--list" category=PageCategory::List>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Integrations"</h1>
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
                    <EmptyState message="No plugins are available." />
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=220.0>"Plugin"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"State"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Integrations"</TableHeaderCell>
                            <TableHeaderCell min_width=100.0>"Tier"</TableHeaderCell>
                            <TableHeaderCell min_width=200.0>"Capabilities"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For each=move || loader.rows() key=|p| p.id.clone() let:plugin>
                            {
                                let plugin_type = plugin.plugin_type.clone();
                                let name = plugin.name.clone();
                                let installed = plugin.is_installed();
                                let enabled = plugin.is_enabled();
                                let counts = format!("{} / {}", plugin.count.active, plugin.count.total);
                                let tier = plugin.tier.clone().unwrap_or_default();
                                let caps = capability_names(&plugin);
                                view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>
                                            <A href=AppRoute::IntegrationType {
                                                integration_type: plugin_type.clone(),
                                            }
                                            .to_path()>{name}</A>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {match (installed, enabled) {
                                                (true, true) => view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Enabled"</Badge>
                                                }.into_any(),
                                                (true, false) => view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Disabled"</Badge>
                                                }.into_any(),
                                                _ => view! {
                                                    <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Subtle>"Not installed"</Badge>
                                                }.into_any(),
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {counts}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{tier}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{caps}</TableCellLayout>
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
    use contracts::domain::a003_plugin::aggregate::PluginCapabilities;

    #[test]
    fn test_capability_names() {
        let mut plugin: Plugin = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "AWS",
            "plugin_type": "aws_cloud_account"
        }))
        .unwrap();
        assert_eq!(capability_names(&plugin), "");
        plugin.capabilities = PluginCapabilities {
            integration: true,
            discovery: false,
            schema: true,
        };
        assert_eq!(capability_names(&plugin), "integration, schema");
    }
}
