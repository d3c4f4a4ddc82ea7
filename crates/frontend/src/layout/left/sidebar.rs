//! Sidebar navigation grouped by area of the console.

use crate::routes::app_route::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(AppRoute, &'static str)>, // (route, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Governance",
            items: vec![
                (AppRoute::Overview, "home"),
                (AppRoute::Compliance, "shield-check"),
                (AppRoute::Controls, "list-checks"),
            ],
        },
        MenuGroup {
            label: "Infrastructure",
            items: vec![
                (AppRoute::Integrations, "plug"),
                (AppRoute::Tasks, "clock"),
            ],
        },
        MenuGroup {
            label: "Workspace",
            items: vec![
                (AppRoute::Widgets, "layout-dashboard"),
                (AppRoute::Queries, "database"),
                (AppRoute::Views, "eye"),
                (AppRoute::Migration, "download"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let active_section = Memo::new(move |_| AppRoute::parse(&location.pathname.get()).section());

    view! {
        <nav class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(route, icon_name)| {
                            let href = route.to_path();
                            let label = route.title();
                            let route = StoredValue::new(route);
                            view! {
                                <A href=href>
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || {
                                            route.with_value(|r| active_section.get() == *r)
                                        }
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
