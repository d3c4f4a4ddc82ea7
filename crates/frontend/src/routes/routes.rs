use crate::domain::a001_benchmark::ui::details::BenchmarkDetails;
use crate::domain::a001_benchmark::ui::list::BenchmarkList;
use crate::domain::a002_control::ui::details::ControlDetails;
use crate::domain::a002_control::ui::list::ControlList;
use crate::domain::a003_plugin::ui::list::PluginList;
use crate::domain::a004_integration::ui::list::IntegrationList;
use crate::domain::a005_widget::ui::list::WidgetList;
use crate::domain::a006_named_query::ui::list::NamedQueryList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::overview::OverviewPage;
use crate::system::tasks::ui::details::TaskDetails;
use crate::system::tasks::ui::list::TaskList;
use crate::usecases::u501_sample_migration::view::SampleMigrationPage;
use contracts::domain::a006_named_query::aggregate::NamedQueryKind;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Every page except login sits behind the session guard inside the shell;
/// unknown paths are guarded as well
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell />
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! {
                <RequireAuth>
                    <NotFoundPage />
                </RequireAuth>
            }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewPage />
                    <Route path=path!("compliance") view=BenchmarkList />
                    <Route path=path!("compliance/:benchmark_id") view=BenchmarkDetails />
                    <Route path=path!("compliance/:benchmark_id/:control_id") view=ControlDetails />
                    <Route path=path!("controls") view=ControlList />
                    <Route path=path!("integrations") view=PluginList />
                    <Route path=path!("integrations/:integration_type") view=IntegrationList />
                    <Route path=path!("tasks") view=TaskList />
                    <Route path=path!("tasks/:id") view=TaskDetails />
                    <Route path=path!("widgets") view=WidgetList />
                    <Route
                        path=path!("queries")
                        view=|| view! { <NamedQueryList kind=NamedQueryKind::Query /> }
                    />
                    <Route
                        path=path!("views")
                        view=|| view! { <NamedQueryList kind=NamedQueryKind::View /> }
                    />
                    <Route path=path!("migration") view=SampleMigrationPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Path parameter of the current route, empty when absent
pub fn route_param(name: &'static str) -> Memo<String> {
    let params = leptos_router::hooks::use_params_map();
    Memo::new(move |_| params.read().get(name).unwrap_or_default())
}
