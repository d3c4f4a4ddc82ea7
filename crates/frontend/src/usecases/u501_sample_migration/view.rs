use super::api;
use crate::layout::notifications::use_notifications;
use crate::shared::components::progress_panel::PollProgressPanel;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::polling::PollController;
use contracts::shared::polling::{JobProgress, PollPolicy, PollState};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_sample_migration::SampleMigration;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

fn start_polling(poll: PollController) {
    poll.start(|| async { api::fetch_status().await.map(JobProgress::from) });
}

#[component]
pub fn SampleMigrationPage() -> impl IntoView {
    let notifications = use_notifications();
    let poll = PollController::new(PollPolicy::long_running());
    let starting = RwSignal::new(false);

    // A migration started earlier, possibly from another tab, is picked up
    // on load instead of waiting for the user to start one.
    spawn_local(async move {
        match api::fetch_status().await {
            Ok(status) => {
                let progress = JobProgress::from(status);
                let status = progress.status.clone();
                match PollState::settled(progress) {
                    Some(state) => {
                        poll.state.try_set(Some(state));
                    }
                    None => {
                        log::info!("sample migration is {}, resuming status polling", status.as_str());
                        start_polling(poll);
                    }
                }
            }
            Err(e) => log::warn!("failed to read migration status: {}", e),
        }
    });

    let on_start = move |_| {
        starting.set(true);
        spawn_local(async move {
            let result = api::start_sample_sync().await;
            starting.try_set(false);
            match result {
                Ok(()) => {
                    notifications.success("Sample data migration started");
                    start_polling(poll);
                }
                Err(e) => notifications.error("start sample data migration", &e),
            }
        });
    };

    view! {
        <PageFrame page_id="u501_sample_migration--usecase" category=PageCategory::Usecase>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{SampleMigration::display_name()}</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || starting.get() || poll.is_active())
                        on_click=on_start
                    >
                        {icon("download")}
                        "Load sample data"
                    </Button>
                </div>
            </div>
            <div class="page__content" data-usecase=SampleMigration::full_name()>
                <p class="page__description">{SampleMigration::description()}</p>
                <p class="page__hint">
                    "The migration takes several minutes. Status is refreshed every two minutes."
                </p>
                <PollProgressPanel state=poll.state title="Migration status" />
            </div>
        </PageFrame>
    }
}
