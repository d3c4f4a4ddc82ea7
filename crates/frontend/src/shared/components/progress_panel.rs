use crate::shared::components::status_badge::JobStatusBadge;
use crate::shared::icons::icon;
use contracts::shared::polling::{JobProgress, PollState};
use leptos::prelude::*;
use thaw::Spinner;

fn progress_body(progress: &JobProgress) -> AnyView {
    let percentage = progress.percentage.map(|p| p.clamp(0.0, 100.0));
    let message = progress.message.clone();
    view! {
        <div class="progress-panel__body">
            <JobStatusBadge status=progress.status.clone() />
            {percentage.map(|p| view! {
                <div class="progress-bar">
                    <div class="progress-bar__fill" style=format!("width: {:.0}%;", p)></div>
                </div>
                <span class="progress-panel__percent">{format!("{:.0}%", p)}</span>
            })}
            {message.map(|m| view! { <p class="progress-panel__message">{m}</p> })}
        </div>
    }
    .into_any()
}

/// Renders the state of a status poll: progress while running, the final
/// outcome, or the error that stopped polling.
#[component]
pub fn PollProgressPanel(
    #[prop(into)] state: Signal<Option<PollState>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    view! {
        <div class="progress-panel">
            {title.map(|t| view! { <h3 class="section-title">{t}</h3> })}
            {move || match state.get() {
                None => view! { <p class="progress-panel__idle">"Not started"</p> }.into_any(),
                Some(PollState::Waiting) => view! {
                    <div class="progress-panel__body">
                        <Spinner />
                        <span>"Waiting for the first status update"</span>
                    </div>
                }
                .into_any(),
                Some(PollState::Running(p)) => progress_body(&p),
                Some(PollState::Retrying { failures, last_error, last_progress }) => view! {
                    <div>
                        {last_progress.as_ref().map(progress_body)}
                        <div class="warning-box">
                            <span class="warning-box__icon">{icon("alert-triangle")}</span>
                            <span class="warning-box__text">
                                {format!("Status check failed ({}), retrying: {}", failures, last_error.user_message())}
                            </span>
                        </div>
                    </div>
                }
                .into_any(),
                Some(PollState::Succeeded(p)) | Some(PollState::Failed(p)) => progress_body(&p),
                Some(PollState::Aborted(err)) => view! {
                    <div class="warning-box warning-box--error" role="alert">
                        <span class="warning-box__icon">{icon("alert-triangle")}</span>
                        <span class="warning-box__text">
                            {format!("Stopped checking status: {}", err.user_message())}
                        </span>
                    </div>
                }
                .into_any(),
                Some(PollState::Cancelled) => view! { <p class="progress-panel__idle">"Stopped"</p> }.into_any(),
            }}
        </div>
    }
}
