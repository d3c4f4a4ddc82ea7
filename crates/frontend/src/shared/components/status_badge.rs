use contracts::enums::severity::Severity;
use contracts::shared::polling::JobStatus;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn job_status_color(status: &JobStatus) -> BadgeColor {
    match status {
        JobStatus::Succeeded => BadgeColor::Success,
        JobStatus::Failed => BadgeColor::Danger,
        JobStatus::InProgress => BadgeColor::Informative,
        JobStatus::Other(_) => BadgeColor::Subtle,
    }
}

fn severity_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Critical => BadgeColor::Danger,
        Severity::High => BadgeColor::Important,
        Severity::Medium => BadgeColor::Warning,
        Severity::Low => BadgeColor::Informative,
        Severity::None => BadgeColor::Subtle,
    }
}

#[component]
pub fn JobStatusBadge(status: JobStatus) -> impl IntoView {
    let color = job_status_color(&status);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.as_str().to_string()}
        </Badge>
    }
}

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Filled color=severity_color(severity)>
            {severity.display_name()}
        </Badge>
    }
}
