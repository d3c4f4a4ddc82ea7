use crate::shared::icons::icon;
use leptos::prelude::*;

/// Group digits by thousands with a narrow no-break space
fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{202f}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Bad,
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or after a failed load
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(optional, into)] tone: Signal<Option<StatTone>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let class = move || match tone.get().unwrap_or(StatTone::Neutral) {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1\u{202f}000");
        assert_eq!(format_count(1234567), "1\u{202f}234\u{202f}567");
    }
}
