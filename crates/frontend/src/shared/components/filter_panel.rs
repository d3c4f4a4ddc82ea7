use crate::shared::icons::icon;
use contracts::shared::filter_query::{
    Dimension, FilterOperation, FilterQuery, FilterToken, RawFilterToken,
};
use leptos::prelude::*;

/// Collapsible filter panel with a property-filter editor and the active
/// tokens as removable chips.
///
/// Edits are validated before they reach `query`; a rejected token leaves
/// the query untouched and shows the reason under the inputs.
#[component]
pub fn FilterPanel(
    query: RwSignal<FilterQuery>,
    /// Dimensions this page sends as dedicated fields; offered as key hints
    known: &'static [Dimension],
    /// Pagination controls shown in the header row
    #[prop(optional, into)]
    pagination_controls: Option<ViewFn>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let key_input = RwSignal::new(String::new());
    let value_input = RwSignal::new(String::new());
    let (input_error, set_input_error) = signal(Option::<String>::None);

    let datalist_id = format!("filter-keys-{}", known.iter().map(|d| d.key).collect::<Vec<_>>().join("-"));

    let add_token = move || {
        let raw = RawFilterToken {
            property_key: Some(key_input.get_untracked()),
            value: Some(value_input.get_untracked()).filter(|v| !v.is_empty()),
            operator: None,
        };
        match FilterToken::try_from(raw) {
            Ok(token) => {
                query.update(|q| q.push(token));
                value_input.set(String::new());
                set_input_error.set(None);
            }
            Err(e) => set_input_error.set(Some(e.to_string())),
        }
    };

    let active_count = move || query.with(|q| q.tokens.len());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-right")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.as_ref().map(|p| p.run())}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <form
                        class="filter-panel__editor"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            add_token();
                        }
                    >
                        <input
                            class="form__input"
                            placeholder="Property"
                            list=datalist_id.clone()
                            prop:value=move || key_input.get()
                            on:input=move |ev| key_input.set(event_target_value(&ev))
                        />
                        <datalist id=datalist_id>
                            {known.iter().map(|d| view! { <option value=d.key></option> }).collect_view()}
                        </datalist>
                        <span class="filter-panel__operator">"="</span>
                        <input
                            class="form__input"
                            placeholder="Value"
                            prop:value=move || value_input.get()
                            on:input=move |ev| value_input.set(event_target_value(&ev))
                        />
                        <button type="submit" class="button button--secondary">
                            {icon("plus")}
                            "Add"
                        </button>
                        <select
                            class="form__select"
                            on:change=move |ev| {
                                let op = match event_target_value(&ev).as_str() {
                                    "or" => FilterOperation::Or,
                                    _ => FilterOperation::And,
                                };
                                query.update(|q| q.operation = op);
                            }
                            prop:value=move || match query.with(|q| q.operation) {
                                FilterOperation::And => "and",
                                FilterOperation::Or => "or",
                            }
                        >
                            <option value="and">"Match all"</option>
                            <option value="or">"Match any"</option>
                        </select>
                    </form>

                    {move || input_error.get().map(|e| view! {
                        <div class="filter-panel__error">{e}</div>
                    })}

                    <div class="filter-panel__tags">
                        {move || {
                            query
                                .get()
                                .tokens
                                .into_iter()
                                .enumerate()
                                .map(|(index, token)| {
                                    view! {
                                        <FilterTag
                                            label=token.label()
                                            on_remove=Callback::new(move |_| query.update(|q| q.remove(index)))
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=move || { active_count() > 0 }>
                            <button
                                class="button button--ghost"
                                on:click=move |_| query.update(|q| q.clear())
                            >
                                "Clear all"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// FilterTag component - individual filter tag/chip
#[component]
pub fn FilterTag(
    #[prop(into)] label: String,
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
