use leptos::*;
use crate::filter::{FieldFilter, SchoolFilters, ALL_OPTION};

fn state_filter(filters: &SchoolFilters) -> &FieldFilter {
    &filters.state
}

fn city_filter(filters: &SchoolFilters) -> &FieldFilter {
    &filters.city
}

/// Search box plus the state, city and maximum-fee filters.
#[component]
pub fn SearchFilters(
    search_term: RwSignal<String>,
    filters: RwSignal<SchoolFilters>,
    #[prop(into)] states: Signal<Vec<String>>,
    #[prop(into)] cities: Signal<Vec<String>>,
) -> impl IntoView {
    // Selection is carried by each option, so a rebuilt option list keeps showing the active filter.
    let options = move |values: Vec<String>, current: fn(&SchoolFilters) -> &FieldFilter| {
        values
            .into_iter()
            .map(|value| {
                let option_value = value.clone();
                view! {
                    <option
                        value=value.clone()
                        prop:selected=move || filters.with(|f| current(f).option_value() == option_value)
                    >
                        { value }
                    </option>
                }
            })
            .collect::<Vec<_>>()
    };
    let any_selected = move |current: fn(&SchoolFilters) -> &FieldFilter| {
        move || filters.with(|f| *current(f) == FieldFilter::Any)
    };

    view! {
        <div class="search-filters">
            <div class="search">
                <span class="search-icon">{ "🔍" }</span>
                <input
                    type="text"
                    placeholder="Search schools..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| search_term.set(event_target_value(&ev))
                />
            </div>
            <div class="filters">
                <select
                    name="state"
                    on:change=move |ev| {
                        let state = FieldFilter::from_option_value(&event_target_value(&ev));
                        filters.update(|f| f.state = state);
                    }
                >
                    <option value=ALL_OPTION prop:selected=any_selected(state_filter)>{ "All States" }</option>
                    {move || options(states.get(), state_filter)}
                </select>
                <select
                    name="city"
                    on:change=move |ev| {
                        let city = FieldFilter::from_option_value(&event_target_value(&ev));
                        filters.update(|f| f.city = city);
                    }
                >
                    <option value=ALL_OPTION prop:selected=any_selected(city_filter)>{ "All Cities" }</option>
                    {move || options(cities.get(), city_filter)}
                </select>
                <input
                    type="number"
                    name="fees"
                    placeholder="Max fees"
                    prop:value=move || filters.with(|f| f.fees.clone())
                    on:input=move |ev| {
                        let fees = event_target_value(&ev);
                        filters.update(|f| f.fees = fees);
                    }
                />
            </div>
        </div>
    }
}
