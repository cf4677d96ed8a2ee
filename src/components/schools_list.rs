//! Grid of school cards for the current search. When nothing matches, the
//! grid offers the form for listing a new school instead.
use leptos::*;
use crate::components::{add_school_form::AddSchoolForm, star_rating::StarRating};
use crate::models::school::{NewSchool, School, SchoolId};
use crate::rating::{filled_stars, format_rating};

#[component]
pub fn SchoolsList(
    #[prop(into)] schools: Signal<Vec<School>>,
    on_select: Callback<SchoolId>,
    on_add_school: Callback<NewSchool, Result<(), String>>,
) -> impl IntoView {
    view! {
        <div class="schools-grid">
            {move || {
                let schools = schools.get();
                if schools.is_empty() {
                    view! { <AddSchoolForm on_submit=on_add_school /> }.into_view()
                } else {
                    schools
                        .into_iter()
                        .map(|school| view! { <SchoolCard school=school on_select=on_select /> })
                        .collect::<Vec<_>>()
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SchoolCard(school: School, on_select: Callback<SchoolId>) -> impl IntoView {
    let id = school.id;

    view! {
        <div class="school-card">
            <h2>{ school.name.clone() }</h2>
            <div class="card-rating">
                <StarRating filled=filled_stars(school.avg_rating) />
                <span>{ format_rating(school.avg_rating) }</span>
            </div>
            <p class="location">{ school.location_line() }</p>
            <button class="primary" on:click=move |_| on_select.call(id)>{ "View Details" }</button>
        </div>
    }
}
