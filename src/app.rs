//! Main application entry point for the school review platform.
//! The page owns the session catalog and all UI state, and hands a catalog
//! handle to the components that search, display and add to it.
use leptos::*;
use leptos::logging::log;
use leptos_meta::*;
use leptos_router::*;
use crate::catalog::Catalog;
use crate::components::{
    detailed_rating::DetailedRating, review_form::ReviewForm, reviews_list::ReviewsList,
    schools_list::SchoolsList, search_filters::SearchFilters,
};
use crate::filter::{distinct_values, reviews_for_school, SchoolField, SchoolFilters, SchoolQuery};
use crate::models::review::{NewReview, Review};
use crate::models::school::{NewSchool, School, SchoolId};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/schoolreview.css" />
        <Title text="School Review Platform" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=SchoolReviewPlatform />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn SchoolReviewPlatform() -> impl IntoView {
    // Every mutation of the catalog goes through this one signal.
    let catalog = create_rw_signal(Catalog::seeded());
    let search_term = create_rw_signal(String::new());
    let filters = create_rw_signal(SchoolFilters::default());
    let (selected_id, set_selected_id) = create_signal(None::<SchoolId>);
    let (show_review_form, set_show_review_form) = create_signal(false);

    let filtered_schools = create_memo(move |_| {
        let query = SchoolQuery {
            search_term: search_term.get(),
            filters: filters.get(),
        };
        catalog.with(|catalog| {
            catalog
                .filtered(&query)
                .into_iter()
                .cloned()
                .collect::<Vec<School>>()
        })
    });
    let states = create_memo(move |_| catalog.with(|c| distinct_values(c.schools(), SchoolField::State)));
    let cities = create_memo(move |_| catalog.with(|c| distinct_values(c.schools(), SchoolField::City)));

    let selected_school = create_memo(move |_| {
        selected_id
            .get()
            .and_then(|id| catalog.with(|c| c.school(id).cloned()))
    });
    let selected_reviews = create_memo(move |_| match selected_id.get() {
        Some(id) => catalog.with(|c| {
            reviews_for_school(c.reviews(), id)
                .into_iter()
                .cloned()
                .collect::<Vec<Review>>()
        }),
        None => Vec::new(),
    });

    let select_school = Callback::new(move |id: SchoolId| {
        log!("[UI] Selected school {}", id);
        set_selected_id.set(Some(id));
        set_show_review_form.set(false);
    });

    let add_school = Callback::new(move |request: NewSchool| -> Result<(), String> {
        match catalog.try_update(|c| c.add_school(request)) {
            Some(Ok(school)) => {
                // Narrow the list to the school that was just added.
                search_term.set(school.name);
                Ok(())
            }
            Some(Err(err)) => Err(err.to_string()),
            None => Err("the catalog is no longer available".to_string()),
        }
    });

    let submit_review = Callback::new(move |review: NewReview| -> Result<(), String> {
        let Some(school_id) = selected_id.get_untracked() else {
            return Err("select a school before writing a review".to_string());
        };
        match catalog.try_update(|c| c.add_review(school_id, review)) {
            Some(Ok(_)) => {
                set_show_review_form.set(false);
                Ok(())
            }
            Some(Err(err)) => Err(err.to_string()),
            None => Err("the catalog is no longer available".to_string()),
        }
    });

    let cancel_review = Callback::new(move |_: ()| set_show_review_form.set(false));

    view! {
        <div class="platform">
            <div class="header">
                <h1>{ "School Review Platform" }</h1>
            </div>

            <SearchFilters search_term=search_term filters=filters states=states cities=cities />

            <SchoolsList schools=filtered_schools on_select=select_school on_add_school=add_school />

            // Selected school details
            {move || selected_school.get().map(|school| {
                let title = format!("Reviews for {}", school.name);
                view! {
                    <div class="school-details">
                        <DetailedRating school=school />
                        <div class="school-reviews">
                            <h2>{ title }</h2>
                            <ReviewsList reviews=selected_reviews />
                            <Show
                                when=move || show_review_form.get()
                                fallback=move || view! {
                                    <button class="primary" on:click=move |_| set_show_review_form.set(true)>
                                        { "Write a Review" }
                                    </button>
                                }
                            >
                                <ReviewForm on_submit=submit_review on_cancel=cancel_review />
                            </Show>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
