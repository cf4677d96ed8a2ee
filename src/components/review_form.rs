use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review::NewReview;
use crate::rating::{rating_option_label, MAX_STARS};

#[component]
pub fn ReviewForm(
    on_submit: Callback<NewReview, Result<(), String>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (author, set_author) = create_signal(String::new());
    let (rating, set_rating) = create_signal(String::new());
    let (grade, set_grade) = create_signal(String::new());
    let (division, set_division) = create_signal(String::new());
    let (comment, set_comment) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    // A successful submit unmounts the form, so there is nothing to reset afterwards.
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let review = NewReview {
            author: author.get(),
            grade: grade.get(),
            division: division.get(),
            // An unselected rating reads as 0 and is rejected by the catalog.
            rating: rating.get().parse::<u8>().unwrap_or(0),
            comment: comment.get(),
        };

        set_error.set(None);
        if let Err(message) = on_submit.call(review) {
            set_error.set(Some(message));
        }
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>{ "Submit a Review" }</h3>
            <div class="form-grid">
                <div>
                    <label for="author">{ "Your Name" }</label>
                    <input id="author" name="author" required
                        prop:value=move || author.get()
                        on:input=move |e| set_author.set(event_target_value(&e)) />
                </div>
                <div>
                    <label for="rating">{ "Rating" }</label>
                    <select id="rating" name="rating" required
                        prop:value=move || rating.get()
                        on:change=move |e| set_rating.set(event_target_value(&e))
                    >
                        <option value="">{ "Select a rating" }</option>
                        {(1..=MAX_STARS).map(|stars| view! {
                            <option value=stars.to_string()>{ rating_option_label(stars) }</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
                <div>
                    <label for="grade">{ "Grade" }</label>
                    <input id="grade" name="grade" required
                        prop:value=move || grade.get()
                        on:input=move |e| set_grade.set(event_target_value(&e)) />
                </div>
                <div>
                    <label for="division">{ "Division" }</label>
                    <input id="division" name="division" required
                        prop:value=move || division.get()
                        on:input=move |e| set_division.set(event_target_value(&e)) />
                </div>
            </div>
            <div class="form-comment">
                <label for="comment">{ "Comment" }</label>
                <textarea id="comment" name="comment" required
                    prop:value=move || comment.get()
                    on:input=move |e| set_comment.set(event_target_value(&e))
                />
            </div>
            {move || error.get().map(|message| view! { <p class="form-error">{ message }</p> })}
            <div class="form-actions">
                <button type="submit" class="primary">{ "Submit Review" }</button>
                <button type="button" on:click=move |_| on_cancel.call(())>{ "Cancel" }</button>
            </div>
        </form>
    }
}
