use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::school::NewSchool;

/// Form for listing a school that the search did not find.
/// `on_submit` returns the rejection message when the catalog refuses the input.
#[component]
pub fn AddSchoolForm(on_submit: Callback<NewSchool, Result<(), String>>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (state, set_state) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (fees, set_fees) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = NewSchool {
            name: name.get(),
            state: state.get(),
            city: city.get(),
            fees: fees.get(),
        };

        // Clear while the form is still mounted; a successful add usually unmounts it.
        set_name.set(String::new());
        set_state.set(String::new());
        set_city.set(String::new());
        set_fees.set(String::new());
        set_error.set(None);

        if let Err(message) = on_submit.call(request.clone()) {
            // A rejected add leaves the form in place, so give the input back.
            set_name.set(request.name);
            set_state.set(request.state);
            set_city.set(request.city);
            set_fees.set(request.fees);
            set_error.set(Some(message));
        }
    };

    view! {
        <form class="add-school" on:submit=handle_submit>
            <div class="add-school-title">{ "➕" }<span>{ "Add New School" }</span></div>
            <input type="text" name="schoolName" placeholder="School Name" required
                prop:value=move || name.get()
                on:input=move |e| set_name.set(event_target_value(&e)) />
            <input type="text" name="state" placeholder="State" required
                prop:value=move || state.get()
                on:input=move |e| set_state.set(event_target_value(&e)) />
            <input type="text" name="city" placeholder="City" required
                prop:value=move || city.get()
                on:input=move |e| set_city.set(event_target_value(&e)) />
            <input type="number" name="fees" min="0" placeholder="Yearly Fees" required
                prop:value=move || fees.get()
                on:input=move |e| set_fees.set(event_target_value(&e)) />
            {move || error.get().map(|message| view! { <p class="form-error">{ message }</p> })}
            <button type="submit">{ "Add School" }</button>
        </form>
    }
}
