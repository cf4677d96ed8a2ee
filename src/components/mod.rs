pub mod add_school_form;
pub mod detailed_rating;
pub mod progress_bar;
pub mod review_form;
pub mod reviews_list;
pub mod schools_list;
pub mod search_filters;
pub mod star_rating;
