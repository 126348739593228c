mod client;
mod fetch_error;
mod models;
mod view;

pub use client::{ApiClient, VolunteerSource};
pub use fetch_error::FetchFailure;
pub use models::VolunteerRecord;
pub use view::{ViewState, VolunteerListView};
