use crate::templates::components::volunteer_card;
use crate::volunteers::ViewState;
use maud::{html, Markup};

/// Exactly one of the three branches is rendered for a given state.
pub fn volunteer_list(state: &ViewState) -> Markup {
    match state {
        ViewState::Loading => html! {
            div class="list-loading p-6 bg-white rounded-lg shadow flex items-center justify-center" {
                "Loading..."
            }
        },
        ViewState::Error(message) => html! {
            div class="list-error p-6 bg-rose-50 text-rose-700 rounded-lg" role="alert" {
                "Error: " (message)
            }
        },
        ViewState::Loaded(records) => html! {
            section class="volunteer-grid grid gap-4 grid-cols-1 sm:grid-cols-2 lg:grid-cols-3" {
                @for v in records {
                    (volunteer_card(v))
                }
            }
        },
    }
}
