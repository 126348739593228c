// templates/pages/home.rs

use crate::templates::{components::volunteer_list, desktop_layout};
use crate::volunteers::ViewState;
use maud::{html, Markup};

pub fn home_page() -> Markup {
    desktop_layout(
        "Volunteers",
        html! {
            main class="min-h-screen p-8" {
                div class="max-w-6xl mx-auto" {
                    header class="mb-8" {
                        h1 class="text-4xl font-extrabold" { "Volunteers" }
                        p class="text-slate-500 mt-2" { "Everyone helping out, straight from the volunteer API." }
                    }

                    // Swapped once for the settled list on page load.
                    div id="volunteer-list" data-fragment="/volunteers" {
                        (volunteer_list(&ViewState::Loading))
                    }
                }
            }
        },
    )
}
