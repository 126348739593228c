use crate::volunteers::VolunteerRecord;
use maud::{html, Markup};

pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Emerald,
    Amber,
}

impl BadgeStyle {
    pub fn class(self) -> &'static str {
        match self {
            BadgeStyle::Emerald => "bg-emerald-100 text-emerald-800",
            BadgeStyle::Amber => "bg-amber-100 text-amber-800",
        }
    }
}

/// Status labels with a dedicated badge. Anything else is amber.
const STATUS_BADGES: &[(&str, BadgeStyle)] = &[("Active", BadgeStyle::Emerald)];

pub fn badge_style(status: &str) -> BadgeStyle {
    STATUS_BADGES
        .iter()
        .find(|(label, _)| *label == status)
        .map(|(_, style)| *style)
        .unwrap_or(BadgeStyle::Amber)
}

/// Empty strings count as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn location_line(v: &VolunteerRecord) -> String {
    format!(
        "{}, {}",
        present(&v.city).unwrap_or(PLACEHOLDER),
        present(&v.state).unwrap_or(PLACEHOLDER)
    )
}

pub fn availability_line(v: &VolunteerRecord) -> Option<String> {
    let slots = v.availability();
    if slots.is_empty() {
        None
    } else {
        Some(slots.join(", "))
    }
}

pub fn volunteer_card(v: &VolunteerRecord) -> Markup {
    html! {
        article
            class="volunteer-card animate-on-scroll bg-white p-6 rounded-2xl shadow-sm hover:shadow-md transition"
            data-key=(v.id)
        {
            div class="flex items-start justify-between" {
                div {
                    h3 class="text-lg font-semibold leading-tight" { (v.full_name) }
                    p class="text-sm text-slate-500" { (v.role) }
                }
                div class="text-right" {
                    span class={ "badge inline-block px-3 py-1 rounded-full text-xs font-medium " (badge_style(&v.status).class()) } {
                        (v.status)
                    }
                }
            }

            div class="mt-4 text-sm text-slate-600 space-y-1" {
                div class="flex items-center gap-3" {
                    (icon("M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14c-4.418 0-8 1.79-8 4v1h16v-1c0-2.21-3.582-4-8-4z"))
                    span class="location" { (location_line(v)) }
                }
                div class="flex items-center gap-3" {
                    (icon("M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"))
                    span class="email truncate" { (present(&v.email).unwrap_or("No email")) }
                }
                div class="flex items-center gap-3" {
                    (icon("M3 5h12M9 3v2M9 21v-6M9 15h6"))
                    span class="phone" { (present(&v.phone).unwrap_or("No phone")) }
                }
            }

            @if let Some(slots) = availability_line(v) {
                div class="availability mt-4 text-xs text-slate-500" {
                    "Available: " (slots)
                }
            }
        }
    }
}

fn icon(shape: &str) -> Markup {
    html! {
        svg
            class="w-4 h-4 text-slate-400"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            xmlns="http://www.w3.org/2000/svg"
        {
            path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=(shape) {}
        }
    }
}
