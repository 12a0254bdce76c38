// =============================================================================
// EduSphere Web - Navigation Bar
// =============================================================================
// Top navbar shown on every page: logo, route links driven by the ROUTES
// table, theme toggle. The active route is underlined.
// =============================================================================

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{RouteEntry, ROUTES};
use crate::state::AppState;

/// Single navbar link with active-route highlighting.
#[component]
pub fn NavLink(route: RouteEntry) -> impl IntoView {
    let location = use_location();
    let class = move || {
        if location.pathname.get() == route.href {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <a href=route.href class=class>{route.label}</a>
    }
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let dark_mode = app_state.dark_mode;

    let toggle_theme = {
        let app_state = app_state.clone();
        move |_| app_state.toggle_dark_mode()
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-logo">
                <span class="logo-icon">"🌐"</span>
                <span class="logo-text">"EduSphere"</span>
            </a>

            <div class="navbar-links">
                {ROUTES
                    .iter()
                    .map(|route| view! { <NavLink route=*route /> })
                    .collect_view()}
            </div>

            <button class="btn-icon" on:click=toggle_theme title="Toggle theme">
                {move || if dark_mode.get() { "🌙" } else { "☀️" }}
            </button>
        </nav>
    }
}
