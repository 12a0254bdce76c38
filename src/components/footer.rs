// =============================================================================
// EduSphere Web - Footer Component
// =============================================================================
// Global footer shown on all pages
// =============================================================================

use leptos::prelude::*;

use crate::content::ROUTES;

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Four-column footer: brand, quick links, legal, social.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                // Brand Column
                <div class="footer-brand-col">
                    <a href="/" class="navbar-logo">
                        <span class="logo-icon">"🌐"</span>
                        <span class="logo-text">"EduSphere"</span>
                    </a>
                    <p class="footer-tagline">
                        "Learn. Grow. Succeed. Empower your career with expert-led courses and certificates."
                    </p>
                </div>

                // Quick Links
                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Quick Links"</h5>
                    {ROUTES
                        .iter()
                        .map(|route| view! {
                            <a href=route.href class="footer-link">{route.label}</a>
                        })
                        .collect_view()}
                </div>

                // Legal
                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Legal"</h5>
                    <a href="/privacy-policy" class="footer-link">"Privacy Policy"</a>
                    <a href="/terms-of-service" class="footer-link">"Terms of Service"</a>
                </div>

                // Social
                <div class="footer-link-col">
                    <h5 class="footer-col-title">"Follow Us"</h5>
                    <div class="footer-social-row">
                        <a href="#" aria-label="LinkedIn" class="footer-link">"in"</a>
                        <a href="#" aria-label="Twitter" class="footer-link">"🐦"</a>
                        <a href="#" aria-label="Facebook" class="footer-link">"📘"</a>
                        <a href="#" aria-label="YouTube" class="footer-link">"▶️"</a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} EduSphere. All rights reserved.", current_year())}</p>
            </div>
        </footer>
    }
}

/// Current year from the browser clock.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
