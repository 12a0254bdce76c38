// =============================================================================
// EduSphere Web - Home Page (Landing)
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{FeatureCard, Footer, Navbar, SectionTitle, StepCard};
use crate::content::{FEATURES, HOW_IT_WORKS};

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="EduSphere - Learn. Grow. Succeed." />
        <div class="page page-home">
            <Navbar />
            <main class="container">
                <Hero />
                <Features />
                <HowItWorks />
            </main>
            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// Hero Section
// -----------------------------------------------------------------------------

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-text">
                <h1>
                    "Learn. Grow. "
                    <span class="hero-accent">"Succeed."</span>
                </h1>
                <p>
                    "Unlock your potential with expert-led courses, immersive lessons, and \
                     industry-recognized certificates designed to boost your career and \
                     personal growth."
                </p>
                <div class="hero-buttons">
                    <a href="/courses" class="btn btn-secondary">"🎓 Browse Courses"</a>
                    <a href="#" class="btn btn-outline">"👨‍🏫 Become an Instructor"</a>
                </div>
            </div>
            <div class="hero-visual">
                <svg class="hero-image" viewBox="0 0 200 160" role="img" aria-label="Online learning">
                    <rect x="30" y="30" width="140" height="90" rx="8" fill="#dbeafe" />
                    <rect x="42" y="44" width="80" height="8" rx="4" fill="#2563eb" />
                    <rect x="42" y="60" width="116" height="6" rx="3" fill="#93c5fd" />
                    <rect x="42" y="72" width="102" height="6" rx="3" fill="#93c5fd" />
                    <rect x="42" y="84" width="110" height="6" rx="3" fill="#93c5fd" />
                    <circle cx="150" cy="50" r="10" fill="#2563eb" />
                    <rect x="80" y="120" width="40" height="8" rx="2" fill="#1e40af" />
                    <rect x="60" y="128" width="80" height="6" rx="3" fill="#1e3a5f" />
                </svg>
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// Feature Grid
// -----------------------------------------------------------------------------

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="section">
            <SectionTitle title="Why EduSphere?" />
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature=*feature /> })
                    .collect_view()}
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// How It Works
// -----------------------------------------------------------------------------

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section class="section">
            <SectionTitle title="Learning Made Simple" />
            <div class="step-grid">
                {HOW_IT_WORKS
                    .iter()
                    .map(|step| view! { <StepCard step=*step /> })
                    .collect_view()}
            </div>
        </section>
    }
}
