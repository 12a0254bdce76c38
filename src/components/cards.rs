// =============================================================================
// EduSphere Web - Content Cards
// =============================================================================
// Stateless renderers for the static content tables.
// =============================================================================

use leptos::prelude::*;

use crate::components::common::Card;
use crate::content::{Feature, Step};

/// Feature grid tile: icon, title, subtitle.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <Card class="feature-card">
            <span class="card-icon">{feature.icon}</span>
            <h3 class="card-title">{feature.title}</h3>
            <p>{feature.subtitle}</p>
        </Card>
    }
}

/// "How it works" step tile: icon, title, description.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    view! {
        <Card class="step-card">
            <span class="card-icon">{step.icon}</span>
            <h3 class="card-title">{step.title}</h3>
            <p>{step.description}</p>
        </Card>
    }
}
