// =============================================================================
// EduSphere Web - Component Playground
// =============================================================================
// Exercises the two stateful pieces: the shared counter store (two
// independent components over one store) and a URL-synced text field.
// =============================================================================

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Button, ButtonVariant, Card, Footer, Navbar, SectionTitle, TextInput};
use crate::state::AppState;

/// Playground page for the shared state primitives.
#[component]
pub fn DemoPage() -> impl IntoView {
    view! {
        <Title text="Playground - EduSphere" />
        <div class="page page-demo">
            <Navbar />
            <main class="container">
                <SectionTitle title="Component Playground" />
                <div class="demo-panel">
                    <Card title="Shared Counter">
                        <CounterReadout />
                        <CounterControls />
                    </Card>
                    <Card title="URL-Synced Field">
                        <NameField />
                    </Card>
                </div>
            </main>
            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// Counter
// -----------------------------------------------------------------------------

/// Displays the shared count. Holds no state of its own - it tracks the
/// signal mirror fed by the store subscription.
#[component]
fn CounterReadout() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let count = app_state.count;

    view! {
        <div class="counter-value">{move || count.get()}</div>
    }
}

/// Mutates the shared count through the store API.
#[component]
fn CounterControls() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let dec_store = app_state.counter.clone();
    let inc_store = app_state.counter.clone();

    view! {
        <div class="counter-controls">
            <Button
                label="−"
                variant=ButtonVariant::Outline
                on_click=Callback::new(move |_| dec_store.decrement())
            />
            <Button
                label="+"
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| inc_store.increment())
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// URL-Synced Field
// -----------------------------------------------------------------------------

/// Text input bound to the `name` query parameter. Clearing the input
/// removes the key from the URL.
#[component]
fn NameField() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let query = app_state.query.clone();

    let read_query = query.clone();
    let value = Signal::derive(move || read_query.read("name").unwrap_or_default());

    let on_input = Callback::new(move |text: String| {
        if text.is_empty() {
            query.write("name", None);
        } else {
            query.write("name", Some(&text));
        }
    });

    view! {
        <TextInput label="Name" value=value on_input=on_input placeholder="Stored in ?name=" />
        <p class="footer-tagline">
            "The value lives in the URL - reload or share the link and it comes back."
        </p>
    }
}
