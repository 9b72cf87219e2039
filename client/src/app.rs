//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::draw_pad::DrawPad;
use crate::state::pad::PadState;

/// Root application component.
///
/// Provides the pad state context and renders the page chrome around the pad.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let pad = RwSignal::new(PadState::default());
    provide_context(pad);

    view! {
        <Title text="Digit Pad"/>

        <div class="App">
            <h1>"Handwritten Digit Recognition using AI"</h1>
            <h2>"Draw any digit in the box below"</h2>
            <DrawPad/>
        </div>
    }
}
