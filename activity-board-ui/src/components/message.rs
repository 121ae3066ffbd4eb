//! Message Component
//!
//! The single transient message area below the signup form.

use leptos::*;

use crate::state::BoardState;

#[component]
pub fn MessageArea() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    let current = move || state.message.with(|slot| slot.current().cloned());

    view! {
        <div
            id="message"
            class=move || match current() {
                Some(msg) => msg.severity.as_class().to_string(),
                None => "hidden".to_string(),
            }
        >
            {move || current().map(|msg| msg.text)}
        </div>
    }
}
