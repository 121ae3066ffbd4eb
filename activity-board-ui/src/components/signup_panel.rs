//! Signup Panel Component
//!
//! Email field plus activity dropdown. Submission hands the current field
//! values to the controller, which validates, sends and reloads.

use activity_board::SignupForm;
use leptos::*;

use crate::state::{BoardHandle, BoardState};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let board = use_context::<BoardHandle>().expect("Board controller not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            email: state.email.get_untracked(),
            activity: state.activity.get_untracked(),
        };

        let board = board.clone();
        spawn_local(async move {
            board.sign_up(form).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    on:change=move |ev| state.activity.set(event_target_value(&ev))
                    prop:value=move || state.activity.get()
                >
                    {move || {
                        state.options()
                            .into_iter()
                            .map(|opt| {
                                let value = opt.value.clone();
                                view! {
                                    <option
                                        value=opt.value
                                        prop:selected=move || state.activity.with(|a| *a == value)
                                    >
                                        {opt.label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button type="submit" disabled=move || state.busy()>
                {move || if state.busy() { "Working..." } else { "Sign Up" }}
            </button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use activity_board::BoardSurface;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlSelectElement;

    use crate::components::testing::{activity, mount_with_board, tick};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_dropdown_matches_submitted_activity_across_reloads() {
        let (container, state) = mount_with_board(|| view! { <SignupPanel /> });
        let select: HtmlSelectElement = container
            .query_selector("#activity")
            .unwrap()
            .unwrap()
            .unchecked_into();

        let board = vec![activity("Chess Club", &["a@x.com"], 12), activity("Gym Class", &[], 30)];
        state.show_activities(board.clone());
        state.activity.set("Chess Club".to_string());
        tick().await;
        assert_eq!(select.value(), "Chess Club");

        // Reload rebuilds every option; the shown choice is still the one submitted
        state.show_activities(board);
        tick().await;
        assert_eq!(select.value(), "Chess Club");
        assert_eq!(state.activity.get_untracked(), select.value());

        // The selected activity disappears: nothing is shown and nothing would be sent
        state.show_activities(vec![activity("Gym Class", &[], 30)]);
        tick().await;
        assert_eq!(select.value(), "");
        assert_eq!(state.activity.get_untracked(), "");
        assert_eq!(select.length(), 2);
    }
}
