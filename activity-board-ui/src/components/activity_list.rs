//! Activity List Component
//!
//! Activity cards with capacity and participant rosters. The whole list is
//! redrawn from the board view on every load; each removal button is created
//! with its row and captures the participant it removes.

use activity_board::{ActivityCard, BoardStatus, RemovalTarget, Roster};
use leptos::*;

use activity_board::render::{LOADING_TEXT, LOAD_ERROR_TEXT, NO_PARTICIPANTS};

use crate::state::{BoardHandle, BoardState};

/// Activity list region
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");

    view! {
        <div id="activities-list">
            {move || match state.board.get() {
                BoardStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                BoardStatus::Failed => view! { <p>{LOAD_ERROR_TEXT}</p> }.into_view(),
                BoardStatus::Ready(board) => board
                    .cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let ActivityCard {
        name,
        description,
        schedule,
        capacity,
        roster,
    } = card;

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p class="schedule"><strong>"Schedule:"</strong>" "{schedule}</p>
            <p class="capacity"><strong>"Capacity:"</strong>" "{capacity}</p>
            <div class="participants-section">
                <strong>"Participants:"</strong>
                <ul class="participants-list">
                    {match roster {
                        Roster::Empty => view! {
                            <li class="no-participants">{NO_PARTICIPANTS}</li>
                        }.into_view(),
                        Roster::Participants(targets) => targets
                            .into_iter()
                            .map(|target| view! { <ParticipantRow target=target /> })
                            .collect_view(),
                    }}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(target: RemovalTarget) -> impl IntoView {
    let state = use_context::<BoardState>().expect("BoardState not found");
    let board = use_context::<BoardHandle>().expect("Board controller not found");

    let email = target.email.clone();
    let data_activity = target.activity.clone();
    let data_email = target.email.clone();

    let on_remove = move |_| {
        let board = board.clone();
        let target = target.clone();
        spawn_local(async move {
            board.remove(target).await;
        });
    };

    view! {
        <li>
            <span class="participant-email">{email}</span>
            <button
                class="delete-btn"
                data-activity=data_activity
                data-email=data_email
                title="Remove participant"
                disabled=move || state.busy()
                on:click=on_remove
            >
                "🗑️"
            </button>
        </li>
    }
}
