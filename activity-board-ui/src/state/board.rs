//! Board State
//!
//! Reactive state behind the page, written by the controller through
//! [`BoardSurface`].

use activity_board::{
    render, Activity, BoardController, BoardStatus, BoardSurface, Message, MessageSlot,
    MutationPhase, SelectOption,
};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::rc::Rc;

use crate::api::{HttpActivityApi, WindowConfirm};

/// Controller wired to the browser seams
pub type Board = BoardController<HttpActivityApi, BoardState, WindowConfirm>;

/// Shared handle to the controller, provided as context
pub type BoardHandle = Rc<Board>;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Activity region: loading, rendered board or load error
    pub board: RwSignal<BoardStatus>,
    /// Transient message area
    pub message: RwSignal<MessageSlot>,
    /// Signup form email field
    pub email: RwSignal<String>,
    /// Signup form selected activity
    pub activity: RwSignal<String>,
    /// Phase of the mutation in flight, if any
    pub phase: RwSignal<MutationPhase>,
    message_timeout_ms: u32,
}

impl BoardState {
    pub fn new(message_timeout_ms: u32) -> Self {
        Self {
            board: create_rw_signal(BoardStatus::Loading),
            message: create_rw_signal(MessageSlot::default()),
            email: create_rw_signal(String::new()),
            activity: create_rw_signal(String::new()),
            phase: create_rw_signal(MutationPhase::Idle),
            message_timeout_ms,
        }
    }

    /// True while a signup or removal is in flight
    pub fn busy(&self) -> bool {
        !self.phase.get().is_idle()
    }

    /// Dropdown options of the current board; placeholder only until a load succeeds
    pub fn options(&self) -> Vec<SelectOption> {
        self.board.with(|status| {
            status
                .view()
                .map(|view| view.options.clone())
                .unwrap_or_else(|| render(&[]).options)
        })
    }
}

impl BoardSurface for BoardState {
    fn show_activities(&self, activities: Vec<Activity>) {
        let view = render(&activities);

        // A selection the new dropdown no longer offers would be submitted unseen
        let stale = self.activity.with_untracked(|selected| !view.has_option(selected));
        if stale {
            self.activity.set(String::new());
        }

        self.board.set(BoardStatus::Ready(view));
    }

    fn show_load_error(&self) {
        self.board.set(BoardStatus::Failed);
    }

    fn show_message(&self, message: Message) {
        let mut ticket = None;
        self.message.update(|slot| ticket = Some(slot.show(message)));

        if let Some(ticket) = ticket {
            let slot = self.message;
            Timeout::new(self.message_timeout_ms, move || {
                slot.update(|s| {
                    s.expire(ticket);
                });
            })
            .forget();
        }
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }

    fn set_phase(&self, phase: MutationPhase) {
        self.phase.set(phase);
    }
}
