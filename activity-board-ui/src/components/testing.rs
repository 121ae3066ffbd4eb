//! Mounting helpers for browser tests

use activity_board::{Activity, BoardConfig, BoardController};
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::api::{HttpActivityApi, WindowConfirm};
use crate::state::{BoardHandle, BoardState};

/// Mount `f` into a fresh container with board state and controller provided
pub fn mount_with_board<F, N>(f: F) -> (HtmlElement, BoardState)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container: HtmlElement = document()
        .create_element("div")
        .unwrap()
        .unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();

    let mounted = Rc::new(Cell::new(None));
    let slot = mounted.clone();
    mount_to(container.clone(), move || {
        let state = BoardState::new(5000);
        let board: BoardHandle = Rc::new(BoardController::new(
            HttpActivityApi::new(&BoardConfig::default()),
            state,
            WindowConfirm,
        ));
        provide_context(state);
        provide_context(board);
        slot.set(Some(state));
        f()
    });

    let state = mounted.get().expect("board state not mounted");
    (container, state)
}

/// Let pending reactive updates reach the DOM
pub async fn tick() {
    TimeoutFuture::new(0).await;
}

pub fn select_all(container: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

pub fn activity(name: &str, participants: &[&str], max: u32) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{} description", name),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        participants: participants.iter().map(|p| p.to_string()).collect(),
        max_participants: max,
    }
}
