//! Fetch lifecycle handlers
//!
//! Every issued fetch carries a fresh [`RequestToken`]. A result is applied
//! only when its token is still the latest one; earlier requests that resolve
//! late are dropped so the last *issued* request always wins.

use jokes_client::FetchError;
use jokes_core::prelude::*;
use jokes_core::{Joke, RequestToken, FETCH_FAILED_MESSAGE};

use crate::state::{AppState, ViewState};

use super::{UpdateAction, UpdateResult};

/// Enter the loading state and ask the event loop to run the request
pub fn handle_fetch_joke(state: &mut AppState) -> UpdateResult {
    let token = state.begin_fetch();
    debug!(%token, in_flight = state.in_flight, "Fetching joke");
    UpdateResult::action(UpdateAction::FetchJoke { token })
}

pub fn handle_joke_fetched(state: &mut AppState, token: RequestToken, joke: Joke) -> UpdateResult {
    state.record_response();

    if discard_if_stale(state, token) {
        return UpdateResult::none();
    }

    debug!(%token, "Joke loaded");
    state.joke = Some(joke.clone());
    state.view = ViewState::Loaded(joke);
    state.results_applied += 1;
    state.quit_if_settled();
    UpdateResult::none()
}

pub fn handle_joke_fetch_failed(
    state: &mut AppState,
    token: RequestToken,
    error: FetchError,
) -> UpdateResult {
    state.record_response();

    if discard_if_stale(state, token) {
        return UpdateResult::none();
    }

    // The cause stays in the log; the view only ever shows the fixed message
    debug!(%token, kind = error.kind(), "Showing fetch failure: {}", error);
    state.view = ViewState::Failed(FETCH_FAILED_MESSAGE.to_string());
    state.results_applied += 1;
    state.quit_if_settled();
    UpdateResult::none()
}

fn discard_if_stale(state: &mut AppState, token: RequestToken) -> bool {
    if state.is_current(token) {
        return false;
    }

    debug!(
        %token,
        latest = %state.latest_token,
        "Discarding stale response"
    );
    state.stale_discarded += 1;
    state.last_discarded = Some(token);
    true
}
