//! Message processing: runs update() until no follow-up message remains

use crate::actions::handle_action;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Run a message and its follow-ups through `update`, collecting actions
pub fn run_update(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

/// Process a message through the TEA update loop and dispatch its actions
pub fn process_message(state: &mut AppState, message: Message) {
    for action in run_update(state, message) {
        handle_action(action);
    }
}
