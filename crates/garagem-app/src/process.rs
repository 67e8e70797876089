//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use garagem_api::VehicleApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call. Returns the number of
/// actions dispatched; each one will report back with exactly one
/// [`Message::is_action_result`] message on `msg_tx`.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &A,
) -> usize
where
    A: VehicleApi + Clone + Send + Sync + 'static,
{
    let mut dispatched = 0;
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api);
            dispatched += 1;
        }

        // Continue with follow-up message
        msg = result.message;
    }
    dispatched
}
