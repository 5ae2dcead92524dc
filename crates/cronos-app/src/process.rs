//! Message processing for native hosts

use std::sync::Arc;

use cronos_client::AnalyzeApi;
use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed in the same call; actions are handed to
/// [`handle_action`].
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<A>,
) where
    A: AnalyzeApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(
                action,
                msg_tx.clone(),
                api.clone(),
                &state.settings.downloads.browser,
            );
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::ResultPanel;
    use cronos_client::test_utils::{sample_result, MockAnalyzeApi};
    use cronos_core::Mode;

    #[tokio::test]
    async fn test_key_to_report_round_trip() {
        let api = Arc::new(
            MockAnalyzeApi::new().with_result(sample_result(Mode::Compliance, "FAIL", "r9")),
        );
        let (tx, mut rx) = mpsc::channel(4);
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::Char('1')), &tx, &api);
        process_message(&mut state, Message::Key(InputKey::CharCtrl('s')), &tx, &api);
        assert_eq!(state.result, ResultPanel::Pending);

        let completed = rx.recv().await.unwrap();
        process_message(&mut state, completed, &tx, &api);

        assert!(state.result.is_report());
        assert_eq!(state.last_report_id.as_ref().unwrap().as_str(), "r9");
        assert_eq!(api.requests()[0].mode, Mode::Compliance);
    }
}
