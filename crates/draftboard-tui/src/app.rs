// App command loop.
//
// Owns the backend API handle. Spawns the bootstrap check at start and a
// refresh workflow for every `UserCommand::Refresh`; workflow tasks report
// straight to the TUI through `ui_tx`.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{info, warn};

use draftboard_core::api::DraftApi;
use draftboard_core::protocol::{UiUpdate, UserCommand};
use draftboard_core::workflow;

/// Run the app loop until `Quit` or the command channel closes.
///
/// Workflow tasks still running on exit are aborted.
pub async fn run(
    api: Arc<dyn DraftApi>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
) -> anyhow::Result<()> {
    info!("App loop started");

    let mut tasks = JoinSet::new();

    {
        let api = Arc::clone(&api);
        let ui_tx = ui_tx.clone();
        tasks.spawn(async move {
            workflow::bootstrap(api.as_ref(), &ui_tx).await;
        });
    }

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Refresh) => {
                        info!("Refresh requested");
                        let api = Arc::clone(&api);
                        let ui_tx = ui_tx.clone();
                        tasks.spawn(async move {
                            workflow::refresh(api.as_ref(), &ui_tx).await;
                        });
                    }
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                if let Err(e) = joined {
                    warn!("Workflow task ended abnormally: {e}");
                }
            }
        }
    }

    tasks.shutdown().await;
    info!("App loop exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use draftboard_core::api::{
        ApiError, PLAYERS_PATH, REFRESH_PATH, STATUS_PATH, SUGGESTIONS_PATH,
    };
    use draftboard_core::player::{Player, SuggestionBundle};
    use reqwest::StatusCode;
    use std::sync::Mutex;

    struct RecordingApi {
        ready: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingApi {
        fn new(ready: bool) -> Arc<Self> {
            Arc::new(RecordingApi {
                ready,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn record(&self, endpoint: &'static str) {
            self.calls.lock().unwrap().push(endpoint);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DraftApi for RecordingApi {
        async fn status(&self) -> Result<(), ApiError> {
            self.record(STATUS_PATH);
            if self.ready {
                Ok(())
            } else {
                Err(ApiError::Status {
                    endpoint: STATUS_PATH,
                    status: StatusCode::BAD_GATEWAY,
                })
            }
        }
        async fn refresh(&self) -> Result<(), ApiError> {
            self.record(REFRESH_PATH);
            Ok(())
        }
        async fn players(&self) -> Result<Vec<Player>, ApiError> {
            self.record(PLAYERS_PATH);
            Ok(Vec::new())
        }
        async fn suggestions(&self) -> Result<SuggestionBundle, ApiError> {
            self.record(SUGGESTIONS_PATH);
            Ok(SuggestionBundle::default())
        }
    }

    async fn wait_for_finish(ui_rx: &mut mpsc::Receiver<UiUpdate>) {
        loop {
            match ui_rx.recv().await {
                Some(UiUpdate::RefreshFinished) | None => return,
                Some(_) => {}
            }
        }
    }

    #[tokio::test]
    async fn startup_runs_one_refresh_when_backend_ready() {
        let api = RecordingApi::new(true);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(32);

        let handle = tokio::spawn(run(api.clone(), cmd_rx, ui_tx));
        wait_for_finish(&mut ui_rx).await;
        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();

        assert_eq!(
            api.calls(),
            vec![STATUS_PATH, REFRESH_PATH, PLAYERS_PATH, SUGGESTIONS_PATH]
        );
    }

    #[tokio::test]
    async fn startup_probe_failure_runs_nothing() {
        let api = RecordingApi::new(false);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(32);

        let handle = tokio::spawn(run(api.clone(), cmd_rx, ui_tx));
        // Let the bootstrap task run to completion.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();

        assert_eq!(api.calls(), vec![STATUS_PATH]);
        assert!(ui_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn refresh_command_runs_workflow() {
        let api = RecordingApi::new(false);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, mut ui_rx) = mpsc::channel(32);

        let handle = tokio::spawn(run(api.clone(), cmd_rx, ui_tx));
        cmd_tx.send(UserCommand::Refresh).await.unwrap();
        wait_for_finish(&mut ui_rx).await;
        cmd_tx.send(UserCommand::Quit).await.unwrap();
        handle.await.unwrap().unwrap();

        let calls = api.calls();
        assert!(calls.contains(&STATUS_PATH));
        let workflow_calls: Vec<_> = calls.into_iter().filter(|c| *c != STATUS_PATH).collect();
        assert_eq!(workflow_calls, vec![REFRESH_PATH, PLAYERS_PATH, SUGGESTIONS_PATH]);
    }

    #[tokio::test]
    async fn closed_command_channel_stops_loop() {
        let api = RecordingApi::new(false);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (ui_tx, _ui_rx) = mpsc::channel(32);

        drop(cmd_tx);
        run(api, cmd_rx, ui_tx).await.unwrap();
    }
}
