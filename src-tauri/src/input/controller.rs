//! Routes search-box events either straight to a search or through the debouncer.

use super::Debouncer;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Anything that can run a search for raw search-box text.
#[async_trait]
pub trait SearchTarget: Send + Sync {
    /// Run a search. Blank text must be ignored without fetching.
    async fn search(&self, raw: &str);
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "key", rename_all = "snake_case")]
pub enum InputEvent {
    /// Search button clicked.
    Submit,
    /// Key released in the search box.
    Key(String),
}

impl InputEvent {
    fn is_immediate(&self) -> bool {
        match self {
            InputEvent::Submit => true,
            InputEvent::Key(key) => key == "Enter",
        }
    }
}

pub struct InputController {
    target: Arc<dyn SearchTarget>,
    debouncer: Debouncer,
}

impl InputController {
    pub fn new(target: Arc<dyn SearchTarget>, delay: Duration) -> Self {
        Self {
            target,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Handle one event carrying the current search-box text. Immediate
    /// events run the search before returning; keystrokes only (re)arm the timer.
    pub async fn handle(&self, event: InputEvent, raw: &str) {
        if event.is_immediate() {
            self.debouncer.cancel();
            self.target.search(raw).await;
        } else {
            debug!(delay_ms = self.debouncer.delay().as_millis() as u64, "debouncing keystroke");
            let target = self.target.clone();
            let raw = raw.to_string();
            self.debouncer.schedule(async move {
                target.search(&raw).await;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SearchTarget for Recorder {
        async fn search(&self, raw: &str) {
            self.calls.lock().await.push(raw.to_string());
        }
    }

    fn controller() -> (Arc<Recorder>, InputController) {
        let recorder = Arc::new(Recorder::default());
        let controller = InputController::new(recorder.clone(), Duration::from_millis(500));
        (recorder, controller)
    }

    #[test]
    fn events_deserialize_from_webview_payloads() {
        let submit: InputEvent = serde_json::from_str(r#"{"type":"submit"}"#).unwrap();
        assert_eq!(submit, InputEvent::Submit);

        let key: InputEvent = serde_json::from_str(r#"{"type":"key","key":"Enter"}"#).unwrap();
        assert_eq!(key, InputEvent::Key("Enter".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn enter_searches_immediately() {
        let (recorder, controller) = controller();
        controller.handle(InputEvent::Key("Enter".into()), "japan").await;
        assert_eq!(*recorder.calls.lock().await, vec!["japan".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn keystrokes_wait_for_quiet_period() {
        let (recorder, controller) = controller();
        for text in ["j", "ja", "jap"] {
            controller.handle(InputEvent::Key(text.chars().last().unwrap().to_string()), text).await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(recorder.calls.lock().await.is_empty());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*recorder.calls.lock().await, vec!["jap".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_cancels_pending_keystroke() {
        let (recorder, controller) = controller();
        controller.handle(InputEvent::Key("n".into()), "chin").await;
        controller.handle(InputEvent::Submit, "china").await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(*recorder.calls.lock().await, vec!["china".to_string()]);
    }
}
