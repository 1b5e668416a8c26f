use std::io::Write;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

static FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(150);

/// Stderr spinner shown while a request is in flight.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(FRAME_INTERVAL);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = ticker.tick() => {
                        eprint!("\r{message} {frame} ");
                        let _ = std::io::stderr().flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.finish("✅ ", final_message).await;
    }

    pub async fn error(&mut self, error_message: &str) {
        self.finish("❌", error_message).await;
    }

    async fn finish(&mut self, symbol: &str, text: &str) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }

        eprint!("\r\x1b[K{symbol} {text}\n");
        let _ = std::io::stderr().flush();
    }
}
