//! Background jobs polled from the UI thread.
//!
//! A job runs its future on a dedicated thread with a current-thread tokio
//! runtime and reports the result over a channel. The owner polls the job
//! each frame. Cancelling (or dropping) the job fires its cancellation
//! token and drops the receiver, so a result that arrives afterwards is
//! discarded.

use anyhow::{anyhow, Result};
use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tokio::runtime::Builder;
use tokio_util::sync::CancellationToken;

pub struct AsyncJob<T> {
    receiver: Option<Receiver<Result<T>>>,
    cancel_token: CancellationToken,
}

impl<T> AsyncJob<T> {
    pub fn new(receiver: Receiver<Result<T>>, cancel_token: CancellationToken) -> Self {
        Self {
            receiver: Some(receiver),
            cancel_token,
        }
    }

    /// Spawn `builder`'s future on a worker thread.
    ///
    /// The builder receives a child of the job's cancellation token; the
    /// future should stop early once it is cancelled.
    pub fn spawn<FutBuilder, Fut>(builder: FutBuilder) -> Self
    where
        T: Send + 'static,
        FutBuilder: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + 'static,
    {
        let cancel_token = CancellationToken::new();
        let worker_token = cancel_token.child_token();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder(worker_token)),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            // The receiver is gone if the job was cancelled
            let _ = tx.send(result);
        });
        Self::new(rx, cancel_token)
    }

    /// Poll the job for completion.
    /// Returns Some(result) once, when the job has completed.
    pub fn poll(&mut self) -> Option<Result<T>> {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(res) => {
                    self.receiver = None;
                    return Some(res);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.receiver = None;
                    return Some(Err(anyhow!("Worker task disconnected")));
                }
            }
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }

    /// Stop the job. Any result it produces later is dropped.
    pub fn cancel(&mut self) {
        self.cancel_token.cancel();
        self.receiver = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

impl<T> Drop for AsyncJob<T> {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
