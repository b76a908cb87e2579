use tokio_util::sync::CancellationToken;

#[cfg(target_family = "unix")]
use tokio::signal::unix::SignalKind;

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(target_family = "unix")]
    let second_signal = async {
        let terminate = tokio::signal::unix::signal(SignalKind::terminate());
        let quit = tokio::signal::unix::signal(SignalKind::quit());

        match (terminate, quit) {
            (Ok(mut terminate), Ok(mut quit)) => {
                tokio::select! {
                    _ = terminate.recv() => (),
                    _ = quit.recv() => (),
                }
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(?error, "failed to install signal handler, only listening for ctrl-c");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(target_family = "unix"))]
    let second_signal = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => (),
        () = second_signal => (),
    }

    info!("received shutdown signal");
}

/// Resolves once the server should stop accepting connections
#[derive(Clone)]
pub struct Receiver {
    inner: CancellationToken,
}

impl Receiver {
    /// Receiver that only fires when cancelled through the returned token
    #[must_use]
    pub fn manual() -> (Self, CancellationToken) {
        let token = CancellationToken::new();
        (
            Self {
                inner: token.clone(),
            },
            token,
        )
    }

    pub async fn wait(self) {
        self.inner.cancelled_owned().await;
    }
}

#[must_use]
pub fn shutdown() -> Receiver {
    let (receiver, notifier) = Receiver::manual();

    tokio::spawn(async move {
        shutdown_signal().await;
        notifier.cancel();
    });

    receiver
}
