// Async bootstrap: runs off the UI thread (native) or as a local future (wasm)
// and hands the parsed periods back over a channel.

use {
    crate::{config::DF, data::LimitsSource, domain::Period},
    anyhow::{Context, Result},
    std::sync::mpsc::Sender,
};

/// Fetch the snapshot and turn it into periods.
pub async fn fetch_limits(source: &dyn LimitsSource) -> Result<Vec<Period>> {
    if DF.log_bootstrap {
        log::info!("Fetching limits from {} source...", source.name());
    }
    let snapshot = source
        .fetch_limits()
        .await
        .with_context(|| format!("{} source failed", source.name()))?;
    let periods = snapshot
        .into_periods()
        .context("Snapshot contained invalid periods")?;
    if DF.log_bootstrap {
        log::info!("Fetched {} periods.", periods.len());
    }
    Ok(periods)
}

pub type BootstrapResult = Result<Vec<Period>, String>;

/// Run the fetch and deliver the outcome. If the receiving app is gone the
/// result is dropped on the floor; nothing else is touched.
pub async fn run_bootstrap(source: Box<dyn LimitsSource>, tx: Sender<BootstrapResult>) {
    let outcome = fetch_limits(source.as_ref())
        .await
        .map_err(|e| format!("{:#}", e));
    if tx.send(outcome).is_err() && DF.log_bootstrap {
        log::info!("Bootstrap finished after the app was closed; result discarded.");
    }
}

/// Start the bootstrap in the background.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_bootstrap(source: Box<dyn LimitsSource>, tx: Sender<BootstrapResult>) {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to create bootstrap runtime: {}", e);
                let _ = tx.send(Err(format!("Failed to create runtime: {}", e)));
                return;
            }
        };
        rt.block_on(run_bootstrap(source, tx));
    });
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_bootstrap(source: Box<dyn LimitsSource>, tx: Sender<BootstrapResult>) {
    wasm_bindgen_futures::spawn_local(run_bootstrap(source, tx));
}
