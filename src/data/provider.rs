use {
    crate::{
        config::{BOOTSTRAP, BootstrapConfig},
        data::LimitsSnapshot,
    },
    anyhow::Result,
    async_trait::async_trait,
    std::time::Duration,
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context, std::path::PathBuf};

// Browser timers are not Send, so the wasm futures are local.
/// Abstract interface for fetching the initial set of limits.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait LimitsSource: Send + Sync {
    /// Human-readable name for logs.
    fn name(&self) -> &'static str;

    async fn fetch_limits(&self) -> Result<LimitsSnapshot>;
}

/// Stand-in for a remote endpoint: resolves with the configured demo rows
/// after an artificial delay.
pub struct SimulatedSource {
    snapshot: LimitsSnapshot,
    delay: Duration,
}

impl SimulatedSource {
    pub fn new(snapshot: LimitsSnapshot, delay: Duration) -> Self {
        Self { snapshot, delay }
    }

    pub fn from_config(config: &BootstrapConfig) -> Result<Self> {
        Ok(Self::new(
            LimitsSnapshot::from_config(config)?,
            Duration::from_millis(config.simulated_delay_ms),
        ))
    }

    pub fn demo() -> Result<Self> {
        Self::from_config(&BOOTSTRAP)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl LimitsSource for SimulatedSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn fetch_limits(&self) -> Result<LimitsSnapshot> {
        #[cfg(not(target_arch = "wasm32"))]
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        #[cfg(target_arch = "wasm32")]
        if !self.delay.is_zero() {
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
        }

        Ok(self.snapshot.clone())
    }
}

/// Reads a snapshot JSON file from disk (`--snapshot`).
#[cfg(not(target_arch = "wasm32"))]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl LimitsSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_limits(&self) -> Result<LimitsSnapshot> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", self.path.display()))?;
        LimitsSnapshot::from_json(&text)
            .with_context(|| format!("Failed to parse snapshot {}", self.path.display()))
    }
}
