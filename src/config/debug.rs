//! Debugging feature flags.

pub struct LogFlags {
    /// Every command the interval store processes.
    pub log_store_commands: bool,
    /// Relocations performed to keep periods ordered by start date.
    pub log_reorder: bool,
    /// Bootstrap fetch start / finish / discard.
    pub log_bootstrap: bool,
    /// Series cache hits and rebuilds.
    pub log_series_cache: bool,
    /// Snapshot handed to the submit sink.
    pub log_submit: bool,
    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DF: LogFlags = LogFlags {
    log_store_commands: false,
    log_reorder: true,
    log_bootstrap: true,
    log_series_cache: false,
    log_submit: true,
    log_performance: false,
};
