/// One row of the built-in demo snapshot, in wire representation.
pub struct DemoLimit {
    pub lower_limit: &'static str,
    pub upper_limit: &'static str,
    pub start_date: &'static str,
}

pub struct BootstrapConfig {
    /// Artificial latency of the simulated remote fetch.
    pub simulated_delay_ms: u64,
    pub demo_limits: &'static [DemoLimit],
}

pub const BOOTSTRAP: BootstrapConfig = BootstrapConfig {
    simulated_delay_ms: 2000,
    demo_limits: &[
        DemoLimit {
            lower_limit: "138",
            upper_limit: "143",
            start_date: "2023-02-01",
        },
        DemoLimit {
            lower_limit: "120",
            upper_limit: "127",
            start_date: "2023-04-10",
        },
        DemoLimit {
            lower_limit: "130",
            upper_limit: "140",
            start_date: "2023-05-05",
        },
    ],
};
