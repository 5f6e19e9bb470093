use {
    crate::{config::DF, data::LimitsSnapshot},
    anyhow::{Context, Result},
};

/// Receives the edited limits when the user saves. Fire and forget.
pub trait SubmitSink {
    fn submit(&self, snapshot: &LimitsSnapshot) -> Result<()>;
}

/// There is no save endpoint; the snapshot is only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&self, snapshot: &LimitsSnapshot) -> Result<()> {
        let json = snapshot.to_json().context("Failed to serialize limits")?;
        if DF.log_submit {
            log::info!("submit {}", json);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        seen: RefCell<Vec<LimitsSnapshot>>,
    }

    impl SubmitSink for RecordingSink {
        fn submit(&self, snapshot: &LimitsSnapshot) -> Result<()> {
            self.seen.borrow_mut().push(snapshot.clone());
            Ok(())
        }
    }

    #[test]
    fn log_sink_accepts_snapshot() {
        assert!(LogSink.submit(&LimitsSnapshot::default()).is_ok());
    }

    #[test]
    fn sinks_are_usable_as_trait_objects() {
        let sink = RecordingSink::default();
        let dyn_sink: &dyn SubmitSink = &sink;
        dyn_sink.submit(&LimitsSnapshot::default()).unwrap();
        assert_eq!(sink.seen.borrow().len(), 1);
    }
}
