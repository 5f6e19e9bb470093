use {
    crate::{
        config::DF,
        domain::IntervalError,
        series::{DerivedSeries, build_series},
        store::IntervalStore,
    },
    chrono::NaiveDate,
};

/// Memoizes the derived series on `(store revision, today)`.
#[derive(Debug, Default)]
pub struct SeriesCache {
    key: Option<(u64, NaiveDate)>,
    series: Option<DerivedSeries>,
    rebuilds: usize,
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(&mut self, store: &IntervalStore) -> Result<&DerivedSeries, IntervalError> {
        let key = (store.revision(), store.clock().today());
        let fresh = self.key == Some(key) && self.series.is_some();
        if !fresh {
            let series = crate::trace_time!("Rebuild derived series", 500, {
                build_series(store.periods(), store.clock())
            })?;
            if DF.log_series_cache {
                log::info!("series cache rebuilt for revision {}", key.0);
            }
            self.key = Some(key);
            self.rebuilds += 1;
            self.series = Some(series);
        }
        self.series.as_ref().ok_or(IntervalError::EmptyState)
    }

    /// How many times the series was actually recomputed.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn clear(&mut self) {
        self.key = None;
        self.series = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{FieldEdit, Period},
        utils::FixedClock,
    };
    use std::sync::Arc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn rebuilds_only_when_store_changes() {
        let mut store = IntervalStore::new(Arc::new(FixedClock(d(2023, 6, 1))));
        store.load(vec![Period::new(120, 130, d(2023, 1, 1))]);
        let mut cache = SeriesCache::new();

        assert_eq!(cache.get_or_build(&store).unwrap().len(), 2);
        cache.get_or_build(&store).unwrap();
        assert_eq!(cache.rebuilds(), 1);

        store.append().unwrap();
        assert_eq!(cache.get_or_build(&store).unwrap().len(), 3);
        assert_eq!(cache.rebuilds(), 2);

        store
            .edit_field(0, FieldEdit::UpperLimit("135".into()))
            .unwrap();
        let series = cache.get_or_build(&store).unwrap();
        assert_eq!(series.points()[0].upper_limit, 135);
        assert_eq!(cache.rebuilds(), 3);
    }

    #[test]
    fn empty_store_reports_error_and_caches_nothing() {
        let store = IntervalStore::new(Arc::new(FixedClock(d(2023, 6, 1))));
        let mut cache = SeriesCache::new();
        assert!(cache.get_or_build(&store).is_err());
        assert_eq!(cache.rebuilds(), 0);
    }
}
