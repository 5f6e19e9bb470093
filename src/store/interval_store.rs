use {
    crate::{
        config::DF,
        data::LimitsSnapshot,
        domain::{FieldEdit, IntervalError, Period, PeriodField, PeriodId, ValidationError},
        store::{
            ChangeOrigin, FieldErrors, IntervalCommand, Relocation,
            reorder::{relocate, repositioned_index},
            validate_start_date,
        },
        utils::Clock,
    },
    chrono::NaiveDate,
    std::{
        collections::{HashMap, VecDeque},
        sync::Arc,
    },
};

/// Ordered sequence of periods plus the per-field validation surface.
///
/// All mutations funnel through here. User commands queue up in `pending` and
/// are processed one at a time; a start-date edit may queue a single
/// [`Relocation`], which is applied before the next command is looked at.
#[derive(Debug)]
pub struct IntervalStore {
    periods: Vec<Period>,
    errors: HashMap<PeriodId, FieldErrors>,
    ready: bool,
    pending: VecDeque<IntervalCommand>,
    relocations: VecDeque<Relocation>,
    revision: u64,
    last_change: Option<ChangeOrigin>,
    clock: Arc<dyn Clock>,
}

impl IntervalStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            periods: Vec::new(),
            errors: HashMap::new(),
            ready: false,
            pending: VecDeque::new(),
            relocations: VecDeque::new(),
            revision: 0,
            last_change: None,
            clock,
        }
    }

    // --- Read side ---

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// False until the bootstrap snapshot has been loaded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Bumped on every mutation, user or programmatic.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_change(&self) -> Option<ChangeOrigin> {
        self.last_change
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn field_errors(&self, index: usize) -> FieldErrors {
        self.periods
            .get(index)
            .and_then(|p| self.errors.get(&p.id))
            .copied()
            .unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty())
    }

    pub fn snapshot(&self) -> LimitsSnapshot {
        LimitsSnapshot::from_periods(&self.periods)
    }

    // --- Command queue ---

    pub fn dispatch(&mut self, cmd: IntervalCommand) {
        self.pending.push_back(cmd);
    }

    /// Drain queued commands in order. Each one fully settles (including any
    /// relocation it caused) before the next is applied. Rejected commands are
    /// logged and returned; they never stop the queue.
    pub fn process_pending(&mut self) -> Vec<IntervalError> {
        let mut rejected = Vec::new();
        while let Some(cmd) = self.pending.pop_front() {
            if DF.log_store_commands {
                log::info!("store command: {:?}", cmd);
            }
            if let Err(e) = self.apply(cmd) {
                log::warn!("interval command rejected: {}", e);
                rejected.push(e);
            }
        }
        rejected
    }

    pub fn apply(&mut self, cmd: IntervalCommand) -> Result<(), IntervalError> {
        match cmd {
            IntervalCommand::Load(periods) => {
                self.load(periods);
                Ok(())
            }
            IntervalCommand::Append => self.append(),
            IntervalCommand::Remove(index) => {
                self.remove(index)?;
                Ok(())
            }
            IntervalCommand::Edit { index, edit } => self.edit_field(index, edit),
        }
    }

    // --- Operations ---

    /// Replace everything with a freshly fetched snapshot. Ordering is trusted.
    pub fn load(&mut self, initial: Vec<Period>) {
        self.periods = initial;
        self.errors.clear();
        self.relocations.clear();
        self.ready = true;
        self.touch(ChangeOrigin::User);
    }

    /// Add a period after the last one, copying its bounds and starting today.
    pub fn append(&mut self) -> Result<(), IntervalError> {
        self.ensure_ready()?;
        let last = self.periods.last().ok_or(IntervalError::EmptyState)?;
        let period = Period::seeded_from(last, self.clock.today());
        self.periods.push(period);
        self.touch(ChangeOrigin::User);

        // Only moves when the snapshot held future-dated periods.
        self.queue_reposition(self.periods.len() - 1);
        self.settle();
        self.revalidate_start_dates();
        Ok(())
    }

    /// Returns whether anything was removed. Out-of-range indices and the final
    /// remaining period are left alone.
    pub fn remove(&mut self, index: usize) -> Result<bool, IntervalError> {
        self.ensure_ready()?;
        if index >= self.periods.len() {
            log::debug!(
                "remove({}) ignored: only {} periods",
                index,
                self.periods.len()
            );
            return Ok(false);
        }
        if self.periods.len() == 1 {
            log::debug!("remove({}) ignored: last remaining period", index);
            return Ok(false);
        }
        let removed = self.periods.remove(index);
        self.errors.remove(&removed.id);
        self.revalidate_start_dates();
        self.touch(ChangeOrigin::User);
        Ok(true)
    }

    pub fn edit_field(&mut self, index: usize, edit: FieldEdit) -> Result<(), IntervalError> {
        self.ensure_ready()?;
        let len = self.periods.len();
        if index >= len {
            return Err(IntervalError::IndexOutOfRange { index, len });
        }

        let field = edit.field();
        let result = match edit {
            FieldEdit::LowerLimit(text) => self.periods[index].lower_limit.set_raw(text),
            FieldEdit::UpperLimit(text) => self.periods[index].upper_limit.set_raw(text),
            FieldEdit::StartDate(date) => {
                // Provisional: re-judged once the period has settled.
                let verdict = self.validate_start_date(index, date);
                if verdict.is_err() && DF.log_reorder {
                    log::info!("start date {} out of order at row {}, repairing", date, index);
                }
                self.periods[index].start_date = date;
                verdict
            }
        };

        let id = self.periods[index].id;
        self.errors.entry(id).or_default().set(field, result);
        self.touch(ChangeOrigin::User);

        if field == PeriodField::StartDate {
            self.queue_reposition(index);
            self.settle();
            self.revalidate_start_dates();
        } else if self.periods[index].is_inverted() {
            log::debug!("period {} has upper limit below lower limit", self.periods[index]);
        }
        Ok(())
    }

    pub fn validate_start_date(
        &self,
        index: usize,
        candidate: NaiveDate,
    ) -> Result<(), ValidationError> {
        validate_start_date(&self.periods, index, candidate)
    }

    // --- Internals ---

    fn ensure_ready(&self) -> Result<(), IntervalError> {
        if self.ready {
            Ok(())
        } else {
            Err(IntervalError::NotReady)
        }
    }

    fn touch(&mut self, origin: ChangeOrigin) {
        self.revision += 1;
        self.last_change = Some(origin);
    }

    fn queue_reposition(&mut self, index: usize) {
        if let Some(to) = repositioned_index(&self.periods, index) {
            if to != index {
                self.relocations.push_back(Relocation { from: index, to });
            }
        }
    }

    /// Apply programmatic relocations. These only move elements: no validation,
    /// no reorder scan, so an edit can never cascade into further moves.
    fn settle(&mut self) {
        while let Some(Relocation { from, to }) = self.relocations.pop_front() {
            if DF.log_reorder {
                log::info!("reorder: moving period {} -> {}", from, to);
            }
            relocate(&mut self.periods, from, to);
            self.touch(ChangeOrigin::Programmatic);
        }
    }

    /// Re-judge every start-date message against the current positions.
    /// Only periods that already carry an entry are looked at.
    fn revalidate_start_dates(&mut self) {
        for (index, period) in self.periods.iter().enumerate() {
            if let Some(errors) = self.errors.get_mut(&period.id) {
                let verdict = validate_start_date(&self.periods, index, period.start_date);
                errors.set(PeriodField::StartDate, verdict);
            }
        }
    }
}
