//! Dashboard view state
//!
//! Follows the expense snapshot stream and keeps every derived view of the
//! latest snapshot up to date. Nothing is computed incrementally: each new
//! snapshot or filter change recomputes the whole report.

use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, TryRecvError};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::error::TrackerResult;
use crate::models::{
    CategoryFilter, CycleFilter, Expense, ExpenseCategory, ExpenseFilter, ExpenseId,
};
use crate::reports::{DailyDistribution, DashboardReport};
use crate::storage::{ExpenseSnapshot, Storage};

/// Observer of the expense store for the dashboard and list screens
pub struct DashboardView {
    receiver: Receiver<ExpenseSnapshot>,
    snapshot: Option<ExpenseSnapshot>,
    filter: ExpenseFilter,
    reference_date: NaiveDate,
    report: Option<DashboardReport>,
    disconnected: bool,
}

impl DashboardView {
    pub fn new(receiver: Receiver<ExpenseSnapshot>, reference_date: NaiveDate) -> Self {
        Self {
            receiver,
            snapshot: None,
            filter: ExpenseFilter::default(),
            reference_date,
            report: None,
            disconnected: false,
        }
    }

    /// Subscribe to `storage` and pick up its current snapshot
    pub fn attach(storage: &Storage, reference_date: NaiveDate) -> TrackerResult<Self> {
        let mut view = Self::new(storage.expenses.subscribe()?, reference_date);
        view.sync();
        Ok(view)
    }

    /// Attach with today's date as the reference month
    pub fn attach_today(storage: &Storage) -> TrackerResult<Self> {
        Self::attach(storage, Local::now().date_naive())
    }

    /// Drain pending snapshots and recompute from the latest one.
    ///
    /// Returns whether a new snapshot arrived.
    pub fn sync(&mut self) -> bool {
        let mut latest = None;
        loop {
            match self.receiver.try_recv() {
                Ok(snapshot) => latest = Some(snapshot),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        warn!("expense store disconnected, keeping last snapshot");
                        self.disconnected = true;
                    }
                    break;
                }
            }
        }

        match latest {
            Some(snapshot) => {
                debug!(expenses = snapshot.len(), "new snapshot");
                self.snapshot = Some(snapshot);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// True until the first snapshot has arrived
    pub fn is_loading(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn filter(&self) -> &ExpenseFilter {
        &self.filter
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn set_filter(&mut self, filter: ExpenseFilter) {
        self.filter = filter;
        self.recompute();
    }

    pub fn set_cycle_filter(&mut self, cycle: CycleFilter) {
        self.set_filter(self.filter.with_cycle(cycle));
    }

    /// Step the cycle filter ALL -> Monthly -> Yearly -> One Time -> ALL
    pub fn advance_cycle_filter(&mut self) -> CycleFilter {
        self.set_filter(self.filter.advanced());
        self.filter.cycle
    }

    /// Filter by category label; `None` or "ALL" clears it
    pub fn set_category_filter(&mut self, label: Option<&str>) {
        self.set_filter(self.filter.with_category(CategoryFilter::from_label(label)));
    }

    /// Project onto a different month
    pub fn set_reference_date(&mut self, reference_date: NaiveDate) {
        self.reference_date = reference_date;
        self.recompute();
    }

    pub fn report(&self) -> Option<&DashboardReport> {
        self.report.as_ref()
    }

    pub fn filtered_expenses(&self) -> Option<&[Expense]> {
        self.report.as_ref().map(|r| r.filtered_expenses.as_slice())
    }

    pub fn category_totals(&self) -> Option<&BTreeMap<ExpenseCategory, f64>> {
        self.report.as_ref().map(|r| &r.category_totals)
    }

    pub fn monthly_equivalent(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.monthly_equivalent)
    }

    pub fn monthly_excluding_yearly(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.monthly_excluding_yearly)
    }

    pub fn one_time_total(&self) -> Option<f64> {
        self.report.as_ref().map(|r| r.one_time_total)
    }

    pub fn daily_distribution(&self) -> Option<&DailyDistribution> {
        self.report.as_ref().map(|r| &r.daily_distribution)
    }

    /// Look an expense up in the latest snapshot, ignoring the filter
    pub fn get_by_id(&self, id: ExpenseId) -> Option<&Expense> {
        self.snapshot.as_ref()?.iter().find(|e| e.id == id)
    }

    fn recompute(&mut self) {
        self.report = self
            .snapshot
            .as_ref()
            .map(|expenses| DashboardReport::generate(expenses, &self.filter, self.reference_date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{BillingCycle, NewExpense};
    use crate::services::ExpenseService;
    use std::sync::mpsc;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn new_expense(
        name: &str,
        cost: f64,
        cycle: BillingCycle,
        category: ExpenseCategory,
        first: NaiveDate,
    ) -> NewExpense {
        NewExpense::new(name, cost, cycle, category, first)
    }

    fn seed(service: &ExpenseService) {
        service
            .create(new_expense(
                "Rent",
                900.0,
                BillingCycle::Monthly,
                ExpenseCategory::House,
                date(2024, 1, 1),
            ))
            .unwrap();
        service
            .create(new_expense(
                "Groceries",
                50.0,
                BillingCycle::Weekly,
                ExpenseCategory::Food,
                date(2025, 1, 6),
            ))
            .unwrap();
        service
            .create(new_expense(
                "Insurance",
                600.0,
                BillingCycle::Yearly,
                ExpenseCategory::Insurance,
                date(2023, 2, 15),
            ))
            .unwrap();
        service
            .create(new_expense(
                "Laptop",
                1200.0,
                BillingCycle::OneTime,
                ExpenseCategory::Personal,
                date(2025, 2, 20),
            ))
            .unwrap();
    }

    #[test]
    fn test_loading_until_first_snapshot() {
        let (sender, receiver) = mpsc::channel();
        let mut view = DashboardView::new(receiver, date(2025, 2, 1));

        assert!(view.is_loading());
        assert!(view.filtered_expenses().is_none());
        assert!(view.monthly_equivalent().is_none());
        assert!(view.get_by_id(ExpenseId::new(1)).is_none());

        sender.send(Arc::new(Vec::new())).unwrap();
        assert!(view.sync());
        assert!(!view.is_loading());
        assert_eq!(view.monthly_equivalent(), Some(0.0));
        assert_eq!(view.daily_distribution().unwrap().days_in_month(), 28);
    }

    #[test]
    fn test_view_follows_mutations() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut view = DashboardView::attach(&storage, date(2025, 2, 1)).unwrap();
        assert_eq!(view.filtered_expenses().unwrap().len(), 0);

        seed(&service);
        // Nothing changes until the view drains its queue
        assert_eq!(view.filtered_expenses().unwrap().len(), 0);
        assert!(view.sync());
        assert_eq!(view.filtered_expenses().unwrap().len(), 4);
        assert!(!view.sync());

        let totals = view.category_totals().unwrap();
        assert_eq!(totals[&ExpenseCategory::House], 900.0);
        assert_eq!(totals[&ExpenseCategory::Food], 50.0);
        assert_eq!(view.one_time_total(), Some(1200.0));
        let expected = 900.0 + 50.0 * 52.0 / 12.0 + 1200.0;
        assert!((view.monthly_excluding_yearly().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_february_distribution() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        seed(&service);
        let view = DashboardView::attach(&storage, date(2025, 2, 10)).unwrap();

        let daily = view.daily_distribution().unwrap();
        assert_eq!(daily.get(1), Some(900.0));
        // Weekly from Mon Jan 6: Feb 3, 10, 17, 24
        assert_eq!(daily.get(3), Some(50.0));
        assert_eq!(daily.get(24), Some(50.0));
        assert_eq!(daily.get(15), Some(600.0));
        assert_eq!(daily.get(20), Some(1200.0));
        assert_eq!(daily.total(), 900.0 + 200.0 + 600.0 + 1200.0);
    }

    #[test]
    fn test_cycle_filter_cycles_and_keeps_aggregates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        seed(&service);
        let mut view = DashboardView::attach(&storage, date(2025, 2, 1)).unwrap();
        let monthly_before = view.monthly_equivalent();

        assert_eq!(view.advance_cycle_filter(), CycleFilter::Monthly);
        let names: Vec<_> = view
            .filtered_expenses()
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rent"]);
        assert_eq!(view.monthly_equivalent(), monthly_before);

        assert_eq!(view.advance_cycle_filter(), CycleFilter::Yearly);
        assert_eq!(view.filtered_expenses().unwrap()[0].name, "Insurance");
        assert_eq!(view.advance_cycle_filter(), CycleFilter::OneTime);
        assert_eq!(view.filtered_expenses().unwrap()[0].name, "Laptop");
        assert_eq!(view.advance_cycle_filter(), CycleFilter::All);
        assert_eq!(view.filtered_expenses().unwrap().len(), 4);
    }

    #[test]
    fn test_category_filter_combines_with_cycle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        seed(&service);
        let mut view = DashboardView::attach(&storage, date(2025, 2, 1)).unwrap();

        view.set_category_filter(Some("Food"));
        assert_eq!(view.filtered_expenses().unwrap().len(), 1);

        // Weekly expenses have no cycle filter of their own
        view.set_cycle_filter(CycleFilter::Monthly);
        assert!(view.filtered_expenses().unwrap().is_empty());

        view.set_category_filter(None);
        assert_eq!(view.filtered_expenses().unwrap().len(), 1);
        assert_eq!(view.filter().category, CategoryFilter::All);

        view.set_category_filter(Some("Unknown"));
        assert!(view.filtered_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_delete_and_readd_gives_same_totals() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        seed(&service);
        let mut view = DashboardView::attach(&storage, date(2025, 2, 1)).unwrap();
        let before = view.report().unwrap().clone();

        let rent = view
            .filtered_expenses()
            .unwrap()
            .iter()
            .find(|e| e.name == "Rent")
            .cloned()
            .unwrap();
        service.delete(rent.id).unwrap();
        view.sync();
        assert!(view.get_by_id(rent.id).is_none());

        let readded = service
            .create(new_expense(
                &rent.name,
                rent.cost,
                rent.billing_cycle,
                rent.category,
                rent.first_payment_date,
            ))
            .unwrap();
        view.sync();

        assert_ne!(readded.id, rent.id);
        let after = view.report().unwrap();
        assert_eq!(after.category_totals, before.category_totals);
        assert_eq!(after.monthly_equivalent, before.monthly_equivalent);
        assert_eq!(after.daily_distribution, before.daily_distribution);
    }

    #[test]
    fn test_get_by_id_ignores_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        seed(&service);
        let mut view = DashboardView::attach(&storage, date(2025, 2, 1)).unwrap();

        view.set_cycle_filter(CycleFilter::OneTime);
        let rent = view.get_by_id(ExpenseId::new(1)).unwrap();
        assert_eq!(rent.name, "Rent");
    }

    #[test]
    fn test_disconnected_store_keeps_last_snapshot() {
        let (sender, receiver) = mpsc::channel();
        let mut view = DashboardView::new(receiver, date(2025, 2, 1));
        sender.send(Arc::new(Vec::new())).unwrap();
        drop(sender);

        assert!(view.sync());
        assert!(!view.sync());
        assert!(!view.is_loading());
    }
}
