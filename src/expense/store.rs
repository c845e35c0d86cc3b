//! The in-memory store that owns the expense list.

use crate::expense::{
    Categories, CategoryFilter, Expense, ExpenseFormData, ExpenseId, ExpenseRecord,
    ValidationErrors, validate,
};

/// Owns the expenses for a session, in the order they were added.
///
/// The store trusts its callers: [ExpenseStore::add] does not re-validate.
/// Use [ExpenseStore::validate] to turn form data into an [Expense] first.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    categories: Categories,
    records: Vec<ExpenseRecord>,
    next_id: ExpenseId,
}

impl ExpenseStore {
    /// Create a store with a fixed set of `categories`, seeded with `initial_expenses`.
    ///
    /// The initial expenses are kept in the given order and are not validated.
    pub fn new(
        categories: Categories,
        initial_expenses: impl IntoIterator<Item = Expense>,
    ) -> Self {
        let mut store = Self {
            categories,
            records: Vec::new(),
            next_id: 1,
        };

        for expense in initial_expenses {
            store.add(expense);
        }

        store
    }

    /// The categories that expenses in this store may belong to.
    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    /// Every expense in insertion order.
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// The number of expenses in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store has no expenses.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate `candidate` against this store's categories.
    ///
    /// # Errors
    ///
    /// Returns [ValidationErrors] with one error for each invalid field.
    pub fn validate(&self, candidate: &ExpenseFormData) -> Result<Expense, ValidationErrors> {
        validate(candidate, &self.categories)
    }

    /// Append `expense` to the end of the list and return its new ID.
    pub fn add(&mut self, expense: Expense) -> ExpenseId {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(ExpenseRecord { id, expense });

        id
    }

    /// Remove every expense equal to `expense`.
    ///
    /// Returns the number of expenses removed, zero if `expense` was not in the store.
    pub fn remove(&mut self, expense: &Expense) -> usize {
        let count_before = self.records.len();
        self.records.retain(|record| record.expense != *expense);

        count_before - self.records.len()
    }

    /// Remove the expense with the ID `id`, returning it if it was in the store.
    pub fn remove_by_id(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.records.iter().position(|record| record.id == id)?;

        Some(self.records.remove(index).expense)
    }

    /// The expenses that pass `filter`, in insertion order.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<&ExpenseRecord> {
        self.records
            .iter()
            .filter(|record| filter.matches(&record.expense))
            .collect()
    }
}

/// The sum of the amounts of `records`, `0.0` when there are none.
pub fn total(records: &[&ExpenseRecord]) -> f64 {
    // `Sum for f64` starts from -0.0, which would render as "-0.00".
    records
        .iter()
        .fold(0.0, |sum, record| sum + record.expense.amount())
}

#[cfg(test)]
mod tests {
    use crate::{
        expense::{
            Categories, CategoryFilter, Expense, ExpenseField, ExpenseFormData, ExpenseRecord,
            ExpenseStore,
        },
        html::format_amount,
    };

    use super::total;

    fn empty_store() -> ExpenseStore {
        ExpenseStore::new(Categories::new(["Grocery", "Utility"]).unwrap(), [])
    }

    fn expenses(records: &[&ExpenseRecord]) -> Vec<Expense> {
        records.iter().map(|record| record.expense.clone()).collect()
    }

    fn all(store: &ExpenseStore) -> Vec<Expense> {
        expenses(&store.filter(&CategoryFilter::All))
    }

    fn milk() -> Expense {
        Expense::new_unchecked("Milk", 5.0, "Grocery")
    }

    fn eggs() -> Expense {
        Expense::new_unchecked("Eggs", 10.0, "Grocery")
    }

    fn electricity() -> Expense {
        Expense::new_unchecked("Electricity", 100.0, "Utility")
    }

    #[test]
    fn new_keeps_seed_order() {
        let store = ExpenseStore::new(
            Categories::default(),
            [milk(), eggs(), electricity()],
        );

        assert_eq!(all(&store), vec![milk(), eggs(), electricity()]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn add_appends_last() {
        let mut store = ExpenseStore::new(Categories::default(), [milk(), eggs()]);

        store.add(electricity());

        assert_eq!(all(&store), vec![milk(), eggs(), electricity()]);
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut store = empty_store();

        let first = store.add(milk());
        let second = store.add(milk());

        assert!(second > first, "want {second} > {first}");
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = empty_store();
        let first = store.add(milk());
        store.remove_by_id(first);

        let second = store.add(milk());

        assert_ne!(first, second);
    }

    #[test]
    fn add_valid_expense_then_filter_other_category() {
        let mut store = empty_store();
        let expense = store
            .validate(&ExpenseFormData::new("Milk", "5", "Grocery"))
            .unwrap();

        store.add(expense);

        assert_eq!(all(&store), vec![milk()]);
        assert!(store.filter(&CategoryFilter::parse("Utility")).is_empty());
    }

    #[test]
    fn invalid_expense_leaves_store_unchanged() {
        let mut store = ExpenseStore::new(Categories::default(), [milk()]);

        for form in [
            ExpenseFormData::new("Ab", "5", "Grocery"),
            ExpenseFormData::new("Bad", "-5", "Grocery"),
        ] {
            if let Ok(expense) = store.validate(&form) {
                store.add(expense);
            }
        }

        assert_eq!(all(&store), vec![milk()]);
    }

    #[test]
    fn validate_uses_store_categories() {
        let store = ExpenseStore::new(Categories::new(["Rent"]).unwrap(), []);

        let errors = store
            .validate(&ExpenseFormData::new("Milk", "5", "Grocery"))
            .expect_err("want unknown category");

        assert!(errors.get(ExpenseField::Category).is_some());
        assert!(
            store
                .validate(&ExpenseFormData::new("March", "500", "Rent"))
                .is_ok()
        );
    }

    #[test]
    fn filter_keeps_insertion_order() {
        let mut store = empty_store();
        store.add(electricity());
        store.add(eggs());
        store.add(milk());

        let got = expenses(&store.filter(&CategoryFilter::parse("Grocery")));

        assert_eq!(got, vec![eggs(), milk()]);
    }

    #[test]
    fn filter_all_returns_everything() {
        let store = ExpenseStore::new(Categories::default(), [milk(), electricity()]);

        let got: Vec<ExpenseRecord> = store
            .filter(&CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();

        assert_eq!(got, store.expenses());
    }

    #[test]
    fn filter_is_idempotent() {
        let store = ExpenseStore::new(Categories::default(), [milk(), eggs(), electricity()]);
        let filter = CategoryFilter::parse("Grocery");

        assert_eq!(store.filter(&filter), store.filter(&filter));
    }

    #[test]
    fn filter_unknown_category_is_empty() {
        let store = ExpenseStore::new(Categories::default(), [milk(), electricity()]);

        assert!(store.filter(&CategoryFilter::parse("Rent")).is_empty());
    }

    #[test]
    fn remove_deletes_expense() {
        let mut store = ExpenseStore::new(Categories::default(), [milk()]);

        let removed = store.remove(&milk());

        assert_eq!(removed, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_expense_is_noop() {
        let mut store = ExpenseStore::new(Categories::default(), [milk(), eggs()]);

        let removed = store.remove(&electricity());

        assert_eq!(removed, 0);
        assert_eq!(all(&store), vec![milk(), eggs()]);
    }

    #[test]
    fn remove_deletes_every_duplicate() {
        let mut store = ExpenseStore::new(Categories::default(), [milk(), eggs(), milk()]);

        let removed = store.remove(&milk());

        assert_eq!(removed, 2);
        assert_eq!(all(&store), vec![eggs()]);
    }

    #[test]
    fn add_then_remove_restores_prior_list() {
        let mut store = ExpenseStore::new(Categories::default(), [eggs(), electricity()]);
        let before = all(&store);

        store.add(milk());
        store.remove(&milk());

        assert_eq!(all(&store), before);
    }

    #[test]
    fn remove_by_id_deletes_only_that_duplicate() {
        let mut store = empty_store();
        let first = store.add(milk());
        let second = store.add(milk());

        let removed = store.remove_by_id(first);

        assert_eq!(removed, Some(milk()));
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].id, second);
    }

    #[test]
    fn remove_by_missing_id_is_noop() {
        let mut store = ExpenseStore::new(Categories::default(), [milk()]);

        assert_eq!(store.remove_by_id(999), None);
        assert_eq!(all(&store), vec![milk()]);
    }

    #[test]
    fn total_sums_filtered_amounts() {
        let store = ExpenseStore::new(Categories::default(), [milk(), eggs(), electricity()]);

        assert_eq!(total(&store.filter(&CategoryFilter::All)), 115.0);
        assert_eq!(total(&store.filter(&CategoryFilter::parse("Grocery"))), 15.0);
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn total_of_nothing_is_positive_zero() {
        let store = ExpenseStore::new(Categories::default(), [milk()]);
        let nothing = store.filter(&CategoryFilter::parse("Utility"));

        assert!(total(&nothing).is_sign_positive());
        assert!(total(&[]).is_sign_positive());
        assert_eq!(format_amount(total(&[])), "0.00");
        assert_eq!(format_amount(total(&nothing)), "0.00");
    }
}
