//! Trip budget — fixed categories with mutable expense lists.
//!
//! All derived figures are recomputed on demand from the expense lists.
//! Divisions guard against zero: an empty budget has 0% in every category,
//! and zero travelers or days yield 0 per person / per day.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryId, ExpenseId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    pub const ALL: [Currency; 6] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
        Currency::AUD,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Currency::USD => "USD - US Dollar",
            Currency::EUR => "EUR - Euro",
            Currency::GBP => "GBP - British Pound",
            Currency::JPY => "JPY - Japanese Yen",
            Currency::CAD => "CAD - Canadian Dollar",
            Currency::AUD => "AUD - Australian Dollar",
        }
    }

    pub fn next(self) -> Currency {
        let i = Currency::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Currency::ALL[(i + 1) % Currency::ALL.len()]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported currency: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: CategoryId,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: CategoryId,
    pub name: String,
    pub expenses: Vec<Expense>,
}

impl BudgetCategory {
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

/// The pending "add expense" form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    /// Empty means no category chosen yet.
    pub category: String,
    pub description: String,
    pub amount: f64,
}

impl ExpenseDraft {
    /// Amount must be a finite number above zero.
    pub fn is_valid(&self) -> bool {
        !self.category.is_empty()
            && !self.description.is_empty()
            && self.amount.is_finite()
            && self.amount > 0.0
    }
}

/// One row of the breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub id: CategoryId,
    pub name: String,
    pub total: f64,
    pub percentage: f64,
}

/// Every derived figure at once, for printing or JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub destination: String,
    pub currency: Currency,
    pub travelers: u32,
    pub days: u32,
    pub total: f64,
    pub per_person: f64,
    pub per_day: f64,
    pub per_person_per_day: f64,
    pub categories: Vec<CategoryBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCalculator {
    pub destination: String,
    pub travelers: u32,
    pub days: u32,
    pub currency: Currency,
    pub categories: Vec<BudgetCategory>,
    pub draft: ExpenseDraft,
    next_expense_seq: u64,
}

impl Default for BudgetCalculator {
    fn default() -> Self {
        Self::new(2, 7, Currency::USD)
    }
}

fn seeded(id: &str, name: &str, expense_id: &str, description: &str, amount: f64) -> BudgetCategory {
    BudgetCategory {
        id: id.into(),
        name: name.to_string(),
        expenses: vec![Expense {
            id: expense_id.into(),
            category: id.into(),
            description: description.to_string(),
            amount,
        }],
    }
}

impl BudgetCalculator {
    /// A calculator with the five standard categories and their starter expenses.
    pub fn new(travelers: u32, days: u32, currency: Currency) -> Self {
        Self {
            destination: String::new(),
            travelers: travelers.max(1),
            days: days.max(1),
            currency,
            categories: vec![
                seeded("transportation", "Transportation", "flight", "Flight tickets", 800.0),
                seeded("accommodation", "Accommodation", "hotel", "Hotel (7 nights)", 700.0),
                seeded("food", "Food & Drinks", "meals", "Meals", 350.0),
                seeded("activities", "Activities", "tours", "Tours and attractions", 200.0),
                seeded("localTransport", "Local Transport", "taxi", "Taxis and public transport", 100.0),
            ],
            draft: ExpenseDraft::default(),
            next_expense_seq: 1,
        }
    }

    /// The standard categories with no expenses.
    pub fn empty(travelers: u32, days: u32, currency: Currency) -> Self {
        let mut calc = Self::new(travelers, days, currency);
        for c in &mut calc.categories {
            c.expenses.clear();
        }
        calc
    }

    pub fn category(&self, id: &str) -> Option<&BudgetCategory> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    pub fn total(&self) -> f64 {
        self.categories.iter().map(BudgetCategory::total).sum()
    }

    /// 0 for an unknown category.
    pub fn category_total(&self, id: &str) -> f64 {
        self.category(id).map_or(0.0, BudgetCategory::total)
    }

    /// Share of the total in percent; 0 when the total is 0.
    pub fn category_percentage(&self, id: &str) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        self.category_total(id) / total * 100.0
    }

    pub fn per_person(&self) -> f64 {
        if self.travelers > 0 {
            self.total() / self.travelers as f64
        } else {
            0.0
        }
    }

    pub fn per_day(&self) -> f64 {
        if self.days > 0 {
            self.total() / self.days as f64
        } else {
            0.0
        }
    }

    pub fn per_person_per_day(&self) -> f64 {
        if self.days > 0 {
            self.per_person() / self.days as f64
        } else {
            0.0
        }
    }

    /// Travelers input; non-positive input falls back to 1.
    pub fn set_travelers(&mut self, travelers: i64) {
        self.travelers = if travelers > 0 { travelers as u32 } else { 1 };
    }

    /// Days input; non-positive input falls back to 1.
    pub fn set_days(&mut self, days: i64) {
        self.days = if days > 0 { days as u32 } else { 1 };
    }

    /// Submit the pending draft. Invalid drafts and unknown categories are
    /// ignored and the draft is kept; on success the draft is reset.
    pub fn add_expense(&mut self) -> Option<ExpenseId> {
        let draft = self.draft.clone();
        let id = self.add_expense_from(&draft)?;
        self.draft = ExpenseDraft::default();
        Some(id)
    }

    /// Add an expense without going through the form draft.
    pub fn add_expense_from(&mut self, draft: &ExpenseDraft) -> Option<ExpenseId> {
        if !draft.is_valid() {
            tracing::debug!(?draft, "expense ignored: incomplete");
            return None;
        }
        let id = ExpenseId::new(format!("expense-{}", self.next_expense_seq));
        let Some(category) = self
            .categories
            .iter_mut()
            .find(|c| c.id.as_str() == draft.category)
        else {
            tracing::debug!(category = %draft.category, "expense ignored: unknown category");
            return None;
        };
        category.expenses.push(Expense {
            id: id.clone(),
            category: category.id.clone(),
            description: draft.description.clone(),
            amount: draft.amount,
        });
        self.next_expense_seq += 1;
        Some(id)
    }

    /// Drop one expense. No-op when the category or expense is unknown.
    pub fn remove_expense(&mut self, category_id: &str, expense_id: &ExpenseId) {
        match self.categories.iter_mut().find(|c| c.id.as_str() == category_id) {
            Some(category) => category.expenses.retain(|e| &e.id != expense_id),
            None => tracing::debug!(category = category_id, "remove ignored: unknown category"),
        }
    }

    pub fn breakdown(&self) -> Vec<CategoryBreakdown> {
        self.categories
            .iter()
            .map(|c| CategoryBreakdown {
                id: c.id.clone(),
                name: c.name.clone(),
                total: c.total(),
                percentage: self.category_percentage(c.id.as_str()),
            })
            .collect()
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            destination: self.destination.clone(),
            currency: self.currency,
            travelers: self.travelers,
            days: self.days,
            total: self.total(),
            per_person: self.per_person(),
            per_day: self.per_day(),
            per_person_per_day: self.per_person_per_day(),
            categories: self.breakdown(),
        }
    }
}

/// `$1234.50` style amount with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// `37.2%` style percentage with one decimal.
pub fn format_percentage(pct: f64) -> String {
    format!("{pct:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_totals() {
        let b = BudgetCalculator::default();
        assert_eq!(b.total(), 2150.0);
        assert_eq!(b.category_total("transportation"), 800.0);
        assert_eq!(format_percentage(b.category_percentage("transportation")), "37.2%");
        assert_eq!(b.per_person(), 1075.0);
        assert!((b.per_day() - 307.142857).abs() < 1e-5);
        assert!((b.per_person_per_day() - 153.571428).abs() < 1e-5);
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let b = BudgetCalculator::default();
        let sum: f64 = b.breakdown().iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_budget_guards_division() {
        let b = BudgetCalculator::empty(2, 7, Currency::EUR);
        assert_eq!(b.total(), 0.0);
        assert_eq!(b.category_percentage("food"), 0.0);
        assert_eq!(b.per_person(), 0.0);
    }

    #[test]
    fn zero_travelers_and_days_guarded() {
        let mut b = BudgetCalculator::default();
        b.travelers = 0;
        b.days = 0;
        assert_eq!(b.per_person(), 0.0);
        assert_eq!(b.per_day(), 0.0);
        assert_eq!(b.per_person_per_day(), 0.0);
    }

    #[test]
    fn unknown_category_total_is_zero() {
        let b = BudgetCalculator::default();
        assert_eq!(b.category_total("souvenirs"), 0.0);
        assert_eq!(b.category_percentage("souvenirs"), 0.0);
    }

    #[test]
    fn add_expense_validates() {
        let mut b = BudgetCalculator::default();
        let before = b.total();

        b.draft = ExpenseDraft {
            category: String::new(),
            description: "Snacks".into(),
            amount: 10.0,
        };
        assert!(b.add_expense().is_none());

        b.draft.category = "food".into();
        b.draft.description.clear();
        assert!(b.add_expense().is_none());

        b.draft.description = "Snacks".into();
        b.draft.amount = 0.0;
        assert!(b.add_expense().is_none());

        b.draft.amount = -5.0;
        assert!(b.add_expense().is_none());
        assert_eq!(b.total(), before);
        // Rejected drafts stay in the form.
        assert_eq!(b.draft.description, "Snacks");

        b.draft.amount = 25.0;
        let id = b.add_expense().unwrap();
        assert_eq!(b.total(), before + 25.0);
        assert_eq!(b.draft, ExpenseDraft::default());

        b.remove_expense("food", &id);
        assert_eq!(b.total(), before);
    }

    #[test]
    fn non_finite_amounts_rejected() {
        let mut b = BudgetCalculator::default();
        for amount in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let draft = ExpenseDraft {
                category: "food".into(),
                description: "Snacks".into(),
                amount,
            };
            assert!(!draft.is_valid());
            assert!(b.add_expense_from(&draft).is_none());
        }
        assert_eq!(b.total(), 2150.0);
        assert!(b.total().is_finite());
    }

    #[test]
    fn unknown_category_ignored() {
        let mut b = BudgetCalculator::default();
        let draft = ExpenseDraft {
            category: "souvenirs".into(),
            description: "Magnets".into(),
            amount: 12.0,
        };
        assert!(b.add_expense_from(&draft).is_none());
        assert_eq!(b.total(), 2150.0);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut b = BudgetCalculator::default();
        b.remove_expense("food", &ExpenseId::from("nope"));
        b.remove_expense("nope", &ExpenseId::from("meals"));
        assert_eq!(b.total(), 2150.0);
        b.remove_expense("food", &ExpenseId::from("meals"));
        assert_eq!(b.total(), 1800.0);
    }

    #[test]
    fn traveler_and_day_inputs_floor_at_one() {
        let mut b = BudgetCalculator::default();
        b.set_travelers(0);
        b.set_days(-3);
        assert_eq!((b.travelers, b.days), (1, 1));
        b.set_travelers(4);
        assert_eq!(b.per_person(), 537.5);
    }

    #[test]
    fn currency_parse_and_cycle() {
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::GBP);
        assert!("XYZ".parse::<Currency>().is_err());
        assert_eq!(Currency::AUD.next(), Currency::USD);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_amount(2150.0), "$2150.00");
        assert_eq!(format_percentage(4.651), "4.7%");
    }
}
