//! Defines the route handler for the page with the expense form, the
//! category filter and the expense list.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error, endpoints,
    expense::{
        Categories, CategoryFilter, ExpenseFormData, ExpenseRecord, ExpenseStore,
        ValidationErrors, form::expense_form_view, total,
    },
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_amount,
    },
};

/// The state needed for the expenses page.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The store to list expenses from.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The query parameters for the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesQuery {
    /// The category to show, or an empty string for all categories.
    #[serde(default)]
    pub category: String,
}

/// Render the expenses page, showing only the expenses in the selected category.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Response, Error> {
    let store = state
        .expense_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let filter = CategoryFilter::parse(&query.category);
    let expenses = store.filter(&filter);
    tracing::debug!(
        "Showing {} of {} expense(s) for {filter}",
        expenses.len(),
        store.len()
    );

    Ok(expenses_view(&expenses, &filter, store.categories()).into_response())
}

fn expenses_view(
    expenses: &[&ExpenseRecord],
    filter: &CategoryFilter,
    categories: &Categories,
) -> Markup {
    let form = expense_form_view(
        &ExpenseFormData::default(),
        &ValidationErrors::default(),
        categories,
    );

    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-3xl space-y-8"
            {
                h1 class="text-xl font-bold" { "Expense Tracker" }

                div class=(FORM_CONTAINER_STYLE) { (form) }

                (category_filter_view(filter, categories))

                (expense_table_view(expenses))
            }
        }
    );

    base("Expenses", &content)
}

fn category_filter_view(filter: &CategoryFilter, categories: &Categories) -> Markup {
    html!(
        div
        {
            label
                for="category-filter"
                class=(FORM_LABEL_STYLE)
            {
                "Filter by category"
            }

            select
                id="category-filter"
                name="category"
                hx-get=(endpoints::EXPENSES_VIEW)
                hx-trigger="change"
                hx-target="#expense-list"
                hx-select="#expense-list"
                hx-swap="outerHTML"
                hx-push-url="true"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[*filter == CategoryFilter::All] { "All categories" }

                @for category in categories.iter() {
                    option
                        value=(category)
                        selected[filter.as_query_value() == category]
                    {
                        (category)
                    }
                }
            }
        }
    )
}

fn expense_table_view(expenses: &[&ExpenseRecord]) -> Markup {
    let table_row = |record: &ExpenseRecord| {
        let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, record.id);

        html!(
            tr class=(TABLE_ROW_STYLE) data-expense-id=(record.id)
            {
                td class=(TABLE_CELL_STYLE) { (record.expense.description()) }

                td class=(format!("{TABLE_CELL_STYLE} tabular-nums text-right"))
                {
                    (format_amount(record.expense.amount()))
                }

                td class=(TABLE_CELL_STYLE)
                {
                    span class=(CATEGORY_BADGE_STYLE) { (record.expense.category()) }
                }

                td class=(TABLE_CELL_STYLE)
                {
                    button
                        type="button"
                        hx-delete=(delete_url)
                        hx-target="closest tr"
                        hx-swap="delete"
                        hx-target-error="#alert-container"
                        class=(BUTTON_DELETE_STYLE)
                    {
                        "Delete"
                    }
                }
            }
        )
    };

    html!(
        table
            id="expense-list"
            class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                }
            }

            tbody
            {
                @for record in expenses {
                    (table_row(record))
                }

                @if expenses.is_empty() {
                    tr
                    {
                        td
                            colspan="4"
                            class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                        {
                            "No expenses to show."
                        }
                    }
                }
            }

            tfoot class="font-semibold text-gray-900 dark:text-white"
            {
                tr
                {
                    th scope="row" class=(TABLE_CELL_STYLE) { "Total" }
                    td class=(format!("{TABLE_CELL_STYLE} tabular-nums text-right")) data-total
                    {
                        (format_amount(total(expenses)))
                    }
                    td colspan="2" {}
                }
            }
        }
    )
}
