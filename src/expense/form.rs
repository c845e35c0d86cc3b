//! The form for adding an expense.

use maud::{Markup, html};

use crate::{
    endpoints,
    expense::{
        AMOUNT_MAX, Categories, DESCRIPTION_MIN_LENGTH, ExpenseField, ExpenseFormData,
        ValidationErrors,
    },
    html::{BUTTON_PRIMARY_STYLE, FORM_ERROR_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Render the expense form.
///
/// `values` are put back into the inputs so that a rejected submission does
/// not clear what the user typed. Each message in `errors` is shown below its
/// field.
pub fn expense_form_view(
    values: &ExpenseFormData,
    errors: &ValidationErrors,
    categories: &Categories,
) -> Markup {
    html! {
        form
            id="expense-form"
            hx-post=(endpoints::EXPENSES_API)
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    id="description"
                    type="text"
                    name="description"
                    placeholder="Minimum 3 characters..."
                    value=(values.description)
                    minlength=(DESCRIPTION_MIN_LENGTH)
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(errors, ExpenseField::Description))
            }

            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="0.01"
                    min="0.01"
                    max=(AMOUNT_MAX)
                    placeholder="Required"
                    value=(values.amount)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);

                (field_error(errors, ExpenseField::Amount))
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    id="category"
                    name="category"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "-" }

                    @for category in categories.iter() {
                        option value=(category) selected[category == values.category] { (category) }
                    }
                }

                (field_error(errors, ExpenseField::Category))
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

fn field_error(errors: &ValidationErrors, field: ExpenseField) -> Markup {
    html! {
        @if let Some(message) = errors.message(field) {
            p class=(FORM_ERROR_STYLE) data-error-for=(field.name()) { (message) }
        }
    }
}
