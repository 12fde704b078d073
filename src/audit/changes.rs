//! Field-by-field summary of an expense replacement

use crate::models::Expense;

/// Longest name shown in a summary before it is cut with "..."
const NAME_PREVIEW_CHARS: usize = 40;

/// List the fields that differ between two versions of an expense, e.g.
/// `cost: 20 -> 25, billing cycle: Monthly -> Yearly`.
///
/// `None` when the replacement is identical.
pub fn describe_changes(before: &Expense, after: &Expense) -> Option<String> {
    let mut changed = Vec::new();

    if before.name != after.name {
        changed.push(format!(
            "name: {} -> {}",
            quoted_name(&before.name),
            quoted_name(&after.name)
        ));
    }
    if before.cost != after.cost {
        changed.push(format!("cost: {} -> {}", before.cost, after.cost));
    }
    if before.billing_cycle != after.billing_cycle {
        changed.push(format!(
            "billing cycle: {} -> {}",
            before.billing_cycle, after.billing_cycle
        ));
    }
    if before.category != after.category {
        changed.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.first_payment_date != after.first_payment_date {
        changed.push(format!(
            "first payment: {} -> {}",
            before.first_payment_date, after.first_payment_date
        ));
    }

    (!changed.is_empty()).then(|| changed.join(", "))
}

fn quoted_name(name: &str) -> String {
    match name.char_indices().nth(NAME_PREVIEW_CHARS) {
        Some((cut, _)) => format!("\"{}...\"", &name[..cut]),
        None => format!("\"{}\"", name),
    }
}
