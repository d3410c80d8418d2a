//! Output formatting utilities

use crate::application::ListView;
use crate::domain::week::format_display_date;
use crate::infrastructure::ListSummary;

/// Shown in place of the current pick when a list is empty
pub const EMPTY_PICK: &str = "No one yet!";

/// Format the list dashboard
pub fn format_list_summaries(lists: &[ListSummary]) -> String {
    if lists.is_empty() {
        return "No lists yet. Create one with 'rota create <NAME>'.".to_string();
    }

    let mut output = String::new();
    for list in lists {
        output.push_str(&format!("{}  ({})\n", list.name, list.id));
    }
    output
}

/// Format a reconciled list for the current week
pub fn format_list_view(view: &ListView) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", view.record.name));
    output.push_str(&format!("{}\n\n", view.week.band()));
    output.push_str(&format!(
        "Current pick: {}\n",
        view.current().unwrap_or(EMPTY_PICK)
    ));
    output.push_str(&format!(
        "Next rotation: {}\n\n",
        format_display_date(view.next_rotation)
    ));

    if view.record.people.is_empty() {
        output.push_str("List is empty.\n");
        return output;
    }

    output.push_str("Queue:\n");
    for (index, person) in view.record.people.iter().enumerate() {
        let marker = if index == 0 { '*' } else { ' ' };
        output.push_str(&format!("  {} [{}] {}\n", marker, index, person));
    }
    output
}
