//! List Rendering
//!
//! Pure mapping from `ViewModel` to what the list view shows.

use crate::models::Item;
use crate::view_model::ViewModel;

/// One `<li>` in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: String,
    pub checked: bool,
    pub class: &'static str,
    /// Inner markup of the row; item text is escaped
    pub markup: String,
}

/// Everything the list view needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<RenderedRow>,
    pub show_empty_state: bool,
    pub show_clear_checked: bool,
    pub show_clear_all: bool,
}

pub fn render(vm: &ViewModel) -> ListView {
    let rows = display_order(&vm.items)
        .into_iter()
        .map(|item| RenderedRow {
            id: item.id.clone(),
            checked: item.checked,
            class: if item.checked { "item checked" } else { "item" },
            markup: row_markup(item),
        })
        .collect();

    ListView {
        rows,
        show_empty_state: !vm.has_items(),
        show_clear_checked: vm.has_checked(),
        show_clear_all: vm.has_items(),
    }
}

/// Unchecked first, then checked; oldest first within each group.
pub fn display_order(items: &[Item]) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| (item.checked, item.created_at));
    sorted
}

fn row_markup(item: &Item) -> String {
    format!(
        r#"<label class="checkbox-wrapper"><input type="checkbox"{} data-id="{}"><span class="checkmark"></span></label><span class="item-text">{}</span>"#,
        if item.checked { " checked" } else { "" },
        escape_html(&item.id),
        escape_html(&item.text),
    )
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
