//! Shell-level selection state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell owns exactly one piece of domain state: which chat the user
//! picked from the list. A selection remembers the company it was made
//! under, so the detail loader is keyed on that pair and never on a
//! company the contact does not belong to.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// The chat currently open in the detail pane, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    company_id: String,
    contact_id: Option<String>,
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.contact_id.as_deref()
    }

    /// Company the current selection was made under; empty when none.
    #[must_use]
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// The selected contact, only while `company_id` is still the page's company.
    #[must_use]
    pub fn selected_for(&self, company_id: &str) -> Option<&str> {
        self.selected().filter(|_| self.company_id == company_id)
    }

    /// Select `contact_id` of `company_id`; an empty contact clears the selection.
    pub fn select(&mut self, company_id: &str, contact_id: String) {
        match Some(contact_id).filter(|id| !id.is_empty()) {
            Some(id) => {
                self.company_id = company_id.to_owned();
                self.contact_id = Some(id);
            }
            None => self.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.company_id.clear();
        self.contact_id = None;
    }
}
