//! Footer form state.
//!
//! The send controls have no delivery backend: a submission is assembled,
//! logged by the view, and dropped. Field contents are left untouched.

use crate::content::NEWSLETTER_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsletterForm {
    email: String,
    categories: Vec<&'static str>,
}

/// Snapshot of what a newsletter send would carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsletterSignup<'a> {
    pub email: &'a str,
    pub categories: &'a [&'static str],
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Stored as typed; the address format is not checked.
    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        self.categories.iter().any(|id| *id == category_id)
    }

    /// Selected category ids, in the order they were ticked.
    pub fn selected(&self) -> &[&'static str] {
        &self.categories
    }

    /// Adds or removes a category. Ids not in the catalogue are ignored.
    pub fn toggle_category(&mut self, category_id: &str) {
        if let Some(pos) = self.categories.iter().position(|id| *id == category_id) {
            self.categories.remove(pos);
        } else if let Some(category) = NEWSLETTER_CATEGORIES
            .iter()
            .find(|c| c.id == category_id)
        {
            self.categories.push(category.id);
        }
    }

    pub fn signup(&self) -> NewsletterSignup<'_> {
        NewsletterSignup {
            email: &self.email,
            categories: &self.categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedbackForm {
    message: String,
}

impl FeedbackForm {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    /// Character count of the draft, used for the send log line.
    pub fn len(&self) -> usize {
        self.message.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
