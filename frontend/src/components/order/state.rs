//! Component state for the order form.

use common::config::SiteConfig;
use common::model::order::OrderField;
use common::order::FormSession;

use crate::mail_composer::LocationMailComposer;

/// State container for the `OrderFormComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct OrderFormComponent {
    /// Visitor input and submission status.
    pub session: FormSession<LocationMailComposer>,

    /// Inputs flagged by the last refused submission. An input loses its flag
    /// as soon as it is edited.
    pub invalid_fields: Vec<OrderField>,

    pub config: SiteConfig,
}

impl OrderFormComponent {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            session: FormSession::new(config.contact_email.clone(), LocationMailComposer),
            invalid_fields: Vec::new(),
            config,
        }
    }

    pub fn is_invalid(&self, field: OrderField) -> bool {
        self.invalid_fields.contains(&field)
    }
}
