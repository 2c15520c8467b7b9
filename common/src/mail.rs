//! Order message composition and the mail client handoff.
//!
//! The handoff is one-way: once the `mailto:` URI is handed to the environment
//! nothing reports back whether a mail client opened or a message was sent.

use crate::model::order::OrderRequest;

pub const SUBJECT_PREFIX: &str = "Commande de planche";
pub const NOT_SPECIFIED: &str = "Non spécifiée";
pub const NO_MESSAGE: &str = "Aucun message";

/// A fully composed message, ready to be handed to a mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn for_order(recipient: &str, request: &OrderRequest) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: compose_subject(request),
            body: compose_body(request),
        }
    }

    /// `mailto:` URI carrying the percent-encoded subject and body.
    pub fn to_mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Opens the visitor's mail client with a pre-filled message.
///
/// Implementations cannot report whether the message was actually composed.
pub trait MailComposer {
    fn compose_and_open(&mut self, draft: &MailDraft);
}

pub fn compose_subject(request: &OrderRequest) -> String {
    let product = request.product.trim();
    if product.is_empty() {
        SUBJECT_PREFIX.to_string()
    } else {
        format!("{} - {}", SUBJECT_PREFIX, product)
    }
}

pub fn compose_body(request: &OrderRequest) -> String {
    let message = if request.message.trim().is_empty() {
        NO_MESSAGE
    } else {
        request.message.as_str()
    };

    format!(
        "Bonjour,\n\n\
         Je souhaite commander une planche.\n\n\
         Nom: {}\n\
         Email: {}\n\
         Téléphone: {}\n\
         Planche: {}\n\
         Quantité: {}\n\n\
         Message:\n{}",
        request.name.trim(),
        request.email.trim(),
        or_not_specified(&request.phone),
        or_not_specified(&request.product),
        or_not_specified(&request.quantity),
        message
    )
}

fn or_not_specified(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() { NOT_SPECIFIED } else { value }
}
