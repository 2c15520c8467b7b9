//! Submission-time checks for an [`OrderRequest`].
//!
//! Field edits are never rejected; everything is checked here, once, when the
//! visitor submits. All problems are collected so the page can flag each input.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::model::catalog;
use crate::model::order::{OrderField, OrderRequest};

/// Address shape accepted by an HTML `type="email"` input.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} est obligatoire", .0.label())]
    Required(OrderField),
    #[error("adresse email invalide: {0}")]
    InvalidEmail(String),
    #[error("modèle de planche inconnu: {0}")]
    UnknownProduct(String),
    #[error("quantité invalide: {0}")]
    InvalidQuantity(String),
}

impl FieldError {
    pub fn field(&self) -> OrderField {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail(_) => OrderField::Email,
            FieldError::UnknownProduct(_) => OrderField::Product,
            FieldError::InvalidQuantity(_) => OrderField::Quantity,
        }
    }
}

/// The request cannot be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Inputs to flag, in form order, without duplicates.
    pub fn fields(&self) -> Vec<OrderField> {
        OrderField::ALL
            .into_iter()
            .filter(|field| self.errors.iter().any(|e| e.field() == *field))
            .collect()
    }

    pub fn has_field(&self, field: OrderField) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Digits only and not zero. Leading zeros and arbitrarily large values pass.
pub fn is_positive_integer(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value.chars().any(|c| c != '0')
}

pub fn validate(request: &OrderRequest) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    for field in OrderField::ALL.into_iter().filter(|f| f.is_required()) {
        if request.is_blank(field) {
            errors.push(FieldError::Required(field));
        }
    }

    let email = request.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.push(FieldError::InvalidEmail(email.to_string()));
    }

    let product = request.product.trim();
    if !product.is_empty() && catalog::find_by_name(product).is_none() {
        errors.push(FieldError::UnknownProduct(product.to_string()));
    }

    let quantity = request.quantity.trim();
    if !quantity.is_empty() && !is_positive_integer(quantity) {
        errors.push(FieldError::InvalidQuantity(quantity.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { errors })
    }
}
