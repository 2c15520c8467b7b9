use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One input of the order form.
///
/// The string forms are the `name` attributes used by the form markup, so a
/// change event can be routed with [`OrderField::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    Name,
    Email,
    Phone,
    Product,
    Quantity,
    Message,
}

impl OrderField {
    pub const ALL: [OrderField; 6] = [
        OrderField::Name,
        OrderField::Email,
        OrderField::Phone,
        OrderField::Product,
        OrderField::Quantity,
        OrderField::Message,
    ];

    pub fn html_name(self) -> &'static str {
        match self {
            OrderField::Name => "nom",
            OrderField::Email => "email",
            OrderField::Phone => "telephone",
            OrderField::Product => "planche",
            OrderField::Quantity => "quantite",
            OrderField::Message => "message",
        }
    }

    /// Label shown next to the input and in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            OrderField::Name => "Nom complet",
            OrderField::Email => "Email",
            OrderField::Phone => "Téléphone",
            OrderField::Product => "Modèle de planche",
            OrderField::Quantity => "Quantité",
            OrderField::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, OrderField::Name | OrderField::Email | OrderField::Product)
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for OrderField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderField::ALL
            .into_iter()
            .find(|field| field.html_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Data typed into the order form by the visitor.
///
/// Values are kept exactly as entered; nothing is checked until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub product: String,
    pub quantity: String,
    pub message: String,
}

impl OrderRequest {
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
            OrderField::Product => &self.product,
            OrderField::Quantity => &self.quantity,
            OrderField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: OrderField, value: impl Into<String>) {
        let slot = match field {
            OrderField::Name => &mut self.name,
            OrderField::Email => &mut self.email,
            OrderField::Phone => &mut self.phone,
            OrderField::Product => &mut self.product,
            OrderField::Quantity => &mut self.quantity,
            OrderField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when `field` holds nothing but whitespace.
    pub fn is_blank(&self, field: OrderField) -> bool {
        self.get(field).trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = OrderRequest::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_names_round_trip() {
        for field in OrderField::ALL {
            assert_eq!(field.html_name().parse::<OrderField>(), Ok(field));
        }
    }

    #[test]
    fn unknown_field_name_is_rejected() {
        let err = "prenom".parse::<OrderField>().unwrap_err();
        assert_eq!(err, UnknownField("prenom".to_string()));
        assert_eq!(err.to_string(), "unknown order field: prenom");
    }

    #[test]
    fn only_name_email_and_product_are_required() {
        let required: Vec<_> = OrderField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![OrderField::Name, OrderField::Email, OrderField::Product]
        );
    }

    #[test]
    fn set_replaces_one_field_only() {
        let mut request = OrderRequest::default();
        request.set(OrderField::Name, "Jean");
        request.set(OrderField::Quantity, "abc");
        assert_eq!(request.name, "Jean");
        assert_eq!(request.quantity, "abc");
        assert_eq!(request.email, "");

        request.set(OrderField::Name, "Marie");
        assert_eq!(request.get(OrderField::Name), "Marie");
        assert_eq!(request.get(OrderField::Quantity), "abc");
    }

    #[test]
    fn blank_means_whitespace_only() {
        let mut request = OrderRequest::default();
        assert!(request.is_blank(OrderField::Phone));
        request.set(OrderField::Phone, "  \t");
        assert!(request.is_blank(OrderField::Phone));
        request.set(OrderField::Phone, " 06 ");
        assert!(!request.is_blank(OrderField::Phone));
    }

    #[test]
    fn request_serializes_with_field_names() {
        let request = OrderRequest {
            name: "Jean".into(),
            ..OrderRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Jean");
        assert_eq!(json["message"], "");
    }
}
