use super::contact::CheckoutContact;
use super::order::{CheckoutError, OrderLine, PricedOrder};
use crate::config::ShopConfig;
use crate::utils::format_usd_cents;
use handlebars::Handlebars;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

/// Plain-text order message handed off to WhatsApp. Triple-stache keeps
/// handlebars from HTML-escaping plain text.
const WHATSAPP_TEMPLATE: &str = "\
Hi! I'd love to order from {{{site_name}}}.

Name: {{{name}}}
{{#if email}}Email: {{{email}}}
{{/if}}Phone: {{{phone}}}
Address: {{{address}}}
{{#if notes}}Notes: {{{notes}}}
{{/if}}
Order:
{{#each lines}}\u{2022} {{{quantity}}} x {{{product_title}}} ({{{variation_name}}}) - {{{price}}}
{{/each}}
Total: {{{total}}}

Sent from {{{site_host}}}";

#[derive(Serialize)]
struct LineContext {
    quantity: u32,
    product_title: String,
    variation_name: String,
    price: String,
}

#[derive(Serialize)]
pub(super) struct MessageContext {
    pub(super) site_name: String,
    pub(super) site_host: String,
    pub(super) name: String,
    pub(super) email: Option<String>,
    pub(super) phone: String,
    pub(super) address: String,
    pub(super) notes: Option<String>,
    lines: Vec<LineContext>,
    pub(super) total: String,
}

impl MessageContext {
    pub(super) fn new(
        config: &ShopConfig,
        contact: &CheckoutContact,
        order: &PricedOrder,
    ) -> Self {
        Self {
            site_name: config.site_name.clone(),
            site_host: config.site_host.clone(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            address: contact.address.clone(),
            notes: contact.notes.clone(),
            lines: order.lines.iter().map(LineContext::from).collect(),
            total: format_usd_cents(order.total_cents),
        }
    }
}

impl From<&OrderLine> for LineContext {
    fn from(line: &OrderLine) -> Self {
        Self {
            quantity: line.quantity,
            product_title: line.product_title.clone(),
            variation_name: line.variation_name.clone(),
            price: format_usd_cents(u64::from(line.price_cents)),
        }
    }
}

/// Render the plain-text WhatsApp order message.
pub fn build_whatsapp_message(
    config: &ShopConfig,
    contact: &CheckoutContact,
    order: &PricedOrder,
) -> Result<String, CheckoutError> {
    let context = MessageContext::new(config, contact, order);
    let handlebars = Handlebars::new();
    Ok(handlebars.render_template(WHATSAPP_TEMPLATE, &context)?)
}

/// Build the `wa.me` redirect URL carrying the order message.
///
/// # Errors
///
/// [`CheckoutError::WhatsAppNotConfigured`] when the configured number has
/// no digits.
pub fn build_whatsapp_redirect(
    config: &ShopConfig,
    contact: &CheckoutContact,
    order: &PricedOrder,
) -> Result<String, CheckoutError> {
    let digits = config
        .whatsapp_digits()
        .ok_or(CheckoutError::WhatsAppNotConfigured)?;

    let message = build_whatsapp_message(config, contact, order)?;
    let encoded = utf8_percent_encode(&message, NON_ALPHANUMERIC);
    Ok(format!("https://wa.me/{digits}?text={encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (ShopConfig, CheckoutContact, PricedOrder) {
        let config = ShopConfig {
            whatsapp_number: Some("+1 (555) 010-0000".to_string()),
            ..Default::default()
        };
        let contact = CheckoutContact {
            name: "Robin Baker".to_string(),
            email: Some("robin@example.com".to_string()),
            phone: "555-867-5309".to_string(),
            address: "12 Flour Street".to_string(),
            notes: None,
        };
        let order = PricedOrder {
            lines: vec![OrderLine {
                product_title: "Croissant".to_string(),
                variation_name: "Plain".to_string(),
                price_cents: 350,
                quantity: 2,
            }],
            total_cents: 700,
        };
        (config, contact, order)
    }

    #[test]
    fn test_message_contains_order_summary() {
        let (config, contact, order) = fixture();
        let message = build_whatsapp_message(&config, &contact, &order).unwrap();

        assert!(message.starts_with("Hi! I'd love to order from Mundough."));
        assert!(message.contains("Name: Robin Baker"));
        assert!(message.contains("Email: robin@example.com"));
        assert!(message.contains("\u{2022} 2 x Croissant (Plain) - $3.50"));
        assert!(message.contains("Total: $7.00"));
        assert!(message.contains("Sent from mundough.com"));
    }

    #[test]
    fn test_message_omits_absent_optionals() {
        let (config, mut contact, order) = fixture();
        contact.email = None;
        let message = build_whatsapp_message(&config, &contact, &order).unwrap();

        assert!(!message.contains("Email:"));
        assert!(!message.contains("Notes:"));
    }

    #[test]
    fn test_redirect_targets_stripped_digits() {
        let (config, contact, order) = fixture();
        let url = build_whatsapp_redirect(&config, &contact, &order).unwrap();

        assert!(url.starts_with("https://wa.me/15550100000?text="), "got {url}");
        // Spaces and punctuation must be escaped
        assert!(!url.contains(' '));
        assert!(url.contains("Robin%20Baker"));
    }

    #[test]
    fn test_redirect_requires_whatsapp_number() {
        let (mut config, contact, order) = fixture();
        config.whatsapp_number = None;
        let result = build_whatsapp_redirect(&config, &contact, &order);
        assert!(matches!(result, Err(CheckoutError::WhatsAppNotConfigured)));
    }
}
