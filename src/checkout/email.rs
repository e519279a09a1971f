use super::contact::CheckoutContact;
use super::message::MessageContext;
use super::order::{CheckoutError, PricedOrder};
use crate::config::ShopConfig;
use handlebars::Handlebars;
use tracing::warn;

/// Plain-text body of the notification email.
const EMAIL_TEXT_TEMPLATE: &str = "\
New {{{site_name}}} cart submission

Name: {{{name}}}
{{#if email}}Email: {{{email}}}
{{/if}}Phone: {{{phone}}}
Address: {{{address}}}
{{#if notes}}Notes: {{{notes}}}
{{/if}}
Items:
{{#each lines}}{{{quantity}}} x {{{product_title}}} ({{{variation_name}}}) \u{2014} {{{price}}}
{{/each}}
Total: {{{total}}}";

/// HTML body. Double-stache here: customer-supplied fields must be
/// HTML-escaped.
const EMAIL_HTML_TEMPLATE: &str = r#"<div style="font-family: 'Segoe UI', sans-serif; color: #2f2117;">
  <h1>New {{site_name}} cart submission</h1>
  <p><strong>Name:</strong> {{name}}</p>
  {{#if email}}<p><strong>Email:</strong> {{email}}</p>{{/if}}
  <p><strong>Phone:</strong> {{phone}}</p>
  <p><strong>Address:</strong> {{address}}</p>
  {{#if notes}}<p><strong>Notes:</strong> {{notes}}</p>{{/if}}
  <h2>Items</h2>
  <ul>
    {{#each lines}}<li>{{quantity}} &times; <strong>{{product_title}}</strong> ({{variation_name}}) &mdash; {{price}}</li>{{/each}}
  </ul>
  <p><strong>Total:</strong> {{total}}</p>
</div>"#;

/// A fully built notification email, ready for whatever provider the caller
/// delivers with.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Build the checkout notification email.
///
/// Returns `Ok(None)` (with a warning log) when the email endpoints are not
/// configured; the checkout itself still succeeds in that case.
pub fn build_checkout_email(
    config: &ShopConfig,
    contact: &CheckoutContact,
    order: &PricedOrder,
) -> Result<Option<OutboundEmail>, CheckoutError> {
    let (Some(from), Some(to)) = (
        config.checkout_from_email.as_deref().filter(|s| !s.is_empty()),
        config
            .checkout_notification_email
            .as_deref()
            .filter(|s| !s.is_empty()),
    ) else {
        warn!("Checkout email skipped: email endpoints not configured");
        return Ok(None);
    };

    let context = MessageContext::new(config, contact, order);
    let handlebars = Handlebars::new();
    let text = handlebars.render_template(EMAIL_TEXT_TEMPLATE, &context)?;
    let html = handlebars.render_template(EMAIL_HTML_TEMPLATE, &context)?;

    Ok(Some(OutboundEmail {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!(
            "{} cart submission \u{2014} {}",
            config.site_name, contact.name
        ),
        text,
        html,
    }))
}
