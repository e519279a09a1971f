//! Checkout flow: validate the visitor's contact details, price the cart
//! against the catalog, and hand the order off as a WhatsApp message plus an
//! optional notification email. No payment is taken here.

mod contact;
mod email;
mod message;
mod order;

pub use contact::{CheckoutContact, ContactError, ContactForm};
pub use email::{build_checkout_email, OutboundEmail};
pub use message::{build_whatsapp_message, build_whatsapp_redirect};
pub use order::{build_order, CheckoutError, OrderItemRequest, OrderLine, PricedOrder};
