use serde::{Deserialize, Serialize};

/// Default public-facing shop name
pub fn default_site_name() -> String {
    "Mundough".to_string()
}

/// Default host shown in the checkout message footer
pub fn default_site_host() -> String {
    "mundough.com".to_string()
}

/// Shop configuration, deserialized from `.bakeshop/config.toml`.
///
/// All fields are optional at the TOML level; missing fields resolve to their
/// defaults. Secrets (the admin PIN hash) are usually supplied through the
/// `BAKESHOP_*` environment overrides instead of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Public-facing shop name used in order messages.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Host shown in the checkout message footer.
    #[serde(default = "default_site_host")]
    pub site_host: String,

    /// SHA-256 hex digest of the admin PIN. `None` disables all admin
    /// mutations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_pin_hash: Option<String>,

    /// WhatsApp number orders are handed off to (free-form; non-digits are
    /// stripped when building the redirect).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,

    /// Sender address for the checkout notification email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_from_email: Option<String>,

    /// Recipient address for the checkout notification email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_notification_email: Option<String>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            site_host: default_site_host(),
            admin_pin_hash: None,
            whatsapp_number: None,
            checkout_from_email: None,
            checkout_notification_email: None,
        }
    }
}

impl ShopConfig {
    /// Whether both email endpoints are configured.
    #[must_use]
    pub fn is_email_configured(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.checkout_from_email) && present(&self.checkout_notification_email)
    }

    /// The configured WhatsApp number reduced to its digits, or `None` when
    /// no digits remain.
    #[must_use]
    pub fn whatsapp_digits(&self) -> Option<String> {
        let digits: String = self
            .whatsapp_number
            .as_deref()
            .unwrap_or("")
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }
}
