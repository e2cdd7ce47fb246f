//! WhatsApp deep links.
//!
//! The storefront never sends anything itself: every call to action is a
//! link that opens the messaging app with a prefilled message.

use core::fmt;

use crate::types::{Product, SiteContent};

/// Base URL of the messaging service.
const WHATSAPP_BASE: &str = "https://wa.me";

/// A prefilled message link to the shop's WhatsApp number.
///
/// ## Examples
///
/// ```
/// use luxe_core::ContactLink;
///
/// let link = ContactLink::new("+62 812-3456", Some("Halo, apa kabar?"));
/// assert_eq!(link.url(), "https://wa.me/628123456?text=Halo%2C%20apa%20kabar%3F");
///
/// let bare = ContactLink::new("628123456", None);
/// assert_eq!(bare.url(), "https://wa.me/628123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    number: String,
    message: Option<String>,
}

impl ContactLink {
    /// Build a link. Everything but digits is stripped from the number.
    #[must_use]
    pub fn new(number: &str, message: Option<&str>) -> Self {
        Self {
            number: number.chars().filter(char::is_ascii_digit).collect(),
            message: message.map(str::to_owned),
        }
    }

    /// Link that orders a specific product.
    #[must_use]
    pub fn order(site: &SiteContent, product: &Product) -> Self {
        Self::new(
            &site.whatsapp_number,
            Some(&format!("Halo, saya ingin memesan {}", product.name)),
        )
    }

    /// Link for a general enquiry (floating chat button).
    #[must_use]
    pub fn enquiry(site: &SiteContent) -> Self {
        Self::new(&site.whatsapp_number, Some("Halo, saya ingin bertanya sesuatu."))
    }

    /// Link asking about the brand's products (collection section).
    #[must_use]
    pub fn product_enquiry(site: &SiteContent) -> Self {
        Self::new(
            &site.whatsapp_number,
            Some(&format!(
                "Halo, saya ingin bertanya mengenai produk {}",
                site.brand_name
            )),
        )
    }

    /// Link for a free consultation (hero call to action).
    #[must_use]
    pub fn consultation(site: &SiteContent) -> Self {
        Self::new(
            &site.whatsapp_number,
            Some(&format!(
                "Halo, saya ingin konsultasi gratis mengenai produk {}",
                site.brand_name
            )),
        )
    }

    /// The numeric contact id the link targets.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// The full deep link URL with the message percent-encoded.
    #[must_use]
    pub fn url(&self) -> String {
        match &self.message {
            Some(message) => format!(
                "{WHATSAPP_BASE}/{}?text={}",
                self.number,
                urlencoding::encode(message)
            ),
            None => format!("{WHATSAPP_BASE}/{}", self.number),
        }
    }
}

impl fmt::Display for ContactLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
