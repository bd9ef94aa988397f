//! Shop profile and payment links
//!
//! Static facts about the shop shown across the page, plus the builders for
//! the UPI deep link and the QR code image that encodes it.

/// Shop and brand name
pub const SHOP_NAME: &str = "Deepak Devadiga";

/// Owner shown on the hero chip and in the footer
pub const OWNER_NAME: &str = "Deepak Devadiga";

/// Year the shop opened
pub const SINCE_YEAR: u16 = 2026;

/// Street address
pub const LOCATION: &str = "Kappinadka, Gandinagara, Thenkakaranduru";

/// Opening hours line
pub const OPENING_HOURS: &str = "Mon - Sun: 8:00 AM - 9:00 PM";

/// Contact phone number
pub const PHONE: &str = "+91 82961 39353";

/// Merchant UPI virtual payment address
pub const UPI_ID: &str = "deepak.devadiga@upi";

/// Payee name registered with the UPI handle
pub const UPI_PAYEE_NAME: &str = "Deepak Tevarika";

/// Currency code for UPI payment links
pub const UPI_CURRENCY: &str = "INR";

/// Edge length of the generated QR image, in pixels
pub const QR_SIZE: u32 = 240;

/// QR code generation service
pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Hero background image
pub const HERO_IMAGE: &str = "https://picsum.photos/seed/grocery/1200/1200?blur=2";

/// UPI apps shown under the QR code
pub const UPI_APPS: [&str; 3] = ["GPay", "Paytm", "PhonePe"];

/// Social chips shown in the footer
pub const SOCIAL_LINKS: [&str; 3] = ["FB", "IG", "WA"];

/// Benefits listed in the payment section
pub const PAYMENT_BENEFITS: [&str; 4] = [
    "Instant payment confirmation",
    "No hidden charges or convenience fees",
    "Secure and encrypted transactions",
    "Support for all major UPI providers",
];

/// A UPI payment request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpiPayment<'a> {
    /// Payee address (`pa`)
    pub payee_address: &'a str,
    /// Payee name (`pn`)
    pub payee_name: &'a str,
    /// Currency (`cu`)
    pub currency: &'a str,
}

impl Default for UpiPayment<'static> {
    fn default() -> Self {
        Self::merchant()
    }
}

impl UpiPayment<'static> {
    /// The shop's own merchant payment request
    pub fn merchant() -> Self {
        Self {
            payee_address: UPI_ID,
            payee_name: UPI_PAYEE_NAME,
            currency: UPI_CURRENCY,
        }
    }
}

impl UpiPayment<'_> {
    /// The `upi://pay` deep link
    pub fn uri(&self) -> String {
        format!(
            "upi://pay?pa={}&pn={}&cu={}",
            self.payee_address,
            urlencoding::encode(self.payee_name),
            self.currency
        )
    }

    /// URL of a QR code image encoding [`Self::uri`]
    pub fn qr_image_url(&self, size: u32) -> String {
        format!(
            "{}?size={}x{}&data={}",
            QR_SERVICE_URL,
            size,
            size,
            urlencoding::encode(&self.uri())
        )
    }
}

/// Copyright line for the footer
pub fn copyright_line() -> String {
    format!(
        "© {} {} Grocery Shop. All Rights Reserved.",
        SINCE_YEAR, SHOP_NAME
    )
}
