//! Contact details of the office, shared by every page.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    /// Trading name shown in headings and the footer.
    pub name: String,
    /// WhatsApp number, digits only with country code.
    pub whatsapp: String,
    pub email: String,
    /// Phone number as displayed to visitors.
    pub phone: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Exata Contabilidade".to_string(),
            whatsapp: "5531990726579".to_string(),
            email: "contato@exatacontabilidade.com.br".to_string(),
            phone: "(31) 99072-6579".to_string(),
        }
    }
}

impl SiteInfo {
    /// `wa.me` link for the WhatsApp number. Non-digits are dropped.
    pub fn whatsapp_url(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{}", digits)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
