#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://aitoma.ai"
}

pub const BOOKING_URL: &str = "https://cal.com/aitoma.ai/45discovery-aitoma";
pub const CONTACT_EMAIL: &str = "hello@aitoma.ai";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/aitoma.ai";

pub const BRAND_NAME: &str = "Aitoma";
pub const COMPANY_NAME: &str = "Filtroo Oü";
pub const COMPANY_ADDRESS: [&str; 3] = [
    "Tööstuse tn 48, 10416",
    "Põhja-Tallinna linnaosa, Tallinn",
    "Estonia",
];
pub const TAGLINE: &str = "Designing intelligence, not just installing it.";
pub const LEGAL_LAST_UPDATED: &str = "February 12, 2026";
pub const COPYRIGHT: &str = "© 2024 Aitoma Intelligence Lab";
