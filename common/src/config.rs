//! Fixed site configuration shared by the order page and the static host.
//!
//! The contact address doubles as the recipient of every order handoff; none of
//! these values ever come from user input.

/// Address that receives order requests and the plain contact links.
pub const CONTACT_EMAIL: &str = "contact@bois-et-saveurs.fr";

/// Phone number as printed on the page.
pub const CONTACT_PHONE_DISPLAY: &str = "+33 7 65 15 49 65";

/// Dial link for [`CONTACT_PHONE_DISPLAY`].
pub const CONTACT_PHONE_URI: &str = "tel:+33765154965";

/// Path prefix the site is published under.
pub const BASE_PATH: &str = "/Bois_Saveurs";

/// Pause between starting the mail handoff and flagging the submission as done.
pub const SUBMIT_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub contact_email: String,
    pub contact_phone_display: String,
    pub contact_phone_uri: String,
    pub base_path: String,
    pub submit_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: CONTACT_EMAIL.to_string(),
            contact_phone_display: CONTACT_PHONE_DISPLAY.to_string(),
            contact_phone_uri: CONTACT_PHONE_URI.to_string(),
            base_path: BASE_PATH.to_string(),
            submit_delay_ms: SUBMIT_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Prefixes the base path onto an asset path such as `/images/foo.jpeg`.
    ///
    /// Absolute URLs are returned untouched, and a missing leading slash is added.
    pub fn image_path(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_path.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Plain `mailto:` link with no subject or body.
    pub fn contact_mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_path_prefixes_base_path() {
        let config = SiteConfig::default();
        assert_eq!(
            config.image_path("/images/Planche_120cm_1.jpeg"),
            "/Bois_Saveurs/images/Planche_120cm_1.jpeg"
        );
        assert_eq!(config.image_path("images/a.png"), "/Bois_Saveurs/images/a.png");
    }

    #[test]
    fn image_path_handles_root_base_path_and_absolute_urls() {
        let config = SiteConfig {
            base_path: "/".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.image_path("/images/a.png"), "/images/a.png");
        assert_eq!(
            config.image_path("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn contact_links_use_fixed_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.contact_mailto(), "mailto:contact@bois-et-saveurs.fr");
        assert_eq!(config.contact_phone_uri, "tel:+33765154965");
        assert_eq!(config.submit_delay_ms, 1000);
    }
}
