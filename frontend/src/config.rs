use log::Level;

const DEFAULT_WEBHOOK_URL: &str = "https://hook.eu2.make.com/9bgn1tqn4k8r1t942j1na8l7eb4g38vk";
const DEFAULT_RECAPTCHA_SITE_KEY: &str = "6LdZSuMqAAAAACxLSkJ8KgkthaLrFcqLDs2VKX_X";

/// Tag attached to every lead so the automation can tell where it came from.
pub const LEAD_SOURCE: &str = "website_form";
/// reCAPTCHA action label used for the lead form.
pub const SUBMIT_ACTION: &str = "submit";

/// Delay before the promotional popup opens on its own.
pub const POPUP_DELAY_MS: u32 = 60_000;
/// Length of the popup fade-out; the form is reset when it ends.
pub const CLOSE_TRANSITION_MS: u32 = 1_000;

pub const PRIVACY_POLICY_URL: &str = "https://www.audifonosgranviabilbao.com/politica-de-privacidad";

// Both can be swapped at build time, e.g. `LEAD_WEBHOOK_URL=... trunk build --release`.
pub fn get_webhook_url() -> &'static str {
    option_env!("LEAD_WEBHOOK_URL").unwrap_or(DEFAULT_WEBHOOK_URL)
}

pub fn get_recaptcha_site_key() -> &'static str {
    option_env!("RECAPTCHA_SITE_KEY").unwrap_or(DEFAULT_RECAPTCHA_SITE_KEY)
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
