use log::{debug, error};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Promise;

use crate::config;

#[wasm_bindgen]
extern "C" {
    // Provided by the reCAPTCHA v3 script loaded in index.html. `catch` turns a
    // missing `grecaptcha` global into an Err instead of a wasm trap.
    #[wasm_bindgen(catch, js_namespace = grecaptcha, js_name = execute)]
    fn grecaptcha_execute(site_key: &str, options: JsValue) -> Result<Promise, JsValue>;
}

#[derive(Serialize)]
struct ExecuteOptions<'a> {
    action: &'a str,
}

/// Source of proof-of-humanity tokens attached to each lead.
#[allow(async_fn_in_trait)]
pub trait ChallengeProvider {
    /// `None` on any provider failure. Never panics or propagates JS exceptions.
    async fn acquire_challenge_token(&self, action: &str) -> Option<String>;
}

pub struct Recaptcha {
    site_key: &'static str,
}

impl Recaptcha {
    pub fn new(site_key: &'static str) -> Self {
        Self { site_key }
    }
}

impl Default for Recaptcha {
    fn default() -> Self {
        Self::new(config::get_recaptcha_site_key())
    }
}

impl ChallengeProvider for Recaptcha {
    async fn acquire_challenge_token(&self, action: &str) -> Option<String> {
        let options = match serde_wasm_bindgen::to_value(&ExecuteOptions { action }) {
            Ok(options) => options,
            Err(e) => {
                error!("Failed to build reCAPTCHA options: {}", e);
                return None;
            }
        };

        let promise = match grecaptcha_execute(self.site_key, options) {
            Ok(promise) => promise,
            Err(e) => {
                error!("Error executing reCAPTCHA");
                gloo_console::error!("reCAPTCHA exception:", e);
                return None;
            }
        };

        match JsFuture::from(promise).await {
            Ok(value) => match value.as_string() {
                Some(token) if !token.is_empty() => {
                    debug!("reCAPTCHA token acquired for action '{}'", action);
                    Some(token)
                }
                _ => {
                    error!("reCAPTCHA resolved without a token");
                    None
                }
            },
            Err(e) => {
                error!("reCAPTCHA promise rejected");
                gloo_console::error!("reCAPTCHA rejection:", e);
                None
            }
        }
    }
}
