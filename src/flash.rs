//! One-shot flash messages carried in a cookie across a redirect.
//!
//! Write handlers that redirect (edit submissions) set the cookie; the next
//! page render takes it and clears it. Handlers that render their response
//! directly pass the [`Flash`] inline instead.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

const FLASH_COOKIE: &str = "gigboard_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        let tag = match self.level {
            FlashLevel::Success => "ok",
            FlashLevel::Error => "err",
        };
        format!("{}|{}", tag, urlencoding::encode(&self.message))
    }

    fn decode(raw: &str) -> Self {
        let (tag, rest) = raw.split_once('|').unwrap_or(("ok", raw));
        let message = urlencoding::decode(rest)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| rest.to_string());
        let level = if tag == "err" {
            FlashLevel::Error
        } else {
            FlashLevel::Success
        };
        Self { level, message }
    }
}

/// Store a flash message for the next request.
pub fn set(jar: CookieJar, flash: Flash) -> CookieJar {
    let mut cookie = Cookie::new(FLASH_COOKIE, flash.encode());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    jar.add(cookie)
}

/// Take the pending flash message, clearing the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let flash = Flash::decode(cookie.value());
            let mut removal = Cookie::from(FLASH_COOKIE);
            removal.set_path("/");
            (jar.remove(removal), Some(flash))
        }
        None => (jar, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_message_with_spaces_and_punctuation() {
        let flash = Flash::success("Venue The Musical Hop was successfully listed!");
        assert_eq!(Flash::decode(&flash.encode()), flash);
    }

    #[test]
    fn round_trips_error_level() {
        let flash = Flash::error("An error occurred.");
        let decoded = Flash::decode(&flash.encode());
        assert_eq!(decoded.level, FlashLevel::Error);
        assert_eq!(decoded.message, "An error occurred.");
    }

    #[test]
    fn set_then_take_clears_the_cookie() {
        let jar = set(CookieJar::new(), Flash::success("created"));
        let (jar, flash) = take(jar);
        assert_eq!(flash.unwrap().message, "created");
        assert!(jar.get(FLASH_COOKIE).map(|c| c.value().is_empty()).unwrap_or(true));
    }
}
