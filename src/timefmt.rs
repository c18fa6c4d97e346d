//! Timestamp display for message groups and the chat list.
//!
//! Times and dates follow the user's locale: the short time is the locale's
//! `T_FMT` without seconds, the short date is its `D_FMT`.

use std::fmt::Display;

use chrono::{DateTime, Local, Locale, TimeZone};
use once_cell::sync::Lazy;
use pure_rust_locales::locale_match;

static SYSTEM_LOCALE: Lazy<Locale> = Lazy::new(|| {
    let tag = sys_locale::get_locale();
    let locale = tag.as_deref().and_then(parse_locale).unwrap_or(Locale::POSIX);
    tracing::debug!(?tag, ?locale, "timestamp locale");
    locale
});

/// Source of "now" for timestamp formatting.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a single instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Locale of the running system, `POSIX` when it cannot be determined.
pub fn system_locale() -> Locale {
    *SYSTEM_LOCALE
}

/// Map a platform locale tag (`de-DE`, `de_DE.UTF-8`, `fr`, `C`) to a `Locale`.
pub fn parse_locale(tag: &str) -> Option<Locale> {
    let name = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    if name.is_empty() || name == "C" || name == "POSIX" {
        return Some(Locale::POSIX);
    }
    if let Ok(locale) = Locale::try_from(name.as_str()) {
        return Some(locale);
    }
    // Bare language: try its home region ("fr" -> "fr_FR").
    if !name.contains('_') {
        let regional = format!("{}_{}", name, name.to_uppercase());
        return Locale::try_from(regional.as_str()).ok();
    }
    None
}

/// The locale's short date pattern.
pub fn short_date_pattern(locale: Locale) -> &'static str {
    let d_fmt = locale_match!(locale => LC_TIME::D_FMT);
    if d_fmt.is_empty() {
        "%Y-%m-%d"
    } else {
        d_fmt
    }
}

/// The locale's time pattern with the seconds field removed.
pub fn short_time_pattern(locale: Locale) -> String {
    let t_fmt = locale_match!(locale => LC_TIME::T_FMT);
    if t_fmt.is_empty() {
        "%H:%M".to_string()
    } else {
        strip_seconds(t_fmt)
    }
}

fn strip_seconds(t_fmt: &str) -> String {
    let expanded = t_fmt.replace("%T", "%H:%M:%S").replace("%r", "%I:%M:%S %p");
    let Some(pos) = expanded.find("%S") else {
        return expanded;
    };
    let (head, tail) = (&expanded[..pos], &expanded[pos + 2..]);

    match head.chars().next_back() {
        // "%H:%M:%S" drops the separator before the seconds
        Some(sep) if sep.is_ascii_punctuation() && sep != '%' => {
            format!("{}{}", &head[..head.len() - sep.len_utf8()], tail)
        }
        // "%H時%M分%S秒" drops the unit after them
        _ => {
            let rest = tail.trim_start_matches(|c: char| c != '%' && !c.is_whitespace());
            format!("{head}{rest}")
        }
    }
}

/// Short time when `ts` is on the same calendar day as `now`, otherwise the
/// short date, both in the system locale.
pub fn format_timestamp<Tz>(ts: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_timestamp_in(ts, now, system_locale())
}

/// `format_timestamp` for an explicit locale.
pub fn format_timestamp_in<Tz>(ts: &DateTime<Tz>, now: &DateTime<Tz>, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if ts.date_naive() == now.date_naive() {
        ts.format_localized(&short_time_pattern(locale), locale).to_string()
    } else {
        ts.format_localized(short_date_pattern(locale), locale).to_string()
    }
}

/// Format against the given clock, in local time and the system locale.
pub fn format_with_clock(ts: &DateTime<Local>, clock: &impl Clock) -> String {
    format_timestamp(ts, &clock.now())
}
