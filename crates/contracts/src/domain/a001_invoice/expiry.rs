//! Классификация накладных по сроку годности
//!
//! Все функции чистые: текущее время передаётся параметром `now`,
//! обёртки без суффикса `_at` берут его из системных часов.
//! Непарсируемая дата никогда не считается просроченной.

use chrono::{DateTime, Duration, Local, Utc};

use super::aggregate::Invoice;
use crate::shared::parse_date_like;

/// Окно "скоро истекает"
pub const EXPIRING_SOON_WINDOW_HOURS: i64 = 24;

/// Статус срока годности (разбиение без пересечений, для бейджей)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Fresh,
    Unknown,
}

impl ExpiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expires soon",
            Self::Fresh => "OK",
            Self::Unknown => "Unknown",
        }
    }
}

fn expiry_instant(expiry_date: &str) -> Option<DateTime<Utc>> {
    parse_date_like(expiry_date, &Local)
}

/// Истёк ли срок: `expiry < now`
pub fn is_expired_at(expiry_date: &str, now: DateTime<Utc>) -> bool {
    expiry_instant(expiry_date).is_some_and(|expiry| expiry < now)
}

/// Истёк или истечёт в ближайшие 24 часа.
///
/// Просроченные записи тоже попадают сюда: строки таблицы подсвечиваются
/// одинаково для обоих случаев.
pub fn is_expiring_soon_at(expiry_date: &str, now: DateTime<Utc>) -> bool {
    let Some(expiry) = expiry_instant(expiry_date) else {
        return false;
    };
    expiry <= now
        || (expiry - now <= Duration::hours(EXPIRING_SOON_WINDOW_HOURS) && expiry > now)
}

pub fn expiry_status_at(expiry_date: &str, now: DateTime<Utc>) -> ExpiryStatus {
    match expiry_instant(expiry_date) {
        None => ExpiryStatus::Unknown,
        Some(expiry) if expiry < now => ExpiryStatus::Expired,
        Some(_) if is_expiring_soon_at(expiry_date, now) => ExpiryStatus::ExpiringSoon,
        Some(_) => ExpiryStatus::Fresh,
    }
}

pub fn is_expired(expiry_date: &str) -> bool {
    is_expired_at(expiry_date, Utc::now())
}

pub fn is_expiring_soon(expiry_date: &str) -> bool {
    is_expiring_soon_at(expiry_date, Utc::now())
}

impl Invoice {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        is_expired_at(&self.expiry_date, now)
    }

    /// Подсвечивать ли строку таблицы
    pub fn highlights_row_at(&self, now: DateTime<Utc>) -> bool {
        is_expiring_soon_at(&self.expiry_date, now)
    }

    pub fn expiry_status_at(&self, now: DateTime<Utc>) -> ExpiryStatus {
        expiry_status_at(&self.expiry_date, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_is_expired_is_strict() {
        let now = at("2024-03-15T12:00:00Z");
        assert!(is_expired_at("2024-03-15T11:59:59Z", now));
        assert!(!is_expired_at("2024-03-15T12:00:00Z", now));
        assert!(!is_expired_at("2024-03-16T12:00:00Z", now));
    }

    #[test]
    fn test_is_expired_is_monotonic_in_now() {
        let expiry = "2024-03-15T12:00:00Z";
        let mut seen_expired = false;
        for hour in 0..48 {
            let now = at("2024-03-14T00:00:00Z") + Duration::hours(hour);
            let expired = is_expired_at(expiry, now);
            assert!(!(seen_expired && !expired), "flipped back at hour {}", hour);
            seen_expired |= expired;
        }
        assert!(seen_expired);
    }

    #[test]
    fn test_expiring_soon_window() {
        let now = at("2024-03-15T12:00:00Z");
        assert!(is_expiring_soon_at("2024-03-16T12:00:00Z", now));
        assert!(is_expiring_soon_at("2024-03-15T18:00:00Z", now));
        assert!(!is_expiring_soon_at("2024-03-16T12:00:01Z", now));
    }

    #[test]
    fn test_expired_also_counts_as_expiring_soon() {
        let now = at("2024-03-15T12:00:00Z");
        assert!(is_expiring_soon_at("2024-03-01T00:00:00Z", now));
        assert!(is_expiring_soon_at("2024-03-15T12:00:00Z", now));
    }

    #[test]
    fn test_unparseable_expiry() {
        let now = at("2024-03-15T12:00:00Z");
        assert!(!is_expired_at("n/a", now));
        assert!(!is_expiring_soon_at("n/a", now));
        assert_eq!(expiry_status_at("n/a", now), ExpiryStatus::Unknown);
    }

    #[test]
    fn test_status_partition() {
        let now = at("2024-03-15T12:00:00Z");
        assert_eq!(expiry_status_at("2024-03-10T00:00:00Z", now), ExpiryStatus::Expired);
        assert_eq!(expiry_status_at("2024-03-15T20:00:00Z", now), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_status_at("2024-04-15T00:00:00Z", now), ExpiryStatus::Fresh);
    }

    #[test]
    fn test_wall_clock_wrappers() {
        let later = (Local::now() + Duration::days(3)).format("%Y-%m-%d").to_string();
        assert!(!is_expired(&later));
        assert!(!is_expiring_soon(&later));
        assert!(is_expired("2000-01-01"));
    }
}
