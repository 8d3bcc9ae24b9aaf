//! Поиск и сортировка списка накладных на клиенте

use chrono::{DateTime, Local, Utc};
use std::cmp::Ordering;

use super::aggregate::Invoice;
use crate::shared::parse_date_like;

/// Ключ сортировки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Date,
    Name,
    Price,
}

impl SortKey {
    pub fn all() -> [SortKey; 3] {
        [SortKey::Date, SortKey::Name, SortKey::Price]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Name => "name",
            Self::Price => "price",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Invoice date",
            Self::Name => "Item name",
            Self::Price => "Price",
        }
    }

    /// Обратное к [`SortKey::key`]; пустая или неизвестная строка дают None (без сортировки)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.key() == key)
    }
}

/// Совпадение с поисковой строкой: название без учёта регистра
/// или подстрока сырой даты накладной
pub fn matches_search(invoice: &Invoice, query: &str) -> bool {
    invoice
        .item_name
        .to_lowercase()
        .contains(&query.to_lowercase())
        || invoice.invoice_date.contains(query)
}

/// Отфильтровать с сохранением порядка сервера
pub fn filter_invoices(invoices: &[Invoice], query: &str) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|invoice| matches_search(invoice, query))
        .cloned()
        .collect()
}

/// Стабильная сортировка; `None` оставляет порядок сервера.
/// Непарсируемые даты уходят в конец.
pub fn sort_invoices(invoices: &mut [Invoice], key: Option<SortKey>) {
    let Some(key) = key else {
        return;
    };
    match key {
        SortKey::Date => invoices.sort_by(|a, b| {
            let a = parse_date_like(&a.invoice_date, &Local);
            let b = parse_date_like(&b.invoice_date, &Local);
            match (a, b) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        SortKey::Name => {
            invoices.sort_by_cached_key(|invoice| invoice.item_name.to_lowercase())
        }
        SortKey::Price => invoices.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
}

/// Строки таблицы: фильтр, затем сортировка
pub fn visible_rows(invoices: &[Invoice], query: &str, key: Option<SortKey>) -> Vec<Invoice> {
    let mut rows = filter_invoices(invoices, query);
    sort_invoices(&mut rows, key);
    rows
}

pub fn expired_invoices(invoices: &[Invoice], now: DateTime<Utc>) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|invoice| invoice.is_expired_at(now))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::InvoiceId;
    use chrono::Duration;

    fn invoice(id: &str, name: &str, date: &str, price: f64, expiry: &str) -> Invoice {
        Invoice {
            id: InvoiceId::new(id),
            invoice_number: format!("INV-{}", id),
            invoice_date: date.to_string(),
            item_name: name.to_string(),
            price,
            expiry_date: expiry.to_string(),
            done: false,
        }
    }

    fn sample() -> Vec<Invoice> {
        vec![
            invoice("1", "Milk", "2024-03-15", 50.0, "2099-01-01"),
            invoice("2", "Soap", "2024-02-01", 20.0, "2000-01-01"),
            invoice("3", "Almond milk", "2024-03-02", 120.0, "2099-01-01"),
        ]
    }

    fn ids(rows: &[Invoice]) -> Vec<&str> {
        rows.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        assert_eq!(ids(&filter_invoices(&sample(), "MILK")), vec!["1", "3"]);
    }

    #[test]
    fn test_search_by_raw_date() {
        assert_eq!(ids(&filter_invoices(&sample(), "2024-03")), vec!["1", "3"]);
        assert_eq!(ids(&filter_invoices(&sample(), "02-01")), vec!["2"]);
    }

    #[test]
    fn test_empty_search_keeps_everything_in_order() {
        let all = sample();
        assert_eq!(filter_invoices(&all, ""), all);
    }

    #[test]
    fn test_single_record_fresh_expiry() {
        let now = Utc::now();
        let in_three_days = (now + Duration::days(3)).to_rfc3339();
        let rows = vec![invoice("1", "Milk", "2024-03-15", 50.0, &in_three_days)];

        let shown = filter_invoices(&rows, "milk");
        assert_eq!(shown.len(), 1);
        assert!(!shown[0].highlights_row_at(now));
        assert!(filter_invoices(&rows, "soap").is_empty());
    }

    #[test]
    fn test_single_record_expiring_tomorrow() {
        use crate::domain::a001_invoice::ExpiryStatus;

        let local_now = Local::now();
        let now = local_now.with_timezone(&Utc);
        let tomorrow = (local_now.date_naive() + Duration::days(1))
            .format("%Y-%m-%d")
            .to_string();
        let rows = vec![invoice("1", "Milk", "2024-03-15", 50.0, &tomorrow)];

        let shown = filter_invoices(&rows, "milk");
        assert_eq!(shown.len(), 1);
        assert!(filter_invoices(&rows, "soap").is_empty());

        let milk = &shown[0];
        assert!(!milk.is_expired_at(now));
        assert_eq!(milk.expiry_status_at(now), ExpiryStatus::ExpiringSoon);
        assert_ne!(milk.expiry_status_at(now).label(), ExpiryStatus::Expired.label());
        assert!(milk.highlights_row_at(now));
    }

    #[test]
    fn test_sort_keys() {
        let mut rows = sample();
        sort_invoices(&mut rows, Some(SortKey::Price));
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);

        sort_invoices(&mut rows, Some(SortKey::Name));
        assert_eq!(ids(&rows), vec!["3", "1", "2"]);

        sort_invoices(&mut rows, Some(SortKey::Date));
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_none_and_invalid_dates() {
        let mut rows = sample();
        sort_invoices(&mut rows, None);
        assert_eq!(ids(&rows), vec!["1", "2", "3"]);

        rows[0].invoice_date = "unknown".into();
        sort_invoices(&mut rows, Some(SortKey::Date));
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_key(key.key()), Some(key));
        }
        assert_eq!(SortKey::from_key(""), None);
    }

    #[test]
    fn test_visible_rows_and_expired() {
        let rows = visible_rows(&sample(), "milk", Some(SortKey::Price));
        assert_eq!(ids(&rows), vec!["1", "3"]);
        assert_eq!(ids(&expired_invoices(&sample(), Utc::now())), vec!["2"]);
    }
}
