//! Данные для столбчатых диаграмм цен

use chrono::{DateTime, Utc};

use super::aggregate::Invoice;
use super::query::expired_invoices;
use crate::shared::format_date;

/// Серия столбцов одного цвета
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: String,
    pub fill: String,
    pub stroke: String,
    /// По значению на каждую подпись оси X; `None` значит столбца нет
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub series: Vec<BarSeries>,
}

impl BarChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Максимальное значение по всем сериям (0, если столбцов нет)
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .fold(0.0_f64, |acc, v| acc.max(*v))
    }

    pub fn total(&self, series_index: usize) -> f64 {
        self.series
            .get(series_index)
            .map(|s| s.values.iter().flatten().sum())
            .unwrap_or(0.0)
    }
}

/// Цены выполненных и ожидающих накладных по дате накладной
pub fn price_trend_chart(invoices: &[Invoice]) -> BarChartData {
    let labels = invoices
        .iter()
        .map(|invoice| format_date(&invoice.invoice_date))
        .collect();
    let done = invoices
        .iter()
        .map(|invoice| invoice.done.then_some(invoice.price))
        .collect();
    let pending = invoices
        .iter()
        .map(|invoice| (!invoice.done).then_some(invoice.price))
        .collect();

    BarChartData {
        labels,
        series: vec![
            BarSeries {
                label: "Done Invoices (₹)".into(),
                fill: "rgba(24, 246, 4, 0.5)".into(),
                stroke: "rgb(8, 250, 77)".into(),
                values: done,
            },
            BarSeries {
                label: "Pending Invoices (₹)".into(),
                fill: "rgba(255, 0, 0, 0.5)".into(),
                stroke: "rgb(114, 0, 0)".into(),
                values: pending,
            },
        ],
    }
}

/// Цены просроченных накладных по дате окончания срока
pub fn expired_chart(invoices: &[Invoice], now: DateTime<Utc>) -> BarChartData {
    let expired = expired_invoices(invoices, now);

    BarChartData {
        labels: expired
            .iter()
            .map(|invoice| format_date(&invoice.expiry_date))
            .collect(),
        series: vec![BarSeries {
            label: "Expired Invoices (₹)".into(),
            fill: "rgba(255, 20, 147, 0.5)".into(),
            stroke: "rgba(255, 20, 147, 1)".into(),
            values: expired.iter().map(|invoice| Some(invoice.price)).collect(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::InvoiceId;

    fn invoice(id: &str, price: f64, done: bool, date: &str, expiry: &str) -> Invoice {
        Invoice {
            id: InvoiceId::new(id),
            invoice_number: id.to_string(),
            invoice_date: date.to_string(),
            item_name: "Item".to_string(),
            price,
            expiry_date: expiry.to_string(),
            done,
        }
    }

    #[test]
    fn test_price_trend_splits_done_and_pending() {
        let invoices = vec![
            invoice("1", 50.0, true, "2024-03-15", "2099-01-01"),
            invoice("2", 20.0, false, "2024-03-16", "2099-01-01"),
            invoice("3", 70.0, false, "bad", "2099-01-01"),
        ];
        let chart = price_trend_chart(&invoices);

        assert_eq!(chart.labels, vec!["2024-03-15", "2024-03-16", "Invalid Date"]);
        assert_eq!(chart.series[0].values, vec![Some(50.0), None, None]);
        assert_eq!(chart.series[1].values, vec![None, Some(20.0), Some(70.0)]);
        assert_eq!(chart.total(0), 50.0);
        assert_eq!(chart.total(1), 90.0);
        assert_eq!(chart.max_value(), 70.0);
    }

    #[test]
    fn test_expired_chart_only_past_expiry() {
        let invoices = vec![
            invoice("1", 10.0, false, "2024-01-01", "2000-05-01"),
            invoice("2", 99.0, true, "2024-01-01", "2099-05-01"),
        ];
        let chart = expired_chart(&invoices, Utc::now());

        assert_eq!(chart.labels, vec!["2000-05-01"]);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].values, vec![Some(10.0)]);
    }

    #[test]
    fn test_empty_chart() {
        let chart = expired_chart(&[], Utc::now());
        assert!(chart.is_empty());
        assert_eq!(chart.max_value(), 0.0);
        assert_eq!(chart.total(5), 0.0);
    }
}
