/// Размер тела ответа для журнала запросов: разделители тысяч точками и единица
///
/// ```text
/// format_body_size(1234567) == "1.234.567 B"
/// format_body_size(0) == "0 B"
/// ```
pub fn format_body_size(bytes: usize) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{} B", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_body_size() {
        assert_eq!(format_body_size(0), "0 B");
        assert_eq!(format_body_size(999), "999 B");
        assert_eq!(format_body_size(1000), "1.000 B");
        assert_eq!(format_body_size(123456), "123.456 B");
        assert_eq!(format_body_size(1234567), "1.234.567 B");
    }
}
