//! # 时间编解码
//!
//! TTML 中的时间戳字符串与浮点秒数之间的互相转换。
//!
//! 解析是宽松的：每个以冒号分隔的片段只取开头的数字部分（`"12.5s"` 会被解析为 `12.5`），
//! 无法解析的片段得到 `NaN` 并参与后续运算，而不是报错。
//! 格式化的输出固定为 `mm:ss.fff`，小时会折叠进分钟字段，
//! 因此对于 `hh:mm:ss` 输入，`format_time(parse_time(x))` 不是恒等变换。

/// 传给 [`parse_time`] 的时间值。
///
/// 可以是待解析的时间字符串，也可以是已经换算好的秒数。
/// 秒数会被原样返回，这样调用方无需事先判断某个值是否还需要解析。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeValue<'a> {
    /// `ss[.fff]`、`mm:ss[.fff]` 或 `hh:mm:ss[.fff]` 格式的时间字符串。
    Text(&'a str),
    /// 已经是秒数的值。
    Seconds(f64),
}

impl<'a> From<&'a str> for TimeValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for TimeValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for TimeValue<'_> {
    fn from(value: f64) -> Self {
        Self::Seconds(value)
    }
}

impl From<f32> for TimeValue<'_> {
    fn from(value: f32) -> Self {
        Self::Seconds(f64::from(value))
    }
}

impl From<i32> for TimeValue<'_> {
    fn from(value: i32) -> Self {
        Self::Seconds(f64::from(value))
    }
}

impl From<u32> for TimeValue<'_> {
    fn from(value: u32) -> Self {
        Self::Seconds(f64::from(value))
    }
}

/// 将时间字符串解析为秒数。
///
/// * 1 个片段：`ss` → 秒
/// * 2 个片段：`mm:ss` → `mm * 60 + ss`
/// * 3 个片段：`hh:mm:ss` → `hh * 3600 + mm * 60 + ss`
/// * 其他数量的片段：`0`
///
/// 非字符串输入（[`TimeValue::Seconds`]）原样返回。
///
/// # 示例
///
/// ```rust
/// use ttml_lyrics::parse_time;
///
/// assert_eq!(parse_time("01:02.500"), 62.5);
/// assert_eq!(parse_time("1:01:02.500"), 3662.5);
/// assert_eq!(parse_time(62.5), 62.5);
/// assert_eq!(parse_time("1:2:3:4"), 0.0);
/// ```
pub fn parse_time<'a>(time: impl Into<TimeValue<'a>>) -> f64 {
    let text = match time.into() {
        TimeValue::Text(text) => text,
        TimeValue::Seconds(seconds) => return seconds,
    };

    let parts: Vec<f64> = text.split(':').map(parse_float_prefix).collect();
    match parts.as_slice() {
        [seconds] => *seconds,
        [minutes, seconds] => minutes * 60.0 + seconds,
        [hours, minutes, seconds] => hours * 3600.0 + minutes * 60.0 + seconds,
        _ => 0.0,
    }
}

/// 将秒数格式化为 `mm:ss.fff`。
///
/// 分钟与秒的整数部分分别补零到两位。超过 99 分钟时分钟字段会继续变宽，
/// 不会拆出小时字段。
///
/// # 示例
///
/// ```rust
/// use ttml_lyrics::format_time;
///
/// assert_eq!(format_time(62.5), "01:02.500");
/// assert_eq!(format_time(3662.5), "61:02.500");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    // `+ 0.0` 把 -0.0 规范化为 0.0
    let minutes = (seconds / 60.0).floor() + 0.0;
    let secs = format!("{:.3}", seconds % 60.0 + 0.0);
    format!("{}:{}", pad_zero(&minutes.to_string()), pad_zero(&secs))
}

/// 将小数点前的部分补零到两位，小数部分保持不变。
fn pad_zero(value: &str) -> String {
    match value.split_once('.') {
        Some((int_part, frac_part)) => format!("{int_part:0>2}.{frac_part}"),
        None => format!("{value:0>2}"),
    }
}

/// 解析字符串开头的十进制浮点数，忽略其后的任何内容。
///
/// 开头的空白会被跳过。找不到任何数字时返回 `NaN`。
fn parse_float_prefix(text: &str) -> f64 {
    fn count_digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("5"), 5.0);
        assert_eq!(parse_time("7.123"), 7.123);
        assert_eq!(parse_time("01:02.500"), 62.5);
        assert_eq!(parse_time("1:2.5"), 62.5);
        assert_eq!(parse_time("1:01:02.500"), 3662.5);
        assert_eq!(parse_time("00:00:00.000"), 0.0);
        assert_eq!(parse_time("1:2:3:4"), 0.0);
    }

    #[test]
    fn test_parse_time_lenient_fragments() {
        assert_eq!(parse_time("12.5s"), 12.5);
        assert_eq!(parse_time(" 3"), 3.0);
        assert_eq!(parse_time("1:05s"), 65.0);
        assert!(parse_time("abc").is_nan());
        assert!(parse_time("").is_nan());
        assert!(parse_time("1:xx").is_nan());
        assert!(parse_time(".").is_nan());
    }

    #[test]
    fn test_parse_time_passes_numbers_through() {
        assert_eq!(parse_time(62.5), 62.5);
        assert_eq!(parse_time(7), 7.0);
        assert_eq!(parse_time(1.5_f32), 1.5);
        assert!(parse_time(f64::NAN).is_nan());

        let owned = String::from("00:10.000");
        assert_eq!(parse_time(&owned), 10.0);
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("42"), 42.0);
        assert_eq!(parse_float_prefix("-1.5abc"), -1.5);
        assert_eq!(parse_float_prefix("+.5"), 0.5);
        assert_eq!(parse_float_prefix("5."), 5.0);
        assert_eq!(parse_float_prefix("1e3s"), 1000.0);
        assert_eq!(parse_float_prefix("2e"), 2.0);
        assert_eq!(parse_float_prefix("Infinity"), f64::INFINITY);
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("s").is_nan());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00.000");
        assert_eq!(format_time(0.5), "00:00.500");
        assert_eq!(format_time(62.5), "01:02.500");
        assert_eq!(format_time(59.999), "00:59.999");
        assert_eq!(format_time(600.0), "10:00.000");
        assert_eq!(format_time(-0.0), "00:00.000");
    }

    #[test]
    fn test_format_time_keeps_hours_in_minutes() {
        assert_eq!(format_time(3662.5), "61:02.500");
        assert_eq!(format_time(6000.25), "100:00.250");
        assert_eq!(format_time(parse_time("1:01:02.500")), "61:02.500");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for input in ["00:00.000", "01:02.500", "03:59.125", "12:00.001"] {
            assert_eq!(format_time(parse_time(input)), input);
        }
        assert_eq!(format_time(parse_time("1:2.5")), "01:02.500");
    }

    #[test]
    fn test_format_time_nan() {
        assert_eq!(format_time(f64::NAN), "NaN:NaN");
    }
}
