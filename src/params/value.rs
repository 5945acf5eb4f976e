//! Parameter values and their wire normalisation.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone};

/// Format used for date-time parameters.
pub const PARAM_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single request parameter value before normalisation.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Sent as `1` / `0`.
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Sent in local representation as `YYYY-MM-DD HH:MM:SS`.
    DateTime(NaiveDateTime),
    /// Enum discriminant, sent as its integer value.
    Enum(i64),
}

impl ParamValue {
    /// Wraps the discriminant of a fieldless enum.
    pub fn from_enum(discriminant: impl Into<i64>) -> Self {
        ParamValue::Enum(discriminant.into())
    }

    /// Produces the string that goes on the wire.
    pub fn normalize(&self) -> String {
        match self {
            ParamValue::Bool(true) => "1".to_string(),
            ParamValue::Bool(false) => "0".to_string(),
            ParamValue::Int(n) | ParamValue::Enum(n) => n.to_string(),
            ParamValue::UInt(n) => n.to_string(),
            ParamValue::Float(n) => n.to_string(),
            ParamValue::Text(s) => s.clone(),
            ParamValue::DateTime(dt) => dt.format(PARAM_DATETIME_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

/// Conversion of a field value into an optional parameter.
///
/// `None` means the parameter is omitted from the request.
pub trait IntoParamValue {
    fn into_param_value(self) -> Option<ParamValue>;
}

impl IntoParamValue for ParamValue {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(self)
    }
}

impl IntoParamValue for bool {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Bool(self))
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl IntoParamValue for $t {
            fn into_param_value(self) -> Option<ParamValue> {
                Some(ParamValue::Int(i64::from(self)))
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl IntoParamValue for $t {
            fn into_param_value(self) -> Option<ParamValue> {
                Some(ParamValue::UInt(u64::from(self)))
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl IntoParamValue for isize {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Int(self as i64))
    }
}

impl IntoParamValue for usize {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::UInt(self as u64))
    }
}

impl IntoParamValue for f32 {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Float(f64::from(self)))
    }
}

impl IntoParamValue for f64 {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Float(self))
    }
}

impl IntoParamValue for String {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Text(self))
    }
}

impl IntoParamValue for &str {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Text(self.to_string()))
    }
}

impl IntoParamValue for NaiveDateTime {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::DateTime(self))
    }
}

impl<Tz: TimeZone> IntoParamValue for DateTime<Tz> {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::DateTime(self.naive_local()))
    }
}

impl<T: IntoParamValue> IntoParamValue for Option<T> {
    fn into_param_value(self) -> Option<ParamValue> {
        self.and_then(IntoParamValue::into_param_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};

    fn sample_datetime() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap()
    }

    #[test]
    fn test_bool_normalizes_to_digit() {
        assert_eq!(ParamValue::Bool(true).normalize(), "1");
        assert_eq!(ParamValue::Bool(false).normalize(), "0");
    }

    #[test]
    fn test_numbers_use_display_form() {
        assert_eq!(ParamValue::Int(-12).normalize(), "-12");
        assert_eq!(ParamValue::UInt(u64::MAX).normalize(), u64::MAX.to_string());
        assert_eq!(ParamValue::Float(1.5).normalize(), "1.5");
    }

    #[test]
    fn test_datetime_format() {
        assert_eq!(
            ParamValue::DateTime(sample_datetime()).normalize(),
            "2024-03-07 09:05:02"
        );
    }

    #[test]
    fn test_zoned_datetime_uses_local_wall_time() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let zoned = offset.from_local_datetime(&sample_datetime()).unwrap();
        assert_eq!(
            zoned.into_param_value().unwrap().normalize(),
            "2024-03-07 09:05:02"
        );
    }

    #[test]
    fn test_enum_sends_discriminant() {
        #[derive(Clone, Copy)]
        enum Kind {
            _Zero,
            _One,
            Two,
        }
        assert_eq!(ParamValue::from_enum(Kind::Two as i32).normalize(), "2");
    }

    #[test]
    fn test_option_none_is_omitted() {
        assert_eq!(None::<i32>.into_param_value(), None);
        assert_eq!(Some(true).into_param_value(), Some(ParamValue::Bool(true)));
        assert_eq!(
            Some("abc").into_param_value(),
            Some(ParamValue::Text("abc".into()))
        );
    }

    #[test]
    fn test_display_matches_normalize() {
        assert_eq!(ParamValue::Bool(true).to_string(), "1");
        assert_eq!(ParamValue::Text("a b".into()).to_string(), "a b");
    }
}
