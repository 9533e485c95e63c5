use std::num::IntErrorKind;

use crate::errors::InvalidPage;

/// Conversion of a raw page argument into an integer page number.
///
/// The result is not range checked; that is the paginator's job. Integers
/// beyond `i64` saturate, so they still fail the range checks as integers.
pub trait IntoPageNumber {
    fn into_page_number(self) -> Result<i64, InvalidPage>;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(impl IntoPageNumber for $t {
            fn into_page_number(self) -> Result<i64, InvalidPage> {
                Ok(i64::from(self))
            }
        })*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(impl IntoPageNumber for $t {
            fn into_page_number(self) -> Result<i64, InvalidPage> {
                Ok(i64::try_from(self).unwrap_or(i64::MAX))
            }
        })*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64, usize);

impl IntoPageNumber for &str {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        match self.trim().parse::<i64>() {
            Ok(number) => Ok(number),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(InvalidPage::PageNotAnInteger),
            },
        }
    }
}

impl IntoPageNumber for &String {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        self.as_str().into_page_number()
    }
}

impl IntoPageNumber for String {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        self.as_str().into_page_number()
    }
}
