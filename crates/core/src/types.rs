/// Wall-clock date/time in the caller's local zone.
pub type LocalTime = chrono::NaiveDateTime;

/// Ordered numeric type with a zero, used by the sign checks.
pub trait Numeric: PartialOrd + Copy {
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_numeric!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

#[cfg(feature = "decimal")]
impl Numeric for rust_decimal::Decimal {
    const ZERO: Self = rust_decimal::Decimal::ZERO;
}
