use crate::err::SeqErr;
use crate::{Float, Integer};
use ordered_float::OrderedFloat;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul};
use std::str::FromStr;

/// 数值类型，`sum`和`product`只能作用于元素类型实现了此特征的序列。
///
/// `ZERO`为加法单位元，`ONE`为乘法单位元，空序列的求和、求积结果即为对应的单位元。
/// `checked_add`和`checked_mul`在结果无法表示时返回`None`，浮点数不会溢出，总是返回`Some`。
pub trait Numeric: Sized + Add<Output = Self> + Mul<Output = Self> {
    const ZERO: Self;
    const ONE: Self;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_numeric_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )+
    };
}

macro_rules! impl_numeric_float {
    ($zero:expr, $one:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )+
    };
}

impl_numeric_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(0.0, 1.0 => f32, f64);
impl_numeric_float!(OrderedFloat(0.0), OrderedFloat(1.0) => OrderedFloat<f32>, OrderedFloat<f64>);

/// 整数或浮点数。
///
/// 从文本解析时优先尝试整数，失败后再尝试浮点数，`NaN`、`inf`等非有限值不被接受。
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Num {
    Integer(Integer),
    Float(Float),
}

impl Num {
    #[inline]
    fn as_float(self) -> Float {
        match self {
            Num::Integer(i) => i as Float,
            Num::Float(f) => f,
        }
    }
}

impl Numeric for Num {
    const ZERO: Self = Num::Integer(0);
    const ONE: Self = Num::Integer(1);

    // 整数溢出时提升为浮点数，不会失败
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl Add for Num {
    type Output = Num;

    fn add(self, rhs: Num) -> Num {
        match (self, rhs) {
            // 溢出时提升为浮点数
            (Num::Integer(l), Num::Integer(r)) => {
                l.checked_add(r).map_or_else(|| Num::Float(l as Float + r as Float), Num::Integer)
            }
            (l, r) => Num::Float(l.as_float() + r.as_float()),
        }
    }
}

impl Mul for Num {
    type Output = Num;

    fn mul(self, rhs: Num) -> Num {
        match (self, rhs) {
            (Num::Integer(l), Num::Integer(r)) => {
                l.checked_mul(r).map_or_else(|| Num::Float(l as Float * r as Float), Num::Integer)
            }
            (l, r) => Num::Float(l.as_float() * r.as_float()),
        }
    }
}

impl FromStr for Num {
    type Err = SeqErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<Integer>() {
            Ok(Num::Integer(i))
        } else if let Ok(f) = s.parse::<Float>()
            && f.is_finite()
        {
            Ok(Num::Float(f))
        } else {
            Err(SeqErr::ParseNumErr(s.to_owned()))
        }
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Num::Integer(i) => write!(f, "{i}"),
            // 如果小数部分为 0，显示为整数
            Num::Float(v) if v.fract() == 0.0 => write!(f, "{v:.0}"),
            Num::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<Integer> for Num {
    fn from(value: Integer) -> Self {
        Num::Integer(value)
    }
}

impl From<Float> for Num {
    fn from(value: Float) -> Self {
        Num::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(i32::ZERO, 0);
        assert_eq!(u64::ONE, 1);
        assert_eq!(f64::ZERO, 0.0);
        assert_eq!(OrderedFloat::<f32>::ONE, OrderedFloat(1.0));
        assert_eq!(Num::ZERO, Num::Integer(0));
        assert_eq!(Num::ONE, Num::Integer(1));
    }

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Num>(), Ok(Num::Integer(42)));
        assert_eq!("-7".parse::<Num>(), Ok(Num::Integer(-7)));
        assert_eq!("2.5".parse::<Num>(), Ok(Num::Float(2.5)));
        assert_eq!("1e3".parse::<Num>(), Ok(Num::Float(1000.0)));
        assert_eq!("abc".parse::<Num>(), Err(SeqErr::ParseNumErr("abc".to_owned())));
        assert_eq!("".parse::<Num>(), Err(SeqErr::ParseNumErr(String::new())));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for text in ["NaN", "nan", "inf", "-inf", "infinity", "1e999"] {
            assert_eq!(text.parse::<Num>(), Err(SeqErr::ParseNumErr(text.to_owned())));
        }
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Numeric::checked_add(i64::MAX, 1), None);
        assert_eq!(Numeric::checked_add(1i64, 2), Some(3));
        assert_eq!(Numeric::checked_mul(u32::MAX, 2), None);
        assert_eq!(Numeric::checked_mul(3u8, 4), Some(12));
        assert_eq!(Numeric::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
        assert_eq!(Numeric::checked_add(OrderedFloat(1.5f32), OrderedFloat(1.0)), Some(OrderedFloat(2.5)));
        assert_eq!(
            Numeric::checked_add(Num::Integer(Integer::MAX), Num::Integer(1)),
            Some(Num::Float(Integer::MAX as Float + 1.0))
        );
        assert_eq!(Numeric::checked_mul(Num::Integer(3), Num::Float(0.5)), Some(Num::Float(1.5)));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Num::Integer(1) + Num::Integer(2), Num::Integer(3));
        assert_eq!(Num::Integer(1) + Num::Float(2.5), Num::Float(3.5));
        assert_eq!(Num::Float(1.5) * Num::Integer(2), Num::Float(3.0));
        assert_eq!(Num::Integer(3) * Num::Integer(4), Num::Integer(12));
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        assert_eq!(Num::Integer(Integer::MAX) + Num::Integer(1), Num::Float(Integer::MAX as Float + 1.0));
        assert_eq!(Num::Integer(Integer::MAX) * Num::Integer(2), Num::Float(Integer::MAX as Float * 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Num::Integer(6).to_string(), "6");
        assert_eq!(Num::Float(7.0).to_string(), "7");
        assert_eq!(Num::Float(6.5).to_string(), "6.5");
        assert_eq!(Num::Float(-3.0).to_string(), "-3");
        assert_eq!(Num::Float(Float::INFINITY).to_string(), "inf");
    }
}
