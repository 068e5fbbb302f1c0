#[derive(Debug, thiserror::Error, Clone, Copy)]
pub enum MathError {
    #[error("Operation {0:?} + {1:?} overflowed")]
    AddFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} - {1:?} overflowed")]
    SubFailed(Option<i128>, Option<i128>),
    #[error("Operation {0:?} * {1:?} overflowed")]
    MulFailed(Option<i128>, Option<i128>),
    #[error("Conversion failed for value {0:?}")]
    ConversionFailed(Option<i128>),
}

/// Same as the `checked_add` functions but returns an error
///
/// ```
/// # use imgmeta_common::math::*;
/// assert_eq!(2_u32.safe_add(3).unwrap(), 5);
/// assert!(u32::MAX.safe_add(1).is_err());
/// ```
pub trait SafeAdd: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as the `checked_sub` functions but returns an error
pub trait SafeSub: Sized {
    fn safe_sub(self, rhs: Self) -> Result<Self, MathError>;
}

/// Same as the `checked_mul` functions but returns an error
pub trait SafeMul: Sized {
    fn safe_mul(self, rhs: Self) -> Result<Self, MathError>;
}

macro_rules! impl_operator {
    ($op:ident, $f:ident, $t:ty) => {
        paste::paste! {
            impl [< Safe $op >] for $t {
                fn [< safe_ $f >](self, rhs: $t) -> Result<$t, MathError> {
                    self.[< checked_ $f >](rhs).ok_or_else(|| {
                        MathError::[< $op Failed >](
                            self.try_into().ok(),
                            rhs.try_into().ok(),
                        )
                    })
                }
            }
        }
    };
}

macro_rules! impl_operators {
    ($t:ty) => {
        impl_operator!(Add, add, $t);
        impl_operator!(Sub, sub, $t);
        impl_operator!(Mul, mul, $t);
    };
}

impl_operators!(u16);
impl_operators!(u32);
impl_operators!(u64);
impl_operators!(i64);
impl_operators!(usize);

macro_rules! impl_conversion {
    ($trait:ident, $f:ident, $target:ty, $($t:ty),*) => {
        #[doc = concat!("Fallible lossless conversion into `", stringify!($target), "`")]
        pub trait $trait: Sized + TryInto<$target> + TryInto<i128> + Copy {
            fn $f(self) -> Result<$target, MathError> {
                self.try_into()
                    .map_err(|_| MathError::ConversionFailed(self.try_into().ok()))
            }
        }

        $(impl $trait for $t {})*
    };
}

impl_conversion!(ToU32, u32, u32, u16, i64, u64, usize);
impl_conversion!(ToU64, u64, u64, u16, u32, i64, usize);
impl_conversion!(ToI64, i64, i64, u16, u32, u64, usize);
impl_conversion!(ToUsize, usize, usize, u16, u32, u64, i64);
