use num_traits::{AsPrimitive, WrappingAdd, Zero};
use std::fmt::Debug;
use std::ops::{Add, Div};

mod sealed {
    pub trait Sealed {}
}

/// Built-in integer and floating-point types accepted by the aggregate helpers.
///
/// The set is closed: the trait is sealed and implemented only for the
/// primitive signed, unsigned and floating-point types.
pub trait Numeric:
    sealed::Sealed + Copy + Debug + PartialOrd + Zero + Add<Output = Self> + Div<Output = Self>
{
    /// Converts a sequence length into `Self` with primitive `as` semantics.
    ///
    /// Narrow integer types wrap: `u8::from_len(300)` is `44`.
    fn from_len(len: usize) -> Self;

    /// Accumulating add used by the aggregates. Integers wrap on overflow;
    /// floats use plain `+`.
    fn accumulate(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric {
    (integer: $($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                #[inline]
                fn from_len(len: usize) -> Self {
                    <usize as AsPrimitive<$ty>>::as_(len)
                }

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }
            }
        )*
    };
    (float: $($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                #[inline]
                fn from_len(len: usize) -> Self {
                    <usize as AsPrimitive<$ty>>::as_(len)
                }

                #[inline]
                fn accumulate(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_numeric!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(float: f32, f64);
