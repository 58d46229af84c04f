use std::ops::{Deref, DerefMut};

pub type Vector3<T> = Vector<T, 3>;

/// Component type that can be reduced with `min`/`max`.
pub trait Extremum: Copy {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
}

impl Extremum for f32 {
    fn min(self, other: Self) -> Self {
        f32::min(self, other)
    }
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }
}

impl Extremum for f64 {
    fn min(self, other: Self) -> Self {
        f64::min(self, other)
    }
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default + Copy,
{
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for Vector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Constructs the `Vector<T, N>` from an array.
    pub const fn from_array(array: [T; N]) -> Self {
        Self(array)
    }
    /// Returns a vector filled with `value`.
    pub const fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }
    /// Returns the component-wise minimum of `self` and `rhs`.
    pub fn min(mut self, rhs: Self) -> Self
    where
        T: Extremum,
    {
        for (a, b) in self.iter_mut().zip(rhs.0) {
            *a = Extremum::min(*a, b);
        }
        self
    }
    /// Returns the component-wise maximum of `self` and `rhs`.
    pub fn max(mut self, rhs: Self) -> Self
    where
        T: Extremum,
    {
        for (a, b) in self.iter_mut().zip(rhs.0) {
            *a = Extremum::max(*a, b);
        }
        self
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}
