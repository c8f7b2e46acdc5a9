/// A complex number in Cartesian form.
///
/// Reflected as a primitive for `f32` (`Complex64`) and `f64` (`Complex128`).
///
/// # Examples
///
/// ```
/// use vc_reflect::impls::Complex;
///
/// let c = Complex::new(1.5_f64, -2.0);
/// assert_eq!(c.re, 1.5);
/// assert_eq!(c.im, -2.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    /// Creates a new complex number.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}
