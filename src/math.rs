use nalgebra::{Matrix3, Vector2, Vector3};

#[cfg(not(feature = "f64"))]
/// Floating point type used by the library
pub type Fl = f32;
#[cfg(not(feature = "f64"))]
/// Constants for [Fl]
pub use std::f32 as std_fl;
#[cfg(feature = "f64")]
/// Floating point type used by the library
pub type Fl = f64;
#[cfg(feature = "f64")]
/// Constants for [Fl]
pub use std::f64 as std_fl;

/// Trait for numbers
pub trait IntoFl {
    /// Convert into a float
    fn into_fl(self) -> Fl;
}

macro_rules! impl_into_fl {
    ($($ty:ident),*) => {
        $(
            impl IntoFl for $ty {
                #[inline(always)]
                fn into_fl(self) -> Fl {
                    self as Fl
                }
            }
        )*
    };
}

impl_into_fl!(f32, f64, u8, i8, u16, i16, u32, i32, u64, i64, usize, isize);

/// A 2-dimensional vector of floating point numbers
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(::serde::Deserialize, ::serde::Serialize),
    serde(from = "SerdeVec2", into = "SerdeVec2")
)]
pub struct Vec2(pub Vector2<Fl>);

impl Vec2 {
    #[inline(always)]
    /// The zero vector
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }
    #[inline(always)]
    /// Create a vector from a pair of numbers
    pub fn new(x: impl IntoFl, y: impl IntoFl) -> Self {
        Self(Vector2::new(x.into_fl(), y.into_fl()))
    }
    #[inline(always)]
    /// Access the x component of this vector
    pub fn x(&self) -> Fl {
        self.0.x
    }
    #[inline(always)]
    /// Access the y component of this vector
    pub fn y(&self) -> Fl {
        self.0.y
    }
    #[inline]
    /// Return a version of this vector that has been rotated by `rotation` radians clockwise
    pub fn rotated(&self, rotation: Fl) -> Self {
        let (s, c) = (rotation.sin(), rotation.cos());
        Self::new(self.0.x * c + self.0.y * s, self.0.y * c - self.0.x * s)
    }
    /// Return a version of this vector that's been rotated by 90 degrees clockwise
    pub fn tangent(&self) -> Self {
        Self::new(self.0.y, -self.0.x)
    }
    /// Return the euclidean length of this vector
    pub fn length(&self) -> Fl {
        (self.0.x.powi(2) + self.0.y.powi(2)).sqrt()
    }
    /// Normalize this vector, or return `other` for a (nearly) zero vector
    pub fn normalize_or(&self, other: Vec2) -> Self {
        if self.length() <= 0.000001 {
            other
        } else {
            *self / self.length()
        }
    }
    /// Normalize this vector, or return zero for a zero vector
    pub fn normalize(&self) -> Self {
        self.normalize_or(Vec2::zero())
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: IntoFl, U: IntoFl> From<(T, U)> for Vec2 {
    /// Convert from a tuple of numbers to a vector
    #[inline(always)]
    fn from((x, y): (T, U)) -> Self {
        Self::new(x, y)
    }
}

impl<T: IntoFl> From<[T; 2]> for Vec2 {
    /// Convert from an array of numbers to a vector
    #[inline(always)]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<Fl>> for Vec2 {
    #[inline(always)]
    fn from(inner: Vector2<Fl>) -> Self {
        Self(inner)
    }
}

impl From<Vec2> for Vector2<Fl> {
    #[inline(always)]
    fn from(vec: Vec2) -> Self {
        vec.0
    }
}

impl std::ops::Deref for Vec2 {
    type Target = Vector2<Fl>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Vec2 {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

macro_rules! impl_vec2_op {
    ($trait:ident, $fn:ident, $op:tt) => {
        impl ::std::ops::$trait<Vec2> for Vec2 {
            type Output = Vec2;

            #[inline(always)]
            fn $fn(self, rhs: Vec2) -> Self::Output {
                Self::new(self.0.x $op rhs.0.x, self.0.y $op rhs.0.y)
            }
        }

        impl ::std::ops::$trait<Fl> for Vec2 {
            type Output = Vec2;

            #[inline(always)]
            fn $fn(self, rhs: Fl) -> Self::Output {
                Self::new(self.0.x $op rhs, self.0.y $op rhs)
            }
        }
    };
}

impl_vec2_op!(Add, add, +);
impl_vec2_op!(Sub, sub, -);
impl_vec2_op!(Mul, mul, *);
impl_vec2_op!(Div, div, /);

impl ::std::ops::Neg for Vec2 {
    type Output = Vec2;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[derive(Debug, ::serde::Deserialize, ::serde::Serialize)]
struct SerdeVec2 {
    x: Fl,
    y: Fl,
}

#[cfg(feature = "serde")]
impl From<Vec2> for SerdeVec2 {
    fn from(vec: Vec2) -> Self {
        Self {
            x: vec.x(),
            y: vec.y(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<SerdeVec2> for Vec2 {
    fn from(vec: SerdeVec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

/// A 2D affine transform, stored as a homogeneous 3x3 matrix
///
/// Transforms compose right to left: in `a * b`, `b` is applied first.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub Matrix3<Fl>);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// The transform that leaves every point where it is
    pub fn identity() -> Self {
        Transform(Matrix3::identity())
    }

    /// Rotation about the origin by `degrees`; on a y-down screen positive angles turn clockwise
    pub fn rotate(degrees: impl IntoFl) -> Self {
        let (s, c) = degrees.into_fl().to_radians().sin_cos();
        #[rustfmt::skip]
        let m = Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        );
        Transform(m)
    }

    /// Scale along each axis, relative to the origin
    pub fn scale(x: impl IntoFl, y: impl IntoFl) -> Self {
        Transform(Matrix3::new_nonuniform_scaling(&Vector2::new(
            x.into_fl(),
            y.into_fl(),
        )))
    }

    /// Move every point by `offset`
    pub fn translate(offset: impl Into<Vec2>) -> Self {
        Transform(Matrix3::new_translation(&offset.into().0))
    }

    /// The same transform, but pivoting around `center` instead of the origin
    pub fn about(&self, center: impl Into<Vec2>) -> Self {
        let center = center.into();
        Transform::translate(center) * *self * Transform::translate(-center)
    }

    /// The inverse transform, if this transform is not degenerate
    pub fn inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Transform)
    }

    /// Apply this transform to a point
    #[inline]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self * point
    }
}

impl std::ops::Mul<Transform> for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Self::Output {
        Transform(self.0 * rhs.0)
    }
}

impl std::ops::Mul<Vec2> for &Transform {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2((self.0 * Vector3::new(rhs.0.x, rhs.0.y, 1.0)).xy())
    }
}

impl std::ops::Mul<Vec2> for Transform {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        &self * rhs
    }
}

/// Good set of default imports
pub mod prelude {
    pub use super::Fl;
    pub use super::IntoFl;
    pub use super::Transform;
    pub use super::Vec2;
}
