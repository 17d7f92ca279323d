//! Operand forms accepted by the vector binary operations
//!
//! Every binary operation on [`Vector2`] and [`Vector3`] takes
//! `impl Into<Operand2>` / `impl Into<Operand3>`, so a call can pass either
//! discrete components or a vector. The operand is resolved to plain scalars
//! before any arithmetic runs.

use super::{Vector2, Vector3};

/// Right-hand side of a [`Vector3`] operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand3 {
    /// Three discrete components
    Components(f64, f64, f64),
    /// A vector whose fields are used as components
    Vector(Vector3),
}

impl Operand3 {
    /// Resolves the operand to `(x, y, z)`
    #[inline]
    pub fn components(self) -> (f64, f64, f64) {
        match self {
            Operand3::Components(x, y, z) => (x, y, z),
            Operand3::Vector(v) => (v.x, v.y, v.z),
        }
    }
}

impl From<(f64, f64, f64)> for Operand3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand3::Components(x, y, z)
    }
}

impl From<[f64; 3]> for Operand3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Operand3::Components(x, y, z)
    }
}

impl From<Vector3> for Operand3 {
    fn from(v: Vector3) -> Self {
        Operand3::Vector(v)
    }
}

impl From<&Vector3> for Operand3 {
    fn from(v: &Vector3) -> Self {
        Operand3::Vector(*v)
    }
}

impl From<&mut Vector3> for Operand3 {
    fn from(v: &mut Vector3) -> Self {
        Operand3::Vector(*v)
    }
}

impl From<nalgebra::Vector3<f64>> for Operand3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Operand3::Components(v.x, v.y, v.z)
    }
}

/// Right-hand side of a [`Vector2`] operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand2 {
    /// Two discrete components
    Components(f64, f64),
    /// A vector whose fields are used as components
    Vector(Vector2),
}

impl Operand2 {
    /// Resolves the operand to `(x, y)`
    #[inline]
    pub fn components(self) -> (f64, f64) {
        match self {
            Operand2::Components(x, y) => (x, y),
            Operand2::Vector(v) => (v.x, v.y),
        }
    }
}

impl From<(f64, f64)> for Operand2 {
    fn from((x, y): (f64, f64)) -> Self {
        Operand2::Components(x, y)
    }
}

impl From<[f64; 2]> for Operand2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Operand2::Components(x, y)
    }
}

impl From<Vector2> for Operand2 {
    fn from(v: Vector2) -> Self {
        Operand2::Vector(v)
    }
}

impl From<&Vector2> for Operand2 {
    fn from(v: &Vector2) -> Self {
        Operand2::Vector(*v)
    }
}

impl From<&mut Vector2> for Operand2 {
    fn from(v: &mut Vector2) -> Self {
        Operand2::Vector(*v)
    }
}

impl From<nalgebra::Vector2<f64>> for Operand2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Operand2::Components(v.x, v.y)
    }
}
