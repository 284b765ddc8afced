//! Physical units used throughout layout. Everything is ultimately expressed in
//! PDF points ([Pt], 1/72 of an inch).

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// A length in PDF points (1/72 in)
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Ratio of two lengths
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Pt {
    /// The larger of two lengths
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_and_from_f32() {
        let pt: Pt = 36.0f32.into();
        assert_eq!(pt, Pt(36.0));
        let raw: f32 = pt.into();
        assert_eq!(raw, 36.0);
    }

    #[test]
    fn arithmetic_stays_in_points() {
        let mut y = Pt(100.0);
        y -= Pt(14.0) + Pt(15.0);
        assert_eq!(y, Pt(71.0));
        assert_eq!(Pt(30.0) * 2.0, Pt(60.0));
        assert_eq!(Pt(300.0) / 3.0, Pt(100.0));
        assert_eq!(Pt(50.0) / Pt(200.0), 0.25);
        assert_eq!([Pt(1.0), Pt(2.5)].into_iter().sum::<Pt>(), Pt(3.5));
        assert_eq!(Pt(3.0).max(Pt(4.0)), Pt(4.0));
    }
}
