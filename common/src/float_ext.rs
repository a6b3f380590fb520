pub trait FloatExt: Sized {
    fn approximately_eq(self, other: Self) -> bool;
    fn approximately_eq_within(self, other: Self, tolerance: Self) -> bool;

    /// Wraps into `[0, period)`. `rem_euclid` alone can return `period`
    /// for tiny negative inputs.
    fn wrap(self, period: Self) -> Self;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approximately_eq_within(other, crate::EPSILON)
    }

    fn approximately_eq_within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() < tolerance
    }

    fn wrap(self, period: Self) -> Self {
        assert!(period > 0.0, "wrap period must be positive");

        let wrapped = self.rem_euclid(period);
        if wrapped >= period {
            0.0
        } else {
            wrapped
        }
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        self.approximately_eq_within(other, crate::EPSILON as f64)
    }

    fn approximately_eq_within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() < tolerance
    }

    fn wrap(self, period: Self) -> Self {
        assert!(period > 0.0, "wrap period must be positive");

        let wrapped = self.rem_euclid(period);
        if wrapped >= period {
            0.0
        } else {
            wrapped
        }
    }
}
