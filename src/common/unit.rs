//! Unit conversion utilities.
//!
//! Lengths inside a presentation package are expressed in EMUs (English
//! Metric Units, 914400 EMU = 1 inch). Font sizes and paragraph spacing in
//! DrawingML run/paragraph properties use hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

/// Convert a length in inches to EMUs.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

/// Convert a length in centimeters to EMUs.
#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64).round() as i64
}

/// Convert a length in points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

/// Convert a font size or spacing in points to hundredths of a point,
/// the unit used by `sz` and `spcPts` attributes.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches_to_emu() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(10.0), 9_144_000);
        // 16:9 slide height used by the talk deck
        assert_eq!(inches_to_emu(5.625), 5_143_500);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(1.0), 12_700);
        assert_eq!(pt_to_emu(72.0), EMUS_PER_INCH);
    }

    #[test]
    fn test_pt_to_centipoints() {
        assert_eq!(pt_to_centipoints(22.0), 2200);
        assert_eq!(pt_to_centipoints(40.0), 4000);
        assert_eq!(pt_to_centipoints(10.5), 1050);
    }

    #[test]
    fn test_cm_to_emu() {
        assert_eq!(cm_to_emu(2.54), 914_400);
    }
}
