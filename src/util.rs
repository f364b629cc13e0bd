/// Format whole seconds as `m:ss`, the readout style used on the face
/// labels and the digital display.
pub fn format_mmss(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Remaining/total clamped to [0, 1]; drives all proportional rendering.
pub fn fraction_remaining(remaining_secs: f64, total_secs: f64) -> f64 {
    if total_secs <= 0.0 {
        return 0.0;
    }
    (remaining_secs / total_secs).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0.0), "0:00");
        assert_eq!(format_mmss(30.0), "0:30");
        assert_eq!(format_mmss(90.0), "1:30");
        assert_eq!(format_mmss(360.0), "6:00");
        assert_eq!(format_mmss(615.0), "10:15");
    }

    #[test]
    fn test_format_mmss_rounds() {
        assert_eq!(format_mmss(29.6), "0:30");
        assert_eq!(format_mmss(29.4), "0:29");
    }

    #[test]
    fn test_format_mmss_negative_clamps_to_zero() {
        assert_eq!(format_mmss(-5.0), "0:00");
    }

    #[test]
    fn test_fraction_remaining() {
        assert_eq!(fraction_remaining(180.0, 360.0), 0.5);
        assert_eq!(fraction_remaining(360.0, 360.0), 1.0);
        assert_eq!(fraction_remaining(0.0, 360.0), 0.0);
    }

    #[test]
    fn test_fraction_remaining_clamps() {
        assert_eq!(fraction_remaining(500.0, 360.0), 1.0);
        assert_eq!(fraction_remaining(-5.0, 360.0), 0.0);
        assert_eq!(fraction_remaining(10.0, 0.0), 0.0);
    }
}
