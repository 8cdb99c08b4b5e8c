use chrono::NaiveTime;

/// Most recently decoded fix.
///
/// The parser writes each member as soon as its field is read, so between
/// sentences this is a mix of the previous and current fix until the current
/// sentence completes.
#[derive(defmt::Format, Debug, Default, Copy, Clone, PartialEq)]
pub struct GpsPosition {
    /// UTC time of fix as `HHMMSS`, sub-second digits dropped.
    pub timestamp: u32,
    /// 0 means no fix.
    pub fix_quality: u8,
    pub number_satellites: u8,
    /// Decimal degrees, positive north.
    pub latitude: f32,
    /// Decimal degrees, positive east.
    pub longitude: f32,
    pub horizontal_dilution: f32,
    /// Meters above mean sea level.
    pub altitude_msl: f32,
    /// Meters between the WGS-84 ellipsoid and mean sea level.
    pub geoid_height: f32,
}

impl GpsPosition {
    pub fn has_fix(&self) -> bool {
        self.fix_quality != 0
    }

    /// Time of fix, or `None` if the timestamp is not a valid `HHMMSS`.
    pub fn fix_time(&self) -> Option<NaiveTime> {
        let hour = self.timestamp / 10_000;
        let min = (self.timestamp / 100) % 100;
        let sec = self.timestamp % 100;
        NaiveTime::from_hms_opt(hour, min, sec)
    }
}
