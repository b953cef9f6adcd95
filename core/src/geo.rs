use crate::errors::GeoError;
use crate::models::Position3D;

/// Sfærisk jordradius (m).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

fn require_finite(field: &'static str, value: f64) -> Result<f64, GeoError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeoError::NonFinite { field, value })
    }
}

fn validate(p: &Position3D) -> Result<(), GeoError> {
    require_finite("lat_deg", p.lat_deg)?;
    require_finite("lon_deg", p.lon_deg)?;
    require_finite("altitude_m", p.altitude_m)?;
    Ok(())
}

/// 3D-avstand mellom to posisjoner (meter).
///
/// Storsirkelavstand via haversine på sfærisk jord, kombinert euklidsk med
/// høydedifferansen: `sqrt(surface² + Δh²)`. Høydeaksen behandles som
/// ortogonal på overflaten – gyldig så lenge Δh er liten mot jordradius,
/// som alltid holder for kjøretøytelemetri.
///
/// Identiske punkter gir 0; like lat/lon med ulik høyde gir eksakt `|Δh|`;
/// antipodale punkter er veldefinert via atan2.
pub fn distance_3d(a: &Position3D, b: &Position3D) -> Result<f64, GeoError> {
    validate(a)?;
    validate(b)?;

    let lat1 = a.lat_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.lon_deg - a.lon_deg).to_radians();

    // Haversine
    let h = (dlat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    let surface = EARTH_RADIUS_M * c;

    let height_diff = (a.altitude_m - b.altitude_m).abs();

    Ok((surface * surface + height_diff * height_diff).sqrt())
}
