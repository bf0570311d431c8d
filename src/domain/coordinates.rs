/// Degrees north of the equator, within `-90..=90`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Latitude(f64);

/// Degrees east of the prime meridian, within `-180..=180`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Longitude(f64);

/// Search radius in meters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radius(u32);

impl TryFrom<f64> for Latitude {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (-90.0..=90.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{} is not a valid latitude", value))
        }
    }
}

impl TryFrom<f64> for Longitude {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if (-180.0..=180.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{} is not a valid longitude", value))
        }
    }
}

impl TryFrom<u32> for Radius {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err("search radius must be positive".into())
        }
    }
}

impl Latitude {
    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl Longitude {
    pub fn degrees(&self) -> f64 {
        self.0
    }
}

impl Radius {
    pub fn meters(&self) -> u32 {
        self.0
    }
}
