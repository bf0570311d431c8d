use std::collections::HashSet;

use super::{Latitude, Longitude, Radius};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixtureName(String);

impl std::fmt::Display for FixtureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<String> for FixtureName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err("fixture name must not be empty".into())
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<str> for FixtureName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named location to request a restaurant near.
#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub name: FixtureName,
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub radius: Radius,
}

impl Fixture {
    pub fn new(name: &str, latitude: f64, longitude: f64, radius: u32) -> Result<Self, String> {
        Ok(Self {
            name: FixtureName::try_from(name.to_owned())?,
            latitude: Latitude::try_from(latitude)?,
            longitude: Longitude::try_from(longitude)?,
            radius: Radius::try_from(radius)?,
        })
    }
}

/// Fixtures in declaration order, with names unique within the set.
#[derive(Clone, Debug, Default)]
pub struct FixtureSet(Vec<Fixture>);

impl FixtureSet {
    /// NYC, San Francisco, Los Angeles and Delhi.
    pub fn reference() -> Result<Self, String> {
        Self::try_from(vec![
            Fixture::new("NYC", 40.7128, -74.0060, 5000)?,
            Fixture::new("San Francisco", 37.7749, -122.4194, 3000)?,
            Fixture::new("Los Angeles", 34.0522, -118.2437, 5000)?,
            Fixture::new("Delhi", 28.6139, 77.2090, 5000)?,
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Fixture>> for FixtureSet {
    type Error = String;

    fn try_from(fixtures: Vec<Fixture>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for fixture in &fixtures {
            if !seen.insert(&fixture.name) {
                return Err(format!("fixture {} is declared more than once", fixture.name));
            }
        }
        Ok(Self(fixtures))
    }
}

impl<'a> IntoIterator for &'a FixtureSet {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
