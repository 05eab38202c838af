//! WGS84 geodesy: cartesian/cartographic conversion, local frames, and
//! ground rectangles.
//!
//! Earth-fixed cartesian coordinates are in meters; cartographic
//! longitude/latitude are in radians with height in meters above the
//! ellipsoid.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Reference ellipsoid radii (x, y, z) in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub radii: Cartesian3,
}

pub const WGS84: Ellipsoid = Ellipsoid {
    radii: Cartesian3 {
        x: 6_378_137.0,
        y: 6_378_137.0,
        z: 6_356_752.314_245_179,
    },
};

impl Ellipsoid {
    fn radii_squared(&self) -> Cartesian3 {
        Cartesian3::new(
            self.radii.x * self.radii.x,
            self.radii.y * self.radii.y,
            self.radii.z * self.radii.z,
        )
    }

    /// First eccentricity squared, using the equatorial and polar radii.
    fn eccentricity_squared(&self) -> f64 {
        let a = self.radii.x;
        let b = self.radii.z;
        1.0 - (b * b) / (a * a)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position on the WGS84 ellipsoid at the given geodetic coordinates.
    pub fn from_radians(longitude: f64, latitude: f64, height: f64) -> Self {
        let cos_lat = latitude.cos();
        let normal = Self::new(
            cos_lat * longitude.cos(),
            cos_lat * longitude.sin(),
            latitude.sin(),
        )
        .normalized();
        let r2 = WGS84.radii_squared();
        let k = Self::new(r2.x * normal.x, r2.y * normal.y, r2.z * normal.z);
        let gamma = normal.dot(k).sqrt();
        k * (1.0 / gamma) + normal * height
    }

    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::from_radians(longitude.to_radians(), latitude.to_radians(), height)
    }

    pub fn dot(self, o: Self) -> f64 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }

    pub fn cross(self, o: Self) -> Self {
        Self::new(
            self.y * o.z - self.z * o.y,
            self.z * o.x - self.x * o.z,
            self.x * o.y - self.y * o.x,
        )
    }

    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn normalized(self) -> Self {
        let m = self.magnitude();
        if m == 0.0 {
            self
        } else {
            self * (1.0 / m)
        }
    }

    pub fn distance(self, o: Self) -> f64 {
        (self - o).magnitude()
    }

    pub fn midpoint(self, o: Self) -> Self {
        (self + o) * 0.5
    }
}

impl Add for Cartesian3 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y, self.z + o.z)
    }
}

impl Sub for Cartesian3 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y, self.z - o.z)
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k)
    }
}

/// Geodetic position: radians and meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }

    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Self::new(longitude.to_radians(), latitude.to_radians(), height)
    }

    /// Inverse of [`Cartesian3::from_radians`].
    ///
    /// Returns `None` for the earth center, where no geodetic position is
    /// defined.
    pub fn from_cartesian(c: Cartesian3) -> Option<Self> {
        const MAX_ITERATIONS: usize = 10;
        const EPSILON: f64 = 1e-12;

        if c.magnitude() < 1.0 {
            return None;
        }

        let a = WGS84.radii.x;
        let b = WGS84.radii.z;
        let e2 = WGS84.eccentricity_squared();
        let longitude = c.y.atan2(c.x);
        let p = c.x.hypot(c.y);

        if p < 1e-9 {
            let latitude = FRAC_PI_2.copysign(c.z);
            return Some(Self::new(longitude, latitude, c.z.abs() - b));
        }

        let mut latitude = c.z.atan2(p * (1.0 - e2));
        let mut height = 0.0;
        for _ in 0..MAX_ITERATIONS {
            let sin_lat = latitude.sin();
            let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
            height = p / latitude.cos() - n;
            let next = c.z.atan2(p * (1.0 - e2 * n / (n + height)));
            let done = (next - latitude).abs() < EPSILON;
            latitude = next;
            if done {
                break;
            }
        }

        Some(Self::new(longitude, latitude, height))
    }

    pub fn to_cartesian(self) -> Cartesian3 {
        Cartesian3::from_radians(self.longitude, self.latitude, self.height)
    }
}

/// Local east-north-up frame anchored at a point on (or above) the
/// ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EastNorthUp {
    pub origin: Cartesian3,
    pub east: Cartesian3,
    pub north: Cartesian3,
    pub up: Cartesian3,
}

impl EastNorthUp {
    pub fn at(origin: Cartesian3) -> Option<Self> {
        let carto = Cartographic::from_cartesian(origin)?;
        let (sin_lon, cos_lon) = carto.longitude.sin_cos();
        let (sin_lat, cos_lat) = carto.latitude.sin_cos();
        Some(Self {
            origin,
            east: Cartesian3::new(-sin_lon, cos_lon, 0.0),
            north: Cartesian3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
            up: Cartesian3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
        })
    }

    /// Coordinates of `point` in this frame: (east, north, up) meters.
    pub fn to_local(&self, point: Cartesian3) -> Cartesian3 {
        let d = point - self.origin;
        Cartesian3::new(d.dot(self.east), d.dot(self.north), d.dot(self.up))
    }
}

/// Visible ground footprint in radians.
///
/// `east < west` means the rectangle crosses the antimeridian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundRectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GroundRectangle {
    /// Full angular domain.
    pub const MAX_VALUE: Self = Self {
        west: -PI,
        south: -FRAC_PI_2,
        east: PI,
        north: FRAC_PI_2,
    };

    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    pub fn width(&self) -> f64 {
        if self.east < self.west {
            self.east + TAU - self.west
        } else {
            self.east - self.west
        }
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn center(&self) -> Cartographic {
        let mut longitude = self.west + self.width() * 0.5;
        if longitude > PI {
            longitude -= TAU;
        }
        Cartographic::new(longitude, (self.south + self.north) * 0.5, 0.0)
    }

    pub fn contains(&self, other: &GroundRectangle) -> bool {
        self.west <= other.west
            && self.south <= other.south
            && self.east >= other.east
            && self.north >= other.north
    }

    pub fn northwest(&self) -> Cartographic {
        Cartographic::new(self.west, self.north, 0.0)
    }

    pub fn northeast(&self) -> Cartographic {
        Cartographic::new(self.east, self.north, 0.0)
    }

    pub fn southwest(&self) -> Cartographic {
        Cartographic::new(self.west, self.south, 0.0)
    }

    pub fn southeast(&self) -> Cartographic {
        Cartographic::new(self.east, self.south, 0.0)
    }
}
