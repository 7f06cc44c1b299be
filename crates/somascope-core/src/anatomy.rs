//! Anatomical reference catalog
//!
//! The scene uses RAS axes rendered Z-up: +X right, +Y anterior, +Z
//! superior. The glabella is the world origin; every other fixed pose
//! in the scene is an offset from it, in millimeters.

/// Head proxy sphere radius.
pub const HEAD_RADIUS: f32 = 40.0;

/// Head proxy rest position (center of the sphere).
pub const HEAD_REST: [f32; 3] = [0.0, 30.0, 80.0];

/// Torso proxy frustum radii (superior end, inferior end) and height.
pub const TORSO_RADIUS_TOP: f32 = 60.0;
pub const TORSO_RADIUS_BOTTOM: f32 = 75.0;
pub const TORSO_HEIGHT: f32 = 160.0;

/// Torso proxy rest position (center of the frustum).
pub const TORSO_REST: [f32; 3] = [0.0, -40.0, -20.0];

/// A named skull landmark at a fixed world position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub label: &'static str,
    pub position: [f32; 3],
}

/// The three labeled landmarks. Positions are approximate except the
/// glabella, which defines the origin.
pub const LANDMARKS: [Landmark; 3] = [
    Landmark {
        label: "Glabella (origin)",
        position: [0.0, 0.0, 0.0],
    },
    Landmark {
        label: "Tragion (approx)",
        position: [75.0, 25.0, 10.0],
    },
    Landmark {
        label: "Occipital (approx)",
        position: [0.0, -120.0, -40.0],
    },
];

/// One of the three standard anatomical sectioning planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionPlane {
    /// Midsagittal: divides left from right, normal along +X.
    Sagittal,
    /// Coronal: divides anterior from posterior, normal along +Y.
    Coronal,
    /// Transverse: divides superior from inferior, normal along +Z.
    Transverse,
}

impl SectionPlane {
    pub const ALL: [SectionPlane; 3] = [
        SectionPlane::Sagittal,
        SectionPlane::Coronal,
        SectionPlane::Transverse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SectionPlane::Sagittal => "sagittal",
            SectionPlane::Coronal => "coronal",
            SectionPlane::Transverse => "transverse",
        }
    }

    /// Unit normal of the plane in world (RAS, Z-up) coordinates.
    pub fn normal(self) -> [f32; 3] {
        match self {
            SectionPlane::Sagittal => [1.0, 0.0, 0.0],
            SectionPlane::Coronal => [0.0, 1.0, 0.0],
            SectionPlane::Transverse => [0.0, 0.0, 1.0],
        }
    }

    /// Rectangle extent (width, height) of the rendered plane.
    pub fn extent(self) -> [f32; 2] {
        match self {
            SectionPlane::Sagittal => [600.0, 400.0],
            SectionPlane::Coronal => [600.0, 400.0],
            SectionPlane::Transverse => [600.0, 600.0],
        }
    }
}
