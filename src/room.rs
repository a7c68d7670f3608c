use crate::constants::{BACK_WALL_Z, WALL_COLOR, WALL_SPECULAR};
use crate::vec3::{Color, Vec3};

/// The five planes bounding the scene. Screen y grows downward, so the floor
/// sits at positive y. There is no front wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    pub left: f64,
    pub right: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub back: f64,
    pub color: Color,
    pub specular: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surface {
    LeftWall,
    RightWall,
    Floor,
    Ceiling,
    BackWall,
}

impl Surface {
    /// Unit axis vector pointing back into the room.
    pub fn normal(self) -> Vec3 {
        match self {
            Surface::LeftWall => Vec3::new(1.0, 0.0, 0.0),
            Surface::RightWall => Vec3::new(-1.0, 0.0, 0.0),
            Surface::Floor => Vec3::new(0.0, -1.0, 0.0),
            Surface::Ceiling => Vec3::new(0.0, 1.0, 0.0),
            Surface::BackWall => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RoomHit {
    pub t: f64,
    pub surface: Surface,
    pub point: Vec3,
    pub normal: Vec3,
}

impl Room {
    /// Side walls, floor and ceiling line up with the edges of the screen.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;
        Self {
            left: -half_w,
            right: half_w,
            floor: half_h,
            ceiling: -half_h,
            back: BACK_WALL_Z,
            color: WALL_COLOR,
            specular: WALL_SPECULAR,
        }
    }

    /// Picks the plane with the smallest `|offset - coord| / |d|` distance.
    ///
    /// Only the side walls guard against a zero direction component; the other
    /// planes rely on IEEE division, where a NaN or infinite distance never wins.
    /// Ties go to the plane checked first (left, right, floor, ceiling, back).
    pub fn resolve(&self, point: Vec3, direction: Vec3) -> Option<RoomHit> {
        let side = |offset: f64| {
            if direction.x != 0.0 {
                ((offset - point.x) / direction.x).abs()
            } else {
                f64::INFINITY
            }
        };
        let candidates = [
            (Surface::LeftWall, side(self.left)),
            (Surface::RightWall, side(self.right)),
            (Surface::Floor, ((self.floor - point.y) / direction.y).abs()),
            (Surface::Ceiling, ((self.ceiling - point.y) / direction.y).abs()),
            (Surface::BackWall, ((self.back - point.z) / direction.z).abs()),
        ];

        let mut min_t = f64::INFINITY;
        let mut closest = None;
        for (surface, t) in candidates {
            if t < min_t {
                min_t = t;
                closest = Some(surface);
            }
        }

        closest.map(|surface| RoomHit {
            t: min_t,
            surface,
            point: point + min_t * direction,
            normal: surface.normal(),
        })
    }
}
