//! Box face labels
//!
//! Faces are enumerated in a fixed order which doubles as the tie-break
//! order for ray casts: front, back, left, right, top, bottom.

use crate::foundation::math::Vec3;
use bitflags::bitflags;

/// One of the six faces of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// The -Z face
    Front,
    /// The +Z face
    Back,
    /// The -X face
    Left,
    /// The +X face
    Right,
    /// The +Y face
    Top,
    /// The -Y face
    Bottom,
}

impl Face {
    /// All faces in enumeration order
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// Position of this face in enumeration order (0..=5)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face at the given enumeration index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Outward-facing unit normal
    pub fn outward_normal(self) -> Vec3 {
        match self {
            Self::Front => -Vec3::z(),
            Self::Back => Vec3::z(),
            Self::Left => -Vec3::x(),
            Self::Right => Vec3::x(),
            Self::Top => Vec3::y(),
            Self::Bottom => -Vec3::y(),
        }
    }

    /// Matching flag in a [`FaceSet`]
    pub const fn flag(self) -> FaceSet {
        match self {
            Self::Front => FaceSet::FRONT,
            Self::Back => FaceSet::BACK,
            Self::Left => FaceSet::LEFT,
            Self::Right => FaceSet::RIGHT,
            Self::Top => FaceSet::TOP,
            Self::Bottom => FaceSet::BOTTOM,
        }
    }
}

bitflags! {
    /// Set of box faces
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FaceSet: u8 {
        /// The -Z face
        const FRONT = 1 << 0;
        /// The +Z face
        const BACK = 1 << 1;
        /// The -X face
        const LEFT = 1 << 2;
        /// The +X face
        const RIGHT = 1 << 3;
        /// The +Y face
        const TOP = 1 << 4;
        /// The -Y face
        const BOTTOM = 1 << 5;
    }
}

impl FaceSet {
    /// Whether the set includes the face
    pub const fn has(self, face: Face) -> bool {
        self.contains(face.flag())
    }

    /// Faces in the set, in enumeration order
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |face| self.has(*face))
    }
}

impl From<Face> for FaceSet {
    fn from(face: Face) -> Self {
        face.flag()
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, face| set | face.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Face::from_index(i), Some(*face));
        }
        assert_eq!(Face::from_index(6), None);
    }

    #[test]
    fn test_normals_are_opposed_in_pairs() {
        assert_eq!(Face::Front.outward_normal(), -Face::Back.outward_normal());
        assert_eq!(Face::Left.outward_normal(), -Face::Right.outward_normal());
        assert_eq!(Face::Top.outward_normal(), -Face::Bottom.outward_normal());
    }

    #[test]
    fn test_face_set_iteration() {
        let set: FaceSet = [Face::Top, Face::Front, Face::Right].into_iter().collect();
        assert!(set.has(Face::Front));
        assert!(!set.has(Face::Back));
        let faces: Vec<Face> = set.faces().collect();
        assert_eq!(faces, vec![Face::Front, Face::Right, Face::Top]);
        assert_eq!(FaceSet::all().faces().count(), 6);
    }
}
