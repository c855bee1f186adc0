use core::fmt;

/// The three rotating bodies of the rig. Fixed set, index = discriminant.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RigBody { Wheel = 0, OuterRing = 1, InnerRing = 2 }

impl RigBody {
    pub const ALL: [RigBody; 3] = [RigBody::Wheel, RigBody::OuterRing, RigBody::InnerRing];
    #[inline] pub fn index(self) -> usize { self as usize }
}

impl fmt::Display for RigBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigBody::Wheel => write!(f, "wheel"),
            RigBody::OuterRing => write!(f, "outer_ring"),
            RigBody::InnerRing => write!(f, "inner_ring"),
        }
    }
}
