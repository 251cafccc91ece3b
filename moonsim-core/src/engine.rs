use glam::I64Vec3;
use std::fmt;

/// A coordinate axis of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in x, y, z order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a 3-vector
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A body (moon) in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub pos: I64Vec3,
    pub vel: I64Vec3,
}

impl Body {
    /// Create a body at rest at the given position
    pub fn at_rest(pos: I64Vec3) -> Self {
        Self {
            pos,
            vel: I64Vec3::ZERO,
        }
    }

    /// Sum of the absolute position components
    pub fn potential_energy(&self) -> i64 {
        manhattan(self.pos)
    }

    /// Sum of the absolute velocity components
    pub fn kinetic_energy(&self) -> i64 {
        manhattan(self.vel)
    }

    pub fn total_energy(&self) -> i64 {
        self.potential_energy() * self.kinetic_energy()
    }

    /// Position and velocity on a single axis
    pub fn axis_state(&self, axis: Axis) -> (i64, i64) {
        (self.pos[axis.index()], self.vel[axis.index()])
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos=<x={}, y={}, z={}>, vel=<x={}, y={}, z={}>",
            self.pos.x, self.pos.y, self.pos.z, self.vel.x, self.vel.y, self.vel.z
        )
    }
}

fn manhattan(v: I64Vec3) -> i64 {
    v.x.abs() + v.y.abs() + v.z.abs()
}

/// The ordered collection of bodies simulated together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct System {
    pub bodies: Vec<Body>,
}

impl System {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Build a system of bodies at rest at the given positions
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = I64Vec3>,
    {
        Self {
            bodies: positions.into_iter().map(Body::at_rest).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total energy of the system: sum of potential * kinetic over all bodies
    pub fn total_energy(&self) -> i64 {
        self.bodies.iter().map(Body::total_energy).sum()
    }

    /// Per-axis sum of all velocities
    pub fn momentum(&self) -> I64Vec3 {
        self.bodies.iter().fold(I64Vec3::ZERO, |acc, b| acc + b.vel)
    }
}
