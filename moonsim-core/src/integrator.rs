use crate::engine::System;

/// Apply unit gravity between every unordered pair of bodies.
///
/// On each axis a body's velocity moves one unit toward the other body's
/// coordinate; equal coordinates leave both velocities unchanged.
pub fn apply_gravity(system: &mut System) {
    let bodies = &mut system.bodies;
    for j in 1..bodies.len() {
        let (head, tail) = bodies.split_at_mut(j);
        let b = &mut tail[0];
        for a in head.iter_mut() {
            let pull = (b.pos - a.pos).signum();
            a.vel += pull;
            b.vel -= pull;
        }
    }
}

/// Advance every body's position by its velocity
pub fn apply_velocity(system: &mut System) {
    for body in system.bodies.iter_mut() {
        body.pos += body.vel;
    }
}

/// Step the simulation forward by one time unit: gravity, then velocity
pub fn step(system: &mut System) {
    apply_gravity(system);
    apply_velocity(system);
}
