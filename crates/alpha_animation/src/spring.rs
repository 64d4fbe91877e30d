//! Spring physics for interruptible snap-back animations

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Soft spring for large surfaces
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick spring for small controls (button press scale)
    pub const fn snappy() -> Self {
        Self::new(210.0, 20.0, 1.0)
    }

    /// Build from the host animation API's tension/friction parameters.
    ///
    /// Tension maps to stiffness and friction to damping; sheet snap-back
    /// uses `(100, 8)`.
    pub const fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self::new(tension, friction, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

/// Settling thresholds for position and velocity
const REST_DELTA: f32 = 0.01;
const REST_VELOCITY: f32 = 0.01;

/// A damped spring driving one value toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget the spring; current position and velocity carry over so an
    /// interrupted animation continues smoothly.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Seed the velocity (from a released drag, for example)
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Snap to the target immediately
    pub fn settle(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance the simulation by `dt` seconds (semi-implicit Euler)
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.settle();
            return;
        }

        let displacement = self.value - self.target;
        let spring_force = -self.config.stiffness * displacement;
        let damping_force = -self.config.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.config.mass;

        self.velocity += acceleration * dt;
        self.value += self.velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: f32) {
        let steps = (seconds / 0.016).ceil() as usize;
        for _ in 0..steps {
            spring.step(0.016);
        }
    }

    #[test]
    fn test_spring_settles_at_target() {
        let mut spring = Spring::new(SpringConfig::from_tension_friction(100.0, 8.0), 50.0);
        spring.set_target(0.0);

        run(&mut spring, 5.0);
        assert!(spring.is_settled(), "value={}", spring.value());
        assert!(spring.value().abs() < 0.1);
    }

    #[test]
    fn test_retarget_mid_flight_carries_velocity() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(1.0);
        run(&mut spring, 0.1);

        let mid = spring.value();
        assert!(mid > 0.0 && mid < 1.0);

        spring.set_target(0.0);
        run(&mut spring, 5.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_settled_spring_stays_put() {
        let mut spring = Spring::new(SpringConfig::gentle(), 1.0);
        spring.step(0.016);
        assert_eq!(spring.value(), 1.0);
    }
}
