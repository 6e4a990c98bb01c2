//! Continuous motion from held keys
//!
//! Each movement key goes Idle -> Pressed -> (release pending) -> Idle. A
//! release only becomes final once it is older than the debounce window
//! without a newer press, so the release/press pairs produced by key
//! auto-repeat do not interrupt motion.
//!
//! While any key is held the integrator wants a tick every
//! `tick_interval`. Each tick turns the time elapsed since a key was last
//! integrated into an angle or distance and composes the resulting
//! operators, in the order the keys were first pressed.

use std::collections::HashMap;
use std::time::Instant;

use hypernav_math::mat4::{self, Mat4, IDENTITY};
use winit::keyboard::KeyCode;

use crate::bindings::{binding_for, MotionBinding};
use crate::params::NavigationParams;

#[derive(Clone, Copy, Debug)]
struct HeldKey {
    key: KeyCode,
    binding: MotionBinding,
    /// Time up to which this key's motion has been applied
    last_integrated: Instant,
}

/// Held-key record and tick scheduling
#[derive(Debug, Default)]
pub struct KeyMotion {
    /// Held keys in first-press order
    held: Vec<HeldKey>,
    /// Pending releases
    released: HashMap<KeyCode, Instant>,
    /// When the next tick is due; `None` while idle
    next_tick: Option<Instant>,
}

impl KeyMotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key press.
    ///
    /// Returns false for keys without a movement binding.
    pub fn press(&mut self, key: KeyCode, now: Instant, params: &NavigationParams) -> bool {
        let Some(binding) = binding_for(key) else {
            return false;
        };

        self.released.remove(&key);

        if !self.is_held(key) {
            self.held.push(HeldKey { key, binding, last_integrated: now });
            if self.next_tick.is_none() {
                log::debug!("Motion started by {:?}", key);
                self.next_tick = Some(now + params.arm_delay);
            }
        }
        true
    }

    /// Process a key release. The key stays held until a tick sees the
    /// release has outlived the debounce window.
    pub fn release(&mut self, key: KeyCode, now: Instant) {
        if self.is_held(key) {
            self.released.insert(key, now);
        }
    }

    /// Advance motion to `now`.
    ///
    /// Returns the composed operator for this step, or `None` once no keys
    /// remain held, in which case ticking stops until the next press.
    pub fn tick(&mut self, now: Instant, params: &NavigationParams) -> Option<Mat4> {
        self.evict_released(now, params);

        if self.held.is_empty() {
            if self.next_tick.take().is_some() {
                log::debug!("Motion stopped");
            }
            return None;
        }

        let mut operator = IDENTITY;
        for held in &mut self.held {
            let elapsed = now.saturating_duration_since(held.last_integrated).as_secs_f64();
            held.last_integrated = now;

            let step = held.binding.operator(
                elapsed * params.rotation_velocity,
                elapsed * params.translation_velocity,
            );
            operator = mat4::mul(operator, step);
        }

        self.next_tick = Some(now + params.tick_interval);
        Some(operator)
    }

    /// When the host should call [`tick`](Self::tick) next
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Whether a tick chain is running
    pub fn is_active(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Whether `key` currently counts as held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.iter().any(|h| h.key == key)
    }

    /// Held keys in composition order
    pub fn held_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.held.iter().map(|h| h.key)
    }

    fn evict_released(&mut self, now: Instant, params: &NavigationParams) {
        let expired: Vec<KeyCode> = self
            .released
            .iter()
            .filter(|(_, released_at)| {
                now.saturating_duration_since(**released_at) > params.release_debounce
            })
            .map(|(key, _)| *key)
            .collect();

        for key in expired {
            self.released.remove(&key);
            self.held.retain(|h| h.key != key);
        }
    }
}
