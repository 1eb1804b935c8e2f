use crate::light::Light;

/// Supplies the animation delay for each light on the strip
pub trait DelaySource {
    fn delay_millis(&mut self, index: usize, light: &Light) -> i32;
}

/// Uses each light's own `offset` field, so layouts are reproducible
#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetDelay;

impl DelaySource for OffsetDelay {
    fn delay_millis(&mut self, _index: usize, light: &Light) -> i32 {
        light.offset_millis
    }
}

#[cfg(feature = "random-delay")]
pub use random::RandomDelay;

#[cfg(feature = "random-delay")]
mod random {
    use rand::RngExt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::DelaySource;
    use crate::light::Light;

    /// Uniform delay in `[0, max_millis)` drawn from an injected generator
    ///
    /// Seeding makes a run repeatable; the light's own offset is ignored.
    pub struct RandomDelay {
        rng: ChaCha8Rng,
        max_millis: u32,
    }

    impl RandomDelay {
        pub fn new(rng: ChaCha8Rng, max_millis: u32) -> Self {
            Self {
                rng,
                max_millis: max_millis.max(1),
            }
        }

        pub fn seeded(seed: u64, max_millis: u32) -> Self {
            Self::new(ChaCha8Rng::seed_from_u64(seed), max_millis)
        }

        pub fn from_entropy(max_millis: u32) -> Self {
            Self::new(rand::make_rng(), max_millis)
        }
    }

    impl DelaySource for RandomDelay {
        fn delay_millis(&mut self, _index: usize, _light: &Light) -> i32 {
            let delay = self.rng.random_range(0..self.max_millis);
            i32::try_from(delay).unwrap_or(i32::MAX)
        }
    }
}
