/*!
# Random Sources

Generators draw all stochastic decisions through the [`RandomSource`]
capability set: a biased coin, a full-range unsigned draw and a unit-interval
float. Two engines are provided, a general-purpose PCG and a fast XOR-shift;
both are deterministic when seeded explicitly and draw entropy once at
construction otherwise.

Generators bound `R: RandomSource` generically, so the engine is chosen at the
call site with static dispatch.

Index sampling reduces [`randi`](RandomSource::randi) modulo a bound; the
resulting modulo bias is accepted as a known limitation of the models here
and deliberately not corrected.
*/

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rand_xorshift::XorShiftRng;

use crate::utils::Probability;

/// Capability set for the stochastic decisions of the graph generators.
pub trait RandomSource {
    /// Flips a coin with the fixed bias this source was configured with
    /// (`1/2` unless changed at construction). This is the edge-inclusion
    /// coin of the undirected uniform-random model.
    fn randb(&mut self) -> bool;

    /// Returns a uniform value over the full `u64` range. Callers reduce it
    /// modulo a bound for index sampling.
    fn randi(&mut self) -> u64;

    /// Returns a uniform value in `[0, 1)`, used for probability comparisons.
    fn randf(&mut self) -> f64;
}

macro_rules! impl_random_source {
    ($(#[$attr:meta])* $source:ident, $engine:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $source {
            rng: $engine,
            bias: f64,
        }

        impl $source {
            /// Creates a source seeded from the environment (one entropy
            /// draw at construction).
            pub fn new() -> Self {
                Self {
                    rng: <$engine>::from_rng(&mut rand::rng()),
                    bias: 0.5,
                }
            }

            /// Creates a deterministic source. Two sources built from the
            /// same seed produce identical draw sequences.
            pub fn from_seed(seed: u64) -> Self {
                Self {
                    rng: <$engine>::seed_from_u64(seed),
                    bias: 0.5,
                }
            }

            /// Sets the success probability of the `randb` coin.
            /// ** Panics if `bias` is not in `[0, 1]` **
            pub fn with_bias(mut self, bias: f64) -> Self {
                assert!(
                    bias.is_valid_probability(),
                    "coin bias {bias} is not a probability"
                );
                self.bias = bias;
                self
            }
        }

        impl Default for $source {
            fn default() -> Self {
                Self::new()
            }
        }

        impl RandomSource for $source {
            fn randb(&mut self) -> bool {
                self.rng.random_bool(self.bias)
            }

            fn randi(&mut self) -> u64 {
                self.rng.random()
            }

            fn randf(&mut self) -> f64 {
                self.rng.random()
            }
        }
    };
}

impl_random_source!(
    /// General-purpose engine backed by `Pcg64Mcg`.
    PcgSource,
    Pcg64Mcg
);

impl_random_source!(
    /// Fast engine backed by the classic XOR-shift generator. Trades
    /// statistical quality for raw throughput.
    XorShiftSource,
    XorShiftRng
);
