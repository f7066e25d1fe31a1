use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
/// Ambient particle field generation.
pub struct ParticleOptions {
    /// Number of particles.
    #[schemars(title = "Count", range(min = 0, max = 2000))]
    pub count: u32,
    /// Edge length of the cube the particles are scattered in.
    #[schemars(skip)]
    pub extent: u32,
    /// RNG seed so the field is stable across remounts.
    #[schemars(skip)]
    pub seed: u64,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 150,
            extent: 60,
            seed: 0x5eed,
        }
    }
}
