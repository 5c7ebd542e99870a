use typed_builder::TypedBuilder;

/// Behaviour switches for instructions whose semantics changed between the
/// COSMAC VIP interpreter ("legacy") and CHIP-48/SUPER-CHIP ("modern").
///
/// The defaults run the majority of known programs correctly: modern shifts,
/// legacy `BNNN` and modern `FX55`/`FX65`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quirks {
    /// `8XY6`/`8XYE` copy VY into VX before shifting.
    pub legacy_shift: bool,
    /// `BNNN` jumps to NNN + V0 instead of NNN + VX.
    pub legacy_jump: bool,
    /// `FX55`/`FX65` leave I pointing past the last register transferred.
    pub legacy_store_load: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            legacy_shift: false,
            legacy_jump: true,
            legacy_store_load: false,
        }
    }
}

/// Construction-time settings for an [`crate::Emulator`].
///
/// ```
/// use chip8_core::{Config, Quirks};
///
/// let config = Config::builder()
///     .quirks(Quirks { legacy_shift: true, ..Quirks::default() })
///     .seed(42)
///     .build();
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct Config {
    #[builder(default)]
    pub quirks: Quirks,
    /// RNG seed for reproducible runs; `None` seeds from OS entropy.
    #[builder(default, setter(strip_option))]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::builder().build()
    }
}
