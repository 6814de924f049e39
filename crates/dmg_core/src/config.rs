use typed_builder::TypedBuilder;

/// Runtime switches for a [`crate::GameBoy`].
///
/// ```
/// use dmg_core::{GameBoy, GameBoyConfig};
///
/// let config = GameBoyConfig::builder().trace_instructions(true).build();
/// let gb = GameBoy::with_config(config);
/// assert!(gb.config().trace_instructions);
/// ```
#[derive(Clone, Debug, TypedBuilder)]
pub struct GameBoyConfig {
    /// Log one gameboy-doctor style line per executed instruction at
    /// `trace` level.
    #[builder(default = false)]
    pub trace_instructions: bool,
    /// Log every interrupt dispatch at `debug` level.
    #[builder(default = false)]
    pub log_interrupts: bool,
}

impl Default for GameBoyConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
