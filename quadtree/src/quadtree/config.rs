#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Leaves at this depth stop subdividing and keep extra circles in overflow storage.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config { max_depth: 32 }
    }
}
