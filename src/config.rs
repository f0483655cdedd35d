use crate::Discriminator;

/// Construction-time settings for an `OrderedMap`.
///
/// ```
/// use hibbard::{Config, Discriminator, OrderedMap};
///
/// let map: OrderedMap<u32, &str> = OrderedMap::with_config(
///     Config::new()
///         .discriminator(Discriminator::SizeWeighted)
///         .seed(31337),
/// );
/// assert_eq!(Discriminator::SizeWeighted, map.discriminator());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub discriminator: Discriminator,
    /// Seed for the map's random source. Without one, the map seeds itself
    /// from the operating system.
    pub seed: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = discriminator;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
