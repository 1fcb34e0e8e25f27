/// Port for the random draw behind weighted selection.
pub trait RandomSource: Send + Sync {
    /// Uniformly distributed integer in `[1, upper]`. `upper` is at least 1.
    fn draw(&self, upper: u64) -> u64;
}
