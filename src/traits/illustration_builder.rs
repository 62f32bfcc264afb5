/// Collaborator that names an illustration for a given seed.
///
/// Purely an addressing function: no I/O, always succeeds.
pub trait IllustrationReferenceBuilder: Send + Sync {
    /// Build a fetchable illustration address from a seed and dimensions
    fn build(&self, seed: u32, width: u32, height: u32) -> String;
}
