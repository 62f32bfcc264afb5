use crate::traits::illustration_builder::IllustrationReferenceBuilder;

/// Names illustrations on the Picsum Photos placeholder service, where
/// a fixed seed always maps to the same image.
pub struct PicsumReferenceBuilder;

impl IllustrationReferenceBuilder for PicsumReferenceBuilder {
    fn build(&self, seed: u32, width: u32, height: u32) -> String {
        format!("https://picsum.photos/seed/{}/{}/{}", seed, width, height)
    }
}
