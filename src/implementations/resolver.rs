use log::debug;

use crate::models::illustration::IllustrationRef;
use crate::models::story::StoryDocument;
use crate::traits::illustration_builder::IllustrationReferenceBuilder;

/// Number of distinct illustration variants a seed can select
const SEED_SPACE: u32 = 1000;

/// Derives one deterministic illustration reference per story page.
///
/// Resolution is pure computation over the in-memory story: identical
/// image-prompt text always yields the identical seed and reference, so
/// identical stories produce identical documents. This is the one
/// consistency guarantee offered in place of real image synthesis.
pub struct IllustrationResolver<B: IllustrationReferenceBuilder> {
    builder: B,
    width: u32,
    height: u32,
}

impl<B: IllustrationReferenceBuilder> IllustrationResolver<B> {
    pub fn new(builder: B, width: u32, height: u32) -> Self {
        Self {
            builder,
            width,
            height,
        }
    }

    /// Resolve references for every page, in page order
    pub fn resolve(&self, story: &StoryDocument) -> Vec<IllustrationRef> {
        story
            .pages
            .iter()
            .map(|page| {
                let seed = illustration_seed(&page.image_prompt);
                let url = self.builder.build(seed, self.width, self.height);
                debug!("Page {} resolved to seed {}", page.page_number, seed);
                IllustrationRef {
                    page_number: page.page_number,
                    url,
                }
            })
            .collect()
    }
}

/// Stable seed in [0, 999] for an illustration description.
///
/// Polynomial rolling hash over UTF-16 code units: multiply by 31 and
/// add the next code unit, wrapping to a 32-bit signed integer, then
/// take the absolute value modulo 1000.
pub fn illustration_seed(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash.unsigned_abs() % SEED_SPACE
}
