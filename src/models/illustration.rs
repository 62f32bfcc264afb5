/// A deterministic illustration address for one page.
///
/// Produced by the illustration resolver, consumed positionally by the
/// document composer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllustrationRef {
    pub page_number: u32,
    pub url: String,
}
