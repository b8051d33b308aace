/// Descriptor for an uploaded document. The raw bytes live only for the
/// duration of the request that carried them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub size_bytes: u64,
}

impl Document {
    pub fn new(filename: String, size_bytes: u64) -> Self {
        Self {
            filename,
            size_bytes,
        }
    }
}
