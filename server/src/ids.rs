use rand::Rng;
use thiserror::Error;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Segment widths of `[a-z0-9]{8}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{12}`.
pub const UUID_SHAPE: [usize; 5] = [8, 4, 4, 4, 12];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdGenerationError {
    #[error("identifier layout has no segments")]
    EmptyLayout,

    #[error("identifier segment {0} has zero width")]
    EmptySegment(usize),
}

/// Source of identifiers for newly created events.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Result<String, IdGenerationError>;
}

/// Random lowercase-alphanumeric segments joined by hyphens.
///
/// Shaped like a UUID but carries no version or variant bits, uses a
/// non-cryptographic thread-local RNG and is never checked for collisions.
#[derive(Debug, Clone)]
pub struct RandomIdGenerator {
    segments: Vec<usize>,
}

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self::with_segments(UUID_SHAPE.to_vec())
    }

    pub fn with_segments(segments: Vec<usize>) -> Self {
        Self { segments }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, IdGenerationError> {
        if self.segments.is_empty() {
            return Err(IdGenerationError::EmptyLayout);
        }
        if let Some(index) = self.segments.iter().position(|width| *width == 0) {
            return Err(IdGenerationError::EmptySegment(index));
        }

        let mut rng = rand::thread_rng();
        let total = self.segments.iter().sum::<usize>() + self.segments.len() - 1;
        let mut id = String::with_capacity(total);

        for (index, width) in self.segments.iter().enumerate() {
            if index > 0 {
                id.push('-');
            }
            id.extend((0..*width).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char));
        }

        Ok(id)
    }
}
