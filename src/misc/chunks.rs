use std::cmp;
use std::ops::Range;

/* Chunk */

/// Contiguous, half-open sub-range of the input handled by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl Chunk {
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/* ChunkPlan */

/// Fixed fan-out partitioning of `len` items for `workers` workers.
///
/// Every chunk holds `max(1, len / workers)` items, except the last one which
/// runs to the end of the input and absorbs the remainder of the division.
/// No empty chunks are produced: if `workers` exceeds the number of items,
/// only `len` single item chunks are planned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    len: usize,
    chunk_size: usize,
    chunks: usize,
}

impl ChunkPlan {
    /// `workers` must be at least 1.
    pub fn new(len: usize, workers: usize) -> Self {
        debug_assert!(workers > 0, "worker count must be positive");

        let chunk_size = cmp::max(1, len / cmp::max(workers, 1));
        let chunks = cmp::min(workers, (len + chunk_size - 1) / chunk_size);

        Self {
            len,
            chunk_size,
            chunks,
        }
    }

    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks (and therefore workers) actually used.
    #[inline]
    pub fn len(&self) -> usize {
        self.chunks
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks == 0
    }

    pub fn chunk(&self, index: usize) -> Option<Chunk> {
        if index >= self.chunks {
            return None;
        }

        let start = index * self.chunk_size;
        let end = if index + 1 == self.chunks {
            self.len
        } else {
            start + self.chunk_size
        };

        Some(Chunk { index, start, end })
    }

    pub fn iter(&self) -> impl Iterator<Item = Chunk> + '_ {
        (0..self.chunks).filter_map(move |index| self.chunk(index))
    }
}
