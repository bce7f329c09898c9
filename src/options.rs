/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling the transform without specifying options runs it sequentially. Use
/// [`Options::guess_options`] to fan the top recursion levels out across threads.
///
/// Options never change the result: the parallel and sequential paths perform exactly the same
/// arithmetic in the same order within every recursion frame.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Allow the even and odd halves of a frame to be transformed concurrently
    pub multithreaded: bool,
    /// How many of the top recursion levels may fork.
    /// Level `d` can have up to `2^d` tasks in flight.
    pub max_parallel_depth: usize,
    /// Frames shorter than this always recurse sequentially
    pub sequential_threshold: usize,
}

/// Below this size the fork/join overhead dominates the work of a whole transform
const MIN_PARALLEL_LEN: usize = 1 << 14;

/// Below this size a single frame is too cheap to be worth a task
const DEFAULT_SEQUENTIAL_THRESHOLD: usize = 1 << 12;

impl Default for Options {
    fn default() -> Self {
        Self {
            multithreaded: false,
            max_parallel_depth: 0,
            sequential_threshold: DEFAULT_SEQUENTIAL_THRESHOLD,
        }
    }
}

impl Options {
    /// Pick reasonable options for a transform of `input_size` samples on the current machine.
    pub fn guess_options(input_size: usize) -> Options {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::for_threads(input_size, threads)
    }

    pub(crate) fn for_threads(input_size: usize, threads: usize) -> Options {
        let mut options = Options::default();
        if threads > 1 && input_size >= MIN_PARALLEL_LEN {
            options.multithreaded = true;
            // 2^depth tasks must not exceed the hardware parallelism
            options.max_parallel_depth = threads.ilog2() as usize;
        }
        options
    }

    /// Whether a frame of `len` samples at `depth` levels below the top may fork
    #[inline]
    pub(crate) fn fork_at(&self, depth: usize, len: usize) -> bool {
        self.multithreaded && depth < self.max_parallel_depth && len >= self.sequential_threshold
    }
}
