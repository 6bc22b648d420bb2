use derive_builder::Builder;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Number of concurrent worker tasks
    #[builder(default = "4")]
    pub(crate) worker_num: usize,

    /// Capacity of the submission queue shared by the workers
    #[builder(default = "64")]
    pub(crate) queue_capacity: usize,
}

impl Config {
    /// Returns the number of worker tasks
    #[inline]
    pub fn worker_num(&self) -> usize {
        self.worker_num
    }

    /// Returns the submission queue capacity
    #[inline]
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            worker_num: 4,
            queue_capacity: 64,
        }
    }
}
