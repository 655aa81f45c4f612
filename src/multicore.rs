#[cfg(feature = "multicore")]
pub use rayon::{
    current_num_threads,
    iter::{IntoParallelRefIterator, ParallelIterator},
};

#[cfg(not(feature = "multicore"))]
pub fn current_num_threads() -> usize {
    1
}
