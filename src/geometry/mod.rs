pub mod parametrization;
pub mod sample_loop;

pub use parametrization::TimeParametrization;
pub use sample_loop::SampleLoop;
