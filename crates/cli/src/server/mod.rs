pub mod pipe;

pub use pipe::serve_pipe;
