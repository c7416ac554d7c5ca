mod errors;

pub use errors::Error;

pub type SceneResult<T> = Result<T, Error>;
