use std::error;
use std::fmt;
use std::io;
use std::result;

use serde_json;

#[derive(Debug)]
pub enum Error {
	VertexOutOfRange { vertex: usize, len: usize },
	NotConnected { vertices: usize, components: usize },
	TooFewVertices(usize),
	InvalidConfig(String),
	Io(io::Error),
	Json(serde_json::Error),
}

pub type Result<T> = result::Result<T, Error>;

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Error::VertexOutOfRange { vertex, len } =>
				write!(f, "vertex {} out of range for {} vertices", vertex, len),
			Error::NotConnected { vertices, components } =>
				write!(f, "graph on {} vertices is not connected ({} components)", vertices, components),
			Error::TooFewVertices(n) =>
				write!(f, "random graph needs at least 2 vertices, got {}", n),
			Error::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
			Error::Io(e) => write!(f, "io error: {}", e),
			Error::Json(e) => write!(f, "json error: {}", e),
		}
	}
}

impl error::Error for Error {
	fn source(&self) -> Option<&(dyn error::Error + 'static)> {
		match self {
			Error::Io(e) => Some(e),
			Error::Json(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Error {
		Error::Io(e)
	}
}

impl From<serde_json::Error> for Error {
	fn from(e: serde_json::Error) -> Error {
		Error::Json(e)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_mentions_vertex_and_len() {
		let msg = Error::VertexOutOfRange { vertex: 7, len: 4 }.to_string();
		assert_eq!(msg, "vertex 7 out of range for 4 vertices");
	}

	#[test]
	fn json_errors_convert_and_keep_source() {
		let bad: result::Result<serde_json::Value, _> = serde_json::from_str("{");
		let e: Error = bad.unwrap_err().into();
		assert!(error::Error::source(&e).is_some());
	}
}
