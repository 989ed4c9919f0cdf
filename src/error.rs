//! Error types for the curvature engine.

use std::fmt;

use crate::mesh::VertexId;

/// Errors that can occur while updating or querying cached curvature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurvatureError {
    /// A color ramp was constructed with no stops.
    EmptyRamp,
    /// A triangle index exceeds the corner-array bounds.
    CornerIndexOutOfBounds {
        /// Triangle whose index list is malformed.
        triangle: usize,
        /// The offending corner index.
        index: u32,
        /// Number of corners in the snapshot.
        corner_count: usize,
    },
    /// The per-corner arrays disagree on the number of corners.
    CornerArrayMismatch {
        /// Number of corner vertex ids.
        ids: usize,
        /// Number of position floats (expected `ids * 3`).
        positions: usize,
        /// Number of normal floats (expected `ids * 3`).
        normals: usize,
    },
    /// The triangle index list is not a multiple of three.
    IndexCountNotTriangles(usize),
    /// A color was requested for a vertex id absent from the last update.
    UnknownVertexId(VertexId),
    /// An operation referenced an instance that is not registered.
    UnknownInstance(String),
}

impl fmt::Display for CurvatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRamp => write!(f, "color ramp has no stops"),
            Self::CornerIndexOutOfBounds {
                triangle,
                index,
                corner_count,
            } => {
                write!(
                    f,
                    "triangle {triangle} references corner {index} but the snapshot has {corner_count} corners"
                )
            }
            Self::CornerArrayMismatch {
                ids,
                positions,
                normals,
            } => {
                write!(
                    f,
                    "corner arrays disagree: {ids} ids, {positions} position floats, {normals} normal floats"
                )
            }
            Self::IndexCountNotTriangles(count) => {
                write!(f, "index count {count} is not a multiple of three")
            }
            Self::UnknownVertexId(id) => write!(f, "vertex id {id} is not in the cached color map"),
            Self::UnknownInstance(id) => write!(f, "instance '{id}' is not registered"),
        }
    }
}

impl std::error::Error for CurvatureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurvatureError::EmptyRamp;
        assert_eq!(err.to_string(), "color ramp has no stops");

        let err = CurvatureError::CornerIndexOutOfBounds {
            triangle: 2,
            index: 9,
            corner_count: 6,
        };
        assert_eq!(
            err.to_string(),
            "triangle 2 references corner 9 but the snapshot has 6 corners"
        );

        let err = CurvatureError::UnknownInstance("|group|shape".to_string());
        assert_eq!(err.to_string(), "instance '|group|shape' is not registered");
    }
}
