use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, trace, warn};

use crate::bounds::BoundingBox;
use crate::math::Vector3;
use crate::util::bail;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    GeometricVertex,
    TextureVertex,
    ParameterSpaceVertex,
    VertexNormal,
    Face,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKeywordError(pub String);

impl UnknownKeywordError {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }
}

impl fmt::Display for UnknownKeywordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown keyword '{}'", self.0)
    }
}

impl StdError for UnknownKeywordError {}

impl TryFrom<&str> for Keyword {
    type Error = UnknownKeywordError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        use Keyword::*;

        let keyword = match token {
            "v" => GeometricVertex,
            "vt" => TextureVertex,
            "vp" => ParameterSpaceVertex,
            "vn" => VertexNormal,
            "f" | "fo" => Face,
            unknown => return Err(UnknownKeywordError::new(unknown)),
        };

        Ok(keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenCountError {
    expected: usize,
    got: usize,
}

impl TokenCountError {
    pub fn new(expected: usize, got: usize) -> Self {
        Self { expected, got }
    }
}

impl fmt::Display for TokenCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected number of tokens (expected {}, got {})",
            self.expected, self.got
        )
    }
}

impl StdError for TokenCountError {}

/// Parses exactly three floating point tokens.
pub fn parse_vector3<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Vector3<f64>> {
    let mut result = [0f64; 3];
    for (idx, item) in result.iter_mut().enumerate() {
        let token = tokens.next().ok_or(TokenCountError::new(3, idx))?;
        *item = token
            .parse()
            .map_err(|e| Error::invalid_coordinate(token, e))?;
    }

    let extra = tokens.count();
    if extra > 0 {
        bail!(TokenCountError::new(3, 3 + extra));
    }

    Ok(Vector3::from_array(result))
}

/// Shape of a face by the number of vertices it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceShape {
    Triangle,
    Quad,
    /// Anything that is neither a triangle nor a quad, degenerate faces included.
    Polygon,
}

impl FaceShape {
    pub fn classify(vertex_count: usize) -> Self {
        match vertex_count {
            3 => FaceShape::Triangle,
            4 => FaceShape::Quad,
            _ => FaceShape::Polygon,
        }
    }
}

/// Summary statistics of a single OBJ model.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObjStats {
    pub bounds: BoundingBox,
    pub vertices: usize,
    pub texture_vertices: usize,
    pub parameter_vertices: usize,
    pub normals: usize,
    pub faces: usize,
    pub triangular_faces: usize,
    pub quad_faces: usize,
    pub polygon_faces: usize,
    /// Largest number of vertex references on any face line.
    pub biggest_face: usize,
    /// Occurrences of first tokens that were not counted, e.g. `g`, `usemtl`, `#`.
    pub ignored_keywords: BTreeMap<String, usize>,
}

impl ObjStats {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let stats = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(Into::into)
            .and_then(Self::from_reader)
            .map_err(|e| e.at_path(path))?;

        debug!(
            "{}: {} vertices, {} faces",
            path.display(),
            stats.vertices,
            stats.faces
        );
        if !stats.has_vertices() {
            warn!(
                "{} has no vertices, reporting sentinel bounds",
                path.display()
            );
        }
        for (keyword, count) in &stats.ignored_keywords {
            debug!("{}: ignored {count} '{keyword}' lines", path.display());
        }

        Ok(stats)
    }
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_buffered_reader(BufReader::new(reader))
    }
    /// Lines are decoded lossily, so comments and names in other encodings
    /// never stop a scan.
    pub fn from_buffered_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut result = Self::new();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        loop {
            buffer.clear();
            line_number += 1;

            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| Error::from(e).at_line(line_number))?;
            if read == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buffer);
            result
                .scan_line(&line)
                .map_err(|e| e.at_line(line_number))?;
        }
        Ok(result)
    }
    /// Classifies a single line by its first token and accumulates it.
    pub fn scan_line(&mut self, line: &str) -> Result<()> {
        let mut tokens = line.split_whitespace();

        let token = match tokens.next() {
            Some(token) => token,
            None => return Ok(()),
        };

        let keyword = match Keyword::try_from(token) {
            Err(UnknownKeywordError(unknown)) => {
                *self.ignored_keywords.entry(unknown).or_default() += 1;
                return Ok(());
            }
            Ok(keyword) => keyword,
        };

        trace!("{keyword:?}: {line}");

        match keyword {
            Keyword::GeometricVertex => {
                self.vertices += 1;
                self.bounds.include(parse_vector3(tokens)?);
            }
            Keyword::TextureVertex => self.texture_vertices += 1,
            Keyword::ParameterSpaceVertex => self.parameter_vertices += 1,
            Keyword::VertexNormal => self.normals += 1,
            Keyword::Face => {
                let size = tokens.count();
                self.faces += 1;
                self.biggest_face = self.biggest_face.max(size);

                match FaceShape::classify(size) {
                    FaceShape::Triangle => self.triangular_faces += 1,
                    FaceShape::Quad => self.quad_faces += 1,
                    FaceShape::Polygon => self.polygon_faces += 1,
                }
            }
        }
        Ok(())
    }
    /// True once any `v` line was scanned, whatever its coordinates.
    pub fn has_vertices(&self) -> bool {
        self.vertices > 0
    }
    /// Sum of the per-shape face counts; always equal to `faces`.
    pub fn classified_faces(&self) -> usize {
        self.triangular_faces + self.quad_faces + self.polygon_faces
    }
}
