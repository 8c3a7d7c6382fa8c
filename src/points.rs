use crate::error::{Error, Result};
use nalgebra_glm::Vec3;
use std::{fs, path::Path, slice};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PointsError {
    #[error("token {index} ({token:?}) is not a finite number")]
    InvalidNumber { index: usize, token: String },
    #[error("{leftover} trailing value(s) don't form a full x y z triple")]
    IncompleteTriple { leftover: usize },
}

/// Points in file order. Every point becomes one cube on screen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Vec3> {
        self.points.iter()
    }

    /// Axis-aligned (min, max) corners.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold((first, first), |(min, max), point| {
                    (glm::min2(&min, point), glm::max2(&max, point))
                }),
        )
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Vec3;
    type IntoIter = slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Whitespace separated numbers, three per point. Line breaks mean nothing.
pub fn parse_points(text: &str) -> std::result::Result<Vec<Vec3>, PointsError> {
    let mut values = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        match token.parse::<f32>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => {
                return Err(PointsError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })
            }
        }
    }

    let leftover = values.len() % 3;
    if leftover != 0 {
        return Err(PointsError::IncompleteTriple { leftover });
    }

    Ok(values
        .chunks_exact(3)
        .map(|xyz| glm::vec3(xyz[0], xyz[1], xyz[2]))
        .collect())
}

pub fn load_points(path: &Path) -> Result<PointCloud> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let points = parse_points(&text).map_err(|source| Error::Points {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(PointCloud::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_across_lines() {
        let points = parse_points("1 2 3\n-0.5 0.25\n4e-1\n").unwrap();
        assert_eq!(
            points,
            vec![glm::vec3(1.0, 2.0, 3.0), glm::vec3(-0.5, 0.25, 0.4)]
        );
    }

    #[test]
    fn tabs_and_blank_lines_are_separators() {
        let points = parse_points("\n\n  7\t8\t9  \n\n").unwrap();
        assert_eq!(points, vec![glm::vec3(7.0, 8.0, 9.0)]);
    }

    #[test]
    fn empty_input_is_an_empty_cloud() {
        assert!(parse_points("").unwrap().is_empty());
        assert!(parse_points(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage_token() {
        assert_eq!(
            parse_points("1 2 x3"),
            Err(PointsError::InvalidNumber {
                index: 2,
                token: "x3".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            parse_points("1 nan 3"),
            Err(PointsError::InvalidNumber { index: 1, .. })
        ));
        assert!(matches!(
            parse_points("inf 0 0"),
            Err(PointsError::InvalidNumber { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_incomplete_triple() {
        assert_eq!(
            parse_points("1 2 3 4 5"),
            Err(PointsError::IncompleteTriple { leftover: 2 })
        );
    }

    #[test]
    fn bounds_cover_every_point() {
        let cloud = PointCloud::new(parse_points("1 -2 3  -4 5 0  0 0 9").unwrap());
        let (min, max) = cloud.bounds().unwrap();
        assert_eq!(min, glm::vec3(-4.0, -2.0, 0.0));
        assert_eq!(max, glm::vec3(1.0, 5.0, 9.0));
        assert_eq!(PointCloud::default().bounds(), None);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_points(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir()
            .join(format!("cross_plot_points_{}.txt", std::process::id()));
        fs::write(&path, "0 0 0\n1 1 1\n").unwrap();
        let cloud = load_points(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.iter().last(), Some(&glm::vec3(1.0, 1.0, 1.0)));
    }
}
