//! Conversions to and from [`geo`] value types.
//!
//! Only the first two dimensions are kept going out; geometries coming in are
//! always 2D. SRIDs have no counterpart in `geo` and are dropped going out,
//! absent coming in.

use crate::coord::PointArray;
use crate::error::{GeoPackError, Result};
use crate::geometry::{Collection, Geometry, LineString, Point, Polygon};
use crate::types::{Dimension, GeometryType};

pub fn point_from_geo(point: &geo::Point) -> Point {
    Point::from_xy(point.x(), point.y())
}

pub fn line_string_from_geo(line_string: &geo::LineString) -> LineString {
    LineString::new(coords_from_geo(line_string))
}

pub fn polygon_from_geo(polygon: &geo::Polygon) -> Result<Polygon> {
    if polygon.exterior().0.is_empty() {
        return Ok(Polygon::empty(Dimension::XY));
    }
    let mut rings = vec![coords_from_geo(polygon.exterior())];
    for interior in polygon.interiors() {
        rings.push(coords_from_geo(interior));
    }
    Polygon::new(Dimension::XY, rings)
}

fn coords_from_geo(line_string: &geo::LineString) -> PointArray {
    let mut coords = Vec::with_capacity(line_string.0.len() * 2);
    for coord in line_string.coords() {
        coords.push(coord.x);
        coords.push(coord.y);
    }
    PointArray::from_coords(Dimension::XY, coords).unwrap()
}

/// Convert any [`geo::Geometry`] into the crate's value model.
pub fn from_geo(geom: &geo::Geometry) -> Result<Geometry> {
    let out = match geom {
        geo::Geometry::Point(g) => Geometry::Point(point_from_geo(g)),
        geo::Geometry::Line(g) => {
            let mut points = PointArray::with_capacity(Dimension::XY, 2);
            points.push(&[g.start.x, g.start.y]).unwrap();
            points.push(&[g.end.x, g.end.y]).unwrap();
            Geometry::LineString(LineString::new(points))
        }
        geo::Geometry::LineString(g) => Geometry::LineString(line_string_from_geo(g)),
        geo::Geometry::Polygon(g) => Geometry::Polygon(polygon_from_geo(g)?),
        geo::Geometry::Rect(g) => Geometry::Polygon(polygon_from_geo(&g.to_polygon())?),
        geo::Geometry::Triangle(g) => Geometry::Polygon(polygon_from_geo(&g.to_polygon())?),
        geo::Geometry::MultiPoint(g) => {
            let geoms = g
                .iter()
                .map(|p| Geometry::Point(point_from_geo(p)))
                .collect();
            Geometry::Collection(Collection::new(
                GeometryType::MultiPoint,
                Dimension::XY,
                geoms,
            )?)
        }
        geo::Geometry::MultiLineString(g) => {
            let geoms = g
                .iter()
                .map(|l| Geometry::LineString(line_string_from_geo(l)))
                .collect();
            Geometry::Collection(Collection::new(
                GeometryType::MultiLineString,
                Dimension::XY,
                geoms,
            )?)
        }
        geo::Geometry::MultiPolygon(g) => {
            let geoms = g
                .iter()
                .map(|p| polygon_from_geo(p).map(Geometry::Polygon))
                .collect::<Result<Vec<_>>>()?;
            Geometry::Collection(Collection::new(
                GeometryType::MultiPolygon,
                Dimension::XY,
                geoms,
            )?)
        }
        geo::Geometry::GeometryCollection(g) => {
            let geoms = g
                .iter()
                .map(from_geo)
                .collect::<Result<Vec<_>>>()?;
            Geometry::Collection(Collection::new(
                GeometryType::GeometryCollection,
                Dimension::XY,
                geoms,
            )?)
        }
    };
    Ok(out)
}

fn coords_to_geo(points: &PointArray) -> geo::LineString {
    let coords = points
        .iter()
        .map(|tuple| geo::Coord {
            x: tuple[0],
            y: tuple[1],
        })
        .collect();
    geo::LineString(coords)
}

/// Convert a geometry into a [`geo::Geometry`], dropping Z/M ordinates and
/// the SRID. Fails on an empty point, which `geo` cannot represent.
pub fn to_geo(geom: &Geometry) -> Result<geo::Geometry> {
    let out = match geom {
        Geometry::Point(g) => {
            let (x, y) = g.coords().xy(0).map_err(|_| {
                GeoPackError::InvalidType("empty point has no geo representation".to_string())
            })?;
            geo::Geometry::Point(geo::Point::new(x, y))
        }
        Geometry::LineString(g) => geo::Geometry::LineString(coords_to_geo(g.points())),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::Collection(g) => match g.kind() {
            GeometryType::MultiPoint => {
                let points = g
                    .geoms()
                    .iter()
                    .map(|child| match to_geo(child)? {
                        geo::Geometry::Point(p) => Ok(p),
                        _ => unreachable!("multipoint children are points"),
                    })
                    .collect::<Result<Vec<_>>>()?;
                geo::Geometry::MultiPoint(geo::MultiPoint(points))
            }
            GeometryType::MultiLineString => {
                let lines = g
                    .geoms()
                    .iter()
                    .filter_map(|child| child.as_line_string())
                    .map(|l| coords_to_geo(l.points()))
                    .collect();
                geo::Geometry::MultiLineString(geo::MultiLineString(lines))
            }
            GeometryType::MultiPolygon => {
                let polys = g
                    .geoms()
                    .iter()
                    .filter_map(|child| child.as_polygon())
                    .map(polygon_to_geo)
                    .collect();
                geo::Geometry::MultiPolygon(geo::MultiPolygon(polys))
            }
            _ => {
                let children = g
                    .geoms()
                    .iter()
                    .map(to_geo)
                    .collect::<Result<Vec<_>>>()?;
                geo::Geometry::GeometryCollection(geo::GeometryCollection(children))
            }
        },
    };
    Ok(out)
}

fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(coords_to_geo)
        .unwrap_or_else(|| geo::LineString(Vec::new()));
    let interiors = polygon.interiors().iter().map(coords_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}
