//! Corner geometry for trajectory prediction.
//!
//! The menu's content box is expanded outward by a threshold margin and two of
//! its four corners are chosen according to where the submenu content sits.
//! The gradient of the line from the pointer to each chosen corner is what the
//! intent evaluator compares between consecutive pointer samples.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// A pointer sample in page (terminal cell) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at the given terminal cell (column, row).
    pub fn from_cell(column: u16, row: u16) -> Self {
        Self::new(f64::from(column), f64::from(row))
    }
}

/// Padding subtracted from the menu rect before the content region is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const fn uniform(value: u16) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// The content box occupied by the menu items.
///
/// Computed once when a menu is bound and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Region {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Content region of a menu rect, net of padding.
    ///
    /// A rect narrower than its horizontal padding collapses to a zero-width
    /// region rather than inverting.
    ///
    /// Edges lie on cell boundaries: `right` is `x + width`, one past the last
    /// column, and likewise for `bottom`. With the inclusive
    /// [`contains`](Self::contains), the cell just beyond the right or bottom
    /// edge is inside the region while the binding already treats it as
    /// outside the menu. Callers sampling in cells see this one-cell overlap.
    pub fn from_rect(rect: Rect, padding: Padding) -> Self {
        let left = f64::from(rect.x) + f64::from(padding.left);
        let top = f64::from(rect.y) + f64::from(padding.top);
        let inner_width = rect
            .width
            .saturating_sub(padding.left.saturating_add(padding.right));
        let inner_height = rect
            .height
            .saturating_sub(padding.top.saturating_add(padding.bottom));
        Self {
            top,
            right: left + f64::from(inner_width),
            bottom: top + f64::from(inner_height),
            left,
        }
    }

    /// Whether `point` lies within the region's bounds (edges inclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// The four corners of the region pushed outward by `threshold`.
    pub fn expanded_corners(&self, threshold: f64) -> CornerSet {
        CornerSet {
            top_left: Point::new(self.left - threshold, self.top - threshold),
            top_right: Point::new(self.right + threshold, self.top - threshold),
            bottom_left: Point::new(self.left - threshold, self.bottom + threshold),
            bottom_right: Point::new(self.right + threshold, self.bottom + threshold),
        }
    }
}

/// Side of the menu on which the submenu content is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentDirection {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl ContentDirection {
    pub const ALL: [ContentDirection; 4] = [
        ContentDirection::Top,
        ContentDirection::Bottom,
        ContentDirection::Left,
        ContentDirection::Right,
    ];

    /// Parse a direction name; anything unrecognised means `Right`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => ContentDirection::Top,
            "bottom" => ContentDirection::Bottom,
            "left" => ContentDirection::Left,
            _ => ContentDirection::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentDirection::Top => "top",
            ContentDirection::Bottom => "bottom",
            ContentDirection::Left => "left",
            ContentDirection::Right => "right",
        }
    }
}

impl From<String> for ContentDirection {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<ContentDirection> for String {
    fn from(value: ContentDirection) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for ContentDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All four threshold-expanded corners of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerSet {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

/// The two corners the evaluator compares gradients against.
///
/// While the pointer travels toward the content, the gradient to
/// `decreasing` must not increase and the gradient to `increasing` must not
/// decrease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerPair {
    pub decreasing: Point,
    pub increasing: Point,
}

/// Select the corner pair for a region, threshold and content direction.
///
/// | direction | decreasing   | increasing   |
/// |-----------|--------------|--------------|
/// | top       | top-left     | top-right    |
/// | bottom    | bottom-right | bottom-left  |
/// | left      | bottom-left  | top-left     |
/// | right     | top-right    | bottom-right |
pub fn derive_corners(region: &Region, threshold: f64, direction: ContentDirection) -> CornerPair {
    let corners = region.expanded_corners(threshold);
    match direction {
        ContentDirection::Top => CornerPair {
            decreasing: corners.top_left,
            increasing: corners.top_right,
        },
        ContentDirection::Bottom => CornerPair {
            decreasing: corners.bottom_right,
            increasing: corners.bottom_left,
        },
        ContentDirection::Left => CornerPair {
            decreasing: corners.bottom_left,
            increasing: corners.top_left,
        },
        ContentDirection::Right => CornerPair {
            decreasing: corners.top_right,
            increasing: corners.bottom_right,
        },
    }
}

/// Gradient of the line drawn from `a` to `b`.
///
/// Vertical alignment divides by zero and yields an infinity (or NaN when the
/// points coincide); both compare under IEEE rules without special-casing.
#[inline]
pub fn gradient(a: Point, b: Point) -> f64 {
    (b.y - a.y) / (b.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region::new(10.0, 40.0, 30.0, 20.0)
    }

    #[test]
    fn test_expanded_corners_offset_outward() {
        let corners = region().expanded_corners(5.0);
        assert_eq!(corners.top_left, Point::new(15.0, 5.0));
        assert_eq!(corners.top_right, Point::new(45.0, 5.0));
        assert_eq!(corners.bottom_left, Point::new(15.0, 35.0));
        assert_eq!(corners.bottom_right, Point::new(45.0, 35.0));
    }

    #[test]
    fn test_derive_corners_matches_direction_table() {
        let r = region();
        let c = r.expanded_corners(5.0);
        let expected = [
            (ContentDirection::Top, c.top_left, c.top_right),
            (ContentDirection::Bottom, c.bottom_right, c.bottom_left),
            (ContentDirection::Left, c.bottom_left, c.top_left),
            (ContentDirection::Right, c.top_right, c.bottom_right),
        ];
        for (direction, decreasing, increasing) in expected {
            let pair = derive_corners(&r, 5.0, direction);
            assert_eq!(pair.decreasing, decreasing, "decreasing corner for {}", direction);
            assert_eq!(pair.increasing, increasing, "increasing corner for {}", direction);
        }
    }

    #[test]
    fn test_unknown_direction_falls_back_to_right() {
        assert_eq!(ContentDirection::from_str_lossy("diagonal"), ContentDirection::Right);
        assert_eq!(ContentDirection::from_str_lossy(""), ContentDirection::Right);
        assert_eq!(ContentDirection::from_str_lossy(" Left "), ContentDirection::Left);
    }

    #[test]
    fn test_direction_deserializes_lossily() {
        let d: ContentDirection = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(d, ContentDirection::Bottom);
        let d: ContentDirection = serde_json::from_str("\"sideways\"").unwrap();
        assert_eq!(d, ContentDirection::Right);
        assert_eq!(serde_json::to_string(&ContentDirection::Top).unwrap(), "\"top\"");
    }

    #[test]
    fn test_gradient_basic() {
        let g = gradient(Point::new(95.0, 5.0), Point::new(100.0, 0.0));
        assert_eq!(g, -1.0);
    }

    #[test]
    fn test_gradient_vertical_is_infinite() {
        let up = gradient(Point::new(10.0, 10.0), Point::new(10.0, 0.0));
        let down = gradient(Point::new(10.0, 10.0), Point::new(10.0, 20.0));
        assert_eq!(up, f64::NEG_INFINITY);
        assert_eq!(down, f64::INFINITY);
        assert!(up < -1e300);
    }

    #[test]
    fn test_region_edge_cells_one_past_the_rect_are_contained() {
        let rect = Rect::new(0, 0, 10, 4);
        let region = Region::from_rect(rect, Padding::default());
        assert_eq!(region.right, f64::from(rect.right()));
        assert_eq!(region.bottom, f64::from(rect.bottom()));
        assert!(region.contains(Point::from_cell(rect.right(), 2)));
        assert!(region.contains(Point::from_cell(3, rect.bottom())));
        assert!(!region.contains(Point::from_cell(rect.right() + 1, 2)));
    }

    #[test]
    fn test_region_from_rect_subtracts_padding() {
        let rect = Rect::new(2, 3, 20, 10);
        let r = Region::from_rect(rect, Padding { top: 1, right: 2, bottom: 1, left: 2 });
        assert_eq!(r, Region::new(4.0, 20.0, 12.0, 4.0));
    }

    #[test]
    fn test_region_from_rect_collapses_when_padding_exceeds_size() {
        let r = Region::from_rect(Rect::new(0, 0, 2, 2), Padding::uniform(3));
        assert_eq!(r.left, r.right);
        assert_eq!(r.top, r.bottom);
    }

    #[test]
    fn test_region_contains_is_edge_inclusive() {
        let r = region();
        assert!(r.contains(Point::new(20.0, 10.0)));
        assert!(r.contains(Point::new(40.0, 30.0)));
        assert!(!r.contains(Point::new(19.9, 15.0)));
        assert!(!r.contains(Point::new(25.0, 30.1)));
    }
}
