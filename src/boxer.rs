use geo::{Coord, Point, Rect};
use log::debug;
use ordered_float::OrderedFloat;
use rstar::RTree;
use std::ops::Deref;

use crate::error::Error;
use crate::geodesy::{EARTH_RADIUS_KM, rhumb_bearing, rhumb_destination};
use crate::geometry::Rectangle;

/// Default tolerance, in degrees, when comparing box edges during the merge
/// passes. Absorbs the float error accumulated through the trigonometric
/// pipeline at city-to-country coordinate scales.
pub const DEFAULT_MERGE_EPSILON_DEG: f64 = 0.001;

/**
 * One route-boxing computation: a route, a distance range and the grid state
 * built from them.
 *
 * A RouteBoxer is constructed fresh per computation, run once with `boxes()`
 * and then discarded. Nothing is shared between computations, so independent
 * routes can be boxed concurrently without coordination.
 */
pub struct RouteBoxer {
    /// Cell size and coverage radius around the route, in kilometers.
    distance_range: f64,
    /// Vertices of the path, insertion order defines the polyline.
    vertices: Vec<Point<f64>>,
    merge_epsilon: f64,

    /// Latitude of each horizontal grid line, south to north.
    lat_grid: Vec<f64>,
    /// Longitude of each vertical grid line, west to east.
    lng_grid: Vec<f64>,
    /// Coverage grid, indexed [x][y]; true cells must appear in the output.
    grid: Vec<Vec<bool>>,
    boxes_row: Vec<Rectangle>,
    boxes_col: Vec<Rectangle>,
}

impl RouteBoxer {
    /// Validates the input and sets up an empty computation.
    pub fn new(vertices: Vec<Point<f64>>, distance_range_km: f64) -> Result<Self, Error> {
        if vertices.is_empty() {
            return Err(Error::EmptyRoute);
        }
        // A non-positive (or NaN) range would keep the grid growth loop from
        // ever passing the bounding box edge.
        if !distance_range_km.is_finite() || distance_range_km <= 0.0 {
            return Err(Error::NonPositiveDistance(distance_range_km));
        }
        Ok(Self {
            distance_range: distance_range_km,
            vertices,
            merge_epsilon: DEFAULT_MERGE_EPSILON_DEG,
            lat_grid: Vec::new(),
            lng_grid: Vec::new(),
            grid: Vec::new(),
            boxes_row: Vec::new(),
            boxes_col: Vec::new(),
        })
    }

    /// Overrides the edge-matching tolerance used by the merge passes.
    pub fn with_merge_epsilon(mut self, epsilon_deg: f64) -> Self {
        self.merge_epsilon = epsilon_deg;
        self
    }

    /**
     * Runs the computation: lays the grid over the route, marks every cell
     * the route transits together with its eight neighbours, merges the
     * marked cells into rectangles and returns the smaller of the two merge
     * candidates. Ties go to the row-first set.
     */
    pub fn boxes(mut self) -> RouteBoxerResult {
        self.build_grid();
        self.find_intersecting_cells();
        self.merge_intersecting_cells();

        debug!(
            "row-first merge: {} boxes, column-first merge: {} boxes",
            self.boxes_row.len(),
            self.boxes_col.len()
        );
        if self.boxes_row.len() <= self.boxes_col.len() {
            RouteBoxerResult(self.boxes_row)
        } else {
            RouteBoxerResult(self.boxes_col)
        }
    }

    /// Smallest axis-aligned rectangle containing every route vertex.
    fn route_bounds(&self) -> Rect<f64> {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for vertex in &self.vertices {
            min_x = min_x.min(vertex.x());
            min_y = min_y.min(vertex.y());
            max_x = max_x.max(vertex.x());
            max_y = max_y.max(vertex.y());
        }

        Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y })
    }

    /// Lays grid lines over the route's bounding box, anchored at the box
    /// center and spaced one distance range apart, with at least one whole
    /// cell of margin beyond the box on every side. The margin is what keeps
    /// every 3x3 neighbourhood access during marking in bounds.
    fn build_grid(&mut self) {
        let route_bounds = self.route_bounds();
        let center = Point::from(route_bounds.center());
        let sw = route_bounds.min();
        let ne = route_bounds.max();
        let step = self.distance_range;

        let mut lat_grid = lines_outward(center, 180.0, sw.y, step, Point::y);
        lat_grid.reverse();
        lat_grid.push(center.y());
        lat_grid.extend(lines_outward(center, 0.0, ne.y, step, Point::y));
        self.lat_grid = lat_grid;

        let mut lng_grid = lines_outward(center, 270.0, sw.x, step, Point::x);
        lng_grid.reverse();
        lng_grid.push(center.x());
        lng_grid.extend(lines_outward(center, 90.0, ne.x, step, Point::x));
        self.lng_grid = lng_grid;

        self.grid = vec![vec![false; self.lat_grid.len()]; self.lng_grid.len()];
        debug!(
            "grid over route bounds: {} lng lines x {} lat lines",
            self.lng_grid.len(),
            self.lat_grid.len()
        );
    }

    /// Walks the route vertex by vertex and marks every cell the path passes
    /// through, not just the cells the vertices land in.
    fn find_intersecting_cells(&mut self) {
        let mut hint_xy = self.cell_coords(self.vertices[0]);
        self.mark_cell(hint_xy);

        for i in 1..self.vertices.len() {
            let vertex = self.vertices[i];
            let prev = self.vertices[i - 1];
            let grid_xy = self.cell_coords_from_hint(vertex, prev, hint_xy);

            let dx = grid_xy.0 as i64 - hint_xy.0 as i64;
            let dy = grid_xy.1 as i64 - hint_xy.1 as i64;
            if dx == 0 && dy == 0 {
                // same cell as the previous vertex, already marked
            } else if dx.abs() + dy.abs() == 1 {
                // shares an edge with the previous cell
                self.mark_cell(grid_xy);
            } else {
                // the segment passes through other cells in between
                self.grid_intersects(prev, vertex, hint_xy, grid_xy);
            }

            hint_xy = grid_xy;
        }
    }

    /// Locates a vertex's cell by scanning the grid lines from the edge
    /// inward. A vertex exactly on a grid line belongs to the cell whose
    /// lower/left edge is that line; the hint-based scans below follow the
    /// same convention.
    fn cell_coords(&self, point: Point<f64>) -> (usize, usize) {
        let mut x = 0;
        while self.lng_grid[x] <= point.x() {
            x += 1;
        }
        let mut y = 0;
        while self.lat_grid[y] <= point.y() {
            y += 1;
        }
        (x - 1, y - 1)
    }

    /// Locates a vertex's cell starting from the known cell of a nearby
    /// point, scanning only the lines between the two. Consecutive route
    /// vertices are usually close, so this avoids rescanning the whole axis.
    fn cell_coords_from_hint(
        &self,
        point: Point<f64>,
        hint: Point<f64>,
        hint_xy: (usize, usize),
    ) -> (usize, usize) {
        (
            scan_axis(&self.lng_grid, point.x(), hint.x(), hint_xy.0),
            scan_axis(&self.lat_grid, point.y(), hint.y(), hint_xy.1),
        )
    }

    /// Marks every cell a segment crosses between two non-adjacent cells.
    ///
    /// For each latitude grid line between the start and end rows, solves the
    /// point where the segment crosses that line, locates its cell using the
    /// previous crossing as a hint, and fills the row just traversed between
    /// the previous column and the crossing column. The leftover stretch in
    /// the end cell's row is filled after the loop.
    fn grid_intersects(
        &mut self,
        start: Point<f64>,
        end: Point<f64>,
        start_xy: (usize, usize),
        end_xy: (usize, usize),
    ) {
        let bearing = rhumb_bearing(start, end);
        let mut hint = start;
        let mut hint_xy = start_xy;

        let heading_north = end.y() > start.y();
        let steps = if heading_north {
            end_xy.1 - start_xy.1
        } else {
            start_xy.1 - end_xy.1
        };

        for k in 0..steps {
            let line_idx = if heading_north {
                start_xy.1 + 1 + k
            } else {
                start_xy.1 - k
            };
            let crossing = self.grid_intersect(start, bearing, self.lat_grid[line_idx]);
            let crossing_xy = self.cell_coords_from_hint(crossing, hint, hint_xy);

            // the row the segment just left: below the line when heading
            // north, above it when heading south
            let row = if heading_north { line_idx - 1 } else { line_idx };
            self.fill_in_grid_squares(hint_xy.0, crossing_xy.0, row);

            hint = crossing;
            hint_xy = crossing_xy;
        }

        self.fill_in_grid_squares(hint_xy.0, end_xy.0, end_xy.1);
    }

    /// Point where a segment from `start` with the given rhumb bearing
    /// crosses a latitude grid line, derived from the isometric-latitude
    /// relation between latitude delta and distance along the bearing.
    fn grid_intersect(&self, start: Point<f64>, bearing_deg: f64, grid_line_lat: f64) -> Point<f64> {
        let d = EARTH_RADIUS_KM
            * ((grid_line_lat.to_radians() - start.y().to_radians())
                / bearing_deg.to_radians().cos());
        rhumb_destination(start, bearing_deg, d)
    }

    /// Marks all cells of row `y` between two columns, inclusive on both ends.
    fn fill_in_grid_squares(&mut self, start_x: usize, end_x: usize, y: usize) {
        for x in start_x.min(end_x)..=start_x.max(end_x) {
            self.mark_cell((x, y));
        }
    }

    /// Marks a cell and its eight neighbours for inclusion in the boxes.
    /// The grid margin keeps every neighbour index in bounds.
    fn mark_cell(&mut self, cell: (usize, usize)) {
        let (x, y) = cell;
        for gx in x - 1..=x + 1 {
            for gy in y - 1..=y + 1 {
                self.grid[gx][gy] = true;
            }
        }
    }

    /// Bounds of a cell, between grid lines x..x+1 and y..y+1.
    fn cell_bounds(&self, cell: (usize, usize)) -> Rectangle {
        let (x, y) = cell;
        Rectangle::from_corners(
            (self.lng_grid[x], self.lat_grid[y]),
            (self.lng_grid[x + 1], self.lat_grid[y + 1]),
        )
    }

    /**
     * Builds two candidate rectangle sets covering exactly the marked cells.
     *
     * The row-first set merges adjacent marked cells in each row into
     * horizontal boxes, then coalesces boxes spanning identical longitude
     * ranges across vertically adjacent rows. The column-first set does the
     * same with the axes swapped. Minimal rectangle decomposition is hard in
     * general; two greedy passes and picking the smaller result is cheap and
     * close enough in practice.
     */
    fn merge_intersecting_cells(&mut self) {
        let mut current: Option<Rectangle> = None;

        for y in 0..self.lat_grid.len() {
            for x in 0..self.lng_grid.len() {
                if self.grid[x][y] {
                    let cell_box = self.cell_bounds((x, y));
                    match current.as_mut() {
                        Some(run) => run.extend(cell_box.north_east()),
                        None => current = Some(cell_box),
                    }
                } else {
                    self.merge_boxes_row(current.take());
                }
            }
            self.merge_boxes_row(current.take());
        }

        for x in 0..self.lng_grid.len() {
            for y in 0..self.lat_grid.len() {
                if self.grid[x][y] {
                    let cell_box = self.cell_bounds((x, y));
                    match current.as_mut() {
                        Some(run) => run.extend(cell_box.north_east()),
                        None => current = Some(cell_box),
                    }
                } else {
                    self.merge_boxes_col(current.take());
                }
            }
            self.merge_boxes_col(current.take());
        }
    }

    /// Folds a finished horizontal run into an accumulated box with the same
    /// longitude span in the row below, or starts a new box.
    fn merge_boxes_row(&mut self, run: Option<Rectangle>) {
        let Some(run) = run else { return };
        let eps = self.merge_epsilon;

        for existing in &mut self.boxes_row {
            if (existing.north_east().y() - run.south_west().y()).abs() < eps
                && (existing.south_west().x() - run.south_west().x()).abs() < eps
                && (existing.north_east().x() - run.north_east().x()).abs() < eps
            {
                existing.extend(run.north_east());
                return;
            }
        }
        self.boxes_row.push(run);
    }

    /// Folds a finished vertical run into an accumulated box with the same
    /// latitude span in the column to the left, or starts a new box.
    fn merge_boxes_col(&mut self, run: Option<Rectangle>) {
        let Some(run) = run else { return };
        let eps = self.merge_epsilon;

        for existing in &mut self.boxes_col {
            if (existing.north_east().x() - run.south_west().x()).abs() < eps
                && (existing.south_west().y() - run.south_west().y()).abs() < eps
                && (existing.north_east().y() - run.north_east().y()).abs() < eps
            {
                existing.extend(run.north_east());
                return;
            }
        }
        self.boxes_col.push(run);
    }
}

/// Grid line ordinates outward from the center along one bearing, generated
/// until the line two back has passed `edge`. Stopping one line late is what
/// leaves a whole margin cell beyond the bounding box, including when a line
/// lands exactly on the edge of a degenerate single-point box.
fn lines_outward<F>(
    center: Point<f64>,
    bearing_deg: f64,
    edge: f64,
    step_km: f64,
    ordinate: F,
) -> Vec<f64>
where
    F: Fn(Point<f64>) -> f64,
{
    let origin = ordinate(center);
    let mut lines: Vec<f64> = Vec::new();
    let mut i = 1usize;

    loop {
        lines.push(ordinate(rhumb_destination(center, bearing_deg, step_km * i as f64)));
        let dir = (lines[0] - origin).signum();
        let two_back = if lines.len() >= 2 {
            lines[lines.len() - 2]
        } else {
            origin
        };
        if (two_back - edge) * dir > 0.0 {
            break;
        }
        i += 1;
    }

    lines
}

/// Walks grid lines up or down from a known nearby index until the cell
/// containing `coord` is found. Same one-sided convention as the full scan:
/// a coordinate exactly on a line belongs to the cell above/right of it.
fn scan_axis(lines: &[f64], coord: f64, hint_coord: f64, hint_idx: usize) -> usize {
    let mut i = hint_idx;
    if coord > hint_coord {
        while lines[i + 1] <= coord {
            i += 1;
        }
    } else {
        while lines[i] > coord {
            i -= 1;
        }
    }
    i
}

/**
 * Generates the covering boxes for a route in one call.
 *
 * # Arguments
 *  `route` - The vertices of the path over which to lay the grid.
 *  `distance_range_km` - The grid cell size and coverage radius in kilometers.
 *
 * # Returns
 * The smaller of the two merged rectangle sets, or an input validation error.
 */
pub fn box_route(route: Vec<Point<f64>>, distance_range_km: f64) -> Result<RouteBoxerResult, Error> {
    Ok(RouteBoxer::new(route, distance_range_km)?.boxes())
}

/// The covering rectangle set produced by one boxing computation. Order is
/// not significant; `normalized` gives a canonical ordering for comparisons.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteBoxerResult(Vec<Rectangle>);

impl RouteBoxerResult {
    pub fn boxes(&self) -> &[Rectangle] {
        &self.0
    }

    pub fn into_boxes(self) -> Vec<Rectangle> {
        self.0
    }

    /// Sorts the boxes southwest-corner first so equal sets compare equal
    /// regardless of the order the merge emitted them in.
    pub fn normalized(mut self) -> Self {
        self.0.sort_by_key(|b| {
            (
                OrderedFloat(b.min().x),
                OrderedFloat(b.min().y),
                OrderedFloat(b.max().x),
                OrderedFloat(b.max().y),
            )
        });
        self
    }

    /// Whether any box contains the point. This is the coarse pre-filter the
    /// boxes exist for: candidates failing it cannot be near the route.
    pub fn contains(&self, point: Point<f64>) -> bool {
        self.0.iter().any(|b| b.contains(point))
    }

    /// Bulk-loads the boxes into an R-tree for repeated containment queries
    /// over large candidate sets.
    pub fn to_rtree(&self) -> RTree<Rectangle> {
        RTree::bulk_load(self.0.clone())
    }
}

impl Deref for RouteBoxerResult {
    type Target = [Rectangle];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for RouteBoxerResult {
    type Item = Rectangle;
    type IntoIter = std::vec::IntoIter<Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords.iter().map(|&(lng, lat)| Point::new(lng, lat)).collect()
    }

    fn strictly_increasing(lines: &[f64]) -> bool {
        lines.windows(2).all(|w| w[0] < w[1])
    }

    // Runs grid construction and tracing, returning the boxer with its
    // coverage grid populated but not yet merged.
    fn traced_boxer(coords: &[(f64, f64)], range_km: f64) -> RouteBoxer {
        let mut boxer = RouteBoxer::new(route(coords), range_km).unwrap();
        boxer.build_grid();
        boxer.find_intersecting_cells();
        boxer
    }

    #[test]
    fn test_rejects_empty_route() {
        assert_eq!(RouteBoxer::new(vec![], 10.0).err(), Some(Error::EmptyRoute));
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let r = route(&[(0.0, 0.0)]);
        assert!(matches!(
            RouteBoxer::new(r.clone(), 0.0),
            Err(Error::NonPositiveDistance(_))
        ));
        assert!(matches!(
            RouteBoxer::new(r.clone(), -5.0),
            Err(Error::NonPositiveDistance(_))
        ));
        assert!(matches!(
            RouteBoxer::new(r, f64::NAN),
            Err(Error::NonPositiveDistance(_))
        ));
    }

    #[test]
    fn test_grid_margin_invariant() {
        let mut boxer = RouteBoxer::new(route(&[(0.0, 0.0), (0.3, 0.7)]), 25.0).unwrap();
        boxer.build_grid();

        assert!(strictly_increasing(&boxer.lat_grid));
        assert!(strictly_increasing(&boxer.lng_grid));

        // at least one whole margin cell on every side: the two outermost
        // lines on each side lie beyond the route bounds
        let n = boxer.lat_grid.len();
        assert!(boxer.lat_grid[1] < 0.0);
        assert!(boxer.lat_grid[n - 2] > 0.7);
        let m = boxer.lng_grid.len();
        assert!(boxer.lng_grid[1] < 0.0);
        assert!(boxer.lng_grid[m - 2] > 0.3);
    }

    #[test]
    fn test_grid_lines_symmetric_about_bounds_center() {
        // route from (0,0) to (0,1): bounding box center latitude is 0.5 and
        // the latitude lines mirror around it
        let mut boxer = RouteBoxer::new(route(&[(0.0, 0.0), (0.0, 1.0)]), 100.0).unwrap();
        boxer.build_grid();

        let n = boxer.lat_grid.len();
        assert_eq!(n % 2, 1);
        assert!((boxer.lat_grid[n / 2] - 0.5).abs() < 1e-12);
        for i in 0..n {
            assert!((boxer.lat_grid[i] + boxer.lat_grid[n - 1 - i] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_marked_band_is_contiguous() {
        let result = box_route(route(&[(0.0, 0.0), (0.0, 1.0)]), 100.0).unwrap();
        for t in 0..=100 {
            let p = Point::new(0.0, t as f64 / 100.0);
            assert!(result.contains(p), "gap in coverage at {:?}", p);
        }
    }

    #[test]
    fn test_single_point_route_merges_to_one_box() {
        let result = box_route(route(&[(10.0, 45.0)]), 50.0).unwrap();
        assert_eq!(result.len(), 1);

        // the point's 3x3 neighbourhood collapses into a single box of three
        // cells per side
        let cell_lat = (50.0_f64 / EARTH_RADIUS_KM).to_degrees();
        let cell_lng = cell_lat / 45.0_f64.to_radians().cos();
        let b = &result[0];
        assert!((b.north_east().y() - b.south_west().y() - 3.0 * cell_lat).abs() < 1e-9);
        assert!((b.north_east().x() - b.south_west().x() - 3.0 * cell_lng).abs() < 1e-9);
        assert!(result.contains(Point::new(10.0, 45.0)));
    }

    #[test]
    fn test_all_vertices_within_union() {
        let coords = [(0.0, 0.0), (0.2, 0.1), (0.15, 0.35), (0.5, 0.3)];
        let result = box_route(route(&coords), 10.0).unwrap();
        for &(lng, lat) in &coords {
            assert!(result.contains(Point::new(lng, lat)));
        }
    }

    #[test]
    fn test_both_merge_strategies_tile_marked_cells_exactly() {
        let mut boxer = traced_boxer(&[(0.0, 0.0), (0.2, 0.1), (0.15, 0.35), (0.5, 0.3)], 10.0);
        let marked = boxer.grid.clone();
        boxer.merge_intersecting_cells();

        for boxes in [&boxer.boxes_row, &boxer.boxes_col] {
            for x in 0..boxer.lng_grid.len() - 1 {
                for y in 0..boxer.lat_grid.len() - 1 {
                    let center = Point::new(
                        (boxer.lng_grid[x] + boxer.lng_grid[x + 1]) / 2.0,
                        (boxer.lat_grid[y] + boxer.lat_grid[y + 1]) / 2.0,
                    );
                    let covering = boxes.iter().filter(|b| b.contains(center)).count();
                    // every marked cell covered exactly once, unmarked cells
                    // not at all
                    assert_eq!(
                        covering,
                        usize::from(marked[x][y]),
                        "cell ({}, {}) covered {} times",
                        x,
                        y,
                        covering
                    );
                }
            }
        }
    }

    #[test]
    fn test_returns_smaller_candidate_set() {
        let coords = [(0.0, 0.0), (0.2, 0.1), (0.15, 0.35), (0.5, 0.3)];
        let mut boxer = traced_boxer(&coords, 10.0);
        boxer.merge_intersecting_cells();
        let expected = boxer.boxes_row.len().min(boxer.boxes_col.len());

        let result = box_route(route(&coords), 10.0).unwrap();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_long_diagonal_segment_fully_covered() {
        // two vertices many cells apart in both axes force the intersection
        // tracer through every latitude line in between
        let result = box_route(route(&[(0.0, 0.0), (1.0, 1.2)]), 15.0).unwrap();
        for t in 0..=200 {
            let f = t as f64 / 200.0;
            let p = Point::new(f, 1.2 * f);
            assert!(result.contains(p), "gap along segment at {:?}", p);
        }
    }

    #[test]
    fn test_southward_segment_fully_covered() {
        let result = box_route(route(&[(1.0, 1.2), (0.0, 0.0)]), 15.0).unwrap();
        for t in 0..=200 {
            let f = t as f64 / 200.0;
            let p = Point::new(f, 1.2 * f);
            assert!(result.contains(p), "gap along segment at {:?}", p);
        }
    }

    #[test]
    fn test_pure_eastward_segment_fully_covered() {
        // same row, distant columns: covered by the final row fill alone
        let result = box_route(route(&[(0.0, 0.0), (0.8, 0.0)]), 20.0).unwrap();
        for t in 0..=100 {
            let p = Point::new(0.8 * t as f64 / 100.0, 0.0);
            assert!(result.contains(p), "gap along segment at {:?}", p);
        }
    }

    #[test]
    fn test_idempotent_across_runs() {
        let coords = [(8.5, 47.3), (8.7, 47.45), (8.9, 47.4)];
        let a = box_route(route(&coords), 5.0).unwrap().normalized();
        let b = box_route(route(&coords), 5.0).unwrap().normalized();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_epsilon_is_tunable() {
        // spans within one run derive from identical grid ordinates, so a
        // much tighter epsilon must not change the outcome at this scale
        let coords = [(0.0, 0.0), (0.2, 0.1), (0.15, 0.35)];
        let default_eps = box_route(route(&coords), 10.0).unwrap().normalized();
        let tight_eps = RouteBoxer::new(route(&coords), 10.0)
            .unwrap()
            .with_merge_epsilon(1e-6)
            .boxes()
            .normalized();
        assert_eq!(default_eps, tight_eps);
    }

    #[test]
    fn test_rtree_lookup_matches_linear_containment() {
        let result = box_route(route(&[(10.0, 45.0)]), 50.0).unwrap();
        let tree = result.to_rtree();

        let inside = [10.0, 45.0];
        let outside = [12.0, 45.0];
        assert!(
            tree.locate_in_envelope_intersecting(&rstar::AABB::from_point(inside))
                .next()
                .is_some()
        );
        assert!(
            tree.locate_in_envelope_intersecting(&rstar::AABB::from_point(outside))
                .next()
                .is_none()
        );
    }

    #[test]
    fn test_box_route_propagates_validation_errors() {
        assert_eq!(box_route(vec![], 10.0).err(), Some(Error::EmptyRoute));
        assert_eq!(
            box_route(route(&[(0.0, 0.0)]), -1.0).err(),
            Some(Error::NonPositiveDistance(-1.0))
        );
    }
}
