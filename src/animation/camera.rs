//! Camera follow and fit-to-bounds requests
//!
//! While the marker travels, the camera is re-centred on it every rendered
//! frame. Near the end the animator stops following and issues one final
//! request that fits the whole route into the viewport.

use serde::Deserialize;

use crate::coordinate::{BoundingBox, CoordinateTransformer, Point};

/// Width in pixels of the whole world at zoom 0 (512 px vector tiles)
pub const WORLD_TILE_SIZE: f64 = 512.0;

/// Camera placement sent to the map renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRequest {
    pub center: Point,
    pub zoom: f64,
    pub bearing: f64,
    pub pitch: f64,
}

/// Camera behaviour while following and when settling
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Zoom level while following the marker
    pub zoom: f64,
    /// Pitch in degrees while following
    pub pitch: f64,
    /// Fixed bearing in degrees while following
    pub bearing: f64,
    /// Point the camera along the direction of travel instead of the fixed bearing
    pub heading_bearing: bool,
    /// Padding in pixels around the route when fitting bounds
    pub padding: f64,
    /// Upper zoom limit when fitting bounds
    pub max_zoom: f64,
    /// Viewport width in pixels
    pub viewport_width: f64,
    /// Viewport height in pixels
    pub viewport_height: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            zoom: 14.0,
            pitch: 60.0,
            bearing: 30.0,
            heading_bearing: false,
            padding: 50.0,
            max_zoom: 9.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

impl CameraSettings {
    /// Follow request centred on the current marker position
    ///
    /// # Arguments
    /// * `current` - Current marker position
    /// * `previous` - Previous sample on the route, used for the heading
    pub fn follow_request(&self, current: &Point, previous: Option<&Point>) -> CameraRequest {
        let bearing = match previous {
            Some(prev) if self.heading_bearing && prev != current => {
                CoordinateTransformer::bearing(prev, current)
            }
            _ => self.bearing,
        };

        CameraRequest {
            center: *current,
            zoom: self.zoom,
            bearing,
            pitch: self.pitch,
        }
    }

    /// Camera request showing the whole bounding box
    ///
    /// The zoom is the largest one at which the box's Web Mercator extent fits
    /// into the padded viewport, capped at `max_zoom`. Bearing is reset to north.
    pub fn fit_bounds(&self, bbox: &BoundingBox) -> CameraRequest {
        let min = CoordinateTransformer::wgs84_to_web_mercator(bbox.min_lng, bbox.min_lat);
        let max = CoordinateTransformer::wgs84_to_web_mercator(bbox.max_lng, bbox.max_lat);
        let center = CoordinateTransformer::web_mercator_to_wgs84(
            (min.lng + max.lng) / 2.0,
            (min.lat + max.lat) / 2.0,
        );

        let (width_m, height_m) = CoordinateTransformer::mercator_extent(bbox);
        let available_w = (self.viewport_width - 2.0 * self.padding).max(1.0);
        let available_h = (self.viewport_height - 2.0 * self.padding).max(1.0);
        let circumference = 2.0 * std::f64::consts::PI * CoordinateTransformer::EARTH_RADIUS;

        let zoom_for = |extent_m: f64, available_px: f64| -> f64 {
            if extent_m <= 0.0 {
                f64::INFINITY
            } else {
                (available_px * circumference / (extent_m * WORLD_TILE_SIZE)).log2()
            }
        };

        let zoom = zoom_for(width_m, available_w)
            .min(zoom_for(height_m, available_h))
            .min(self.max_zoom)
            .max(0.0);

        CameraRequest {
            center,
            zoom,
            bearing: 0.0,
            pitch: self.pitch,
        }
    }
}
