use std::fmt;

use log::info;
use serde::Serialize;
use serde_json::{json, Value};

use crate::animation::{AnimationConfig, FrameScheduler, RouteAnimator, RouteRenderer};
use crate::config::Settings;
use crate::coordinate::Point;
use crate::curve::PathCurveBuilder;
use crate::errors::AnimResult;
use crate::route::{format_distance, Route, Waypoint};

/// Main interface to the travelanim library
///
/// Owns the validated settings and hands out everything built from them:
/// curve builders, routes, summaries and animators.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelAnimator {
    settings: Settings,
}

/// How the traversal duration is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timing {
    /// `[animation].velocity` when set, otherwise `[animation].duration_ms`
    Configured,
    /// `[export].duration_secs`
    ExportLength,
    /// Constant speed in degrees per second
    Velocity(f64),
}

/// Figures describing a built route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub segments: usize,
    pub samples: usize,
    /// Sum of sample-to-sample distances in degrees
    pub total_length: f64,
    /// Great-circle length along the samples
    pub ground_distance_m: f64,
    /// Distance formatted in the configured unit, absent when units are off
    pub distance_label: Option<String>,
    /// `[[min_lng, min_lat], [max_lng, max_lat]]`
    pub bounds: Option<[[f64; 2]; 2]>,
    pub duration_ms: f64,
    pub map_style: String,
    pub map_style_url: String,
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Route Summary:")?;
        writeln!(f, "  Segments: {}", self.segments)?;
        writeln!(f, "  Samples: {}", self.samples)?;
        writeln!(f, "  Path length: {:.6} deg", self.total_length)?;
        if let Some(label) = &self.distance_label {
            writeln!(f, "  Distance: {}", label)?;
        }
        match self.bounds {
            Some([[min_lng, min_lat], [max_lng, max_lat]]) => {
                writeln!(f, "  Bounds: {:.6},{:.6},{:.6},{:.6}", min_lng, min_lat, max_lng, max_lat)?
            }
            None => writeln!(f, "  Bounds: n/a")?,
        }
        writeln!(f, "  Duration: {:.0} ms", self.duration_ms)?;
        write!(f, "  Map style: {} ({})", self.map_style, self.map_style_url)
    }
}

impl TravelAnimator {
    /// Create a new TravelAnimator from settings
    ///
    /// # Arguments
    /// * `settings` - Settings to use, validated here
    ///
    /// # Returns
    /// A TravelAnimator instance or a `ConfigError`
    pub fn new(settings: Settings) -> AnimResult<Self> {
        settings.validate()?;
        Ok(TravelAnimator { settings })
    }

    /// Create a TravelAnimator from a settings file, `travelanim.toml` or defaults
    pub fn from_config(path: Option<&str>) -> AnimResult<Self> {
        Self::new(Settings::load(path)?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Curve builder configured by the `[curve]` section
    pub fn curve_builder(&self) -> PathCurveBuilder {
        self.settings.curve_builder()
    }

    pub fn animation_config(&self) -> AnimationConfig {
        self.settings.animation_config()
    }

    /// Sample the curve between two points with the configured sample count
    pub fn curve(&self, origin: &Point, destination: &Point) -> AnimResult<Vec<Point>> {
        self.curve_builder().build_curve(origin, destination, self.settings.curve.sample_count)
    }

    /// Build the curved route through `waypoints`
    ///
    /// # Returns
    /// The route, or `InvalidInput`/`MissingCoordinates` when the waypoints can't form one
    pub fn build_route(&self, waypoints: &[Waypoint]) -> AnimResult<Route> {
        self.build_route_with(waypoints, self.settings.curve.sample_count)
    }

    /// Build the curved route with an explicit number of samples per segment
    pub fn build_route_with(&self, waypoints: &[Waypoint], sample_count: usize) -> AnimResult<Route> {
        Route::from_waypoints(
            waypoints,
            &self.curve_builder(),
            sample_count,
            self.settings.curve.dedupe_joints,
        )
    }

    /// Start configuration for traversing `route`
    ///
    /// # Arguments
    /// * `route` - Route the duration is derived from when timing by velocity
    /// * `timing` - Where the duration comes from
    ///
    /// # Returns
    /// The config, or `InvalidInput` for a non-positive velocity or a zero-length route
    pub fn animation_config_for(&self, route: &Route, timing: Timing) -> AnimResult<AnimationConfig> {
        let mut config = match timing {
            Timing::ExportLength => self.settings.export_animation_config(),
            _ => self.settings.animation_config(),
        };

        let velocity = match timing {
            Timing::Velocity(velocity) => Some(velocity),
            Timing::Configured => self.settings.animation.velocity,
            Timing::ExportLength => None,
        };
        if let Some(velocity) = velocity {
            config.duration_ms = AnimationConfig::duration_for_velocity(route, velocity)?;
            info!("Duration {:.0} ms for {:.6} deg at {} deg/s", config.duration_ms, route.total_length(), velocity);
        }
        Ok(config)
    }

    /// Summarize a built route
    pub fn summarize(&self, route: &Route) -> AnimResult<RouteSummary> {
        let style = self.settings.map_style()?;
        let ground_distance_m = route.ground_distance_meters();

        Ok(RouteSummary {
            segments: route.segments().len(),
            samples: route.len(),
            total_length: route.total_length(),
            ground_distance_m,
            distance_label: format_distance(ground_distance_m, self.settings.export.units),
            bounds: route.bounds().map(|b| b.to_array()),
            duration_ms: self.settings.animation.duration_ms,
            map_style: style.key.clone(),
            map_style_url: style.url.clone(),
        })
    }

    /// GeoJSON FeatureCollection with the route line and one point per waypoint
    ///
    /// Unresolved waypoints are left out.
    pub fn route_geojson(&self, route: &Route, waypoints: &[Waypoint]) -> Value {
        let line: Vec<[f64; 2]> = route.samples().iter().map(|p| p.to_array()).collect();
        let mut features = vec![json!({
            "type": "Feature",
            "properties": {
                "kind": "route",
                "distance": format_distance(route.ground_distance_meters(), self.settings.export.units),
            },
            "geometry": { "type": "LineString", "coordinates": line },
        })];

        for waypoint in waypoints {
            if let Some(point) = waypoint.point {
                features.push(json!({
                    "type": "Feature",
                    "properties": {
                        "kind": "waypoint",
                        "role": waypoint.role.to_string(),
                        "label": waypoint.label,
                    },
                    "geometry": { "type": "Point", "coordinates": point.to_array() },
                }));
            }
        }

        info!("Built GeoJSON with {} features", features.len());
        json!({ "type": "FeatureCollection", "features": features })
    }

    /// Animator wired to the configured camera behaviour
    pub fn animator<S: FrameScheduler, R: RouteRenderer>(&self, scheduler: S, renderer: R) -> RouteAnimator<S, R> {
        RouteAnimator::new(scheduler, renderer).with_camera(self.settings.camera)
    }
}
