//! Locomotion domain: avian2d-backed environment probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::EnvironmentQuery;

/// [`EnvironmentQuery`] over avian's spatial query pipeline. The probing body
/// itself is always excluded.
pub(crate) struct SpatialProbe<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub exclude: Entity,
}

impl SpatialProbe<'_, '_, '_> {
    fn filter(&self, mask: LayerMask) -> SpatialQueryFilter {
        SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.exclude])
    }
}

impl EnvironmentQuery for SpatialProbe<'_, '_, '_> {
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool {
        let shape = Collider::circle(radius);
        !self
            .spatial_query
            .shape_intersections(&shape, point, 0.0, &self.filter(mask))
            .is_empty()
    }

    fn raycast(&self, origin: Vec2, direction: Dir2, distance: f32, mask: LayerMask) -> bool {
        self.spatial_query
            .cast_ray(origin, direction, distance, true, &self.filter(mask))
            .is_some()
    }
}
