//! Surface size validation.

use crate::defaults::MAX_SURFACE_DIM;
use crate::schema::ArcglowConfig;

use super::helpers::validate_range;

pub(crate) fn validate_surface(errors: &mut Vec<String>, config: &ArcglowConfig) {
    validate_range(errors, "surface.width", config.surface.width, 1, MAX_SURFACE_DIM);
    validate_range(errors, "surface.height", config.surface.height, 1, MAX_SURFACE_DIM);
}
