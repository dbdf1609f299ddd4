pub mod river3;

use crate::models::field_definition::DeviceProfile;

/// Profiles for all device models shipped with the crate
pub const BUILTIN: &[DeviceProfile] = &[river3::PROFILE];
