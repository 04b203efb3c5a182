//! User entity <-> model mapper

use conserve_core::entities::{User, UserProfile};
use conserve_core::value_objects::profile_name;

use crate::models::{UserModel, UserProfileModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            profile_image: model.profile_image,
            location: model.location,
            is_deactivated: model.is_deactivated,
            created_at: model.created_at,
        }
    }
}

impl From<UserProfileModel> for UserProfile {
    fn from(model: UserProfileModel) -> Self {
        let name = profile_name(model.sup_name.as_deref(), model.cons_name.as_deref());
        UserProfile {
            user: model.user.into(),
            name,
        }
    }
}
