//! Comment entity <-> model mapper

use conserve_core::entities::{Comment, CommentWithAuthor};

use crate::models::{CommentModel, CommentWithAuthorModel};

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            campaign_id: model.campaign_id,
            user_id: model.user_id,
            body: model.body,
            is_deactivated: model.is_deactivated,
            created_at: model.created_at,
        }
    }
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(model: CommentWithAuthorModel) -> Self {
        CommentWithAuthor {
            comment: model.comment.into(),
            profile_image: model.profile_image,
            org_name: model.org_name,
            sup_name: model.sup_name,
            author_deactivated: model.author_deactivated,
        }
    }
}
