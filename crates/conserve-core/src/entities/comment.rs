//! Comment entity - a user's comment on a campaign

use chrono::{DateTime, Utc};

use crate::value_objects::comment_author_name;

/// Comment row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i32,
    pub campaign_id: i32,
    pub user_id: i32,
    pub body: String,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author and the author's optional profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub profile_image: Option<String>,
    pub org_name: Option<String>,
    pub sup_name: Option<String>,
    pub author_deactivated: bool,
}

impl CommentWithAuthor {
    /// A comment is shown only while neither it nor its author is deactivated
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.comment.is_deactivated && !self.author_deactivated
    }

    /// Name shown for the author
    pub fn display_name(&self) -> String {
        comment_author_name(self.org_name.as_deref(), self.sup_name.as_deref())
    }
}

/// Comment as attached to a campaign view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignComment {
    pub comment: Comment,
    pub profile_image: Option<String>,
    pub name: String,
}

impl From<CommentWithAuthor> for CampaignComment {
    fn from(row: CommentWithAuthor) -> Self {
        let name = row.display_name();
        Self {
            comment: row.comment,
            profile_image: row.profile_image,
            name,
        }
    }
}
