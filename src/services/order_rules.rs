//! Decides which buyer-supplied fields a checkout submission must carry,
//! based on the purchased service's name and category.
//!
//! The rules are evaluated independently and their requirements are
//! unioned; a field demanded by two rules is simply required once.

/// Category ids with special field handling, matching the seeded catalog.
pub const YOUTUBE_CATEGORY: i32 = 2;
pub const TWITTER_CATEGORY: i32 = 5;
pub const GIFT_CARD_CATEGORY: i32 = 7;

/// What the single wire-level `targetUrl` field actually carries for a given
/// service. Gift-card delivery wins over a channel URL, which wins over a
/// content URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPurpose {
    /// Post, video or page URL the engagement is delivered to.
    ContentUrl,
    /// YouTube channel URL for subscriber packages.
    ChannelUrl,
    /// Email address the purchased gift-card code is sent to.
    DeliveryEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRequirements {
    pub platform_username: bool,
    pub target_url: Option<TargetPurpose>,
}

/// Field requirements for one service. Phone, payment method and payment
/// screenshot are always required and are not part of this result.
pub fn requirements_for(service_name: &str, category_id: i32) -> FieldRequirements {
    let name = service_name.to_lowercase();
    let mut requirements = FieldRequirements::default();

    // Follower-style packages target an account, so the platform handle is
    // needed. YouTube subscriber packages are the exception: they are keyed
    // on the channel URL instead.
    if name.contains("followers")
        || (name.contains("subscribers") && category_id != YOUTUBE_CATEGORY)
        || name.contains("members")
    {
        requirements.platform_username = true;
    }

    if name.contains("subscribers") && category_id == YOUTUBE_CATEGORY {
        requirements.target_url = Some(TargetPurpose::ChannelUrl);
    }

    // Engagement on a specific piece of content needs its URL. Every
    // Twitter/X package counts as content-targeted. Gift cards never do,
    // whatever their name says.
    if (name.contains("likes")
        || name.contains("views")
        || name.contains("comments")
        || category_id == TWITTER_CATEGORY)
        && category_id != GIFT_CARD_CATEGORY
        && requirements.target_url.is_none()
    {
        requirements.target_url = Some(TargetPurpose::ContentUrl);
    }

    if category_id == GIFT_CARD_CATEGORY {
        requirements.target_url = Some(TargetPurpose::DeliveryEmail);
    }

    requirements
}

/// Buyer-supplied values as they arrived, before any trimming.
#[derive(Debug, Clone, Copy)]
pub struct SubmittedFields<'a> {
    pub customer_phone: &'a str,
    pub screenshot_url: &'a str,
    pub platform_username: Option<&'a str>,
    pub target_url: Option<&'a str>,
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Wire-level names of required fields that are absent or empty.
pub fn missing_fields(
    requirements: FieldRequirements,
    fields: &SubmittedFields<'_>,
) -> Vec<String> {
    let mut missing = Vec::new();
    if fields.customer_phone.trim().is_empty() {
        missing.push("customerPhone".to_string());
    }
    if fields.screenshot_url.trim().is_empty() {
        missing.push("screenshotUrl".to_string());
    }
    if requirements.platform_username && is_blank(fields.platform_username) {
        missing.push("platformUsername".to_string());
    }
    if requirements.target_url.is_some() && is_blank(fields.target_url) {
        missing.push("targetUrl".to_string());
    }
    missing
}
