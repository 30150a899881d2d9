use storefront_api::services::order_rules::{
    GIFT_CARD_CATEGORY, SubmittedFields, TWITTER_CATEGORY, TargetPurpose, YOUTUBE_CATEGORY,
    missing_fields, requirements_for,
};

#[test]
fn follower_packages_need_a_platform_username() {
    let req = requirements_for("TikTok Followers (1000)", 1);
    assert!(req.platform_username);
    assert_eq!(req.target_url, None);
}

#[test]
fn matching_is_case_insensitive() {
    let req = requirements_for("INSTAGRAM FOLLOWERS (1000)", 3);
    assert!(req.platform_username);
}

#[test]
fn youtube_subscribers_need_a_channel_url_not_a_username() {
    let req = requirements_for("YouTube Subscribers (500)", YOUTUBE_CATEGORY);
    assert!(!req.platform_username);
    assert_eq!(req.target_url, Some(TargetPurpose::ChannelUrl));
}

#[test]
fn subscriber_packages_outside_youtube_need_a_username() {
    let req = requirements_for("Telegram Subscribers (1000)", 6);
    assert!(req.platform_username);
    assert_eq!(req.target_url, None);
}

#[test]
fn group_member_packages_need_a_username() {
    let req = requirements_for("Facebook Group Members (300)", 4);
    assert!(req.platform_username);
}

#[test]
fn likes_views_and_comments_need_the_content_url() {
    for name in [
        "TikTok Likes (1000)",
        "YouTube Views (5000)",
        "Instagram Comments (50)",
    ] {
        let req = requirements_for(name, 1);
        assert_eq!(
            req.target_url,
            Some(TargetPurpose::ContentUrl),
            "expected content URL for {name}"
        );
    }
}

#[test]
fn every_twitter_package_is_content_targeted() {
    let req = requirements_for("Twitter Retweets (100)", TWITTER_CATEGORY);
    assert_eq!(req.target_url, Some(TargetPurpose::ContentUrl));
}

#[test]
fn gift_cards_need_a_delivery_email_whatever_the_name_says() {
    let req = requirements_for("Amazon Gift Card ($25)", GIFT_CARD_CATEGORY);
    assert_eq!(req.target_url, Some(TargetPurpose::DeliveryEmail));
    assert!(!req.platform_username);

    // A likes/views name does not demote the gift-card delivery email.
    let req = requirements_for("Gift Card + Bonus Likes", GIFT_CARD_CATEGORY);
    assert_eq!(req.target_url, Some(TargetPurpose::DeliveryEmail));
}

#[test]
fn subscription_services_only_need_the_basics() {
    let req = requirements_for("Netflix Premium (1 Month)", 6);
    assert!(!req.platform_username);
    assert_eq!(req.target_url, None);
}

#[test]
fn channel_url_wins_over_content_url_for_subscriber_bundles() {
    let req = requirements_for("YouTube Subscribers + Likes Bundle", YOUTUBE_CATEGORY);
    assert_eq!(req.target_url, Some(TargetPurpose::ChannelUrl));
    assert!(!req.platform_username);
}

#[test]
fn missing_fields_reports_wire_level_names() {
    let req = requirements_for("TikTok Followers (1000)", 1);
    let missing = missing_fields(
        req,
        &SubmittedFields {
            customer_phone: "",
            screenshot_url: "data:image/png;base64,AAAA",
            platform_username: None,
            target_url: None,
        },
    );
    assert_eq!(missing, vec!["customerPhone", "platformUsername"]);
}

#[test]
fn whitespace_only_values_count_as_missing() {
    let req = requirements_for("YouTube Subscribers (500)", YOUTUBE_CATEGORY);
    let missing = missing_fields(
        req,
        &SubmittedFields {
            customer_phone: "0911111111",
            screenshot_url: "   ",
            platform_username: None,
            target_url: Some("  "),
        },
    );
    assert_eq!(missing, vec!["screenshotUrl", "targetUrl"]);
}

#[test]
fn phone_and_screenshot_are_always_required() {
    let req = requirements_for("Netflix Premium (1 Month)", 6);
    let missing = missing_fields(
        req,
        &SubmittedFields {
            customer_phone: "",
            screenshot_url: "",
            platform_username: None,
            target_url: None,
        },
    );
    assert_eq!(missing, vec!["customerPhone", "screenshotUrl"]);
}
