//! Catalog seed data shared by `MemStorage::seeded()` and the `seed` binary.

use crate::models::{
    InsertCategory, InsertContactInfo, InsertPaymentMethod, InsertService, InsertTestimonial,
    InsertUser,
};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

fn category(name: &str, slug: &str, icon: &str, description: &str) -> InsertCategory {
    InsertCategory {
        name: name.to_string(),
        slug: slug.to_string(),
        icon: icon.to_string(),
        description: Some(description.to_string()),
    }
}

pub fn categories() -> Vec<InsertCategory> {
    vec![
        category(
            "TikTok",
            "tiktok",
            "hashtag",
            "TikTok followers, likes, views and more",
        ),
        category(
            "YouTube",
            "youtube",
            "play",
            "YouTube subscribers, views, and engagement services",
        ),
        category(
            "Instagram",
            "instagram",
            "hashtag",
            "Instagram followers, likes and engagement services",
        ),
        category(
            "Facebook",
            "facebook",
            "users",
            "Facebook page likes, followers and engagement",
        ),
        category(
            "Twitter/X",
            "twitter",
            "hashtag",
            "Twitter followers, retweets, and engagement",
        ),
        category(
            "Subscription Services",
            "subscription",
            "calendar-check",
            "Premium subscriptions for streaming platforms",
        ),
        category(
            "Gift Cards",
            "giftcards",
            "gift",
            "Digital gift cards for various platforms",
        ),
    ]
}

fn payment_method(name: &str, icon: &str, description: &str, instructions: &str) -> InsertPaymentMethod {
    InsertPaymentMethod {
        name: name.to_string(),
        icon: icon.to_string(),
        description: Some(description.to_string()),
        instructions: Some(instructions.to_string()),
    }
}

pub fn payment_methods() -> Vec<InsertPaymentMethod> {
    vec![
        payment_method(
            "Telebirr",
            "mobile-alt",
            "Pay using Telebirr mobile money",
            "1. Open Telebirr app\n2. Select \"Pay\" option\n3. Enter our merchant ID: 123456\n4. Enter the amount\n5. Complete the payment\n6. Take a screenshot of the confirmation",
        ),
        payment_method(
            "Bank Transfer",
            "university",
            "Direct bank transfer to our account",
            "1. Transfer the amount to our bank account:\n   - Bank: Commercial Bank of Ethiopia\n   - Account Name: Miker Market\n   - Account Number: 1000123456789\n2. Take a screenshot of the transfer confirmation",
        ),
        payment_method(
            "Amole",
            "credit-card",
            "Pay via Amole digital wallet",
            "1. Open Amole app\n2. Select \"Pay Merchant\"\n3. Enter merchant code: MIKER2023\n4. Enter the amount\n5. Complete the payment\n6. Take a screenshot of the confirmation",
        ),
    ]
}

fn service(
    name: &str,
    description: &str,
    price: i64,
    image: &str,
    category_id: i32,
    featured: bool,
    payment_instructions: &str,
) -> InsertService {
    InsertService {
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: Some(image.to_string()),
        category_id,
        featured,
        payment_instructions: Some(payment_instructions.to_string()),
    }
}

pub fn services() -> Vec<InsertService> {
    vec![
        // TikTok (category 1)
        service(
            "TikTok Followers (1000)",
            "Get 1000 high-quality TikTok followers.",
            450,
            "https://images.unsplash.com/photo-1596495577886-d920f1fb7238?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            1,
            true,
            "After payment, send your TikTok username and payment screenshot to our WhatsApp.",
        ),
        service(
            "TikTok Views (5000)",
            "Increase your TikTok video views by 5000.",
            200,
            "https://images.unsplash.com/photo-1611605698323-b1e99cfd37ea?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            1,
            true,
            "After payment, send your TikTok video link and payment screenshot to our WhatsApp.",
        ),
        service(
            "TikTok Likes (1000)",
            "Add 1000 real likes to your TikTok video.",
            150,
            "https://images.unsplash.com/photo-1611605698323-b1e99cfd37ea?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            1,
            false,
            "After payment, send your TikTok video link and payment screenshot to our WhatsApp.",
        ),
        // YouTube (category 2)
        service(
            "YouTube Subscribers (500)",
            "Gain 500 new YouTube subscribers for your channel.",
            800,
            "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            2,
            true,
            "After payment, send your YouTube channel link and payment screenshot to our WhatsApp.",
        ),
        service(
            "YouTube Views (5000)",
            "Add 5000 views to your YouTube video.",
            350,
            "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            2,
            true,
            "After payment, send your YouTube video link and payment screenshot to our WhatsApp.",
        ),
        service(
            "YouTube Comments (50)",
            "50 positive comments on your YouTube video.",
            300,
            "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            2,
            false,
            "After payment, send your YouTube video link and payment screenshot to our WhatsApp.",
        ),
        // Instagram (category 3)
        service(
            "Instagram Followers (1000)",
            "Get 1000 high-quality Instagram followers.",
            500,
            "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            3,
            true,
            "After payment, send your Instagram username and payment screenshot to our WhatsApp.",
        ),
        service(
            "Instagram Likes (1000)",
            "Add 1000 likes to your Instagram post.",
            250,
            "https://images.unsplash.com/photo-1611162618071-b39a2ec055fb?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            3,
            false,
            "After payment, send your Instagram post link and payment screenshot to our WhatsApp.",
        ),
        service(
            "Instagram Comments (50)",
            "50 positive comments on your Instagram post.",
            300,
            "https://images.unsplash.com/photo-1611162618071-b39a2ec055fb?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            3,
            false,
            "After payment, send your Instagram post link and payment screenshot to our WhatsApp.",
        ),
        // Facebook (category 4)
        service(
            "Facebook Page Likes (500)",
            "Boost your Facebook page with 500 real likes.",
            300,
            "https://images.unsplash.com/photo-1563986768494-4dee2763ff3f?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            4,
            true,
            "After payment, send your Facebook page link and payment screenshot to our WhatsApp.",
        ),
        service(
            "Facebook Post Likes (300)",
            "Get 300 likes on your Facebook post.",
            200,
            "https://images.unsplash.com/photo-1579869847514-7c1a19d2d2ad?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            4,
            false,
            "After payment, send your Facebook post link and payment screenshot to our WhatsApp.",
        ),
        service(
            "Facebook Group Members (300)",
            "Add 300 members to your Facebook group.",
            400,
            "https://images.unsplash.com/photo-1579869847514-7c1a19d2d2ad?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            4,
            false,
            "After payment, send your Facebook group link and payment screenshot to our WhatsApp.",
        ),
        // Twitter/X (category 5)
        service(
            "Twitter Followers (500)",
            "Get 500 Twitter followers for your account.",
            400,
            "https://images.unsplash.com/photo-1611605698323-b1e99cfd37ea?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            5,
            true,
            "After payment, send your Twitter username and payment screenshot to our WhatsApp.",
        ),
        service(
            "Twitter Retweets (100)",
            "Get 100 retweets for your tweet.",
            200,
            "https://images.unsplash.com/photo-1611605698323-b1e99cfd37ea?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            5,
            false,
            "After payment, send your tweet link and payment screenshot to our WhatsApp.",
        ),
        service(
            "Twitter Likes (200)",
            "Get 200 likes on your tweet.",
            180,
            "https://images.unsplash.com/photo-1611605698323-b1e99cfd37ea?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            5,
            false,
            "After payment, send your tweet link and payment screenshot to our WhatsApp.",
        ),
        // Subscriptions (category 6)
        service(
            "Netflix Premium (1 Month)",
            "Access to all Netflix content in 4K with 4 screens.",
            450,
            "https://images.unsplash.com/photo-1522869635100-9f4c5e86aa37?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            6,
            true,
            "After payment, send your email address for account setup and payment screenshot to our WhatsApp.",
        ),
        service(
            "Spotify Premium (1 Month)",
            "Ad-free music streaming with offline downloads.",
            250,
            "https://images.unsplash.com/photo-1614680376573-df3480f0c6ff?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            6,
            false,
            "After payment, send your email address for account setup and payment screenshot to our WhatsApp.",
        ),
        service(
            "Disney+ (1 Month)",
            "Full access to Disney+ streaming service.",
            350,
            "https://images.unsplash.com/photo-1604877701092-4ca8d3eb9d6a?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            6,
            false,
            "After payment, send your email address for account setup and payment screenshot to our WhatsApp.",
        ),
        // Gift cards (category 7)
        service(
            "Amazon Gift Card ($25)",
            "$25 Amazon Gift Card code.",
            950,
            "https://images.unsplash.com/photo-1606041011872-596597976b25?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            7,
            true,
            "After payment, the gift card code will be sent to you via email or WhatsApp.",
        ),
        service(
            "Google Play Gift Card ($10)",
            "$10 Google Play Gift Card code.",
            400,
            "https://images.unsplash.com/photo-1607988795691-3d0147b43231?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            7,
            false,
            "After payment, the gift card code will be sent to you via email or WhatsApp.",
        ),
        service(
            "iTunes Gift Card ($15)",
            "$15 iTunes Gift Card code.",
            600,
            "https://images.unsplash.com/photo-1524072704778-db99d0e434f4?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            7,
            true,
            "After payment, the gift card code will be sent to you via email or WhatsApp.",
        ),
    ]
}

pub fn testimonials() -> Vec<InsertTestimonial> {
    vec![
        InsertTestimonial {
            name: "Sara Abebe".to_string(),
            image: Some("https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80".to_string()),
            rating: 5,
            comment: "The subscription services work flawlessly. I've been using Netflix through them for months with no issues.".to_string(),
        },
        InsertTestimonial {
            name: "Dawit Haile".to_string(),
            image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80".to_string()),
            rating: 4,
            comment: "I purchased game top-ups for PUBG and received the UC within minutes. Great service and reliable!".to_string(),
        },
        InsertTestimonial {
            name: "Hirut Tadesse".to_string(),
            image: Some("https://images.unsplash.com/photo-1534528741775-53994a69daeb?ixlib=rb-1.2.1&auto=format&fit=crop&w=100&q=80".to_string()),
            rating: 5,
            comment: "Their SMM services helped me grow my small business Instagram account. The followers are real and engaged!".to_string(),
        },
    ]
}

pub fn contact_info() -> InsertContactInfo {
    InsertContactInfo {
        address: "Bole, Addis Ababa, Ethiopia".to_string(),
        phone: "+251 91 234 5678".to_string(),
        telegram_link: "https://t.me/Miker_mike".to_string(),
        telegram_username: "@Miker_mike on Telegram".to_string(),
        facebook_link: String::new(),
        instagram_link: String::new(),
        twitter_link: String::new(),
        show_social_icons: false,
        weekday_hours: "Monday - Saturday: 9:00 AM - 8:00 PM".to_string(),
        weekend_hours: "Sunday: 10:00 AM - 6:00 PM".to_string(),
        time_zone: "East Africa Time (EAT)".to_string(),
    }
}

/// Admin account for the in-memory store. The database seed binary hashes
/// the password before inserting; here the plain marker is kept since no
/// route authenticates against it.
pub fn admin_user() -> InsertUser {
    InsertUser {
        username: ADMIN_USERNAME.to_string(),
        password: ADMIN_PASSWORD.to_string(),
        is_admin: true,
    }
}
