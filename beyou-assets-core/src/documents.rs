//! Store Documents - Listing, Privacy Policy, Terms of Service
//!
//! Fixed templates. The only input is the date stamped into the legal
//! documents, passed in by the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Categories {
    pub primary: String,
    pub secondary: String,
}

/// App store listing metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListingDocument {
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub categories: Categories,
    pub age_rating: String,
    pub content_warnings: Vec<String>,
}

const LISTING_DESCRIPTION: &str = "BeYou is the premier social media platform designed specifically for the LGBTQ+ community. Share your authentic self through short videos, connect with like-minded individuals, and build meaningful relationships in a safe, inclusive environment.

🌈 KEY FEATURES:
• Create and share short videos (5-60 seconds)
• Live streaming with real-time chat
• Express your identity with pronouns and pride flags
• Discover content by LGBTQ+ categories
• Safe space with robust moderation tools
• Connect with creators and build community

✨ WHY BEYOU:
• Built by and for the LGBTQ+ community
• Zero tolerance for hate speech or discrimination
• Celebrate diversity and authentic expression
• Privacy-focused with granular controls
• Support for all identities and orientations

🏳️‍🌈 COMMUNITY FIRST:
BeYou prioritizes community safety and authentic connections. Our platform celebrates the full spectrum of LGBTQ+ identities and provides tools for meaningful engagement.

Join thousands of LGBTQ+ individuals sharing their stories, celebrating their identities, and building lasting connections. Your voice matters, your story is valid, and your community is here.

Download BeYou today and start being authentically you! 🌈✨";

const KEYWORDS: [&str; 16] = [
    "LGBTQ+",
    "social media",
    "video sharing",
    "community",
    "pride",
    "gay",
    "lesbian",
    "bisexual",
    "transgender",
    "queer",
    "non-binary",
    "inclusive",
    "safe space",
    "authentic",
    "expression",
    "identity",
];

impl ListingDocument {
    pub fn beyou() -> Self {
        Self {
            name: "BeYou - LGBTQ+ Social".to_string(),
            subtitle: "Safe Space for Authentic Expression".to_string(),
            description: LISTING_DESCRIPTION.to_string(),
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            categories: Categories {
                primary: "Social Networking".to_string(),
                secondary: "Entertainment".to_string(),
            },
            age_rating: "17+".to_string(),
            content_warnings: vec![
                "Infrequent/Mild Mature/Suggestive Themes".to_string(),
                "User Generated Content".to_string(),
            ],
        }
    }

    /// Two-space indented JSON, as the store submission tooling reads it
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ListingDocument {
    fn default() -> Self {
        Self::beyou()
    }
}

/// `M/D/YYYY`, no zero padding
pub fn format_updated_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

const PRIVACY_POLICY_BODY: &str = r#"## Introduction

BeYou ("we," "our," or "us") is committed to protecting your privacy. This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our mobile application and services.

## Information We Collect

### Personal Information
- Username and display name
- Email address
- Profile information (pronouns, bio, identity flags)
- Profile photos and videos you upload
- Device information and identifiers

### Usage Information
- Videos you watch, like, comment on, and share
- Search queries and interactions
- Time spent on the app and features used
- Technical information about your device and connection

## How We Use Your Information

- Provide and maintain our services
- Personalize your experience and content recommendations
- Enable communication between users
- Ensure platform safety and security
- Comply with legal obligations
- Improve our services and develop new features

## Information Sharing

We do not sell your personal information. We may share information:
- With your consent
- To comply with legal requirements
- To protect rights, property, or safety
- With service providers who assist our operations
- In connection with business transfers

## Data Security

We implement appropriate security measures to protect your information against unauthorized access, alteration, disclosure, or destruction.

## Your Rights

- Access your personal information
- Correct inaccurate information
- Delete your account and data
- Control privacy settings
- Opt out of certain communications

## LGBTQ+ Community Commitment

We are committed to creating a safe space for LGBTQ+ individuals. We:
- Prohibit discrimination and hate speech
- Provide robust reporting and blocking tools
- Respect chosen names and pronouns
- Protect sensitive identity information

## Contact Us

If you have questions about this Privacy Policy, contact us at:
- Email: privacy@beyou.app
- Website: https://beyou.app/privacy

## Changes to This Policy

We may update this Privacy Policy periodically. We will notify you of significant changes through the app or email.

By using BeYou, you agree to this Privacy Policy."#;

const TERMS_OF_SERVICE_BODY: &str = r#"## Acceptance of Terms

By accessing or using BeYou, you agree to be bound by these Terms of Service and our Privacy Policy.

## Description of Service

BeYou is a social media platform designed for the LGBTQ+ community to share videos, live stream, and connect with others in a safe, inclusive environment.

## User Accounts

- You must be at least 13 years old to use BeYou
- Provide accurate and complete information
- Maintain the security of your account
- You are responsible for all activities under your account

## Community Guidelines

### Prohibited Content
- Hate speech or discrimination
- Harassment or bullying
- Sexually explicit content
- Violence or threats
- Spam or misleading information
- Copyright infringement

### Positive Community Standards
- Respect all users regardless of identity
- Use inclusive language
- Support and uplift community members
- Report inappropriate content
- Celebrate diversity and authenticity

## Content and Intellectual Property

- You retain ownership of content you create
- You grant BeYou license to use, display, and distribute your content
- Respect others' intellectual property rights
- We may remove content that violates these terms

## Privacy and Safety

- We are committed to protecting your privacy
- Use our reporting tools for safety concerns
- We may suspend or terminate accounts for violations
- We cooperate with law enforcement when required

## Disclaimers

- BeYou is provided "as is" without warranties
- We do not guarantee uninterrupted service
- Users are responsible for their interactions
- We are not liable for user-generated content

## Limitation of Liability

BeYou's liability is limited to the maximum extent permitted by law.

## Termination

We may terminate or suspend accounts for violations of these terms or for any reason with notice.

## Changes to Terms

We may modify these terms periodically. Continued use constitutes acceptance of changes.

## Governing Law

These terms are governed by the laws of [Your Jurisdiction].

## Contact Information

For questions about these Terms of Service:
- Email: legal@beyou.app
- Website: https://beyou.app/terms

## LGBTQ+ Commitment

BeYou is committed to being a safe, inclusive platform for LGBTQ+ individuals. We will not tolerate discrimination and will take swift action against violations of our community standards.

Your identity is valid, your voice matters, and you belong here. 🌈"#;

fn legal_document(title: &str, updated: NaiveDate, body: &str) -> String {
    format!(
        "# {title}\n\nLast updated: {}\n\n{body}",
        format_updated_date(updated)
    )
}

pub fn privacy_policy(updated: NaiveDate) -> String {
    legal_document("BeYou Privacy Policy", updated, PRIVACY_POLICY_BODY)
}

pub fn terms_of_service(updated: NaiveDate) -> String {
    legal_document("BeYou Terms of Service", updated, TERMS_OF_SERVICE_BODY)
}
